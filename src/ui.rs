use crate::models::{
    CheckInView, DashboardView, DayOption, Goal, GoalDraft, Metric, ReportSeries, StatCard,
    StreakSummary,
};
use std::fmt::Write;

pub fn render_index(view: &DashboardView) -> String {
    fill_template(INDEX_HTML, |key| match key {
        "DAY" => Some(view.selected_day.to_string()),
        "DAYS" => Some(render_days(&view.days)),
        "STATS" => Some(render_stats(&view.stats)),
        "METRICS" => Some(render_metric_options(view.report.metric)),
        "CHART" => Some(render_chart(&view.report)),
        "GOALS" => Some(render_goals(&view.goals)),
        "GOAL_FORM" => Some(render_goal_form(
            &view.goal_form,
            view.editing_goal_id.is_some(),
            view.goal_form_enabled,
        )),
        "STREAK" => Some(render_streak(&view.streak)),
        "MODAL" => Some(render_modal(&view.check_in)),
        _ => None,
    })
}

/// Substitutes `{{KEY}}` markers of `template` in one pass. Substituted text
/// is never scanned again, so user text containing markers stays literal.
/// Unknown keys are left as they are.
fn fill_template(template: &str, mut fragment: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match fragment(key) {
            Some(rendered) => out.push_str(&rendered),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn render_days(days: &[DayOption]) -> String {
    days.iter().fold(String::new(), |mut out, option| {
        let class = if option.selected { "day selected" } else { "day" };
        let disabled = if option.selectable { "" } else { " disabled" };
        let _ = write!(
            out,
            r#"<form method="post" action="/day/{day}"><button class="{class}"{disabled}>{day}</button></form>"#,
            day = option.day,
        );
        out
    })
}

fn render_stats(cards: &[StatCard]) -> String {
    cards.iter().fold(String::new(), |mut out, card| {
        let _ = write!(
            out,
            r#"<div class="stat"><span class="stat-label">{}</span><span class="stat-value">{} {}</span></div>"#,
            card.label,
            format_number(card.value),
            card.unit,
        );
        out
    })
}

fn render_metric_options(selected: Metric) -> String {
    Metric::ALL.iter().fold(String::new(), |mut out, metric| {
        let attr = if *metric == selected { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{attr}>{}</option>"#,
            metric.key(),
            metric.label(),
        );
        out
    })
}

fn render_chart(report: &ReportSeries) -> String {
    const WIDTH: f64 = 600.0;
    const HEIGHT: f64 = 200.0;
    const PAD: f64 = 24.0;

    if report.points.is_empty() {
        return r#"<p class="muted">No data yet. Complete a check-in to see your progress!</p>"#
            .to_string();
    }

    let max = report
        .points
        .iter()
        .map(|point| point.value)
        .fold(1.0_f64, f64::max);
    let slot = (WIDTH - PAD * 2.0) / report.points.len() as f64;
    let bar_width = slot * 0.6;
    let usable = HEIGHT - PAD * 2.0;

    let mut svg = format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{} ({})">"#,
        report.label, report.unit,
    );
    for (index, point) in report.points.iter().enumerate() {
        let height = (point.value.max(0.0) / max) * usable;
        let x = PAD + slot * index as f64 + (slot - bar_width) / 2.0;
        let y = HEIGHT - PAD - height;
        let _ = write!(
            svg,
            r#"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}"><title>{} {}</title></rect>"#,
            format_number(point.value),
            report.unit,
        );
        let _ = write!(
            svg,
            r#"<text class="chart-label" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            x + bar_width / 2.0,
            HEIGHT - PAD / 3.0,
            escape_html(&point.label),
        );
    }
    svg.push_str("</svg>");
    svg
}

fn render_goals(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return r#"<p class="muted">No goals yet.</p>"#.to_string();
    }

    goals.iter().fold(String::new(), |mut out, goal| {
        let id = escape_html(&goal.id);
        let actions = if goal.completed {
            format!(
                r#"<form method="post" action="/goals/{id}/delete"><button>Delete</button></form>"#
            )
        } else {
            format!(
                r#"<form method="post" action="/goals/{id}/complete"><button>Mark as completed</button></form><form method="post" action="/goals/{id}/edit"><button>Edit</button></form>"#
            )
        };
        let class = if goal.completed { "goal done" } else { "goal" };
        let _ = write!(
            out,
            r#"<li class="{class}"><div><strong>{}</strong><p>{}</p><small>Deadline: {}</small></div><div class="actions">{actions}</div></li>"#,
            escape_html(&goal.title),
            escape_html(&goal.description),
            escape_html(&goal.deadline),
        );
        out
    })
}

fn render_goal_form(form: &GoalDraft, editing: bool, enabled: bool) -> String {
    let disabled = if enabled { "" } else { " disabled" };
    let (date, time) = split_deadline(&form.deadline);
    let label = if editing { "Update Goal" } else { "Create Goal" };

    format!(
        r#"<form class="goal-form" method="post" action="/goals">
        <label>Title<input name="title" placeholder="Enter your goal title" value="{title}"{disabled} /></label>
        <label>Description<textarea name="description" placeholder="Enter your goal description"{disabled}>{description}</textarea></label>
        <div class="row">
          <input type="date" name="deadline_date" value="{date}"{disabled} />
          <input type="time" name="deadline_time" value="{time}"{disabled} />
          <button class="primary"{disabled}>{label}</button>
        </div>
      </form>"#,
        title = escape_html(&form.title),
        description = escape_html(&form.description),
        date = escape_html(date),
        time = escape_html(time),
    )
}

fn render_streak(streak: &StreakSummary) -> String {
    let days = streak.recent.iter().fold(String::new(), |mut out, day| {
        let class = match (day.highlighted, day.completed) {
            (true, _) => "streak-day today",
            (false, true) => "streak-day done",
            (false, false) => "streak-day",
        };
        let _ = write!(out, r#"<span class="{class}">{}</span>"#, day.day);
        out
    });

    format!(
        r#"<div class="bubbles"><div class="bubble"><b>{}</b><span>Current Streak</span></div><div class="bubble alt"><b>{}</b><span>Best Streak</span></div></div><div class="streak-days">{days}</div><p class="muted">{}</p>"#,
        streak.current, streak.best, streak.message,
    )
}

fn render_modal(check_in: &CheckInView) -> String {
    if !check_in.modal_open {
        return String::new();
    }

    let pending = check_in.pending;
    format!(
        r#"<div class="overlay"><form class="modal" method="post" action="/checkin">
      <h2>Daily Check-In</h2>
      <label>Sleep Hours<input type="range" name="sleep" min="0" max="24" step="0.5" value="{}" /></label>
      <label>Water Intake (glasses)<input type="range" name="water" min="0" max="10" step="1" value="{}" /></label>
      <label>Screen Time (hours)<input type="range" name="screen_time" min="0" max="12" step="0.5" value="{}" /></label>
      <div class="row end">
        <button formaction="/checkin/cancel">Cancel</button>
        <button class="primary">Save Progress</button>
      </div>
    </form></div>"#,
        format_number(pending.sleep),
        format_number(pending.water),
        format_number(pending.screen_time),
    )
}

fn split_deadline(deadline: &str) -> (&str, &str) {
    deadline
        .split_once(' ')
        .or_else(|| deadline.split_once('T'))
        .unwrap_or((deadline, ""))
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker · {{DAY}}</title>
  <style>
    :root {
      --bg: #d9dcdb;
      --ink: #1f1f1f;
      --accent: #83a2db;
      --accent-2: #465775;
      --card: rgba(253, 245, 255, 0.6);
      --shadow: 0 18px 40px rgba(70, 87, 117, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(180deg, var(--bg), var(--accent));
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px;
    }

    .days, .row, .actions, .bubbles, .streak-days, .stats {
      display: flex;
      gap: 8px;
      align-items: center;
    }

    .days form, .actions form {
      margin: 0;
    }

    .day {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      background: transparent;
      cursor: pointer;
    }

    .day.selected {
      background: #000;
      color: #fff;
    }

    .day:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .grid {
      display: grid;
      grid-template-columns: 3fr 2fr;
      gap: 16px;
      margin-top: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      padding: 16px;
      box-shadow: var(--shadow);
    }

    .stat {
      flex: 1;
      display: grid;
      gap: 4px;
      background: var(--accent-2);
      color: #fff;
      border-radius: 12px;
      padding: 12px;
    }

    .stat-value {
      font-size: 1.4rem;
    }

    .chart {
      width: 100%;
      height: 180px;
    }

    .bar {
      fill: var(--accent);
    }

    .chart-label {
      font-size: 12px;
      fill: #444;
    }

    ul.goals {
      list-style: none;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .goal {
      display: flex;
      justify-content: space-between;
      background: #fff;
      border-radius: 10px;
      padding: 10px;
    }

    .goal p {
      margin: 4px 0;
    }

    .goal.done strong {
      text-decoration: line-through;
      opacity: 0.6;
    }

    .goal-form label {
      display: grid;
      gap: 4px;
      margin-bottom: 8px;
    }

    button.primary {
      background: var(--accent);
      border: none;
      border-radius: 6px;
      padding: 8px 12px;
    }

    button:disabled, input:disabled, textarea:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .bubble {
      display: grid;
      place-items: center;
      width: 96px;
      height: 96px;
      border-radius: 50%;
      background: #000;
      color: #fff;
    }

    .bubble.alt {
      background: var(--accent);
    }

    .streak-day {
      width: 32px;
      height: 32px;
      display: grid;
      place-items: center;
      border-radius: 8px;
      background: rgba(131, 162, 219, 0.5);
    }

    .streak-day.done {
      box-shadow: inset 0 -4px 0 #00ff00;
    }

    .streak-day.today {
      background: var(--accent-2);
      color: #fff;
    }

    .muted {
      color: #555;
      font-size: 0.9rem;
    }

    .overlay {
      position: fixed;
      inset: 0;
      display: grid;
      place-items: center;
      background: rgba(0, 0, 0, 0.5);
    }

    .modal {
      width: min(420px, 100%);
      background: linear-gradient(180deg, var(--bg), var(--accent));
      border-radius: 12px;
      padding: 24px;
      display: grid;
      gap: 12px;
    }

    .row.end {
      justify-content: flex-end;
    }

    @media (max-width: 720px) {
      .grid {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <nav class="days">{{DAYS}}</nav>
  <main class="grid">
    <section class="card">
      <div class="row">
        <h3>Personal Stats</h3>
        <form method="post" action="/checkin/open"><button>Daily Check-In</button></form>
      </div>
      <div class="stats">{{STATS}}</div>
      <div class="row">
        <h3>Weekly Report</h3>
        <form method="post" action="/report">
          <select name="metric" onchange="this.form.submit()">{{METRICS}}</select>
          <noscript><button>Show</button></noscript>
        </form>
      </div>
      {{CHART}}
      <h3>Your Goals</h3>
      <ul class="goals">{{GOALS}}</ul>
    </section>
    <section>
      <div class="card">
        <h3>Set Your Goals</h3>
        {{GOAL_FORM}}
      </div>
      <div class="card">
        <h3>Streak Tracker</h3>
        {{STREAK}}
      </div>
    </section>
  </main>
  {{MODAL}}
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Dashboard, DashboardEvent};
    use crate::models::{GoalDraft, SelectableDay, Weekday};

    #[test]
    fn index_escapes_goal_text() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(DashboardEvent::SubmitGoal(GoalDraft {
            title: "<script>alert(1)</script>".to_string(),
            description: "a & b".to_string(),
            deadline: "2025-05-15".to_string(),
        }));

        let html = render_index(&dashboard.view());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn goal_text_with_template_markers_renders_verbatim() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(DashboardEvent::SubmitGoal(GoalDraft {
            title: "Plan {{STREAK}} week".to_string(),
            description: "{{MODAL}}".to_string(),
            deadline: "2025-05-15".to_string(),
        }));

        let html = render_index(&dashboard.view());
        assert!(html.contains("<strong>Plan {{STREAK}} week</strong>"));
        assert!(html.contains("<p>{{MODAL}}</p>"));
        assert_eq!(html.matches("Current Streak").count(), 1);

        dashboard.apply(DashboardEvent::OpenCheckIn);
        let html = render_index(&dashboard.view());
        assert!(html.contains("<p>{{MODAL}}</p>"));
        assert_eq!(html.matches("Save Progress").count(), 1);
    }

    #[test]
    fn fill_template_keeps_unknown_and_unterminated_markers() {
        let out = fill_template("a {{X}} b {{Y}} c {{Z", |key| {
            (key == "X").then(|| "{{Y}}".to_string())
        });
        assert_eq!(out, "a {{Y}} b {{Y}} c {{Z");
    }

    #[test]
    fn completed_goals_only_offer_delete() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(DashboardEvent::CompleteGoal { id: "1".to_string() });

        let html = render_index(&dashboard.view());
        assert!(html.contains(r#"action="/goals/1/delete""#));
        assert!(!html.contains(r#"action="/goals/1/edit""#));
        assert!(html.contains(r#"action="/goals/2/edit""#));
    }

    #[test]
    fn modal_renders_only_when_open() {
        let mut dashboard = Dashboard::default();
        assert!(!render_index(&dashboard.view()).contains("Save Progress"));

        dashboard.apply(DashboardEvent::OpenCheckIn);
        let html = render_index(&dashboard.view());
        assert!(html.contains("Save Progress"));
        assert!(html.contains(r#"name="sleep" min="0" max="24" step="0.5" value="8""#));
    }

    #[test]
    fn edit_prefills_form_with_split_deadline() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(DashboardEvent::SubmitGoal(GoalDraft {
            title: "Nap".to_string(),
            description: String::new(),
            deadline: "2025-05-15 14:30".to_string(),
        }));
        let id = dashboard.goals().goals()[1].id.clone();
        dashboard.apply(DashboardEvent::BeginEdit { id });

        let html = render_index(&dashboard.view());
        assert!(html.contains(r#"value="2025-05-15""#));
        assert!(html.contains(r#"value="14:30""#));
        assert!(html.contains("Update Goal"));
    }

    #[test]
    fn goal_form_disabled_on_other_days() {
        let mut dashboard = Dashboard::new(SelectableDay::Wed);
        dashboard.select_day(Weekday::Mon);

        let html = render_index(&dashboard.view());
        assert!(html.contains(r#"<button class="primary" disabled>Create Goal</button>"#));
        assert!(html.contains(r#"<button class="day" disabled>Sun</button>"#));
    }
}
