use crate::checkin::CheckInState;
use crate::goals::GoalBoard;
use crate::mock_data;
use crate::models::{
    CheckInView, DashboardView, DayOption, DayStats, GoalDraft, Metric, SelectableDay, Weekday,
};
use crate::stats::{build_report, stat_cards, streak_summary};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, info};

/// The only day on which the goal form accepts submissions.
pub const CURRENT_DAY: SelectableDay = SelectableDay::Wed;

/// Every user interaction the page can produce.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    SelectDay { day: Weekday },
    SubmitGoal(GoalDraft),
    BeginEdit { id: String },
    CompleteGoal { id: String },
    DeleteGoal { id: String },
    OpenCheckIn,
    SetSleep { value: f64 },
    SetWater { value: f64 },
    SetScreenTime { value: f64 },
    SaveCheckIn,
    CancelCheckIn,
    SelectMetric { metric: Metric },
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    selected_day: SelectableDay,
    stats: DayStats,
    goals: GoalBoard,
    check_in: CheckInState,
    metric: Metric,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(SelectableDay::default())
    }
}

impl Dashboard {
    pub fn new(day: SelectableDay) -> Self {
        let snapshot = mock_data::get(day);
        Self {
            selected_day: day,
            stats: snapshot.stats,
            goals: GoalBoard::new(snapshot.goals),
            check_in: CheckInState::new(snapshot.stats, snapshot.history),
            metric: Metric::default(),
        }
    }

    pub fn selected_day(&self) -> SelectableDay {
        self.selected_day
    }

    pub fn stats(&self) -> DayStats {
        self.stats
    }

    pub fn goals(&self) -> &GoalBoard {
        &self.goals
    }

    pub fn check_in(&self) -> &CheckInState {
        &self.check_in
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn goal_form_enabled(&self) -> bool {
        self.selected_day == CURRENT_DAY
    }

    /// Switches to `day` and reloads everything from its snapshot.
    /// Unsaved goal form and check-in edits are dropped.
    pub fn select_day(&mut self, day: Weekday) {
        let Ok(day) = SelectableDay::try_from(day) else {
            debug!(%day, "day not selectable");
            return;
        };

        let snapshot = mock_data::get(day);
        self.selected_day = day;
        self.stats = snapshot.stats;
        self.goals.reset(snapshot.goals);
        self.check_in.reset(snapshot.stats, snapshot.history);
        info!(%day, "switched day");
    }

    pub fn select_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    pub fn apply(&mut self, event: DashboardEvent) {
        self.apply_at(event, Utc::now().date_naive());
    }

    pub fn apply_at(&mut self, event: DashboardEvent, today: NaiveDate) {
        debug!(?event, "applying event");
        match event {
            DashboardEvent::SelectDay { day } => self.select_day(day),
            DashboardEvent::SubmitGoal(draft) => {
                if self.goal_form_enabled() {
                    self.goals.submit(draft);
                } else {
                    debug!(day = %self.selected_day, "goal form is read-only for this day");
                }
            }
            DashboardEvent::BeginEdit { id } => self.goals.begin_edit(&id),
            DashboardEvent::CompleteGoal { id } => self.goals.complete(&id),
            DashboardEvent::DeleteGoal { id } => self.goals.delete(&id),
            DashboardEvent::OpenCheckIn => self.check_in.open(),
            DashboardEvent::SetSleep { value } => self.check_in.set_sleep(value),
            DashboardEvent::SetWater { value } => self.check_in.set_water(value),
            DashboardEvent::SetScreenTime { value } => self.check_in.set_screen_time(value),
            DashboardEvent::SaveCheckIn => self.check_in.submit_at(today),
            DashboardEvent::CancelCheckIn => self.check_in.cancel(),
            DashboardEvent::SelectMetric { metric } => self.select_metric(metric),
        }
    }

    pub fn view(&self) -> DashboardView {
        let days = Weekday::ALL
            .into_iter()
            .map(|day| DayOption {
                day,
                selectable: day.is_selectable(),
                selected: day == self.selected_day.weekday(),
            })
            .collect();

        DashboardView {
            selected_day: self.selected_day,
            days,
            stats: stat_cards(self.stats),
            goals: self.goals.goals().to_vec(),
            goal_form: self.goals.form().clone(),
            editing_goal_id: self.goals.editing().map(str::to_string),
            goal_form_enabled: self.goal_form_enabled(),
            check_in: CheckInView {
                modal_open: self.check_in.is_open(),
                pending: self.check_in.pending(),
                history: self.check_in.history().to_vec(),
            },
            report: build_report(self.metric, self.check_in.history()),
            streak: streak_summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(dashboard: &Dashboard) -> Vec<String> {
        dashboard
            .goals()
            .goals()
            .iter()
            .map(|goal| goal.title.clone())
            .collect()
    }

    fn submit(title: &str, deadline: &str) -> DashboardEvent {
        DashboardEvent::SubmitGoal(GoalDraft {
            title: title.to_string(),
            description: String::new(),
            deadline: deadline.to_string(),
        })
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 7).unwrap()
    }

    #[test]
    fn starts_on_wednesday() {
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.selected_day(), SelectableDay::Wed);
        assert!(dashboard.goal_form_enabled());
        assert_eq!(dashboard.stats().sleep, 8.0);
        assert_eq!(dashboard.metric(), Metric::Sleep);
    }

    #[test]
    fn new_goal_lands_between_wednesday_goals() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_at(submit("Read", "2025-05-15"), today());

        assert_eq!(titles(&dashboard), vec!["Complete Project", "Read", "Meditate Daily"]);
    }

    #[test]
    fn switching_days_discards_edits() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_at(DashboardEvent::SelectDay { day: Weekday::Tues }, today());
        dashboard.apply_at(DashboardEvent::CompleteGoal { id: "2".to_string() }, today());
        dashboard.apply_at(DashboardEvent::BeginEdit { id: "1".to_string() }, today());
        dashboard.apply_at(DashboardEvent::SetSleep { value: 1.5 }, today());
        dashboard.apply_at(DashboardEvent::SaveCheckIn, today());
        dashboard.apply_at(DashboardEvent::SelectDay { day: Weekday::Mon }, today());

        let monday = mock_data::get(SelectableDay::Mon);
        assert_eq!(dashboard.selected_day(), SelectableDay::Mon);
        assert_eq!(dashboard.stats(), DayStats { sleep: 6.0, water: 7.0, screen_time: 6.0 });
        assert_eq!(dashboard.goals().goals(), monday.goals.as_slice());
        assert_eq!(dashboard.check_in().history(), monday.history.as_slice());
        assert_eq!(dashboard.check_in().pending(), monday.stats);
        assert!(dashboard.goals().editing().is_none());
    }

    #[test]
    fn unselectable_day_is_ignored() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_at(DashboardEvent::CompleteGoal { id: "1".to_string() }, today());
        dashboard.apply_at(DashboardEvent::SelectDay { day: Weekday::Sat }, today());

        assert_eq!(dashboard.selected_day(), SelectableDay::Wed);
        assert!(dashboard.goals().goals().iter().any(|g| g.id == "1" && g.completed));
    }

    #[test]
    fn goal_form_is_read_only_away_from_current_day() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_at(DashboardEvent::SelectDay { day: Weekday::Mon }, today());
        dashboard.apply_at(submit("Read", "2025-05-15"), today());

        assert!(!dashboard.goal_form_enabled());
        assert_eq!(dashboard.goals().goals().len(), 2);

        dashboard.apply_at(DashboardEvent::CompleteGoal { id: "1".to_string() }, today());
        assert!(dashboard.goals().goals().iter().all(|g| g.completed));
    }

    #[test]
    fn check_in_flow_updates_history_and_report() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_at(DashboardEvent::OpenCheckIn, today());
        dashboard.apply_at(DashboardEvent::SetSleep { value: 5.0 }, today());
        dashboard.apply_at(DashboardEvent::SetWater { value: 3.0 }, today());
        dashboard.apply_at(DashboardEvent::SetScreenTime { value: 9.0 }, today());
        dashboard.apply_at(DashboardEvent::SelectMetric { metric: Metric::Water }, today());
        dashboard.apply_at(DashboardEvent::SaveCheckIn, today());

        let view = dashboard.view();
        assert!(!view.check_in.modal_open);
        assert_eq!(view.check_in.history.len(), 8);
        let last = view.report.points.last().unwrap();
        assert_eq!((last.label.as_str(), last.value), ("Wed", 3.0));
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: DashboardEvent =
            serde_json::from_str(r#"{"type":"select_day","day":"Tues"}"#).unwrap();
        assert_eq!(event, DashboardEvent::SelectDay { day: Weekday::Tues });

        let event: DashboardEvent = serde_json::from_str(
            r#"{"type":"submit_goal","title":"Read","deadline":"2025-05-15"}"#,
        )
        .unwrap();
        assert_eq!(event, submit("Read", "2025-05-15"));

        let event: DashboardEvent =
            serde_json::from_str(r#"{"type":"select_metric","metric":"screenTime"}"#).unwrap();
        assert_eq!(event, DashboardEvent::SelectMetric { metric: Metric::ScreenTime });

        assert!(serde_json::from_str::<DashboardEvent>(r#"{"type":"select_day","day":"Funday"}"#).is_err());
    }

    #[test]
    fn view_marks_selected_and_selectable_days() {
        let view = Dashboard::new(SelectableDay::Tues).view();
        let selected: Vec<_> = view.days.iter().filter(|d| d.selected).map(|d| d.day).collect();
        assert_eq!(selected, vec![Weekday::Tues]);
        assert_eq!(view.days.iter().filter(|d| d.selectable).count(), 3);
        assert!(!view.goal_form_enabled);
    }
}
