use crate::models::{
    ChartPoint, CheckInEntry, DayStats, Metric, ReportSeries, StatCard, StreakDay, StreakSummary,
};
use chrono::NaiveDate;

const CURRENT_STREAK: u32 = 14;
const BEST_STREAK: u32 = 21;
const STREAK_MESSAGE: &str = "Amazing commitment! You have built a life-changing habit.";

pub fn stat_cards(stats: DayStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Sleep",
            value: stats.sleep,
            unit: "hours",
        },
        StatCard {
            label: "Water",
            value: stats.water,
            unit: "glasses",
        },
        StatCard {
            label: "Screen Time",
            value: stats.screen_time,
            unit: "hours",
        },
    ]
}

/// One bar per history entry, in history order, labelled by weekday.
pub fn build_report(metric: Metric, history: &[CheckInEntry]) -> ReportSeries {
    let points = history
        .iter()
        .map(|entry| ChartPoint {
            label: weekday_label(&entry.date),
            value: metric.of_entry(entry),
        })
        .collect();

    ReportSeries {
        metric,
        label: metric.label(),
        unit: metric.unit(),
        points,
    }
}

/// Static sample: the streak is not derived from check-ins.
pub fn streak_summary() -> StreakSummary {
    let recent = (1..=7)
        .map(|day| StreakDay {
            day,
            completed: day < 7,
            highlighted: day == 7,
        })
        .collect();

    StreakSummary {
        current: CURRENT_STREAK,
        best: BEST_STREAK,
        recent,
        message: STREAK_MESSAGE,
    }
}

fn weekday_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date.format("%a").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use crate::models::SelectableDay;

    #[test]
    fn report_labels_history_by_weekday() {
        let history = mock_data::get(SelectableDay::Wed).history;
        let report = build_report(Metric::Sleep, &history);

        let labels: Vec<_> = report.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Wed", "Thu", "Fri", "Sat", "Sun", "Mon", "Tue"]);
        assert_eq!(report.points[0].value, 7.0);
        assert_eq!(report.label, "Sleep");
    }

    #[test]
    fn report_follows_selected_metric() {
        let history = mock_data::get(SelectableDay::Mon).history;
        let report = build_report(Metric::ScreenTime, &history);

        let values: Vec<_> = report.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![5.0, 4.0, 3.0, 2.0, 5.0, 7.0, 8.0]);
        assert_eq!(report.unit, "hours");
    }

    #[test]
    fn streak_highlights_last_day_only() {
        let streak = streak_summary();
        assert_eq!(streak.recent.len(), 7);
        assert_eq!(streak.recent.iter().filter(|d| d.completed).count(), 6);
        assert!(streak.recent[6].highlighted && !streak.recent[6].completed);
        assert_eq!((streak.current, streak.best), (14, 21));
    }

    #[test]
    fn stat_cards_use_snapshot_figures() {
        let cards = stat_cards(mock_data::get(SelectableDay::Tues).stats);
        let values: Vec<_> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![7.0, 8.0, 5.0]);
        assert_eq!(cards[1].unit, "glasses");
    }
}
