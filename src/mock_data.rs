use crate::models::{CheckInEntry, DaySnapshot, DayStats, Goal, SelectableDay};

/// Returns a fresh copy of the sample data for `day`.
pub fn get(day: SelectableDay) -> DaySnapshot {
    match day {
        SelectableDay::Mon => DaySnapshot {
            stats: stats(6.0, 7.0, 6.0),
            history: vec![
                entry("2025-04-28", 5.0, 6.0, 5.0),
                entry("2025-04-29", 6.0, 5.0, 4.0),
                entry("2025-04-30", 7.0, 8.0, 3.0),
                entry("2025-05-01", 6.0, 7.0, 2.0),
                entry("2025-05-02", 5.0, 6.0, 5.0),
                entry("2025-05-03", 4.0, 5.0, 7.0),
                entry("2025-05-04", 2.0, 3.0, 8.0),
            ],
            goals: vec![
                goal("1", "Drink 2L Water", "Stay hydrated", "2025-05-30", false),
                goal("2", "Sleep 8 Hours", "Improve sleep quality", "2025-05-20", true),
            ],
        },
        SelectableDay::Tues => DaySnapshot {
            stats: stats(7.0, 8.0, 5.0),
            history: vec![
                entry("2025-04-29", 6.0, 7.0, 3.0),
                entry("2025-04-30", 7.0, 6.0, 2.0),
                entry("2025-05-01", 8.0, 7.0, 4.0),
                entry("2025-05-02", 7.0, 8.0, 3.0),
                entry("2025-05-03", 6.0, 7.0, 2.0),
                entry("2025-05-04", 5.0, 6.0, 1.0),
                entry("2025-05-05", 6.0, 8.0, 6.0),
            ],
            goals: vec![
                goal("1", "Drink 2.5L Water", "Increase hydration", "2025-05-25", true),
                goal("2", "Learn React", "Complete online course", "2025-06-01", false),
            ],
        },
        SelectableDay::Wed => DaySnapshot {
            stats: stats(8.0, 6.0, 4.0),
            history: vec![
                entry("2025-04-30", 7.0, 5.0, 3.0),
                entry("2025-05-01", 8.0, 6.0, 4.0),
                entry("2025-05-02", 7.0, 7.0, 3.0),
                entry("2025-05-03", 8.0, 6.0, 2.0),
                entry("2025-05-04", 7.0, 5.0, 3.0),
                entry("2025-05-05", 8.0, 6.0, 4.0),
                entry("2025-05-06", 7.0, 6.0, 5.0),
            ],
            goals: vec![
                goal("1", "Meditate Daily", "15 minutes each morning", "2025-05-20", false),
                goal("2", "Complete Project", "Finish React dashboard", "2025-05-10", false),
            ],
        },
    }
}

fn stats(sleep: f64, water: f64, screen_time: f64) -> DayStats {
    DayStats {
        sleep,
        water,
        screen_time,
    }
}

fn entry(date: &str, sleep: f64, water: f64, screen_time: f64) -> CheckInEntry {
    CheckInEntry {
        date: date.to_string(),
        sleep,
        water,
        screen_time,
    }
}

fn goal(id: &str, title: &str, description: &str, deadline: &str, completed: bool) -> Goal {
    Goal {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        deadline: deadline.to_string(),
        completed,
    }
}
