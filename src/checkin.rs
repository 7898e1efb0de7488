use crate::models::{CheckInEntry, DayStats};
use chrono::{NaiveDate, Utc};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CheckInState {
    pending: DayStats,
    history: Vec<CheckInEntry>,
    modal_open: bool,
}

impl CheckInState {
    pub fn new(stats: DayStats, history: Vec<CheckInEntry>) -> Self {
        Self {
            pending: stats,
            history,
            modal_open: false,
        }
    }

    pub fn pending(&self) -> DayStats {
        self.pending
    }

    pub fn history(&self) -> &[CheckInEntry] {
        &self.history
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn reset(&mut self, stats: DayStats, history: Vec<CheckInEntry>) {
        self.pending = stats;
        self.history = history;
    }

    pub fn open(&mut self) {
        self.modal_open = true;
    }

    /// Hides the modal. Pending values stay where the sliders left them.
    pub fn cancel(&mut self) {
        self.modal_open = false;
    }

    pub fn set_sleep(&mut self, value: f64) {
        self.pending.sleep = value;
    }

    pub fn set_water(&mut self, value: f64) {
        self.pending.water = value;
    }

    pub fn set_screen_time(&mut self, value: f64) {
        self.pending.screen_time = value;
    }

    pub fn submit(&mut self) {
        self.submit_at(Utc::now().date_naive());
    }

    pub fn submit_at(&mut self, today: NaiveDate) {
        let entry = CheckInEntry {
            date: date_key(today),
            sleep: self.pending.sleep,
            water: self.pending.water,
            screen_time: self.pending.screen_time,
        };
        self.upsert(entry);
        self.modal_open = false;
    }

    /// Replaces the entry sharing `entry.date` in place, or appends.
    pub fn upsert(&mut self, entry: CheckInEntry) {
        match self.history.iter_mut().find(|existing| existing.date == entry.date) {
            Some(existing) => {
                debug!(date = %entry.date, "check-in replaced");
                *existing = entry;
            }
            None => {
                debug!(date = %entry.date, "check-in appended");
                self.history.push(entry);
            }
        }
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
