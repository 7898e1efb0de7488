use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub completed: bool,
}

/// The three goal form fields as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInEntry {
    pub date: String,
    pub sleep: f64,
    pub water: f64,
    pub screen_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayStats {
    pub sleep: f64,
    pub water: f64,
    pub screen_time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySnapshot {
    pub stats: DayStats,
    pub history: Vec<CheckInEntry>,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tues,
    Wed,
    Thurs,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tues,
        Weekday::Wed,
        Weekday::Thurs,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tues => "Tues",
            Weekday::Wed => "Wed",
            Weekday::Thurs => "Thurs",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    pub fn is_selectable(self) -> bool {
        SelectableDay::try_from(self).is_ok()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == value)
            .ok_or_else(|| UnknownValue::new("weekday", value))
    }
}

/// A path or form value that names no known weekday or metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownValue {}

/// The days that carry mock data and accept interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectableDay {
    Mon,
    Tues,
    #[default]
    Wed,
}

impl SelectableDay {
    pub const ALL: [SelectableDay; 3] = [SelectableDay::Mon, SelectableDay::Tues, SelectableDay::Wed];

    pub fn weekday(self) -> Weekday {
        match self {
            SelectableDay::Mon => Weekday::Mon,
            SelectableDay::Tues => Weekday::Tues,
            SelectableDay::Wed => Weekday::Wed,
        }
    }
}

impl TryFrom<Weekday> for SelectableDay {
    type Error = Weekday;

    fn try_from(day: Weekday) -> Result<Self, Self::Error> {
        match day {
            Weekday::Mon => Ok(SelectableDay::Mon),
            Weekday::Tues => Ok(SelectableDay::Tues),
            Weekday::Wed => Ok(SelectableDay::Wed),
            other => Err(other),
        }
    }
}

impl fmt::Display for SelectableDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.weekday().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    #[serde(rename = "sleep")]
    Sleep,
    #[serde(rename = "water")]
    Water,
    #[serde(rename = "screenTime")]
    ScreenTime,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Sleep, Metric::Water, Metric::ScreenTime];

    pub fn key(self) -> &'static str {
        match self {
            Metric::Sleep => "sleep",
            Metric::Water => "water",
            Metric::ScreenTime => "screenTime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Sleep => "Sleep",
            Metric::Water => "Water Intake",
            Metric::ScreenTime => "Screen Time",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Water => "glasses",
            Metric::Sleep | Metric::ScreenTime => "hours",
        }
    }

    pub fn of_entry(self, entry: &CheckInEntry) -> f64 {
        match self {
            Metric::Sleep => entry.sleep,
            Metric::Water => entry.water,
            Metric::ScreenTime => entry.screen_time,
        }
    }
}

impl FromStr for Metric {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.key() == value)
            .ok_or_else(|| UnknownValue::new("metric", value))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSeries {
    pub metric: Metric,
    pub label: &'static str,
    pub unit: &'static str,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreakDay {
    pub day: u8,
    pub completed: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreakSummary {
    pub current: u32,
    pub best: u32,
    pub recent: Vec<StreakDay>,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInView {
    pub modal_open: bool,
    pub pending: DayStats,
    pub history: Vec<CheckInEntry>,
}

/// Everything the page needs to render, in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub selected_day: SelectableDay,
    pub days: Vec<DayOption>,
    pub stats: Vec<StatCard>,
    pub goals: Vec<Goal>,
    pub goal_form: GoalDraft,
    pub editing_goal_id: Option<String>,
    pub goal_form_enabled: bool,
    pub check_in: CheckInView,
    pub report: ReportSeries,
    pub streak: StreakSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayOption {
    pub day: Weekday,
    pub selectable: bool,
    pub selected: bool,
}
