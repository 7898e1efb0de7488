use crate::models::{Goal, GoalDraft};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Goal list, goal form and the edit pointer.
///
/// The list stays sorted by parsed deadline after every insert and update.
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice for the lifetime of the board.
#[derive(Debug, Clone, Default)]
pub struct GoalBoard {
    goals: Vec<Goal>,
    form: GoalDraft,
    editing: Option<String>,
    next_id: u64,
}

impl GoalBoard {
    pub fn new(goals: Vec<Goal>) -> Self {
        let mut board = Self::default();
        board.reset(goals);
        board
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn form(&self) -> &GoalDraft {
        &self.form
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Replaces the whole list and drops any unsaved form state.
    pub fn reset(&mut self, goals: Vec<Goal>) {
        let seen = goals
            .iter()
            .filter_map(|goal| goal.id.parse::<u64>().ok())
            .max()
            .map_or(0, |max| max.saturating_add(1));
        self.next_id = self.next_id.max(seen);
        self.goals = goals;
        self.form = GoalDraft::default();
        self.editing = None;
    }

    /// The form's submit button: updates the edit target if there is one,
    /// creates a new goal otherwise.
    pub fn submit(&mut self, draft: GoalDraft) {
        if self.editing.is_some() {
            self.commit_edit(draft);
        } else {
            self.create(draft);
        }
    }

    pub fn create(&mut self, draft: GoalDraft) {
        let Some(draft) = validated(draft) else {
            debug!("goal create skipped: title or deadline missing");
            return;
        };

        let id = self.allocate_id();
        debug!(%id, title = %draft.title, "goal created");
        self.goals.push(Goal {
            id,
            title: draft.title,
            description: draft.description,
            deadline: draft.deadline,
            completed: false,
        });
        self.sort();
        self.clear_form();
    }

    pub fn begin_edit(&mut self, goal_id: &str) {
        let Some(goal) = self.goals.iter().find(|goal| goal.id == goal_id) else {
            debug!(goal_id, "edit skipped: unknown goal");
            return;
        };

        self.form = GoalDraft {
            title: goal.title.clone(),
            description: goal.description.clone(),
            deadline: goal.deadline.clone(),
        };
        self.editing = Some(goal.id.clone());
    }

    pub fn commit_edit(&mut self, draft: GoalDraft) {
        let Some(target) = self.editing.clone() else {
            debug!("edit commit skipped: nothing being edited");
            return;
        };
        let Some(draft) = validated(draft) else {
            debug!("edit commit skipped: title or deadline missing");
            return;
        };

        // `delete` and `reset` clear the pointer, so the target is always present.
        if let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == target) {
            goal.title = draft.title;
            goal.description = draft.description;
            goal.deadline = draft.deadline;
        }
        self.sort();
        self.clear_form();
    }

    pub fn complete(&mut self, goal_id: &str) {
        match self.goals.iter_mut().find(|goal| goal.id == goal_id) {
            Some(goal) => goal.completed = true,
            None => debug!(goal_id, "complete skipped: unknown goal"),
        }
    }

    pub fn delete(&mut self, goal_id: &str) {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != goal_id);
        if self.goals.len() == before {
            debug!(goal_id, "delete skipped: unknown goal");
            return;
        }
        if self.editing.as_deref() == Some(goal_id) {
            self.clear_form();
        }
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    fn sort(&mut self) {
        // Stable: equal deadlines keep insertion order. Unparseable deadlines go last.
        self.goals.sort_by_cached_key(|goal| {
            let parsed = parse_deadline(&goal.deadline);
            (parsed.is_none(), parsed)
        });
    }

    fn clear_form(&mut self) {
        self.form = GoalDraft::default();
        self.editing = None;
    }
}

/// Parses a deadline as entered in the goal form. A bare date means midnight.
pub fn parse_deadline(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Presence check only: whitespace counts as a value.
fn validated(draft: GoalDraft) -> Option<GoalDraft> {
    if draft.title.is_empty() || draft.deadline.is_empty() {
        return None;
    }
    Some(draft)
}
