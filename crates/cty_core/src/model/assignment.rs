//! Assignment record model.
//!
//! # Responsibility
//! - Define the assignment card shown on the assignments tab.
//! - Provide the status flip used when a card is tapped.
//!
//! # Invariants
//! - `id` is generated once at creation and never reused.
//! - `toggle_status` only moves between `Pending` and `Completed`;
//!   `Overdue` is left untouched (no transition produces or exits it).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one assignment record.
pub type AssignmentId = Uuid;

/// Completion state of an assignment.
///
/// `Overdue` exists only in seeded sample data; no operation produces it
/// and no due-date check exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    Completed,
    Overdue,
}

/// Priority badge shown on an assignment card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// One assignment card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Stable record ID.
    pub id: AssignmentId,
    pub title: String,
    pub subject: String,
    /// Due date in `YYYY-MM-DD` form, kept as entered.
    pub due_date: String,
    pub description: String,
    pub status: AssignmentStatus,
    pub priority: Priority,
}

impl Assignment {
    /// Creates a new pending assignment with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            subject: subject.into(),
            due_date: due_date.into(),
            description: String::new(),
            status: AssignmentStatus::Pending,
            priority: Priority::default(),
        }
    }

    /// Flips `Pending` to `Completed` and back.
    ///
    /// `Overdue` is returned unchanged; there is no exposed way in or out
    /// of that state.
    pub fn toggle_status(&mut self) -> AssignmentStatus {
        self.status = match self.status {
            AssignmentStatus::Pending => AssignmentStatus::Completed,
            AssignmentStatus::Completed => AssignmentStatus::Pending,
            AssignmentStatus::Overdue => AssignmentStatus::Overdue,
        };
        self.status
    }
}
