//! Assignments tab store.
//!
//! # Responsibility
//! - Own the assignment list and the creation composer draft.
//! - Partition the list into pending and completed sections.
//!
//! # Invariants
//! - New assignments are prepended with a fresh ID and status `pending`.
//! - A rejected draft mutates nothing and keeps the composer open.
//! - Toggling only moves between `pending` and `completed`; `overdue`
//!   items are untouched.

use crate::model::assignment::{Assignment, AssignmentId, AssignmentStatus, Priority};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the assignments store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentStoreError {
    MissingTitle,
    MissingSubject,
    MissingDueDate,
    /// Target assignment does not exist.
    NotFound(AssignmentId),
}

impl Display for AssignmentStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "please fill in the title field"),
            Self::MissingSubject => write!(f, "please fill in the subject field"),
            Self::MissingDueDate => write!(f, "please fill in the due date field"),
            Self::NotFound(id) => write!(f, "assignment not found: {id}"),
        }
    }
}

impl Error for AssignmentStoreError {}

/// Unsaved composer input, distinct from the committed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub title: String,
    pub subject: String,
    pub due_date: String,
    pub description: String,
    pub priority: Priority,
}

/// Assignments screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentStore {
    items: Vec<Assignment>,
    draft: AssignmentDraft,
    composer_open: bool,
}

impl AssignmentStore {
    /// Creates an empty store with a blank draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the shipped sample assignments.
    pub fn sample() -> Self {
        let mut essay = Assignment::new(
            "Essay on Climate Change",
            "Environmental Science",
            "2025-01-22",
        );
        essay.description = "Write a 1500-word essay on the impact of climate change".to_string();
        essay.priority = Priority::High;

        let mut problem_set =
            Assignment::new("Mathematical Problem Set #5", "Mathematics", "2025-01-25");
        problem_set.description = "Complete problems 1-20 from chapter 8".to_string();

        let mut timeline = Assignment::new("History Timeline Project", "History", "2025-01-18");
        timeline.description = "Create a timeline of major historical events".to_string();
        timeline.priority = Priority::Low;
        timeline.status = AssignmentStatus::Completed;

        Self {
            items: vec![essay, problem_set, timeline],
            draft: AssignmentDraft::default(),
            composer_open: false,
        }
    }

    pub fn items(&self) -> &[Assignment] {
        &self.items
    }

    pub fn draft(&self) -> &AssignmentDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut AssignmentDraft {
        &mut self.draft
    }

    pub fn is_composer_open(&self) -> bool {
        self.composer_open
    }

    pub fn open_composer(&mut self) {
        self.composer_open = true;
    }

    pub fn close_composer(&mut self) {
        self.composer_open = false;
    }

    /// Commits the draft as a new pending assignment.
    ///
    /// On success the record is prepended, the draft cleared, and the
    /// composer closed. On validation failure nothing changes and the
    /// composer stays open so the user can correct the field.
    pub fn create(&mut self) -> Result<AssignmentId, AssignmentStoreError> {
        if self.draft.title.trim().is_empty() {
            return Err(AssignmentStoreError::MissingTitle);
        }
        if self.draft.subject.trim().is_empty() {
            return Err(AssignmentStoreError::MissingSubject);
        }
        if self.draft.due_date.trim().is_empty() {
            return Err(AssignmentStoreError::MissingDueDate);
        }

        let mut assignment = Assignment::new(
            self.draft.title.clone(),
            self.draft.subject.clone(),
            self.draft.due_date.clone(),
        );
        assignment.description = self.draft.description.clone();
        assignment.priority = self.draft.priority;

        let id = assignment.id;
        self.items.insert(0, assignment);
        self.draft = AssignmentDraft::default();
        self.composer_open = false;
        debug!("event=assignment_created module=store id={id}");
        Ok(id)
    }

    /// Flips one assignment between pending and completed.
    ///
    /// Returns the status after the flip; `overdue` items come back
    /// unchanged.
    pub fn toggle_status(
        &mut self,
        id: AssignmentId,
    ) -> Result<AssignmentStatus, AssignmentStoreError> {
        let assignment = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(AssignmentStoreError::NotFound(id))?;
        Ok(assignment.toggle_status())
    }

    /// Pending section, in list order.
    pub fn pending(&self) -> Vec<&Assignment> {
        self.items
            .iter()
            .filter(|item| item.status == AssignmentStatus::Pending)
            .collect()
    }

    /// Completed section, in list order.
    pub fn completed(&self) -> Vec<&Assignment> {
        self.items
            .iter()
            .filter(|item| item.status == AssignmentStatus::Completed)
            .collect()
    }

    /// `(pending, completed)` counts for the header summary.
    pub fn summary(&self) -> (usize, usize) {
        (self.pending().len(), self.completed().len())
    }
}
