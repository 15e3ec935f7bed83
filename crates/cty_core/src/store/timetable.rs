//! Timetable tab store.
//!
//! # Responsibility
//! - Own the weekly class list, the selected day, and the entry draft.
//! - Produce the day view sorted by start time.
//!
//! # Invariants
//! - New entries are appended under the currently selected day.
//! - Start times are validated as `HH:MM` before commit, so the day view
//!   can sort lexicographically.

use crate::model::timetable::{
    is_valid_start_time, EntryId, TimetableEntry, Weekday, ENTRY_COLORS,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the timetable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableStoreError {
    MissingSubject,
    MissingStartTime,
    MissingDuration,
    /// Start time is not in zero-padded 24-hour `HH:MM` form.
    InvalidStartTime(String),
}

impl Display for TimetableStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSubject => write!(f, "please fill in the subject field"),
            Self::MissingStartTime => write!(f, "please fill in the time field"),
            Self::MissingDuration => write!(f, "please fill in the duration field"),
            Self::InvalidStartTime(value) => {
                write!(f, "time must be HH:MM (24-hour), got `{value}`")
            }
        }
    }
}

impl Error for TimetableStoreError {}

/// Unsaved composer input for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableDraft {
    pub subject: String,
    pub start_time: String,
    pub duration: String,
    pub location: String,
    pub instructor: String,
    pub color: String,
}

impl Default for TimetableDraft {
    fn default() -> Self {
        Self {
            subject: String::new(),
            start_time: String::new(),
            duration: String::new(),
            location: String::new(),
            instructor: String::new(),
            color: ENTRY_COLORS[0].to_string(),
        }
    }
}

/// Timetable screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableStore {
    items: Vec<TimetableEntry>,
    selected_day: Weekday,
    draft: TimetableDraft,
    composer_open: bool,
}

impl Default for TimetableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TimetableStore {
    /// Creates an empty store with Monday selected.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_day: Weekday::Monday,
            draft: TimetableDraft::default(),
            composer_open: false,
        }
    }

    /// Store seeded with the shipped sample week.
    pub fn sample() -> Self {
        let mut store = Self::new();
        store.items = vec![
            seeded_entry(
                "Mathematics",
                "08:00",
                "1h 30m",
                "Room 101",
                "Dr. Smith",
                Weekday::Monday,
                ENTRY_COLORS[0],
            ),
            seeded_entry(
                "Physics",
                "10:00",
                "2h",
                "Lab 201",
                "Prof. Johnson",
                Weekday::Monday,
                ENTRY_COLORS[1],
            ),
            seeded_entry(
                "Chemistry",
                "14:00",
                "1h 30m",
                "Lab 301",
                "Dr. Brown",
                Weekday::Monday,
                ENTRY_COLORS[2],
            ),
            seeded_entry(
                "English Literature",
                "09:00",
                "1h",
                "Room 205",
                "Ms. Davis",
                Weekday::Tuesday,
                ENTRY_COLORS[3],
            ),
            seeded_entry(
                "History",
                "11:00",
                "1h 30m",
                "Room 102",
                "Mr. Wilson",
                Weekday::Tuesday,
                ENTRY_COLORS[4],
            ),
        ];
        store
    }

    pub fn items(&self) -> &[TimetableEntry] {
        &self.items
    }

    pub fn selected_day(&self) -> Weekday {
        self.selected_day
    }

    pub fn select_day(&mut self, day: Weekday) {
        self.selected_day = day;
    }

    pub fn draft(&self) -> &TimetableDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TimetableDraft {
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

    /// Commits the draft as a new entry under the selected day.
    ///
    /// On success the entry is appended, the draft cleared, and the
    /// composer closed; on validation failure nothing changes.
    pub fn add(&mut self) -> Result<EntryId, TimetableStoreError> {
        if self.draft.subject.trim().is_empty() {
            return Err(TimetableStoreError::MissingSubject);
        }
        let start_time = self.draft.start_time.trim();
        if start_time.is_empty() {
            return Err(TimetableStoreError::MissingStartTime);
        }
        if !is_valid_start_time(start_time) {
            return Err(TimetableStoreError::InvalidStartTime(
                start_time.to_string(),
            ));
        }
        if self.draft.duration.trim().is_empty() {
            return Err(TimetableStoreError::MissingDuration);
        }

        let mut entry = TimetableEntry::new(
            self.draft.subject.clone(),
            start_time,
            self.draft.duration.clone(),
            self.selected_day,
        );
        entry.location = self.draft.location.clone();
        entry.instructor = self.draft.instructor.clone();
        entry.color = self.draft.color.clone();

        let id = entry.id;
        self.items.push(entry);
        self.draft = TimetableDraft::default();
        self.composer_open = false;
        Ok(id)
    }

    /// Classes on `day`, sorted ascending by start time.
    ///
    /// Lexicographic comparison is correct because start times are
    /// fixed-width `HH:MM`; ties keep insertion order.
    pub fn classes_for(&self, day: Weekday) -> Vec<&TimetableEntry> {
        let mut classes: Vec<&TimetableEntry> =
            self.items.iter().filter(|entry| entry.day == day).collect();
        classes.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        classes
    }

    /// Day view for the currently selected day.
    pub fn selected_day_classes(&self) -> Vec<&TimetableEntry> {
        self.classes_for(self.selected_day)
    }
}

fn seeded_entry(
    subject: &str,
    start_time: &str,
    duration: &str,
    location: &str,
    instructor: &str,
    day: Weekday,
    color: &str,
) -> TimetableEntry {
    let mut entry = TimetableEntry::new(subject, start_time, duration, day);
    entry.location = location.to_string();
    entry.instructor = instructor.to_string();
    entry.color = color.to_string();
    entry
}
