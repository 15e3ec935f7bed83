//! Timetable entry model.
//!
//! # Responsibility
//! - Define one scheduled class on the weekly timetable.
//! - Validate the `HH:MM` start-time format.
//!
//! # Invariants
//! - `start_time` always matches `HH:MM` (24-hour, zero-padded), so
//!   lexicographic comparison orders entries by time of day.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static START_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid start time regex"));

/// Stable identifier for one timetable entry.
pub type EntryId = Uuid;

/// Accent colors offered by the entry composer, in palette order.
pub const ENTRY_COLORS: [&str; 6] = [
    "#2563EB", "#7C3AED", "#059669", "#DC2626", "#D97706", "#0891B2",
];

/// School days shown by the timetable day picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All days in the order the picker lists them.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

/// One scheduled class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Stable record ID.
    pub id: EntryId,
    pub subject: String,
    /// Class start in zero-padded 24-hour `HH:MM` form.
    pub start_time: String,
    /// Free-form duration label, e.g. `1h 30m`.
    pub duration: String,
    pub location: String,
    pub instructor: String,
    pub day: Weekday,
    /// Card accent color, one of [`ENTRY_COLORS`] by default.
    pub color: String,
}

impl TimetableEntry {
    /// Creates a new entry with a generated stable ID.
    pub fn new(
        subject: impl Into<String>,
        start_time: impl Into<String>,
        duration: impl Into<String>,
        day: Weekday,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            start_time: start_time.into(),
            duration: duration.into(),
            location: String::new(),
            instructor: String::new(),
            day,
            color: ENTRY_COLORS[0].to_string(),
        }
    }
}

/// Returns whether `value` is a zero-padded 24-hour `HH:MM` time.
pub fn is_valid_start_time(value: &str) -> bool {
    START_TIME_RE.is_match(value)
}
