//! Single-step admin school-details form.
//!
//! # Invariants
//! - School name and location are both required, trimmed non-empty.
//! - Completion discards the auth stack and lands on the main tabs.

use crate::nav::{NavDirective, ScreenId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the admin setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSetupError {
    MissingSchoolName,
    MissingLocation,
}

impl Display for AdminSetupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSchoolName => write!(f, "please fill in the school name"),
            Self::MissingLocation => write!(f, "please fill in the school location"),
        }
    }
}

impl Error for AdminSetupError {}

/// Admin setup screen state: two free-text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSetupForm {
    pub school_name: String,
    pub location: String,
}

impl AdminSetupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the complete button is enabled.
    pub fn can_complete(&self) -> bool {
        !self.school_name.trim().is_empty() && !self.location.trim().is_empty()
    }

    /// Validates both fields and completes the flow.
    pub fn complete(&self) -> Result<NavDirective, AdminSetupError> {
        if self.school_name.trim().is_empty() {
            return Err(AdminSetupError::MissingSchoolName);
        }
        if self.location.trim().is_empty() {
            return Err(AdminSetupError::MissingLocation);
        }
        Ok(NavDirective::Reset(ScreenId::Home))
    }

    /// Leaves the form without completing it.
    pub fn back(&self) -> NavDirective {
        NavDirective::Pop
    }
}
