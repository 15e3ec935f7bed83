//! Two-step student setup flow (location, then school).
//!
//! # Responsibility
//! - Walk the student through location and school selection.
//! - Keep selections consistent with the static catalog.
//!
//! # Invariants
//! - A step never advances while its selection is missing.
//! - The school step only offers schools of the chosen location; changing
//!   the location clears any school chosen under the previous one.

use crate::flow::catalog;
use crate::nav::{NavDirective, ScreenId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Steps of the student setup flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Location,
    School,
}

impl SetupStep {
    /// One-based position for the `Step n of 2` progress label.
    pub fn number(self) -> usize {
        match self {
            SetupStep::Location => 1,
            SetupStep::School => 2,
        }
    }
}

/// Total number of steps, for the progress label.
pub const STEP_COUNT: usize = 2;

/// Errors from the student setup flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentSetupError {
    /// Continue pressed on step 1 with no location chosen.
    MissingLocation,
    /// Continue pressed on step 2 with no school chosen.
    MissingSchool,
    /// Selection is not in the location catalog.
    UnknownLocation(String),
    /// Selection is not in the chosen location's school list.
    UnknownSchool(String),
}

impl Display for StudentSetupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLocation => write!(f, "please select your location"),
            Self::MissingSchool => write!(f, "please select your school"),
            Self::UnknownLocation(value) => write!(f, "unknown location: `{value}`"),
            Self::UnknownSchool(value) => write!(f, "unknown school: `{value}`"),
        }
    }
}

impl Error for StudentSetupError {}

/// Student setup screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSetupFlow {
    step: SetupStep,
    location: Option<String>,
    school: Option<String>,
}

impl Default for StudentSetupFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentSetupFlow {
    /// Starts the flow at the location step with nothing chosen.
    pub fn new() -> Self {
        Self {
            step: SetupStep::Location,
            location: None,
            school: None,
        }
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn school(&self) -> Option<&str> {
        self.school.as_deref()
    }

    /// Options offered by the current step.
    pub fn options(&self) -> &'static [&'static str] {
        match self.step {
            SetupStep::Location => &catalog::LOCATIONS,
            SetupStep::School => self
                .location
                .as_deref()
                .and_then(catalog::schools_for)
                // Invariant: the school step is unreachable without a
                // validated location.
                .unwrap_or(&[]),
        }
    }

    /// Highlights one location from the catalog.
    ///
    /// Picking a different location drops a previously chosen school.
    pub fn select_location(&mut self, location: &str) -> Result<(), StudentSetupError> {
        if catalog::schools_for(location).is_none() {
            return Err(StudentSetupError::UnknownLocation(location.to_string()));
        }
        if self.location.as_deref() != Some(location) {
            self.school = None;
        }
        self.location = Some(location.to_string());
        Ok(())
    }

    /// Highlights one school from the chosen location's list.
    pub fn select_school(&mut self, school: &str) -> Result<(), StudentSetupError> {
        let location = self
            .location
            .as_deref()
            .ok_or(StudentSetupError::MissingLocation)?;
        let schools = catalog::schools_for(location)
            .ok_or_else(|| StudentSetupError::UnknownLocation(location.to_string()))?;
        if !schools.contains(&school) {
            return Err(StudentSetupError::UnknownSchool(school.to_string()));
        }
        self.school = Some(school.to_string());
        Ok(())
    }

    /// Whether the current step has its required selection.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            SetupStep::Location => self.location.is_some(),
            SetupStep::School => self.school.is_some(),
        }
    }

    /// Confirms the current step.
    ///
    /// Step 1 advances to the school step and stays on this screen
    /// (`Ok(None)`); step 2 completes the flow (`Ok(Some(..))`).
    pub fn proceed(&mut self) -> Result<Option<NavDirective>, StudentSetupError> {
        match self.step {
            SetupStep::Location => {
                if self.location.is_none() {
                    return Err(StudentSetupError::MissingLocation);
                }
                self.step = SetupStep::School;
                Ok(None)
            }
            SetupStep::School => {
                if self.school.is_none() {
                    return Err(StudentSetupError::MissingSchool);
                }
                Ok(Some(NavDirective::Reset(ScreenId::Home)))
            }
        }
    }

    /// Steps back within the flow, or leaves it from step 1.
    pub fn back(&mut self) -> Option<NavDirective> {
        match self.step {
            SetupStep::Location => Some(NavDirective::Pop),
            SetupStep::School => {
                self.step = SetupStep::Location;
                None
            }
        }
    }
}
