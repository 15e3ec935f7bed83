//! Role branch point after registration.
//!
//! # Responsibility
//! - Hold the highlighted role until the user confirms it.
//! - Route each role to its onward setup flow.
//!
//! # Invariants
//! - Proceeding with no role selected is rejected.
//! - Staff terminates immediately; student and admin enter setup forms.

use crate::model::role::Role;
use crate::nav::{NavDirective, ScreenId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the role-selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSelectionError {
    /// Continue was pressed before any role was highlighted.
    NoRoleSelected,
}

impl Display for RoleSelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRoleSelected => write!(f, "select a role before continuing"),
        }
    }
}

impl Error for RoleSelectionError {}

/// Role-selection screen state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSelectionFlow {
    selected: Option<Role>,
}

impl RoleSelectionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights one role card.
    pub fn select(&mut self, role: Role) {
        self.selected = Some(role);
    }

    pub fn selected(&self) -> Option<Role> {
        self.selected
    }

    /// Whether the continue button is enabled.
    pub fn can_proceed(&self) -> bool {
        self.selected.is_some()
    }

    /// Confirms the highlighted role and returns the onward transition.
    pub fn proceed(&self) -> Result<NavDirective, RoleSelectionError> {
        match self.selected {
            None => Err(RoleSelectionError::NoRoleSelected),
            Some(Role::Student) => Ok(NavDirective::Push(ScreenId::StudentSetup)),
            Some(Role::Admin) => Ok(NavDirective::Push(ScreenId::AdminSetup)),
            // Staff needs no further form; the flow terminates here.
            Some(Role::Staff) => Ok(NavDirective::Reset(ScreenId::Home)),
        }
    }

    /// Leaves the screen without confirming a role.
    pub fn back(&self) -> NavDirective {
        NavDirective::Pop
    }
}
