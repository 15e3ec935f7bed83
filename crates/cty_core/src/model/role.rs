//! Account role model.
//!
//! # Responsibility
//! - Define the closed set of roles a user can sign up under.
//! - Carry the display copy shown on the role-selection screen.
//!
//! # Invariants
//! - The role set is closed; there is no free-form role.
//! - A role choice is session-scoped and never persisted by core.

use serde::{Deserialize, Serialize};

/// Closed enumeration of account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular student account.
    Student,
    /// Teaching or support staff account.
    Staff,
    /// School administrator account.
    Admin,
}

impl Role {
    /// All roles in the order the selection screen lists them.
    pub const ALL: [Role; 3] = [Role::Student, Role::Staff, Role::Admin];

    /// Card title shown on the role-selection screen.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Staff => "Staff",
            Role::Admin => "School Admin",
        }
    }

    /// Card subtitle shown on the role-selection screen.
    pub fn description(self) -> &'static str {
        match self {
            Role::Student => "Access assignments, chat, and school updates",
            Role::Staff => "Manage assignments and timetables",
            Role::Admin => "Full school management access",
        }
    }
}
