//! Sign-in and registration forms.
//!
//! # Responsibility
//! - Validate credential form input before submission.
//! - Route successful submissions onward.
//!
//! # Invariants
//! - A form never submits while a required field is blank.
//! - No credentials leave core; the backend is out of scope and submit
//!   succeeds locally once validation passes.

use crate::nav::{NavDirective, ScreenId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the auth forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// A required field is blank after trimming.
    MissingField(&'static str),
    /// Password and confirmation do not match.
    PasswordMismatch,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "please fill in the {field} field"),
            Self::PasswordMismatch => write!(f, "passwords do not match"),
        }
    }
}

impl Error for AuthError {}

/// Sign-in form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates both fields and signs in.
    pub fn submit(&self) -> Result<NavDirective, AuthError> {
        require(&self.email, "email")?;
        require(&self.password, "password")?;
        Ok(NavDirective::Reset(ScreenId::Home))
    }

    /// Link to the registration form.
    pub fn to_register(&self) -> NavDirective {
        NavDirective::Push(ScreenId::Register)
    }
}

/// Registration form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sign-up button is enabled.
    pub fn is_complete(&self) -> bool {
        self.submit_target().is_ok()
    }

    /// Validates every field and creates the account.
    pub fn submit(&self) -> Result<NavDirective, AuthError> {
        self.submit_target()
    }

    fn submit_target(&self) -> Result<NavDirective, AuthError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.password, "password")?;
        require(&self.confirm_password, "confirm password")?;
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(NavDirective::Push(ScreenId::RoleSelection))
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(())
}
