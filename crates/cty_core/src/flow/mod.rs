//! Multi-step screen flows.
//!
//! # Responsibility
//! - Hold the step state of onboarding, role selection, and setup flows.
//! - Translate user actions into [`crate::nav::NavDirective`] values.
//!
//! # Invariants
//! - A step never advances while a required field is missing.
//! - Flow state lives only as long as its screen is mounted.

pub mod admin_setup;
pub mod auth;
pub mod catalog;
pub mod onboarding;
pub mod role_selection;
pub mod student_setup;
