//! Screen-local in-memory stores.
//!
//! # Responsibility
//! - Own one list plus a composer draft per main-tab screen.
//! - Validate drafts before any mutation.
//!
//! # Invariants
//! - Each store is exclusive to its screen instance; no cross-store
//!   sharing, no persistence, state is discarded with the screen.
//! - Failed validation leaves the list and the open composer untouched.

pub mod assignments;
pub mod chat;
pub mod home;
pub mod profile;
pub mod timetable;
