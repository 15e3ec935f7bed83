//! Domain models for the CTY companion app.
//!
//! # Responsibility
//! - Define the record types each screen store owns.
//! - Keep identifier generation and format rules in one place.
//!
//! # Invariants
//! - Every list record carries a stable UUID identifier.
//! - Models hold no references to screen or navigation state.

pub mod assignment;
pub mod chat;
pub mod news;
pub mod profile;
pub mod role;
pub mod timetable;
