//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Return values are UTF-8 strings with stable meaning.

use cty_core::flow::catalog;
use cty_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    swipe_command, Role, SwipeCommand,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Classifies a raw onboarding drag delta.
///
/// Input semantics:
/// - `translation_x`: horizontal drag distance in pixels; positive is a
///   rightward drag.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never throws; returns one of `next|previous|none`.
#[flutter_rust_bridge::frb(sync)]
pub fn swipe_gesture(translation_x: f32) -> String {
    match swipe_command(translation_x) {
        SwipeCommand::Next => "next",
        SwipeCommand::Previous => "previous",
        SwipeCommand::None => "none",
    }
    .to_owned()
}

/// Role card content for the role selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOption {
    /// Stable role tag (`student|staff|admin`).
    pub tag: String,
    /// Card title shown to the user.
    pub label: String,
    /// One-line card description.
    pub description: String,
}

/// Lists the selectable account roles in display order.
///
/// # FFI contract
/// - Sync call, static content.
/// - Never throws; always returns three options.
#[flutter_rust_bridge::frb(sync)]
pub fn role_options() -> Vec<RoleOption> {
    Role::ALL
        .iter()
        .map(|role| RoleOption {
            tag: role_tag(*role).to_owned(),
            label: role.label().to_owned(),
            description: role.description().to_owned(),
        })
        .collect()
}

/// Lists the locations offered by the student setup picker.
///
/// # FFI contract
/// - Sync call, static content.
/// - Never throws; always returns a non-empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn setup_locations() -> Vec<String> {
    catalog::LOCATIONS.iter().map(|s| (*s).to_owned()).collect()
}

/// School list response for the student setup picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSchoolsResponse {
    /// Whether the location was recognized.
    pub ok: bool,
    /// Schools for the location (empty on failure).
    pub schools: Vec<String>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Lists the schools offered for one declared location.
///
/// # FFI contract
/// - Sync call, static content.
/// - Never panics.
/// - Returns a deterministic envelope; unknown locations fail with
///   an empty school list.
#[flutter_rust_bridge::frb(sync)]
pub fn setup_schools(location: String) -> SetupSchoolsResponse {
    match catalog::schools_for(&location) {
        Some(schools) => SetupSchoolsResponse {
            ok: true,
            schools: schools.iter().map(|s| (*s).to_owned()).collect(),
            message: format!("Found {} school(s).", schools.len()),
        },
        None => SetupSchoolsResponse {
            ok: false,
            schools: Vec::new(),
            message: format!("Unknown location: {location}"),
        },
    }
}

fn role_tag(role: Role) -> &'static str {
    match role {
        Role::Student => "student",
        Role::Staff => "staff",
        Role::Admin => "admin",
    }
}
