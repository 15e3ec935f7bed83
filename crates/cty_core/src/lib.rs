//! Headless core for the CTY school companion app.
//! This crate is the single source of truth for screen flows and stores.

pub mod flow;
pub mod logging;
pub mod model;
pub mod nav;
pub mod store;

pub use flow::admin_setup::{AdminSetupError, AdminSetupForm};
pub use flow::auth::{AuthError, LoginForm, RegisterForm};
pub use flow::onboarding::{
    swipe_command, OnboardingError, OnboardingFlow, OnboardingPage, SwipeCommand,
    SWIPE_THRESHOLD_PX,
};
pub use flow::role_selection::{RoleSelectionError, RoleSelectionFlow};
pub use flow::student_setup::{SetupStep, StudentSetupError, StudentSetupFlow};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{Assignment, AssignmentId, AssignmentStatus, Priority};
pub use model::chat::{Conversation, ConversationId, Message, MessageId};
pub use model::news::{NewsPost, PostId};
pub use model::profile::UserProfile;
pub use model::role::Role;
pub use model::timetable::{EntryId, TimetableEntry, Weekday, ENTRY_COLORS};
pub use nav::{NavDirective, Navigator, ScreenId};
pub use store::assignments::{AssignmentDraft, AssignmentStore, AssignmentStoreError};
pub use store::chat::{ChatStore, ChatStoreError};
pub use store::home::HomeFeed;
pub use store::profile::{ProfileStore, ProfileStoreError};
pub use store::timetable::{TimetableDraft, TimetableStore, TimetableStoreError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
