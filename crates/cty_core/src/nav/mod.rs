//! Screen stack and navigation directives.
//!
//! # Responsibility
//! - Own the ordered stack of named screens and the active screen.
//! - Apply tagged navigation results produced by flows and stores.
//!
//! # Invariants
//! - The stack is never empty; popping the root screen is a no-op.
//! - Flows never mutate the navigator directly; they return a
//!   [`NavDirective`] and the shell applies it.

use log::debug;
use serde::{Deserialize, Serialize};

/// Closed set of navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    /// Swipeable intro pager shown on first launch.
    Onboarding,
    /// Landing screen with the get-started and sign-in entry points.
    Welcome,
    /// Account registration form.
    Register,
    /// Sign-in form.
    Login,
    /// Role branch point after registration.
    RoleSelection,
    /// Two-step location/school picker for students.
    StudentSetup,
    /// Single-step school details form for admins.
    AdminSetup,
    /// Main tab container (feed, assignments, timetable, chat, profile).
    Home,
    /// Placeholder shown for unfinished areas.
    Maintenance,
}

impl ScreenId {
    /// Stable route name used in logs and by the shell router.
    pub fn route_name(self) -> &'static str {
        match self {
            ScreenId::Onboarding => "onboarding",
            ScreenId::Welcome => "welcome",
            ScreenId::Register => "register",
            ScreenId::Login => "login",
            ScreenId::RoleSelection => "role_selection",
            ScreenId::StudentSetup => "student_setup",
            ScreenId::AdminSetup => "admin_setup",
            ScreenId::Home => "home",
            ScreenId::Maintenance => "maintenance",
        }
    }
}

/// Tagged navigation result returned by flows.
///
/// Screen state is discarded when its screen leaves the stack, so flows
/// describe the transition instead of performing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirective {
    /// Push a screen on top of the current one.
    Push(ScreenId),
    /// Return to the previous screen.
    Pop,
    /// Swap the active screen, keeping the rest of the stack.
    Replace(ScreenId),
    /// Discard the whole stack and start over at one screen.
    Reset(ScreenId),
}

/// Ordered stack of named screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<ScreenId>,
}

impl Navigator {
    /// Creates a navigator rooted at `root`.
    pub fn new(root: ScreenId) -> Self {
        Self { stack: vec![root] }
    }

    /// Returns the active screen.
    pub fn current(&self) -> ScreenId {
        // Invariant: stack is never empty.
        *self.stack.last().expect("navigator stack is never empty")
    }

    /// Returns the full stack, root first.
    pub fn stack(&self) -> &[ScreenId] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes `screen` on top of the stack.
    pub fn push(&mut self, screen: ScreenId) {
        self.stack.push(screen);
    }

    /// Pops the active screen.
    ///
    /// Returns `false` without changing anything when only the root
    /// screen remains.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Replaces the active screen, keeping the screens below it.
    pub fn replace(&mut self, screen: ScreenId) {
        let top = self.stack.len() - 1;
        self.stack[top] = screen;
    }

    /// Discards the stack and restarts at `screen`.
    pub fn reset(&mut self, screen: ScreenId) {
        self.stack.clear();
        self.stack.push(screen);
    }

    /// Applies one flow-produced directive.
    pub fn apply(&mut self, directive: NavDirective) {
        let from = self.current().route_name();
        match directive {
            NavDirective::Push(screen) => self.push(screen),
            NavDirective::Pop => {
                self.pop();
            }
            NavDirective::Replace(screen) => self.replace(screen),
            NavDirective::Reset(screen) => self.reset(screen),
        }
        debug!(
            "event=nav_apply module=nav from={} to={} depth={}",
            from,
            self.current().route_name(),
            self.depth()
        );
    }
}
