//! First-launch onboarding pager.
//!
//! # Responsibility
//! - Track the active page of the fixed intro sequence.
//! - Map swipe gestures and button taps to page transitions.
//!
//! # Invariants
//! - The page index is always within `[0, page_count - 1]`.
//! - `skip` completes from any page in exactly one transition.
//! - Nothing is persisted; the pager restarts at page 0 every launch.

use crate::nav::{NavDirective, ScreenId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Horizontal drag distance required before a swipe counts.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Discrete command a raw horizontal drag maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeCommand {
    /// Leftward drag past the threshold.
    Next,
    /// Rightward drag past the threshold.
    Previous,
    /// Drag below the threshold; ignored.
    None,
}

/// Maps a raw horizontal drag delta to a discrete command.
///
/// Pure threshold function, independent of the rendering layer: positive
/// deltas are rightward drags (back), negative deltas leftward (forward).
pub fn swipe_command(translation_x: f32) -> SwipeCommand {
    if translation_x > SWIPE_THRESHOLD_PX {
        SwipeCommand::Previous
    } else if translation_x < -SWIPE_THRESHOLD_PX {
        SwipeCommand::Next
    } else {
        SwipeCommand::None
    }
}

/// Static content for one onboarding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingPage {
    pub title: String,
    pub description: String,
    /// Bundled illustration asset path.
    pub illustration: String,
}

impl OnboardingPage {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        illustration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            illustration: illustration.into(),
        }
    }
}

/// Errors from onboarding pager construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingError {
    /// The pager needs at least one page.
    NoPages,
}

impl Display for OnboardingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPages => write!(f, "onboarding needs at least one page"),
        }
    }
}

impl Error for OnboardingError {}

/// Swipeable intro pager state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    pages: Vec<OnboardingPage>,
    page: usize,
}

impl OnboardingFlow {
    /// Creates a pager starting at page 0.
    pub fn new(pages: Vec<OnboardingPage>) -> Result<Self, OnboardingError> {
        if pages.is_empty() {
            return Err(OnboardingError::NoPages);
        }
        Ok(Self { pages, page: 0 })
    }

    /// Pager seeded with the shipped intro content.
    pub fn sample() -> Self {
        let pages = vec![
            OnboardingPage::new(
                "Track Homework",
                "Easily manage all your assignments.",
                "assets/welcome1.png",
            ),
            OnboardingPage::new(
                "Join Cohort",
                "Collaborate and study with classmates.",
                "assets/woried2.png",
            ),
            OnboardingPage::new(
                "Stay Updated",
                "Get the latest school news and updates.",
                "assets/goodgrade3.png",
            ),
        ];
        Self::new(pages).expect("sample onboarding content is non-empty")
    }

    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the page currently shown.
    pub fn current_page(&self) -> &OnboardingPage {
        &self.pages[self.page]
    }

    /// Returns whether the pager is on its last page.
    pub fn is_last_page(&self) -> bool {
        self.page == self.pages.len() - 1
    }

    /// Advances one page, or completes the pager on the last page.
    ///
    /// Returns `Some` with the completion directive when onboarding is
    /// done, `None` while paging.
    pub fn next(&mut self) -> Option<NavDirective> {
        if self.is_last_page() {
            return Some(Self::completion());
        }
        self.page += 1;
        None
    }

    /// Steps back one page; no-op on page 0.
    ///
    /// Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Completes the pager from any page, bypassing remaining pages.
    pub fn skip(&self) -> NavDirective {
        Self::completion()
    }

    /// Applies a raw horizontal drag delta.
    pub fn swipe(&mut self, translation_x: f32) -> Option<NavDirective> {
        match swipe_command(translation_x) {
            SwipeCommand::Next => self.next(),
            SwipeCommand::Previous => {
                self.previous();
                None
            }
            SwipeCommand::None => None,
        }
    }

    fn completion() -> NavDirective {
        NavDirective::Push(ScreenId::Welcome)
    }
}
