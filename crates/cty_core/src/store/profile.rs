//! Profile tab store.
//!
//! # Invariants
//! - Edits happen on a copy; the committed profile only changes on save.
//! - Saving or cancelling closes the editor.

use crate::model::profile::UserProfile;
use crate::model::role::Role;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the profile store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStoreError {
    /// Save or edit access without an open editor.
    EditorNotOpen,
}

impl Display for ProfileStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EditorNotOpen => write!(f, "profile editor is not open"),
        }
    }
}

impl Error for ProfileStoreError {}

/// Profile screen state: committed profile plus optional edit draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStore {
    profile: UserProfile,
    editor: Option<UserProfile>,
}

impl ProfileStore {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            editor: None,
        }
    }

    /// Store seeded with the shipped sample profile.
    pub fn sample() -> Self {
        Self::new(UserProfile {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@email.com".to_string(),
            role: Role::Student,
            school: "University of Lagos".to_string(),
            location: "Lagos, Nigeria".to_string(),
        })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Opens the editor on a copy of the committed profile.
    pub fn begin_edit(&mut self) {
        self.editor = Some(self.profile.clone());
    }

    /// The draft under edit, when the editor is open.
    pub fn editor_mut(&mut self) -> Option<&mut UserProfile> {
        self.editor.as_mut()
    }

    /// Commits the draft and closes the editor.
    pub fn save(&mut self) -> Result<(), ProfileStoreError> {
        let edited = self.editor.take().ok_or(ProfileStoreError::EditorNotOpen)?;
        self.profile = edited;
        Ok(())
    }

    /// Discards the draft and closes the editor.
    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }
}
