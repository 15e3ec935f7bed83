//! School news post model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one news post.
pub type PostId = Uuid;

/// One card in the home-feed news section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPost {
    /// Stable record ID.
    pub id: PostId,
    pub title: String,
    pub body: String,
    /// Relative-age label, e.g. `2 hours ago`.
    pub posted_label: String,
    pub image_url: String,
}

impl NewsPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            posted_label: String::new(),
            image_url: String::new(),
        }
    }
}
