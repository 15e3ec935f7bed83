//! Chat conversation and message models.
//!
//! # Invariants
//! - `Conversation` and `Message` IDs are stable within a screen session.
//! - Timestamps are display labels supplied by the caller; core holds no
//!   clock.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one conversation.
pub type ConversationId = Uuid;

/// Stable identifier for one message.
pub type MessageId = Uuid;

/// One row in the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Stable record ID.
    pub id: ConversationId,
    /// Display name matched by the conversation search.
    pub name: String,
    pub last_message: String,
    /// Relative-age label, e.g. `2m` or `1d`.
    pub last_active_label: String,
    pub unread_count: u32,
    pub is_group: bool,
    /// Avatar accent color.
    pub color: String,
}

impl Conversation {
    pub fn new(name: impl Into<String>, is_group: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            last_message: String::new(),
            last_active_label: String::new(),
            unread_count: 0,
            is_group,
            color: "#2563EB".to_string(),
        }
    }
}

/// One message bubble in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Stable record ID.
    pub id: MessageId,
    pub text: String,
    pub sender: String,
    /// Clock label the UI rendered at send time, e.g. `10:30 AM`.
    pub sent_at_label: String,
    /// Whether the local user authored the message.
    pub is_me: bool,
}

impl Message {
    pub fn new(
        text: impl Into<String>,
        sender: impl Into<String>,
        sent_at_label: impl Into<String>,
        is_me: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: sender.into(),
            sent_at_label: sent_at_label.into(),
            is_me,
        }
    }
}
