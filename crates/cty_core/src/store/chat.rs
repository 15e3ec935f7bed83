//! Chat tab store.
//!
//! # Responsibility
//! - Own the conversation list, the transcript, and the search text.
//! - Switch between the list pane and one open conversation.
//!
//! # Invariants
//! - Conversation search is a pure, case-insensitive substring match
//!   over display names; it never mutates the list.
//! - Sent messages require non-blank text and are appended as the local
//!   user.

use crate::model::chat::{Conversation, ConversationId, Message, MessageId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the chat store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatStoreError {
    /// Send pressed with blank message text.
    BlankMessage,
    /// Target conversation does not exist.
    ConversationNotFound(ConversationId),
}

impl Display for ChatStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankMessage => write!(f, "message text must not be blank"),
            Self::ConversationNotFound(id) => write!(f, "conversation not found: {id}"),
        }
    }
}

impl Error for ChatStoreError {}

/// Chat screen state: list pane or one open conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatStore {
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
    search_text: String,
    active: Option<ConversationId>,
}

impl ChatStore {
    /// Creates an empty store showing the list pane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the shipped sample conversations and transcript.
    pub fn sample() -> Self {
        let conversations = vec![
            seeded_conversation(
                "Study Group - Math",
                "Hey everyone, did you solve problem 15?",
                "2m",
                3,
                true,
                "#7C3AED",
            ),
            seeded_conversation(
                "Sarah Johnson",
                "Can you help me with the essay?",
                "1h",
                1,
                false,
                "#059669",
            ),
            seeded_conversation(
                "Science Lab Team",
                "Meeting tomorrow at 3 PM",
                "3h",
                0,
                true,
                "#DC2626",
            ),
            seeded_conversation("Mike Chen", "Thanks for the notes!", "1d", 0, false, "#D97706"),
        ];
        let messages = vec![
            Message::new(
                "Hey everyone! How are you doing with the math assignment?",
                "Sarah",
                "10:30 AM",
                false,
            ),
            Message::new(
                "I'm struggling with problem 15. Anyone figured it out?",
                "Mike",
                "10:32 AM",
                false,
            ),
            Message::new(
                "Yes! I can help. It's about applying the quadratic formula.",
                "You",
                "10:33 AM",
                true,
            ),
            Message::new(
                "That would be great! Can you walk us through it?",
                "Sarah",
                "10:35 AM",
                false,
            ),
        ];
        Self {
            conversations,
            messages,
            search_text: String::new(),
            active: None,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Updates the search box; the filter is recomputed on read.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Conversations whose name contains the search text,
    /// case-insensitively. Empty search matches everything.
    pub fn filtered_conversations(&self) -> Vec<&Conversation> {
        let needle = self.search_text.to_lowercase();
        self.conversations
            .iter()
            .filter(|conversation| conversation.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Opens one conversation, switching to the transcript pane.
    pub fn open(&mut self, id: ConversationId) -> Result<(), ChatStoreError> {
        if !self.conversations.iter().any(|c| c.id == id) {
            return Err(ChatStoreError::ConversationNotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Returns to the list pane.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// The open conversation, when the transcript pane is showing.
    pub fn active_conversation(&self) -> Option<&Conversation> {
        let id = self.active?;
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Appends a message from the local user.
    ///
    /// `sent_at_label` is the clock label the UI rendered at send time;
    /// core holds no clock.
    pub fn send_message(
        &mut self,
        text: impl Into<String>,
        sent_at_label: impl Into<String>,
    ) -> Result<MessageId, ChatStoreError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ChatStoreError::BlankMessage);
        }
        let message = Message::new(text, "You", sent_at_label, true);
        let id = message.id;
        self.messages.push(message);
        Ok(id)
    }
}

fn seeded_conversation(
    name: &str,
    last_message: &str,
    last_active_label: &str,
    unread_count: u32,
    is_group: bool,
    color: &str,
) -> Conversation {
    let mut conversation = Conversation::new(name, is_group);
    conversation.last_message = last_message.to_string();
    conversation.last_active_label = last_active_label.to_string();
    conversation.unread_count = unread_count;
    conversation.color = color.to_string();
    conversation
}
