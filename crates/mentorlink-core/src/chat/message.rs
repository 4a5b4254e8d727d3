//! Conversation message types.
//!
//! This module contains types for representing messages exchanged with the
//! chat assistant, including the sender tag and optional suggestion chips.

use serde::{Deserialize, Serialize};

/// Represents the sender of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    /// Message typed (or chip-clicked) by the user.
    User,
    /// Canned reply from the assistant.
    Bot,
}

/// A single message in an assistant conversation.
///
/// Messages are appended to an ever-growing ordered sequence for the
/// lifetime of the conversation; they are never edited or deleted.
/// Suggestion chips are only ever attached to bot messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique identifier (UUID format)
    pub id: String,
    /// The content of the message.
    pub content: String,
    /// Who sent the message.
    pub sender: ChatSender,
    /// Timestamp when the message was created (RFC 3339 format).
    pub timestamp: String,
    /// Clickable follow-up utterances offered with a bot reply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ChatMessage {
    /// Creates a user message stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender: ChatSender::User,
            timestamp: chrono::Utc::now().to_rfc3339(),
            suggestions: Vec::new(),
        }
    }

    /// Creates a bot message with suggestion chips, stamped with the
    /// current time.
    pub fn bot(content: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender: ChatSender::Bot,
            timestamp: chrono::Utc::now().to_rfc3339(),
            suggestions,
        }
    }
}
