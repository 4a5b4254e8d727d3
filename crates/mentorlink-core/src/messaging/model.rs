//! Messaging inbox domain models.

use serde::{Deserialize, Serialize};

/// Kind of payload a direct message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    Text,
    File,
    SessionRequest,
}

/// A single direct message inside a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub kind: MessageKind,
    /// Timestamp when the message was sent (RFC 3339 format).
    pub timestamp: String,
    /// Whether the receiver has read the message.
    pub is_read: bool,
    /// Sender display name, denormalized for the inbox view.
    pub sender_name: String,
    /// Sender avatar reference, denormalized for the inbox view.
    pub sender_avatar: String,
}

/// A conversation between two participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique identifier
    pub id: String,
    /// Participant user ids.
    pub participants: Vec<String>,
    /// Participant display names, aligned with `participants`.
    pub participant_names: Vec<String>,
    /// Participant avatar references, aligned with `participants`.
    pub participant_avatars: Vec<String>,
    /// The most recent message, shown as the inbox preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    pub updated_at: String,
    /// Number of unread messages for the inbox owner.
    pub unread_count: u32,
}
