//! Message repository trait.
//!
//! Defines the interface for inbox persistence operations.

use super::model::{Conversation, Message};
use crate::error::Result;

/// An abstract repository for conversations and their message logs.
///
/// Message logs are append-only: messages are added at the end of a
/// conversation's log and never removed. Each conversation has a single
/// writer (the messaging service), so implementations only need to guard
/// against concurrent readers.
#[async_trait::async_trait]
pub trait MessageRepository: Send + Sync {
    /// All conversations, most recently active first.
    async fn conversations(&self) -> Result<Vec<Conversation>>;

    /// Finds a conversation by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Conversation))`: Conversation found
    /// - `Ok(None)`: No conversation with that id
    async fn find_conversation(&self, conversation_id: &str) -> Result<Option<Conversation>>;

    /// The message log of a conversation, oldest first.
    ///
    /// An unknown conversation id yields an empty log, not an error.
    async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>>;

    /// Appends a message to its conversation's log and refreshes the
    /// conversation preview (last message, updated-at).
    async fn append_message(&self, message: Message) -> Result<()>;

    /// Marks every message addressed to `user_id` in the conversation as
    /// read and zeroes the conversation's unread count.
    async fn mark_as_read(&self, conversation_id: &str, user_id: &str) -> Result<()>;

    /// Inserts a new conversation at the front of the list.
    async fn insert_conversation(&self, conversation: Conversation) -> Result<()>;
}
