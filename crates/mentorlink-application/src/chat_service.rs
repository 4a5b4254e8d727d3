//! Chat assistant service.
//!
//! Owns the append-only conversation log and stages the assistant's
//! replies. Each conversation id maps to an ordered message sequence that
//! only this service writes to; messages are never edited or removed for
//! the lifetime of the service.
//!
//! Between the user message and the bot reply the service waits a fixed
//! "typing" delay. The delay is a UI affordance with no correctness
//! implication; nothing cancels an in-flight reply if the caller goes
//! away. Tests configure the delay to zero.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use mentorlink_core::chat::{ChatMessage, greeting, respond};
use mentorlink_core::error::Result;

/// Default simulated typing delay before a bot reply appears.
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(1500);

/// Service managing assistant conversations.
pub struct ChatService {
    /// Append-only message log per conversation id.
    logs: Arc<RwLock<HashMap<String, Vec<ChatMessage>>>>,
    /// Simulated typing delay before each bot reply.
    typing_delay: Duration,
}

impl ChatService {
    /// Creates a service with the default typing delay.
    pub fn new() -> Self {
        Self::with_typing_delay(DEFAULT_TYPING_DELAY)
    }

    /// Creates a service with a custom typing delay.
    pub fn with_typing_delay(typing_delay: Duration) -> Self {
        Self {
            logs: Arc::new(RwLock::new(HashMap::new())),
            typing_delay,
        }
    }

    /// Opens a conversation, seeding it with the assistant's greeting.
    ///
    /// Reopening an existing conversation leaves its log untouched and
    /// returns the original greeting message.
    pub async fn open(&self, conversation_id: &str) -> ChatMessage {
        let mut logs = self.logs.write().await;
        let log = logs.entry(conversation_id.to_string()).or_default();
        if log.is_empty() {
            let opening = greeting();
            log.push(ChatMessage::bot(opening.content, opening.suggestions));
        }
        log[0].clone()
    }

    /// Handles one utterance: appends the user message, waits out the
    /// typing delay, then appends and returns the canned reply.
    ///
    /// Suggestion chips re-enter here as plain utterances. Blank input is
    /// ignored and yields `Ok(None)`.
    pub async fn send(&self, conversation_id: &str, utterance: &str) -> Result<Option<ChatMessage>> {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Ok(None);
        }

        {
            let mut logs = self.logs.write().await;
            logs.entry(conversation_id.to_string())
                .or_default()
                .push(ChatMessage::user(utterance));
        }

        // Simulated typing; deliberately not cancellable
        tokio::time::sleep(self.typing_delay).await;

        let reply = respond(utterance);
        let message = ChatMessage::bot(reply.content, reply.suggestions);
        tracing::debug!(conversation_id, utterance, "assistant reply appended");

        let mut logs = self.logs.write().await;
        logs.entry(conversation_id.to_string())
            .or_default()
            .push(message.clone());
        Ok(Some(message))
    }

    /// Returns a snapshot of a conversation's log, oldest first.
    ///
    /// An unknown conversation id yields an empty log.
    pub async fn history(&self, conversation_id: &str) -> Vec<ChatMessage> {
        self.logs
            .read()
            .await
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}
