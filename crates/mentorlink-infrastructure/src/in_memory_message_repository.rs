//! In-memory MessageRepository implementation.

use std::collections::HashMap;

use tokio::sync::RwLock;

use mentorlink_core::error::Result;
use mentorlink_core::messaging::{
    Conversation, Message, MessageRepository, seeded_conversations, seeded_messages,
};

/// Inbox repository backed by seeded in-memory collections.
///
/// The conversation list and the per-conversation message logs are the only
/// mutable state; both sit behind `RwLock` for interior mutability. Logs are
/// append-only and have a single writer (the messaging service).
pub struct InMemoryMessageRepository {
    conversations: RwLock<Vec<Conversation>>,
    messages: RwLock<HashMap<String, Vec<Message>>>,
}

impl InMemoryMessageRepository {
    /// Creates a repository seeded with the default mock inbox.
    pub fn new() -> Self {
        Self {
            conversations: RwLock::new(seeded_conversations()),
            messages: RwLock::new(seeded_messages()),
        }
    }

    /// Creates an empty repository (for testing).
    pub fn empty() -> Self {
        Self {
            conversations: RwLock::new(Vec::new()),
            messages: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn conversations(&self) -> Result<Vec<Conversation>> {
        Ok(self.conversations.read().await.clone())
    }

    async fn find_conversation(&self, conversation_id: &str) -> Result<Option<Conversation>> {
        Ok(self
            .conversations
            .read()
            .await
            .iter()
            .find(|conversation| conversation.id == conversation_id)
            .cloned())
    }

    async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        Ok(self
            .messages
            .read()
            .await
            .get(conversation_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_message(&self, message: Message) -> Result<()> {
        {
            let mut logs = self.messages.write().await;
            logs.entry(message.conversation_id.clone())
                .or_default()
                .push(message.clone());
        }

        // Refresh the conversation preview; a log without a conversation
        // entry still accepts messages.
        let mut conversations = self.conversations.write().await;
        if let Some(conversation) = conversations
            .iter_mut()
            .find(|conversation| conversation.id == message.conversation_id)
        {
            conversation.updated_at = message.timestamp.clone();
            conversation.last_message = Some(message);
        }
        Ok(())
    }

    async fn mark_as_read(&self, conversation_id: &str, user_id: &str) -> Result<()> {
        {
            let mut logs = self.messages.write().await;
            if let Some(log) = logs.get_mut(conversation_id) {
                for message in log.iter_mut() {
                    if message.receiver_id == user_id {
                        message.is_read = true;
                    }
                }
            }
        }

        let mut conversations = self.conversations.write().await;
        if let Some(conversation) = conversations
            .iter_mut()
            .find(|conversation| conversation.id == conversation_id)
        {
            conversation.unread_count = 0;
        }
        Ok(())
    }

    async fn insert_conversation(&self, conversation: Conversation) -> Result<()> {
        tracing::debug!(conversation_id = %conversation.id, "inserting conversation");
        self.conversations.write().await.insert(0, conversation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentorlink_core::messaging::MessageKind;

    fn test_message(conversation_id: &str, content: &str) -> Message {
        Message {
            id: "msg-test".to_string(),
            conversation_id: conversation_id.to_string(),
            sender_id: "user1".to_string(),
            receiver_id: "mentor1".to_string(),
            content: content.to_string(),
            kind: MessageKind::Text,
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_read: false,
            sender_name: "김민수".to_string(),
            sender_avatar: "/korean-male-developer.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unknown_conversation_yields_empty_log() {
        let repo = InMemoryMessageRepository::new();
        assert!(repo.messages("nope").await.unwrap().is_empty());
        assert!(repo.find_conversation("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_updates_preview() {
        let repo = InMemoryMessageRepository::new();
        let before = repo.messages("1").await.unwrap().len();

        repo.append_message(test_message("1", "새 메시지"))
            .await
            .unwrap();

        let log = repo.messages("1").await.unwrap();
        assert_eq!(log.len(), before + 1);

        let conversation = repo.find_conversation("1").await.unwrap().unwrap();
        let preview = conversation.last_message.unwrap();
        assert_eq!(preview.content, "새 메시지");
        assert_eq!(conversation.updated_at, preview.timestamp);
    }

    #[tokio::test]
    async fn test_mark_as_read_flips_receiver_messages() {
        let repo = InMemoryMessageRepository::new();

        repo.mark_as_read("1", "user1").await.unwrap();

        let log = repo.messages("1").await.unwrap();
        assert!(
            log.iter()
                .filter(|m| m.receiver_id == "user1")
                .all(|m| m.is_read)
        );
        let conversation = repo.find_conversation("1").await.unwrap().unwrap();
        assert_eq!(conversation.unread_count, 0);
    }

    #[tokio::test]
    async fn test_new_conversation_goes_to_front() {
        let repo = InMemoryMessageRepository::new();
        let mut conversation = repo.find_conversation("1").await.unwrap().unwrap();
        conversation.id = "conv-new".to_string();
        conversation.last_message = None;

        repo.insert_conversation(conversation).await.unwrap();

        let conversations = repo.conversations().await.unwrap();
        assert_eq!(conversations[0].id, "conv-new");
    }
}
