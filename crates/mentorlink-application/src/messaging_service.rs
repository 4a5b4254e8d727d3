//! Messaging inbox service.
//!
//! Orchestrates conversation and message operations over the message
//! repository. The acting user is always passed in explicitly; the service
//! never consults the session context.

use std::sync::Arc;

use mentorlink_core::error::Result;
use mentorlink_core::messaging::{Conversation, Message, MessageKind, MessageRepository};
use mentorlink_core::user::UserProfile;

/// Service for the direct-message inbox.
pub struct MessagingService {
    repository: Arc<dyn MessageRepository>,
}

impl MessagingService {
    /// Creates a new `MessagingService` over a message repository.
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// All conversations, most recently active first.
    pub async fn inbox(&self) -> Result<Vec<Conversation>> {
        self.repository.conversations().await
    }

    /// Looks up a single conversation.
    pub async fn conversation(&self, conversation_id: &str) -> Result<Option<Conversation>> {
        self.repository.find_conversation(conversation_id).await
    }

    /// The message log of a conversation, oldest first.
    pub async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        self.repository.messages(conversation_id).await
    }

    /// Sends a text message from `sender` into a conversation.
    ///
    /// The message is appended to the conversation's log and becomes the
    /// conversation preview. Returns the stored message.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        sender: &UserProfile,
        receiver_id: &str,
        content: &str,
    ) -> Result<Message> {
        let message = Message {
            id: format!("msg-{}", uuid::Uuid::new_v4()),
            conversation_id: conversation_id.to_string(),
            sender_id: sender.id.clone(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            kind: MessageKind::Text,
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_read: false,
            sender_name: sender.name.clone(),
            sender_avatar: sender.avatar.clone().unwrap_or_default(),
        };
        self.repository.append_message(message.clone()).await?;
        tracing::debug!(conversation_id, sender_id = %sender.id, "message sent");
        Ok(message)
    }

    /// Marks every message addressed to `user_id` in the conversation as
    /// read.
    pub async fn mark_as_read(&self, conversation_id: &str, user_id: &str) -> Result<()> {
        self.repository.mark_as_read(conversation_id, user_id).await
    }

    /// Starts a new conversation between a mentee and a mentor, inserted
    /// at the front of the inbox.
    pub async fn start_conversation(
        &self,
        mentor_id: &str,
        mentee_id: &str,
        mentor_name: &str,
        mentee_name: &str,
    ) -> Result<Conversation> {
        let conversation = Conversation {
            id: format!("conv-{}", uuid::Uuid::new_v4()),
            participants: vec![mentee_id.to_string(), mentor_id.to_string()],
            participant_names: vec![mentee_name.to_string(), mentor_name.to_string()],
            participant_avatars: Vec::new(),
            last_message: None,
            updated_at: chrono::Utc::now().to_rfc3339(),
            unread_count: 0,
        };
        self.repository
            .insert_conversation(conversation.clone())
            .await?;
        Ok(conversation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentorlink_core::user::UserRole;
    use mentorlink_infrastructure::InMemoryMessageRepository;

    fn sender() -> UserProfile {
        UserProfile {
            id: "user1".to_string(),
            name: "김민수".to_string(),
            email: "minsu.kim@example.com".to_string(),
            role: UserRole::Mentee,
            avatar: Some("/korean-male-developer.png".to_string()),
            expertise: None,
            bio: None,
        }
    }

    fn service() -> MessagingService {
        MessagingService::new(Arc::new(InMemoryMessageRepository::new()))
    }

    #[tokio::test]
    async fn test_seeded_inbox() {
        let inbox = service().inbox().await.unwrap();
        assert_eq!(inbox.len(), 2);
        assert_eq!(inbox[0].unread_count, 2);
    }

    #[tokio::test]
    async fn test_send_message_appends_and_previews() {
        let messaging = service();
        let message = messaging
            .send_message("1", &sender(), "mentor1", "멘토링 일정 조율 부탁드려요")
            .await
            .unwrap();

        let log = messaging.messages("1").await.unwrap();
        assert_eq!(log.last().unwrap(), &message);

        let conversation = messaging.conversation("1").await.unwrap().unwrap();
        assert_eq!(conversation.last_message.unwrap().id, message.id);
    }

    #[tokio::test]
    async fn test_mark_as_read_clears_unread_count() {
        let messaging = service();
        messaging.mark_as_read("1", "user1").await.unwrap();

        let conversation = messaging.conversation("1").await.unwrap().unwrap();
        assert_eq!(conversation.unread_count, 0);
    }

    #[tokio::test]
    async fn test_start_conversation_lands_at_the_front() {
        let messaging = service();
        let created = messaging
            .start_conversation("4", "user1", "정수연", "김민수")
            .await
            .unwrap();

        let inbox = messaging.inbox().await.unwrap();
        assert_eq!(inbox.len(), 3);
        assert_eq!(inbox[0].id, created.id);
        assert_eq!(inbox[0].participants, vec!["user1", "4"]);
        assert!(inbox[0].last_message.is_none());
    }

    #[tokio::test]
    async fn test_messages_for_unknown_conversation_are_empty() {
        assert!(service().messages("nope").await.unwrap().is_empty());
    }
}
