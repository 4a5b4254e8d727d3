use std::sync::Arc;
use std::time::Duration;

use mentorlink_application::{AuthService, ChatService, DirectoryService, MessagingService};
use mentorlink_core::chat::ChatSender;
use mentorlink_core::directory::SearchFilters;
use mentorlink_core::user::{SignupRequest, UserRole};
use mentorlink_infrastructure::{
    InMemoryMentorRepository, InMemoryMessageRepository, TomlProfileRepository,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_directory_query_flow() {
    let directory = DirectoryService::new(Arc::new(InMemoryMentorRepository::new()));

    // Free-text search narrows, then filters narrow further
    let filters = SearchFilters {
        rating: 4.8,
        ..SearchFilters::default()
    };
    let results = directory.query("개발", &filters).await.unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|m| m.rating >= 4.8));

    // The seeded rating scenario: five of six mentors rate 4.8 or better
    let results = directory.query("", &filters).await.unwrap();
    assert_eq!(results.len(), 5);

    // The seeded price scenario: two mentors at 80,000 KRW/h or less
    let filters = SearchFilters {
        price_range: (0, 80_000),
        ..SearchFilters::default()
    };
    let results = directory.query("", &filters).await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_assistant_conversation_flow() {
    let chat = ChatService::with_typing_delay(Duration::ZERO);

    let greeting = chat.open("widget").await;
    assert_eq!(greeting.suggestions.len(), 4);

    // Recognized utterance gets the canned recommendation with 3 chips
    let reply = chat
        .send("widget", "프론트엔드 개발 멘토 추천해줘")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.suggestions.len(), 3);

    // Clicking a chip is just another utterance
    let chip = reply.suggestions[1].clone();
    let followup = chat.send("widget", &chip).await.unwrap().unwrap();
    assert_eq!(followup.sender, ChatSender::Bot);

    // Unrecognized input falls back with 4 chips
    let fallback = chat.send("widget", "오늘 날씨 어때").await.unwrap().unwrap();
    assert_eq!(fallback.suggestions.len(), 4);

    // The log grew strictly by appending: greeting + 3 exchanges
    let history = chat.history("widget").await;
    assert_eq!(history.len(), 7);
}

#[tokio::test]
async fn test_signup_then_message_a_mentor() {
    let temp_dir = TempDir::new().unwrap();
    let auth = AuthService::new(Arc::new(TomlProfileRepository::with_path(
        temp_dir.path().join("profile.toml"),
    )));
    let messaging = MessagingService::new(Arc::new(InMemoryMessageRepository::new()));

    let profile = auth
        .signup(SignupRequest {
            name: "신입사원".to_string(),
            email: "newbie@example.com".to_string(),
            password: "secret".to_string(),
            password_confirm: "secret".to_string(),
            role: UserRole::Mentee,
            expertise: None,
            bio: None,
        })
        .await
        .unwrap();

    // The acting user is passed explicitly; messaging never reads the
    // session context
    let conversation = messaging
        .start_conversation("1", &profile.id, "김민수", &profile.name)
        .await
        .unwrap();
    let sent = messaging
        .send_message(&conversation.id, &profile, "1", "멘토링 신청드립니다!")
        .await
        .unwrap();

    let log = messaging.messages(&conversation.id).await.unwrap();
    assert_eq!(log, vec![sent]);

    let inbox = messaging.inbox().await.unwrap();
    assert_eq!(inbox[0].id, conversation.id);
}
