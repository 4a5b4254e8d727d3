//! Seeded inbox data.
//!
//! Message timestamps are computed relative to "now" on first access so the
//! inbox always shows recent-looking activity.

use super::model::{Conversation, Message, MessageKind};
use chrono::{Duration, Utc};
use std::collections::HashMap;

fn minutes_ago(minutes: i64) -> String {
    (Utc::now() - Duration::minutes(minutes)).to_rfc3339()
}

/// Returns the seeded message logs, keyed by conversation id.
pub fn seeded_messages() -> HashMap<String, Vec<Message>> {
    let mut messages = HashMap::new();
    messages.insert(
        "1".to_string(),
        vec![
            Message {
                id: "msg1-1".to_string(),
                conversation_id: "1".to_string(),
                sender_id: "user1".to_string(),
                receiver_id: "mentor1".to_string(),
                content: "안녕하세요! 프론트엔드 개발을 배우고 싶어서 연락드렸습니다.".to_string(),
                kind: MessageKind::Text,
                timestamp: minutes_ago(60),
                is_read: true,
                sender_name: "김민수".to_string(),
                sender_avatar: "/korean-male-developer.png".to_string(),
            },
            Message {
                id: "msg1-2".to_string(),
                conversation_id: "1".to_string(),
                sender_id: "mentor1".to_string(),
                receiver_id: "user1".to_string(),
                content: "안녕하세요! 반갑습니다. 어떤 부분을 중점적으로 배우고 싶으신가요?".to_string(),
                kind: MessageKind::Text,
                timestamp: minutes_ago(50),
                is_read: true,
                sender_name: "이지영".to_string(),
                sender_avatar: "/korean-female-designer.png".to_string(),
            },
            Message {
                id: "msg1-3".to_string(),
                conversation_id: "1".to_string(),
                sender_id: "user1".to_string(),
                receiver_id: "mentor1".to_string(),
                content: "React와 TypeScript를 활용한 실무 프로젝트 경험을 쌓고 싶습니다.".to_string(),
                kind: MessageKind::Text,
                timestamp: minutes_ago(40),
                is_read: true,
                sender_name: "김민수".to_string(),
                sender_avatar: "/korean-male-developer.png".to_string(),
            },
            Message {
                id: "msg1-4".to_string(),
                conversation_id: "1".to_string(),
                sender_id: "mentor1".to_string(),
                receiver_id: "user1".to_string(),
                content: "안녕하세요! 프론트엔드 개발에 대해 궁금한 점이 있으시면 언제든 물어보세요.".to_string(),
                kind: MessageKind::Text,
                timestamp: minutes_ago(30),
                is_read: false,
                sender_name: "이지영".to_string(),
                sender_avatar: "/korean-female-designer.png".to_string(),
            },
        ],
    );
    messages.insert(
        "2".to_string(),
        vec![
            Message {
                id: "msg2-1".to_string(),
                conversation_id: "2".to_string(),
                sender_id: "mentor2".to_string(),
                receiver_id: "user1".to_string(),
                content: "안녕하세요! 창업에 관심이 있으시다고 들었습니다.".to_string(),
                kind: MessageKind::Text,
                timestamp: minutes_ago(180),
                is_read: true,
                sender_name: "박준호".to_string(),
                sender_avatar: "/korean-ceo.png".to_string(),
            },
            Message {
                id: "msg2-2".to_string(),
                conversation_id: "2".to_string(),
                sender_id: "user1".to_string(),
                receiver_id: "mentor2".to_string(),
                content: "네, 감사합니다! 다음 주에 시간 되실 때 한 번 더 상담받고 싶습니다.".to_string(),
                kind: MessageKind::Text,
                timestamp: minutes_ago(120),
                is_read: true,
                sender_name: "김민수".to_string(),
                sender_avatar: "/korean-male-developer.png".to_string(),
            },
        ],
    );
    messages
}

/// Returns the seeded conversation list, most recently active first.
///
/// Each conversation's preview is the last entry of its seeded message log.
pub fn seeded_conversations() -> Vec<Conversation> {
    let messages = seeded_messages();
    let last_of = |id: &str| messages.get(id).and_then(|log| log.last().cloned());

    vec![
        Conversation {
            id: "1".to_string(),
            participants: vec!["user1".to_string(), "mentor1".to_string()],
            participant_names: vec!["김민수".to_string(), "이지영".to_string()],
            participant_avatars: vec![
                "/korean-male-developer.png".to_string(),
                "/korean-female-designer.png".to_string(),
            ],
            last_message: last_of("1"),
            updated_at: minutes_ago(30),
            unread_count: 2,
        },
        Conversation {
            id: "2".to_string(),
            participants: vec!["user1".to_string(), "mentor2".to_string()],
            participant_names: vec!["김민수".to_string(), "박준호".to_string()],
            participant_avatars: vec![
                "/korean-male-developer.png".to_string(),
                "/korean-ceo.png".to_string(),
            ],
            last_message: last_of("2"),
            updated_at: minutes_ago(120),
            unread_count: 0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_conversations_have_previews() {
        let conversations = seeded_conversations();
        assert_eq!(conversations.len(), 2);
        for conversation in &conversations {
            let preview = conversation.last_message.as_ref().unwrap();
            assert_eq!(preview.conversation_id, conversation.id);
        }
    }

    #[test]
    fn test_seeded_logs_are_ordered_oldest_first() {
        for log in seeded_messages().values() {
            for pair in log.windows(2) {
                assert!(pair[0].timestamp <= pair[1].timestamp);
            }
        }
    }
}
