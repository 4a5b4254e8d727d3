//! Seeded session-tracker data.

use super::model::{
    FavoriteMentor, GoalStatus, LearningGoal, MentoringSession, SessionFeedback, SessionStatus,
};

/// Returns the seeded mentoring sessions for the demo mentee.
pub fn seeded_sessions() -> Vec<MentoringSession> {
    vec![
        MentoringSession {
            id: "1".to_string(),
            mentor_id: "1".to_string(),
            mentee_id: "user1".to_string(),
            status: SessionStatus::Scheduled,
            scheduled_date: "2024-12-25T14:00:00Z".to_string(),
            duration_minutes: 60,
            topic: "React 컴포넌트 설계 패턴".to_string(),
            notes: None,
            feedback: None,
            created_at: "2024-12-20T10:00:00Z".to_string(),
            updated_at: "2024-12-20T10:00:00Z".to_string(),
        },
        MentoringSession {
            id: "2".to_string(),
            mentor_id: "2".to_string(),
            mentee_id: "user1".to_string(),
            status: SessionStatus::Completed,
            scheduled_date: "2024-12-18T16:00:00Z".to_string(),
            duration_minutes: 90,
            topic: "마케팅 전략 수립".to_string(),
            notes: Some("브랜드 포지셔닝과 타겟 고객 분석에 대해 논의했습니다.".to_string()),
            feedback: Some(SessionFeedback {
                rating: 5,
                comment: "매우 유익한 시간이었습니다. 구체적인 예시와 함께 설명해주셔서 이해하기 쉬웠어요.".to_string(),
                date: "2024-12-18T17:30:00Z".to_string(),
            }),
            created_at: "2024-12-15T09:00:00Z".to_string(),
            updated_at: "2024-12-18T17:30:00Z".to_string(),
        },
        MentoringSession {
            id: "3".to_string(),
            mentor_id: "3".to_string(),
            mentee_id: "user1".to_string(),
            status: SessionStatus::InProgress,
            scheduled_date: "2024-12-22T10:00:00Z".to_string(),
            duration_minutes: 120,
            topic: "스타트업 사업계획서 검토".to_string(),
            notes: None,
            feedback: None,
            created_at: "2024-12-19T14:00:00Z".to_string(),
            updated_at: "2024-12-22T10:00:00Z".to_string(),
        },
    ]
}

/// Returns the seeded learning goals for the demo mentee.
pub fn seeded_goals() -> Vec<LearningGoal> {
    vec![
        LearningGoal {
            id: "1".to_string(),
            mentee_id: "user1".to_string(),
            title: "React 마스터하기".to_string(),
            description: "React의 고급 패턴과 성능 최적화 기법을 익혀 실무에 적용할 수 있는 수준까지 도달하기".to_string(),
            target_date: "2025-03-01".to_string(),
            progress: 65,
            status: GoalStatus::Active,
            created_at: "2024-11-01T00:00:00Z".to_string(),
            updated_at: "2024-12-20T00:00:00Z".to_string(),
        },
        LearningGoal {
            id: "2".to_string(),
            mentee_id: "user1".to_string(),
            title: "개인 브랜딩 구축".to_string(),
            description: "SNS와 블로그를 통한 개인 브랜딩 전략 수립 및 실행".to_string(),
            target_date: "2025-02-15".to_string(),
            progress: 40,
            status: GoalStatus::Active,
            created_at: "2024-11-15T00:00:00Z".to_string(),
            updated_at: "2024-12-18T00:00:00Z".to_string(),
        },
        LearningGoal {
            id: "3".to_string(),
            mentee_id: "user1".to_string(),
            title: "창업 아이디어 구체화".to_string(),
            description: "AI 기반 서비스 아이디어를 구체화하고 MVP 개발 계획 수립".to_string(),
            target_date: "2025-04-01".to_string(),
            progress: 25,
            status: GoalStatus::Active,
            created_at: "2024-12-01T00:00:00Z".to_string(),
            updated_at: "2024-12-19T00:00:00Z".to_string(),
        },
    ]
}

/// Returns the seeded favorite-mentor bookmarks for the demo mentee.
pub fn seeded_favorites() -> Vec<FavoriteMentor> {
    vec![
        FavoriteMentor {
            id: "1".to_string(),
            mentee_id: "user1".to_string(),
            mentor_id: "1".to_string(),
            added_at: "2024-12-10T00:00:00Z".to_string(),
        },
        FavoriteMentor {
            id: "2".to_string(),
            mentee_id: "user1".to_string(),
            mentor_id: "4".to_string(),
            added_at: "2024-12-15T00:00:00Z".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sessions_belong_to_demo_mentee() {
        let sessions = seeded_sessions();
        assert_eq!(sessions.len(), 3);
        assert!(sessions.iter().all(|s| s.mentee_id == "user1"));
    }

    #[test]
    fn test_only_completed_session_carries_feedback() {
        for session in seeded_sessions() {
            match session.status {
                SessionStatus::Completed => assert!(session.feedback.is_some()),
                _ => assert!(session.feedback.is_none()),
            }
        }
    }
}
