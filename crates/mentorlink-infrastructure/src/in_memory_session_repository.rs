//! In-memory SessionRepository implementation.

use mentorlink_core::error::Result;
use mentorlink_core::session::{
    FavoriteMentor, LearningGoal, MentoringSession, SessionRepository, SessionStatus,
    seeded_favorites, seeded_goals, seeded_sessions,
};

/// Session-tracker repository backed by the seeded mock collections.
pub struct InMemorySessionRepository {
    sessions: Vec<MentoringSession>,
    goals: Vec<LearningGoal>,
    favorites: Vec<FavoriteMentor>,
}

impl InMemorySessionRepository {
    /// Creates a repository seeded with the default mock data.
    pub fn new() -> Self {
        Self {
            sessions: seeded_sessions(),
            goals: seeded_goals(),
            favorites: seeded_favorites(),
        }
    }

    /// Creates a repository over custom collections (for testing).
    pub fn with_data(
        sessions: Vec<MentoringSession>,
        goals: Vec<LearningGoal>,
        favorites: Vec<FavoriteMentor>,
    ) -> Self {
        Self {
            sessions,
            goals,
            favorites,
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn sessions_for_mentee(&self, mentee_id: &str) -> Result<Vec<MentoringSession>> {
        Ok(self
            .sessions
            .iter()
            .filter(|session| session.mentee_id == mentee_id)
            .cloned()
            .collect())
    }

    async fn upcoming_sessions(&self, mentee_id: &str) -> Result<Vec<MentoringSession>> {
        let mut upcoming: Vec<MentoringSession> = self
            .sessions
            .iter()
            .filter(|session| {
                session.mentee_id == mentee_id && session.status == SessionStatus::Scheduled
            })
            .cloned()
            .collect();
        // RFC 3339 timestamps in UTC sort chronologically as strings
        upcoming.sort_by(|a, b| a.scheduled_date.cmp(&b.scheduled_date));
        Ok(upcoming)
    }

    async fn recent_sessions(
        &self,
        mentee_id: &str,
        limit: usize,
    ) -> Result<Vec<MentoringSession>> {
        let mut recent: Vec<MentoringSession> = self
            .sessions
            .iter()
            .filter(|session| {
                session.mentee_id == mentee_id && session.status == SessionStatus::Completed
            })
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.scheduled_date.cmp(&a.scheduled_date));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn goals_for_mentee(&self, mentee_id: &str) -> Result<Vec<LearningGoal>> {
        Ok(self
            .goals
            .iter()
            .filter(|goal| goal.mentee_id == mentee_id)
            .cloned()
            .collect())
    }

    async fn favorites_for_mentee(&self, mentee_id: &str) -> Result<Vec<FavoriteMentor>> {
        Ok(self
            .favorites
            .iter()
            .filter(|favorite| favorite.mentee_id == mentee_id)
            .cloned()
            .collect())
    }
}
