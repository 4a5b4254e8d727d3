//! Session repository trait.
//!
//! Defines the interface for mentee-scoped session-tracker lookups.

use super::model::{FavoriteMentor, LearningGoal, MentoringSession};
use crate::error::Result;

/// An abstract repository for the session/booking tracker.
///
/// All lookups are scoped to a mentee identifier passed explicitly by the
/// caller; implementations never consult any ambient "current user" state.
#[async_trait::async_trait]
pub trait SessionRepository: Send + Sync {
    /// All sessions belonging to a mentee, in stored order.
    async fn sessions_for_mentee(&self, mentee_id: &str) -> Result<Vec<MentoringSession>>;

    /// Scheduled sessions for a mentee, soonest first.
    async fn upcoming_sessions(&self, mentee_id: &str) -> Result<Vec<MentoringSession>>;

    /// Completed sessions for a mentee, most recent first, capped at
    /// `limit`.
    async fn recent_sessions(&self, mentee_id: &str, limit: usize)
    -> Result<Vec<MentoringSession>>;

    /// Learning goals belonging to a mentee.
    async fn goals_for_mentee(&self, mentee_id: &str) -> Result<Vec<LearningGoal>>;

    /// Favorite-mentor bookmarks belonging to a mentee.
    async fn favorites_for_mentee(&self, mentee_id: &str) -> Result<Vec<FavoriteMentor>>;
}
