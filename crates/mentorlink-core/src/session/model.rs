//! Mentoring session domain models.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a mentoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Feedback a mentee leaves after a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFeedback {
    /// Rating from 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Timestamp the feedback was left (RFC 3339 format).
    pub date: String,
}

/// A booked mentoring session between a mentor and a mentee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentoringSession {
    /// Unique identifier
    pub id: String,
    pub mentor_id: String,
    pub mentee_id: String,
    pub status: SessionStatus,
    /// Scheduled start time (RFC 3339 format).
    pub scheduled_date: String,
    /// Planned duration in minutes.
    pub duration_minutes: u32,
    /// Topic agreed for the session.
    pub topic: String,
    /// Free-form notes taken during or after the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Mentee feedback, present once the session is completed and rated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<SessionFeedback>,
    pub created_at: String,
    pub updated_at: String,
}

/// Status of a mentee's learning goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
}

/// A self-set learning goal tracked by a mentee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningGoal {
    /// Unique identifier
    pub id: String,
    pub mentee_id: String,
    pub title: String,
    pub description: String,
    /// Target completion date (YYYY-MM-DD).
    pub target_date: String,
    /// Progress percentage, 0-100.
    pub progress: u8,
    pub status: GoalStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// A mentor bookmarked by a mentee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMentor {
    /// Unique identifier
    pub id: String,
    pub mentee_id: String,
    pub mentor_id: String,
    pub added_at: String,
}
