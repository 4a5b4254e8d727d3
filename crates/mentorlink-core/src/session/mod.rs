//! Mentoring session domain module.
//!
//! Covers the session/booking tracker: scheduled mentoring sessions with
//! their lifecycle status and feedback, the mentee's learning goals, and
//! favorited mentors.
//!
//! # Module Structure
//!
//! - `model`: Session, learning goal and favorite models
//! - `repository`: Repository trait for mentee-scoped lookups
//! - `preset`: Seeded mock data

mod model;
mod preset;
mod repository;

// Re-export public API
pub use model::{
    FavoriteMentor, GoalStatus, LearningGoal, MentoringSession, SessionFeedback, SessionStatus,
};
pub use preset::{seeded_favorites, seeded_goals, seeded_sessions};
pub use repository::SessionRepository;
