//! Onboarding checklist domain module.
//!
//! The checklist new joiners work through: categorized tasks with status
//! and priority, company-culture reading material, and computed progress.
//!
//! # Module Structure
//!
//! - `model`: Task, resource, culture and progress models
//! - `repository`: Repository trait for checklist operations
//! - `preset`: Seeded checklist and culture articles

mod model;
mod preset;
mod repository;

// Re-export public API
pub use model::{
    CompanyCulture, CultureCategory, OnboardingProgress, OnboardingTask, ResourceKind,
    TaskCategory, TaskPriority, TaskResource, TaskStatus, WeeklyProgress,
};
pub use preset::{seeded_culture_articles, seeded_tasks};
pub use repository::OnboardingRepository;
