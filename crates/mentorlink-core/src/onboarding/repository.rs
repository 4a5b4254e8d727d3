//! Onboarding repository trait.

use super::model::{CompanyCulture, OnboardingTask, TaskStatus};
use crate::error::Result;

/// An abstract repository for the onboarding checklist.
///
/// The checklist is the only seeded collection with a mutating operation:
/// task status updates. Culture articles are read-only.
#[async_trait::async_trait]
pub trait OnboardingRepository: Send + Sync {
    /// The checklist for a user, in seeded order.
    async fn tasks_for_user(&self, user_id: &str) -> Result<Vec<OnboardingTask>>;

    /// All company-culture articles.
    async fn culture_articles(&self) -> Result<Vec<CompanyCulture>>;

    /// Updates a task's status, stamping the completion date when the new
    /// status is [`TaskStatus::Completed`].
    ///
    /// # Returns
    ///
    /// - `Ok(Some(OnboardingTask))`: The updated task
    /// - `Ok(None)`: No task with that id
    async fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Option<OnboardingTask>>;
}
