//! In-memory OnboardingRepository implementation.

use tokio::sync::RwLock;

use mentorlink_core::error::Result;
use mentorlink_core::onboarding::{
    CompanyCulture, OnboardingRepository, OnboardingTask, TaskStatus, seeded_culture_articles,
    seeded_tasks,
};

/// Onboarding repository backed by the seeded checklist.
///
/// Task status updates mutate the checklist in place; culture articles are
/// read-only. The mocked system serves the same checklist to every user.
pub struct InMemoryOnboardingRepository {
    tasks: RwLock<Vec<OnboardingTask>>,
    culture: Vec<CompanyCulture>,
}

impl InMemoryOnboardingRepository {
    /// Creates a repository seeded with the default checklist.
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(seeded_tasks()),
            culture: seeded_culture_articles(),
        }
    }

    /// Creates a repository over a custom checklist (for testing).
    pub fn with_tasks(tasks: Vec<OnboardingTask>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
            culture: seeded_culture_articles(),
        }
    }
}

impl Default for InMemoryOnboardingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl OnboardingRepository for InMemoryOnboardingRepository {
    async fn tasks_for_user(&self, _user_id: &str) -> Result<Vec<OnboardingTask>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn culture_articles(&self) -> Result<Vec<CompanyCulture>> {
        Ok(self.culture.clone())
    }

    async fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Option<OnboardingTask>> {
        let mut tasks = self.tasks.write().await;
        let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) else {
            return Ok(None);
        };

        task.status = status;
        if status == TaskStatus::Completed {
            task.completed_date = Some(chrono::Utc::now().format("%Y-%m-%d").to_string());
        }
        tracing::debug!(task_id, ?status, "updated onboarding task");
        Ok(Some(task.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_checklist_is_shared_across_users() {
        let repo = InMemoryOnboardingRepository::new();
        let a = repo.tasks_for_user("user1").await.unwrap();
        let b = repo.tasks_for_user("someone-else").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_completing_a_task_stamps_the_date() {
        let repo = InMemoryOnboardingRepository::new();

        let task = repo
            .update_task_status("task3", TaskStatus::Completed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.completed_date.is_some());

        // The update is visible on subsequent reads
        let tasks = repo.tasks_for_user("user1").await.unwrap();
        let stored = tasks.iter().find(|t| t.id == "task3").unwrap();
        assert_eq!(stored.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_non_completion_update_leaves_date_unset() {
        let repo = InMemoryOnboardingRepository::new();
        let task = repo
            .update_task_status("task4", TaskStatus::InProgress)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.completed_date.is_none());
    }

    #[tokio::test]
    async fn test_unknown_task_yields_none() {
        let repo = InMemoryOnboardingRepository::new();
        let updated = repo
            .update_task_status("nope", TaskStatus::Completed)
            .await
            .unwrap();
        assert!(updated.is_none());
    }
}
