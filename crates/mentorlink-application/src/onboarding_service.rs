//! Onboarding checklist service.
//!
//! Serves the checklist and culture articles and computes progress. The
//! schedule metadata (start date, current week, weekly breakdown) is part
//! of the mocked program definition, not derived from task state.

use std::sync::Arc;

use mentorlink_core::error::Result;
use mentorlink_core::onboarding::{
    CompanyCulture, OnboardingProgress, OnboardingRepository, OnboardingTask, TaskStatus,
    WeeklyProgress,
};

/// Start date of the mocked onboarding program (YYYY-MM-DD).
const PROGRAM_START_DATE: &str = "2024-01-15";

/// Week the mocked program currently sits in.
const PROGRAM_CURRENT_WEEK: u32 = 1;

/// Service for the onboarding checklist.
pub struct OnboardingService {
    repository: Arc<dyn OnboardingRepository>,
}

impl OnboardingService {
    /// Creates a new `OnboardingService` over an onboarding repository.
    pub fn new(repository: Arc<dyn OnboardingRepository>) -> Self {
        Self { repository }
    }

    /// The checklist for a user.
    pub async fn checklist(&self, user_id: &str) -> Result<Vec<OnboardingTask>> {
        self.repository.tasks_for_user(user_id).await
    }

    /// All company-culture articles.
    pub async fn culture(&self) -> Result<Vec<CompanyCulture>> {
        self.repository.culture_articles().await
    }

    /// Computes onboarding progress for a user from the current checklist
    /// state.
    pub async fn progress_for(&self, user_id: &str) -> Result<OnboardingProgress> {
        let tasks = self.repository.tasks_for_user(user_id).await?;
        let total_tasks = tasks.len() as u32;
        let completed_tasks = tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count() as u32;
        let overall_progress = if total_tasks == 0 {
            0
        } else {
            ((completed_tasks as f64 / total_tasks as f64) * 100.0).round() as u8
        };

        Ok(OnboardingProgress {
            user_id: user_id.to_string(),
            start_date: PROGRAM_START_DATE.to_string(),
            current_week: PROGRAM_CURRENT_WEEK,
            total_tasks,
            completed_tasks,
            overall_progress,
            weekly_progress: vec![
                WeeklyProgress {
                    week: 1,
                    tasks_completed: 2,
                    total_tasks: 3,
                },
                WeeklyProgress {
                    week: 2,
                    tasks_completed: 0,
                    total_tasks: 2,
                },
                WeeklyProgress {
                    week: 3,
                    tasks_completed: 0,
                    total_tasks: 1,
                },
            ],
        })
    }

    /// Updates a task's status.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(OnboardingTask))`: The updated task
    /// - `Ok(None)`: No task with that id
    pub async fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Option<OnboardingTask>> {
        self.repository.update_task_status(task_id, status).await
    }
}
