//! Onboarding checklist domain models.

use serde::{Deserialize, Serialize};

/// Category of an onboarding task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Documentation,
    Training,
    Setup,
    Culture,
    Meeting,
}

/// Completion status of an onboarding task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// Priority of an onboarding task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// Kind of learning resource attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Document,
    Video,
    Link,
    Quiz,
}

/// A learning resource attached to an onboarding task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResource {
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
}

/// One item on the onboarding checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingTask {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Estimated effort in minutes.
    pub estimated_minutes: u32,
    /// Due date (YYYY-MM-DD), when one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Completion date (YYYY-MM-DD), stamped when the task completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    /// Attached learning resources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<TaskResource>,
}

/// Per-week breakdown of checklist completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    pub week: u32,
    pub tasks_completed: u32,
    pub total_tasks: u32,
}

/// Computed onboarding progress for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProgress {
    pub user_id: String,
    /// Date onboarding started (YYYY-MM-DD).
    pub start_date: String,
    pub current_week: u32,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    /// Overall completion percentage, rounded to the nearest integer.
    pub overall_progress: u8,
    pub weekly_progress: Vec<WeeklyProgress>,
}

/// Category of a company-culture article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CultureCategory {
    Values,
    Policies,
    Benefits,
    History,
}

/// A company-culture article offered during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCulture {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: CultureCategory,
    pub content: String,
    /// Estimated reading time in minutes.
    pub read_time_minutes: u32,
    pub is_required: bool,
    pub completed: bool,
}
