//! Seeded onboarding checklist and culture articles.

use super::model::{
    CompanyCulture, CultureCategory, OnboardingTask, ResourceKind, TaskCategory, TaskPriority,
    TaskResource, TaskStatus,
};

/// Returns the seeded onboarding checklist.
///
/// The same checklist is served to every onboarding user in the mocked
/// system; per-user checklists are a storage concern this seed ignores.
pub fn seeded_tasks() -> Vec<OnboardingTask> {
    vec![
        OnboardingTask {
            id: "task1".to_string(),
            title: "Hanwha 회사 소개 영상 시청".to_string(),
            description: "Hanwha의 역사, 비전, 핵심 가치에 대해 학습합니다".to_string(),
            category: TaskCategory::Culture,
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            estimated_minutes: 30,
            due_date: None,
            completed_date: Some("2024-01-15".to_string()),
            resources: vec![TaskResource {
                kind: ResourceKind::Video,
                title: "Hanwha 회사 소개".to_string(),
                url: "/videos/company-intro".to_string(),
            }],
        },
        OnboardingTask {
            id: "task2".to_string(),
            title: "IT 계정 설정 및 보안 교육".to_string(),
            description: "사내 시스템 접근을 위한 계정 설정과 보안 정책 학습".to_string(),
            category: TaskCategory::Setup,
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            estimated_minutes: 45,
            due_date: None,
            completed_date: Some("2024-01-16".to_string()),
            resources: vec![TaskResource {
                kind: ResourceKind::Document,
                title: "IT 보안 가이드".to_string(),
                url: "/docs/security-guide".to_string(),
            }],
        },
        OnboardingTask {
            id: "task3".to_string(),
            title: "직속 상사와 1:1 미팅".to_string(),
            description: "팀 소개 및 업무 목표 설정을 위한 첫 미팅".to_string(),
            category: TaskCategory::Meeting,
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            estimated_minutes: 60,
            due_date: Some("2024-01-20".to_string()),
            completed_date: None,
            resources: Vec::new(),
        },
        OnboardingTask {
            id: "task4".to_string(),
            title: "사내 복리후생 안내".to_string(),
            description: "건강보험, 휴가제도, 교육지원 등 복리후생 제도 학습".to_string(),
            category: TaskCategory::Documentation,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            estimated_minutes: 20,
            due_date: Some("2024-01-22".to_string()),
            completed_date: None,
            resources: vec![TaskResource {
                kind: ResourceKind::Document,
                title: "복리후생 가이드".to_string(),
                url: "/docs/benefits".to_string(),
            }],
        },
        OnboardingTask {
            id: "task5".to_string(),
            title: "팀 소개 및 동료 만나기".to_string(),
            description: "팀원들과의 소개 시간 및 업무 협업 방식 이해".to_string(),
            category: TaskCategory::Meeting,
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            estimated_minutes: 90,
            due_date: Some("2024-01-25".to_string()),
            completed_date: None,
            resources: Vec::new(),
        },
        OnboardingTask {
            id: "task6".to_string(),
            title: "업무 프로세스 교육".to_string(),
            description: "부서별 업무 프로세스 및 도구 사용법 학습".to_string(),
            category: TaskCategory::Training,
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            estimated_minutes: 120,
            due_date: Some("2024-01-30".to_string()),
            completed_date: None,
            resources: Vec::new(),
        },
    ]
}

/// Returns the seeded company-culture articles.
pub fn seeded_culture_articles() -> Vec<CompanyCulture> {
    vec![
        CompanyCulture {
            id: "culture1".to_string(),
            title: "Hanwha 핵심 가치".to_string(),
            description: "도전, 헌신, 정도경영의 핵심 가치 이해".to_string(),
            category: CultureCategory::Values,
            content: "Hanwha는 도전 정신, 헌신적 자세, 정도경영을 통해 지속가능한 성장을 추구합니다...".to_string(),
            read_time_minutes: 5,
            is_required: true,
            completed: true,
        },
        CompanyCulture {
            id: "culture2".to_string(),
            title: "조직문화 및 소통 방식".to_string(),
            description: "수평적 소통문화와 협업 방식에 대한 이해".to_string(),
            category: CultureCategory::Values,
            content: "Hanwha는 열린 소통과 상호 존중을 바탕으로 한 협업 문화를 지향합니다...".to_string(),
            read_time_minutes: 7,
            is_required: true,
            completed: false,
        },
        CompanyCulture {
            id: "culture3".to_string(),
            title: "인사 정책 및 평가 제도".to_string(),
            description: "성과 평가, 승진, 교육 기회에 대한 안내".to_string(),
            category: CultureCategory::Policies,
            content: "공정하고 투명한 평가 시스템을 통해 개인의 성장과 회사의 발전을 함께 추구합니다...".to_string(),
            read_time_minutes: 10,
            is_required: true,
            completed: false,
        },
        CompanyCulture {
            id: "culture4".to_string(),
            title: "Hanwha의 역사와 미래 비전".to_string(),
            description: "회사의 성장 과정과 미래 전략 방향".to_string(),
            category: CultureCategory::History,
            content: "1952년 창립 이후 70년간 지속적인 혁신과 도전으로 글로벌 기업으로 성장해왔습니다...".to_string(),
            read_time_minutes: 8,
            is_required: false,
            completed: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_checklist_counts() {
        let tasks = seeded_tasks();
        assert_eq!(tasks.len(), 6);
        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        assert_eq!(completed, 2);
    }

    #[test]
    fn test_completed_tasks_have_completion_dates() {
        for task in seeded_tasks() {
            match task.status {
                TaskStatus::Completed => assert!(task.completed_date.is_some()),
                _ => assert!(task.completed_date.is_none()),
            }
        }
    }

    #[test]
    fn test_seeded_culture_articles() {
        let articles = seeded_culture_articles();
        assert_eq!(articles.len(), 4);
        assert_eq!(articles.iter().filter(|a| a.is_required).count(), 3);
    }
}
