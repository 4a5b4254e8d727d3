//! Directory query service.
//!
//! Composes the two pure engine operations over the mentor repository:
//! free-text search narrows the full directory first, then the structured
//! filter set narrows further. Both run from the full collection on every
//! call; the directory is small and static, so nothing is cached.

use std::sync::Arc;

use mentorlink_core::directory::{SearchFilters, filter_mentors, search_mentors};
use mentorlink_core::error::Result;
use mentorlink_core::mentor::{Mentor, MentorRepository};

/// Service for querying the mentor directory.
pub struct DirectoryService {
    mentors: Arc<dyn MentorRepository>,
}

impl DirectoryService {
    /// Creates a new `DirectoryService` over a mentor repository.
    pub fn new(mentors: Arc<dyn MentorRepository>) -> Self {
        Self { mentors }
    }

    /// Runs a directory query: search first, then filter.
    ///
    /// Query and filters are independent - a blank query with active
    /// filters (or the reverse) works, and an empty result is a valid
    /// outcome, not an error.
    pub async fn query(&self, query: &str, filters: &SearchFilters) -> Result<Vec<Mentor>> {
        let directory = self.mentors.get_all().await?;
        let searched = search_mentors(query, &directory);
        let results = filter_mentors(&searched, filters);
        tracing::debug!(
            query,
            searched = searched.len(),
            results = results.len(),
            "directory query"
        );
        Ok(results)
    }

    /// Looks up a single mentor profile.
    pub async fn find_mentor(&self, mentor_id: &str) -> Result<Option<Mentor>> {
        self.mentors.find_by_id(mentor_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentorlink_infrastructure::InMemoryMentorRepository;

    fn service() -> DirectoryService {
        DirectoryService::new(Arc::new(InMemoryMentorRepository::new()))
    }

    #[tokio::test]
    async fn test_blank_query_with_no_filters_returns_everyone() {
        let results = service()
            .query("", &SearchFilters::default())
            .await
            .unwrap();
        assert_eq!(results.len(), 6);
    }

    #[tokio::test]
    async fn test_search_and_filter_compose() {
        let filters = SearchFilters {
            price_range: (0, 90_000),
            ..SearchFilters::default()
        };
        let results = service().query("네이버", &filters).await.unwrap();
        // 네이버 matches mentors 1 and 6; the price cap drops mentor 6
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[tokio::test]
    async fn test_empty_result_is_not_an_error() {
        let results = service()
            .query("없는검색어", &SearchFilters::default())
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_find_mentor() {
        let mentor = service().find_mentor("4").await.unwrap().unwrap();
        assert_eq!(mentor.name, "정수연");
        assert!(service().find_mentor("nope").await.unwrap().is_none());
    }
}
