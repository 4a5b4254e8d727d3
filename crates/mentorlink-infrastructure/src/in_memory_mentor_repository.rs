//! In-memory MentorRepository implementation.

use mentorlink_core::error::Result;
use mentorlink_core::mentor::{Mentor, MentorRepository, seeded_mentors};

/// Mentor repository backed by the seeded in-memory directory.
///
/// The directory is read-only, so the collection is held directly; lookups
/// clone matching records. Seeded order is preserved, which the query
/// engine relies on.
pub struct InMemoryMentorRepository {
    mentors: Vec<Mentor>,
}

impl InMemoryMentorRepository {
    /// Creates a repository seeded with the default directory.
    pub fn new() -> Self {
        Self::with_mentors(seeded_mentors().to_vec())
    }

    /// Creates a repository over a custom collection (for testing).
    pub fn with_mentors(mentors: Vec<Mentor>) -> Self {
        Self { mentors }
    }
}

impl Default for InMemoryMentorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MentorRepository for InMemoryMentorRepository {
    async fn get_all(&self) -> Result<Vec<Mentor>> {
        Ok(self.mentors.clone())
    }

    async fn find_by_id(&self, mentor_id: &str) -> Result<Option<Mentor>> {
        Ok(self
            .mentors
            .iter()
            .find(|mentor| mentor.id == mentor_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_all_returns_seeded_order() {
        let repo = InMemoryMentorRepository::new();
        let mentors = repo.get_all().await.unwrap();
        assert_eq!(mentors, seeded_mentors().to_vec());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryMentorRepository::new();

        let mentor = repo.find_by_id("3").await.unwrap().unwrap();
        assert_eq!(mentor.name, "이창호");

        assert!(repo.find_by_id("999").await.unwrap().is_none());
    }
}
