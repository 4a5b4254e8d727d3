//! Mentor repository trait.
//!
//! Defines the interface for mentor directory lookups.

use super::model::Mentor;
use crate::error::Result;

/// An abstract repository for reading the mentor directory.
///
/// This trait defines the contract for retrieving mentor profiles,
/// decoupling the query engine and services from the specific backing
/// store (seeded in-memory collection, database, remote API).
///
/// # Implementation Notes
///
/// Implementations must preserve the directory's seeded order: the query
/// engine guarantees order-preserving results and relies on `get_all`
/// returning a stable ordering.
#[async_trait::async_trait]
pub trait MentorRepository: Send + Sync {
    /// Retrieves the full mentor directory, in seeded order.
    async fn get_all(&self) -> Result<Vec<Mentor>>;

    /// Finds a mentor by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mentor))`: Mentor found
    /// - `Ok(None)`: No mentor with that id
    /// - `Err(MentorlinkError)`: Error if retrieval fails
    async fn find_by_id(&self, mentor_id: &str) -> Result<Option<Mentor>>;
}
