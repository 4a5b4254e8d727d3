//! Mentor directory query engine.
//!
//! Pure, order-preserving search and filtering over the mentor collection:
//! free-text search narrows first, then the structured filter set narrows
//! further. Both operations are re-evaluated from the full collection on
//! every change; the collection is small and static, so nothing is memoized.

pub mod engine;
pub mod filters;

pub use engine::{filter_mentors, search_mentors};
pub use filters::{DEFAULT_PRICE_RANGE, SearchFilters};
