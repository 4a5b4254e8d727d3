//! Mentor domain module.
//!
//! This module contains the mentor profile model, the repository interface,
//! and the seeded directory data.
//!
//! # Module Structure
//!
//! - `model`: Core mentor domain model (`Mentor`)
//! - `repository`: Repository trait for mentor lookup
//! - `preset`: Seeded mentor directory
//!
//! # Usage
//!
//! ```ignore
//! use mentorlink_core::mentor::{Mentor, MentorRepository, seeded_mentors};
//! ```

mod model;
mod preset;
mod repository;

// Re-export public API
pub use model::Mentor;
pub use preset::seeded_mentors;
pub use repository::MentorRepository;
