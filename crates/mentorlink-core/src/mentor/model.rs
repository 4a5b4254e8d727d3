//! Mentor domain model.
//!
//! Represents mentoring-capable employees listed in the directory.
//! Each mentor has a profile, bookable attributes, and rating history.

use serde::{Deserialize, Serialize};

/// A mentor profile listed in the directory.
///
/// Mentor records are statically seeded and never mutated: the directory
/// query engine only ever produces filtered copies of the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Role or title describing the mentor's position
    pub role: String,
    /// Company or affiliation shown on the profile card
    pub company: String,
    /// Years of experience, free text (e.g. "8년")
    pub experience: String,
    /// Average review rating, 0.0 to 5.0
    pub rating: f32,
    /// Number of completed mentoring sessions
    pub sessions: u32,
    /// Short tag list shown on the profile card
    pub tags: Vec<String>,
    /// Profile image reference
    pub image: String,
    /// Biography text
    pub bio: String,
    /// Expertise entries (skills) used by search and filtering
    pub expertise: Vec<String>,
    /// Hourly rate in KRW
    pub hourly_rate: u32,
    /// Availability slot labels (e.g. "평일 저녁")
    pub availability: Vec<String>,
    /// Spoken languages
    pub languages: Vec<String>,
    /// Location label
    pub location: String,
    /// Typical response-time label (e.g. "1시간 이내")
    pub response_time: String,
    /// Total number of reviews received
    pub total_reviews: u32,
    /// Date the mentor joined the platform (YYYY-MM-DD)
    pub joined_date: String,
}
