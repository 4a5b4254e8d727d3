//! User profile and session-context contracts.
//!
//! The platform keeps exactly one piece of persistent state: the logged-in
//! user's profile record. The [`ProfileStore`] trait abstracts where that
//! record lives; the auth service hydrates it at startup and clears it on
//! logout. Core query and chat components never read this context - callers
//! pass the acting user's identifier explicitly.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Role of a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Mentor,
    Mentee,
}

/// The logged-in user's profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Data submitted on sign-up.
///
/// The password fields exist only for the confirmation check; nothing is
/// hashed or stored - there is no real authentication in this system.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub role: UserRole,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// An abstract store for the single logged-in-user record.
///
/// This is the platform's only persistence: one optional profile record,
/// hydrated on startup and cleared on logout.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Loads the stored profile, if a user is logged in.
    async fn load(&self) -> Result<Option<UserProfile>>;

    /// Stores the profile, replacing any existing record.
    async fn save(&self, profile: &UserProfile) -> Result<()>;

    /// Removes the stored record.
    async fn clear(&self) -> Result<()>;
}
