//! TOML-based ProfileStore implementation.
//!
//! Persists the single logged-in-user record under the platform config
//! directory (`~/.config/mentorlink/profile.toml`). This is the only
//! persistent state the application keeps.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use mentorlink_core::error::{MentorlinkError, Result};
use mentorlink_core::user::{ProfileStore, UserProfile};

use crate::storage::AtomicTomlFile;

/// Root document of the profile file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfileDocument {
    /// The logged-in user, absent when nobody is logged in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_profile: Option<UserProfile>,
}

/// Profile store backed by a TOML file.
pub struct TomlProfileRepository {
    file: AtomicTomlFile<ProfileDocument>,
}

impl TomlProfileRepository {
    /// Creates a store at the default path
    /// (`~/.config/mentorlink/profile.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(Self::default_profile_path()?))
    }

    /// Creates a store at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    fn default_profile_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("mentorlink").join("profile.toml"))
            .ok_or_else(|| MentorlinkError::config("Cannot find config directory"))
    }
}

#[async_trait::async_trait]
impl ProfileStore for TomlProfileRepository {
    async fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.file.load()?.and_then(|doc| doc.user_profile))
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        tracing::debug!(user_id = %profile.id, "storing profile");
        self.file.save(&ProfileDocument {
            user_profile: Some(profile.clone()),
        })
    }

    async fn clear(&self) -> Result<()> {
        self.file.remove()
    }
}
