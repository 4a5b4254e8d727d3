//! Auth session-context service.
//!
//! Holds the page-wide "current user" the frontends consult, backed by the
//! profile store. The context has an explicit lifecycle: [`AuthService::init`]
//! hydrates the stored record at startup, [`AuthService::logout`] tears it
//! down. There is no real authentication - login produces a mock profile,
//! and the only rejected input is a sign-up whose password confirmation
//! does not match.
//!
//! Core query and chat components never read this context; callers take
//! the acting user's id from here and pass it along explicitly.

use std::sync::Arc;

use tokio::sync::RwLock;

use mentorlink_core::error::{MentorlinkError, Result};
use mentorlink_core::user::{ProfileStore, SignupRequest, UserProfile, UserRole};

/// Session-context service for the logged-in user.
pub struct AuthService {
    store: Arc<dyn ProfileStore>,
    current: RwLock<Option<UserProfile>>,
}

impl AuthService {
    /// Creates a new `AuthService` over a profile store.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// Hydrates the session context from the store.
    ///
    /// Called once at startup; returns the restored profile if a user was
    /// logged in when the last session ended.
    pub async fn init(&self) -> Result<Option<UserProfile>> {
        let stored = self.store.load().await?;
        if let Some(ref profile) = stored {
            tracing::debug!(user_id = %profile.id, "session restored");
        }
        *self.current.write().await = stored.clone();
        Ok(stored)
    }

    /// The currently logged-in user, if any.
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.current.read().await.clone()
    }

    /// Logs in with the given credentials.
    ///
    /// Credentials are not verified - the mocked backend answers every
    /// login with the demo mentor profile under the supplied email.
    pub async fn login(&self, email: &str, _password: &str) -> Result<UserProfile> {
        let profile = UserProfile {
            id: "1".to_string(),
            name: "김민수".to_string(),
            email: email.to_string(),
            role: UserRole::Mentor,
            avatar: Some("/korean-male-developer.png".to_string()),
            expertise: Some("프론트엔드 개발".to_string()),
            bio: Some("8년차 시니어 개발자입니다.".to_string()),
        };
        self.store.save(&profile).await?;
        *self.current.write().await = Some(profile.clone());
        Ok(profile)
    }

    /// Signs up a new user and logs them in.
    ///
    /// The only user-facing failure path of the platform: a password
    /// confirmation mismatch is rejected synchronously and nothing is
    /// stored.
    pub async fn signup(&self, request: SignupRequest) -> Result<UserProfile> {
        if request.password != request.password_confirm {
            return Err(MentorlinkError::validation("비밀번호가 일치하지 않습니다."));
        }

        let profile = UserProfile {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            role: request.role,
            avatar: None,
            expertise: request.expertise,
            bio: request.bio,
        };
        self.store.save(&profile).await?;
        *self.current.write().await = Some(profile.clone());
        Ok(profile)
    }

    /// Logs out: clears the session context and the stored record.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear().await?;
        *self.current.write().await = None;
        Ok(())
    }
}
