//! Application services for MentorLink.
//!
//! Each service orchestrates one slice of the platform over the repository
//! traits defined in `mentorlink-core`: the directory service composes the
//! pure search/filter engine, the chat service owns the append-only
//! conversation log, and the auth service holds the session context that
//! frontends hydrate at startup.

pub mod auth_service;
pub mod chat_service;
pub mod directory_service;
pub mod messaging_service;
pub mod onboarding_service;

pub use auth_service::AuthService;
pub use chat_service::{ChatService, DEFAULT_TYPING_DELAY};
pub use directory_service::DirectoryService;
pub use messaging_service::MessagingService;
pub use onboarding_service::OnboardingService;
