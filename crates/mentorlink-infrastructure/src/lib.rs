pub mod in_memory_mentor_repository;
pub mod in_memory_message_repository;
pub mod in_memory_onboarding_repository;
pub mod in_memory_session_repository;
pub mod storage;
pub mod toml_profile_repository;

pub use crate::in_memory_mentor_repository::InMemoryMentorRepository;
pub use crate::in_memory_message_repository::InMemoryMessageRepository;
pub use crate::in_memory_onboarding_repository::InMemoryOnboardingRepository;
pub use crate::in_memory_session_repository::InMemorySessionRepository;
pub use crate::toml_profile_repository::TomlProfileRepository;
