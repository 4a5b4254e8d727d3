//! Messaging inbox domain module.
//!
//! Direct conversations between mentors and mentees: a conversation list
//! with unread counts, and per-conversation ordered message logs.
//!
//! # Module Structure
//!
//! - `model`: Conversation and message models
//! - `repository`: Repository trait for inbox operations
//! - `preset`: Seeded mock conversations

mod model;
mod preset;
mod repository;

// Re-export public API
pub use model::{Conversation, Message, MessageKind};
pub use preset::{seeded_conversations, seeded_messages};
pub use repository::MessageRepository;
