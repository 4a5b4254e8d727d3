//! Chat assistant domain module.
//!
//! The assistant ("H-Link") is a rule-based responder: an ordered keyword
//! decision list classifies each utterance into one of a fixed set of
//! intents, and every intent maps to a canned multi-paragraph reply plus
//! follow-up suggestion chips. Classification is single-turn and stateless.
//!
//! # Module Structure
//!
//! - `message`: Conversation message model (`ChatMessage`, `ChatSender`)
//! - `intent`: Keyword decision list (`Intent`, `classify`)
//! - `responder`: Canned reply templates (`respond`, `greeting`)

pub mod intent;
pub mod message;
pub mod responder;

pub use intent::{Intent, classify};
pub use message::{ChatMessage, ChatSender};
pub use responder::{BotReply, greeting, respond};
