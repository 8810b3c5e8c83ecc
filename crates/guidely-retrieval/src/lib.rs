//! # guidely-retrieval
//!
//! The assistant pipeline: free text → intent + slots → merged conversation
//! context → structured filter (or free-text search) → ranked results.
//!
//! The intent detector is a pure function over one utterance; conversation
//! state lives in the caller's [`ConversationContext`]. The filter engine is
//! total: unknown categories and missing fields degrade to empty or
//! permissive results, never errors.
//!
//! [`ConversationContext`]: guidely_core::models::ConversationContext

pub mod engine;
pub mod filter;
pub mod intent;

pub use engine::{AssistantEngine, Reply};
pub use intent::IntentDetector;
