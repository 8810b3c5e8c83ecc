//! Intent taxonomy for the chat assistant.
//!
//! The taxonomy is the closed set of utterance classifications; the detection
//! rules that map free text onto it live in `guidely-retrieval`.

mod taxonomy;

pub use taxonomy::Intent;
