//! IntentDetector: classify one utterance and extract structured slots.

pub mod patterns;
pub mod rules;
pub mod vocab;

use tracing::debug;

use guidely_core::models::Detection;

pub use vocab::Vocabulary;

/// Stateless per call: `detect` is a pure function of the utterance. The
/// conversation's accumulated slots live in the caller's context, not here.
pub struct IntentDetector {
    vocab: Vocabulary,
}

impl IntentDetector {
    pub fn new() -> Self {
        Self {
            vocab: Vocabulary::default(),
        }
    }

    /// Use an overridden area/cuisine vocabulary.
    pub fn with_vocabulary(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    /// Run the cascade over one line of user input.
    pub fn detect(&self, text: &str) -> Detection {
        let input = text.to_lowercase();
        let mut detection = Detection::general();
        for rule in rules::CASCADE {
            let matched = (rule.apply)(&input, &mut detection, &self.vocab);
            if matched && rule.short_circuit {
                debug!(rule = rule.name, "short-circuit intent");
                return detection;
            }
        }
        debug!(intent = ?detection.intent, "detection complete");
        detection
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new()
    }
}
