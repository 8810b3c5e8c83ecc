use serde::{Deserialize, Serialize};

use super::defaults;
use crate::place::Category;

/// Chat assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Category assumed when the conversation has not named one.
    pub default_category: Category,
    /// Budget tier applied when neither the utterance nor the conversation
    /// context constrains price.
    pub default_budget_tier: u8,
    /// Minimum rating (5-point scale) applied when unconstrained.
    pub default_min_rating: f64,
    /// Result set cap per assistant turn.
    pub max_results: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            default_category: defaults::DEFAULT_CATEGORY,
            default_budget_tier: defaults::DEFAULT_BUDGET_TIER,
            default_min_rating: defaults::DEFAULT_MIN_RATING,
            max_results: defaults::DEFAULT_MAX_RESULTS,
        }
    }
}
