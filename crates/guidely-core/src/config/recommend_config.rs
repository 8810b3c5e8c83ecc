use serde::{Deserialize, Serialize};

use super::defaults;
use crate::place::Category;

/// Recommendation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Size of the recommendation list.
    pub default_top_n: usize,
    /// Categories the user has marked as preferred; matching places get a
    /// flat score bonus.
    pub preferred_categories: Vec<Category>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
            preferred_categories: Vec::new(),
        }
    }
}
