//! Configuration structs. Every field has a serde default so a partial TOML
//! file (or none at all) yields a working config.

mod assistant_config;
mod defaults;
mod recommend_config;

pub use assistant_config::AssistantConfig;
pub use defaults::*;
pub use recommend_config::RecommendConfig;

use serde::{Deserialize, Serialize};

use crate::errors::GuidelyResult;

/// Top-level configuration for the Guidely core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidelyConfig {
    pub assistant: AssistantConfig,
    pub recommend: RecommendConfig,
}

impl GuidelyConfig {
    /// Parse a config from TOML text. Missing sections and fields fall back
    /// to defaults.
    pub fn from_toml_str(text: &str) -> GuidelyResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
