//! Area gazetteer and cuisine vocabulary.
//!
//! Both lists are scanned in order and the first case-insensitive substring
//! match wins, so list order is part of the contract. Deployments can
//! override either list from TOML without recompiling.

use serde::Deserialize;

use guidely_core::errors::GuidelyResult;

/// Cairo neighborhoods recognized by the detector, in scan order.
pub const DEFAULT_AREAS: &[&str] = &[
    "Maadi",
    "Zamalek",
    "Downtown",
    "Giza",
    "Heliopolis",
    "Nasr City",
    "Mohandeseen",
    "Dokki",
    "Garden City",
    "New Cairo",
    "El Rehab",
    "6th of October",
    "Tahrir",
    "Khan el-Khalili",
    "Islamic Cairo",
    "Coptic Cairo",
];

/// Restaurant cuisines recognized by the detector, in scan order.
pub const DEFAULT_CUISINES: &[&str] = &[
    "Egyptian",
    "Middle Eastern",
    "Mediterranean",
    "Italian",
    "French",
    "Asian",
    "Japanese",
    "Chinese",
    "Indian",
    "American",
    "Fast Food",
    "Seafood",
    "Vegetarian",
    "International",
];

/// The detector's matching vocabulary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub areas: Vec<String>,
    pub cuisines: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            areas: DEFAULT_AREAS.iter().map(|s| s.to_string()).collect(),
            cuisines: DEFAULT_CUISINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// Load a vocabulary override from TOML text. Lists not present keep
    /// their defaults.
    pub fn from_toml_str(text: &str) -> GuidelyResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// First entry contained in `text` (already lowercased), in list order.
    /// Returns the canonical (original-case) entry.
    pub fn match_area(&self, text: &str) -> Option<&str> {
        self.areas
            .iter()
            .find(|area| text.contains(&area.to_lowercase()))
            .map(String::as_str)
    }

    /// Same scan for cuisines.
    pub fn match_cuisine(&self, text: &str) -> Option<&str> {
        self.cuisines
            .iter()
            .find(|cuisine| text.contains(&cuisine.to_lowercase()))
            .map(String::as_str)
    }
}
