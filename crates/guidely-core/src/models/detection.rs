use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::intent::Intent;
use crate::place::Category;

/// Output of the intent detector: one intent tag plus zero or more extracted
/// slots. Absent slots stay `None` so the caller can fall back to previously
/// accumulated conversation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Detection {
    pub intent: Intent,
    pub category: Option<Category>,
    /// Price tier 0-4.
    pub budget_level: Option<u8>,
    /// Minimum rating on the 5-point scale.
    pub rating_level: Option<f64>,
    pub area: Option<String>,
    pub cuisine: Option<String>,
}

impl Detection {
    /// The fallback detection: nothing matched, caller should run a free-text
    /// search instead of a structured filter.
    pub fn general() -> Self {
        Self {
            intent: Intent::General,
            category: None,
            budget_level: None,
            rating_level: None,
            area: None,
            cuisine: None,
        }
    }

    /// A conversational detection: intent only, all slots empty.
    pub fn conversational(intent: Intent) -> Self {
        Self {
            intent,
            ..Self::general()
        }
    }

    /// True when no structured slot was extracted.
    pub fn has_no_slots(&self) -> bool {
        self.category.is_none()
            && self.budget_level.is_none()
            && self.rating_level.is_none()
            && self.area.is_none()
            && self.cuisine.is_none()
    }
}
