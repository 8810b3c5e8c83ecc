use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::place::Category;

/// A fully or partially specified filter tuple. Optional members absent from
/// the tuple match everything; missing fields on a place side default to
/// matching rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilterCriteria {
    pub category: Category,
    /// Price tier 0-4. For hotels, 4 means "no upper bound". For monuments,
    /// 0 means free-only (exact match, not the bottom of the range).
    pub budget_tier: u8,
    /// Minimum rating on the 5-point scale. Hotel ratings are normalized
    /// before comparison.
    pub min_rating: f64,
    /// Case-insensitive substring matched against the address.
    pub area: Option<String>,
    /// Case-insensitive substring matched against the description.
    /// Only meaningful for restaurants; ignored elsewhere.
    pub cuisine: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match everything in a category.
    pub fn any(category: Category) -> Self {
        Self {
            category,
            budget_tier: crate::constants::MAX_PRICE_TIER,
            min_rating: 0.0,
            area: None,
            cuisine: None,
        }
    }
}
