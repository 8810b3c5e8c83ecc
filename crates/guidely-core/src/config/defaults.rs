//! Named default values for config fields.

use crate::place::Category;

/// Category assumed when neither the utterance nor the conversation context
/// names one.
pub const DEFAULT_CATEGORY: Category = Category::Hotel;

/// Default budget tier when a conversation has not constrained price.
/// The maximum tier, i.e. no effective upper bound.
pub const DEFAULT_BUDGET_TIER: u8 = 4;

/// Default minimum rating (5-point scale) when unconstrained.
pub const DEFAULT_MIN_RATING: f64 = 3.0;

/// Maximum results returned by the assistant per turn.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default size of the recommendation list.
pub const DEFAULT_TOP_N: usize = 6;
