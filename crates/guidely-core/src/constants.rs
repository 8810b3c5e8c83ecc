//! Workspace-wide constants.

/// Maximum number of search records kept in the behavior log.
/// Oldest entries are evicted first.
pub const SEARCH_HISTORY_CAP: usize = 20;

/// Rating scale for restaurants, cafes, and monuments.
pub const VENUE_RATING_SCALE: f64 = 5.0;

/// Rating scale for hotels. Hotel ratings must be divided by
/// `HOTEL_RATING_SCALE / VENUE_RATING_SCALE` before any cross-category
/// comparison.
pub const HOTEL_RATING_SCALE: f64 = 10.0;

/// Lowest price tier. Only monuments use it (free admission).
pub const MIN_PRICE_TIER: u8 = 0;

/// Highest price tier across all categories.
pub const MAX_PRICE_TIER: u8 = 4;
