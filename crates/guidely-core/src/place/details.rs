use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Shared shape for restaurants, cafes, and monuments. These categories carry
/// a pre-assigned price tier; only monuments may use tier 0 (free admission).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VenueDetails {
    pub name: String,
    /// Price tier 1-4 (0 for free monuments). `None` matches any budget.
    pub price_level: Option<u8>,
    /// Free-text open status, e.g. "Open until 11pm".
    pub open_status: Option<String>,
}

/// Hotel-specific shape. Hotels carry a raw nightly rate instead of a tier;
/// the tier is derived from the canonical thresholds in [`crate::pricing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HotelDetails {
    pub hotel_name: String,
    /// Nightly rate. `None` matches any budget.
    pub price_per_night: Option<f64>,
    /// Currency tag for the nightly rate. Defaults to EGP at display time.
    pub currency: Option<String>,
    pub booking_ref: Option<String>,
}

/// Per-category details. The variant *is* the category: a place cannot carry
/// hotel fields under a restaurant tag or vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum PlaceDetails {
    Restaurant(VenueDetails),
    Cafe(VenueDetails),
    Hotel(HotelDetails),
    Monument(VenueDetails),
}
