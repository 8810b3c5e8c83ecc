use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::details::{HotelDetails, PlaceDetails, VenueDetails};
use crate::constants::{HOTEL_RATING_SCALE, VENUE_RATING_SCALE};

/// A point of interest. Common fields live here; the per-category fields live
/// in the tagged [`PlaceDetails`] union, with accessor methods resolving the
/// field-name differences (hotels name/price/rate their records differently)
/// in one place instead of at every call site.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Place {
    /// Stable identifier, unique within the combined catalog.
    pub id: String,
    /// Free-text location string. The sole substrate for area matching.
    pub address: Option<String>,
    /// Display text, also searched for cuisine matching.
    pub description: Option<String>,
    /// Native-scale rating: 0-10 for hotels, 0-5 for everything else.
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub image_ref: Option<String>,
    /// Per-category fields.
    pub details: PlaceDetails,
}

impl Place {
    /// The category, derived from the details variant.
    pub fn category(&self) -> Category {
        match self.details {
            PlaceDetails::Restaurant(_) => Category::Restaurant,
            PlaceDetails::Cafe(_) => Category::Cafe,
            PlaceDetails::Hotel(_) => Category::Hotel,
            PlaceDetails::Monument(_) => Category::Monument,
        }
    }

    /// Display name, regardless of which raw field it came from.
    pub fn name(&self) -> &str {
        match &self.details {
            PlaceDetails::Restaurant(v) | PlaceDetails::Cafe(v) | PlaceDetails::Monument(v) => {
                &v.name
            }
            PlaceDetails::Hotel(h) => &h.hotel_name,
        }
    }

    fn venue(&self) -> Option<&VenueDetails> {
        match &self.details {
            PlaceDetails::Restaurant(v) | PlaceDetails::Cafe(v) | PlaceDetails::Monument(v) => {
                Some(v)
            }
            PlaceDetails::Hotel(_) => None,
        }
    }

    fn hotel(&self) -> Option<&HotelDetails> {
        match &self.details {
            PlaceDetails::Hotel(h) => Some(h),
            _ => None,
        }
    }

    /// Pre-assigned price tier. `None` for hotels (their tier is derived from
    /// the nightly rate) and for venues without one.
    pub fn price_level(&self) -> Option<u8> {
        self.venue().and_then(|v| v.price_level)
    }

    /// Raw nightly rate. `None` for non-hotels.
    pub fn price_per_night(&self) -> Option<f64> {
        self.hotel().and_then(|h| h.price_per_night)
    }

    pub fn open_status(&self) -> Option<&str> {
        self.venue().and_then(|v| v.open_status.as_deref())
    }

    pub fn booking_ref(&self) -> Option<&str> {
        self.hotel().and_then(|h| h.booking_ref.as_deref())
    }

    /// Native-scale rating, with missing ratings treated as 0.0.
    pub fn rating_raw(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Rating normalized to the 5-point scale. Hotel ratings (0-10) are
    /// halved; everything else is already on the 5-point scale. All
    /// cross-category rating comparisons must go through this.
    pub fn rating_normalized(&self) -> f64 {
        match self.details {
            PlaceDetails::Hotel(_) => {
                self.rating_raw() / (HOTEL_RATING_SCALE / VENUE_RATING_SCALE)
            }
            _ => self.rating_raw(),
        }
    }

    /// Short price string for display: "Free", "$".."$$$$" for tiered venues,
    /// "1500 EGP/night" for hotels, empty when nothing is known.
    pub fn price_display(&self) -> String {
        if let Some(h) = self.hotel() {
            return match h.price_per_night {
                Some(rate) => {
                    let currency = h.currency.as_deref().unwrap_or("EGP");
                    format!("{rate} {currency}/night")
                }
                None => String::new(),
            };
        }
        match self.price_level() {
            Some(0) => "Free".to_string(),
            Some(tier @ 1..=4) => "$".repeat(tier as usize),
            _ => String::new(),
        }
    }
}
