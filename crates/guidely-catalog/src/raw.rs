//! Raw record shapes, matching the catalog JSON asset field-for-field.
//!
//! Hotels arrive with a different record shape than the other categories
//! (`hotel_id`/`hotel_name`/`price_per_night` instead of `id`/`name`/
//! `priceLevel`). The raw shapes exist only here; conversion into the tagged
//! [`Place`] union resolves the differences once, at composition time.

use serde::Deserialize;

use guidely_core::place::{HotelDetails, Place, PlaceDetails, VenueDetails};

/// The whole catalog asset: four category-keyed collections.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPlaces {
    pub restaurants: Vec<RawVenue>,
    pub cafes: Vec<RawVenue>,
    pub hotels: Vec<RawHotel>,
    pub monuments: Vec<RawVenue>,
}

/// Raw restaurant/cafe/monument record.
#[derive(Debug, Deserialize)]
pub struct RawVenue {
    pub id: serde_json::Value,
    pub name: String,
    pub rating: Option<f64>,
    #[serde(rename = "priceLevel")]
    pub price_level: Option<u8>,
    pub address: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl", alias = "image")]
    pub image_url: Option<String>,
    #[serde(rename = "openStatus")]
    pub open_status: Option<String>,
    #[serde(rename = "reviewCount", alias = "review_count")]
    pub review_count: Option<u32>,
}

/// Raw hotel record.
#[derive(Debug, Deserialize)]
pub struct RawHotel {
    pub hotel_id: serde_json::Value,
    pub hotel_name: String,
    /// 0-10 scale.
    pub rating: Option<f64>,
    pub price_per_night: Option<f64>,
    pub currency: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub image_1: Option<String>,
    pub booking_link: Option<String>,
    pub review_count: Option<u32>,
}

/// Ids arrive as strings or integers depending on the source spreadsheet.
fn id_to_string(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl RawVenue {
    /// Convert into a place under the caller-chosen venue variant. Taking the
    /// variant constructor keeps hotels out by type: `PlaceDetails::Hotel`
    /// wants `HotelDetails` and cannot be passed here.
    pub fn into_place(self, details: fn(VenueDetails) -> PlaceDetails) -> Place {
        let venue = VenueDetails {
            name: self.name,
            price_level: self.price_level,
            open_status: self.open_status,
        };
        Place {
            id: id_to_string(&self.id),
            address: self.address,
            description: self.description,
            rating: self.rating,
            review_count: self.review_count,
            image_ref: self.image_url,
            details: details(venue),
        }
    }
}

impl RawHotel {
    pub fn into_place(self) -> Place {
        Place {
            id: id_to_string(&self.hotel_id),
            address: self.address,
            description: self.description,
            rating: self.rating,
            review_count: self.review_count,
            image_ref: self.image_1,
            details: PlaceDetails::Hotel(HotelDetails {
                hotel_name: self.hotel_name,
                price_per_night: self.price_per_night,
                currency: self.currency,
                booking_ref: self.booking_link,
            }),
        }
    }
}
