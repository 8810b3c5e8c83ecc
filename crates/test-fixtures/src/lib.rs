//! Test fixture loader and sample catalog builders shared across the
//! workspace's test suites.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use guidely_catalog::raw::RawPlaces;
use guidely_catalog::Catalog;
use guidely_core::place::{HotelDetails, Place, PlaceDetails, VenueDetails};

/// Root directory of the fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find the crate.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("crates/test-fixtures/fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/fixtures from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("crates/test-fixtures/fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The standard sample catalog: 5 restaurants, 3 cafes, 4 hotels,
/// 4 monuments, with prices and ratings straddling every tier boundary.
pub fn sample_catalog() -> Catalog {
    let raw: RawPlaces = load_fixture("places.json");
    Catalog::from_raw(raw).expect("places.json fixture has duplicate ids")
}

/// A minimal venue-shaped place for targeted unit tests.
pub fn venue_place(
    id: &str,
    details: fn(VenueDetails) -> PlaceDetails,
    name: &str,
    price_level: Option<u8>,
    rating: Option<f64>,
    address: &str,
    description: &str,
) -> Place {
    Place {
        id: id.to_string(),
        address: Some(address.to_string()),
        description: Some(description.to_string()),
        rating,
        review_count: None,
        image_ref: None,
        details: details(VenueDetails {
            name: name.to_string(),
            price_level,
            open_status: None,
        }),
    }
}

/// A minimal hotel-shaped place for targeted unit tests.
pub fn hotel_place(
    id: &str,
    name: &str,
    price_per_night: Option<f64>,
    rating: Option<f64>,
    address: &str,
) -> Place {
    Place {
        id: id.to_string(),
        address: Some(address.to_string()),
        description: None,
        rating,
        review_count: None,
        image_ref: None,
        details: PlaceDetails::Hotel(HotelDetails {
            hotel_name: name.to_string(),
            price_per_night,
            currency: Some("EGP".to_string()),
            booking_ref: None,
        }),
    }
}
