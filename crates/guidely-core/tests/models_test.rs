use guidely_core::models::{BehaviorLog, SearchRecord};
use guidely_core::place::{Category, HotelDetails, Place, PlaceDetails, VenueDetails};

fn sample_hotel() -> Place {
    Place {
        id: "h1".to_string(),
        address: Some("Corniche El Nil, Garden City, Cairo".to_string()),
        description: Some("Nile-view rooms".to_string()),
        rating: Some(9.0),
        review_count: Some(812),
        image_ref: None,
        details: PlaceDetails::Hotel(HotelDetails {
            hotel_name: "Nile Grand".to_string(),
            price_per_night: Some(2400.0),
            currency: Some("EGP".to_string()),
            booking_ref: Some("https://example.com/nile-grand".to_string()),
        }),
    }
}

#[test]
fn place_serde_roundtrip_preserves_the_variant() {
    let hotel = sample_hotel();
    let json = serde_json::to_string(&hotel).unwrap();
    let back: Place = serde_json::from_str(&json).unwrap();
    assert_eq!(back.category(), Category::Hotel);
    assert_eq!(back.name(), "Nile Grand");
    assert_eq!(back.price_per_night(), Some(2400.0));
}

#[test]
fn place_details_serialize_as_tagged_union() {
    let monument = Place {
        id: "m1".to_string(),
        address: Some("Giza".to_string()),
        description: None,
        rating: Some(4.8),
        review_count: None,
        image_ref: None,
        details: PlaceDetails::Monument(VenueDetails {
            name: "Great Pyramid".to_string(),
            price_level: Some(2),
            open_status: Some("Open until 5pm".to_string()),
        }),
    };
    let value: serde_json::Value = serde_json::to_value(&monument).unwrap();
    assert_eq!(value["details"]["type"], "monument");
    assert_eq!(value["details"]["data"]["name"], "Great Pyramid");
}

#[test]
fn behavior_log_deserializes_from_a_sparse_blob() {
    // A first-session blob may omit any of the three members.
    let log: BehaviorLog = serde_json::from_str(r#"{"clicks": {"a": 3}}"#).unwrap();
    assert_eq!(log.clicks_for("a"), 3);
    assert!(log.views.is_empty());
    assert!(log.searches.is_empty());
}

#[test]
fn behavior_log_roundtrips_search_history() {
    let mut log = BehaviorLog::default();
    log.record_search(SearchRecord::now("koshary downtown"));
    let json = serde_json::to_string(&log).unwrap();
    let back: BehaviorLog = serde_json::from_str(&json).unwrap();
    assert_eq!(back.searches.len(), 1);
    assert_eq!(back.searches[0].query, "koshary downtown");
}
