//! Multi-criteria filter over the catalog.
//!
//! Every comparison has a default-pass or default-empty fallback: missing
//! optional fields match permissively, unknown category names produce empty
//! results, and nothing in here returns an error.

use guidely_catalog::Catalog;
use guidely_core::models::FilterCriteria;
use guidely_core::place::{Category, Place, PlaceDetails};
use guidely_core::pricing;

/// All catalog places matching the criteria, sorted by native-scale rating
/// descending. Callers wanting top-N truncate after the sort.
pub fn matching<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a Place> {
    let mut results: Vec<&Place> = catalog
        .by_category(criteria.category)
        .filter(|place| matches(place, criteria))
        .collect();
    results.sort_by(|a, b| {
        b.rating_raw()
            .partial_cmp(&a.rating_raw())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results
}

/// Filter by a loosely parsed category name. An unknown name yields an empty
/// result set, mirroring the graceful-degradation policy everywhere else.
pub fn matching_by_name<'a>(
    catalog: &'a Catalog,
    category_name: &str,
    budget_tier: u8,
    min_rating: f64,
) -> Vec<&'a Place> {
    match Category::parse_loose(category_name) {
        Some(category) => matching(
            catalog,
            &FilterCriteria {
                category,
                budget_tier,
                min_rating,
                area: None,
                cuisine: None,
            },
        ),
        None => Vec::new(),
    }
}

/// Criteria check for one place. Assumes the category already matched.
pub fn matches(place: &Place, criteria: &FilterCriteria) -> bool {
    budget_matches(place, criteria)
        && rating_matches(place, criteria)
        && area_matches(place, criteria)
        && cuisine_matches(place, criteria)
}

fn budget_matches(place: &Place, criteria: &FilterCriteria) -> bool {
    match &place.details {
        PlaceDetails::Hotel(_) => {
            // The top tier means "no upper bound": every hotel matches.
            if criteria.budget_tier >= 4 {
                return true;
            }
            match place.price_per_night() {
                // No rate on record: permissive.
                None => true,
                Some(rate) => pricing::tier_for_hotel_price(rate) == criteria.budget_tier,
            }
        }
        _ => match place.price_level() {
            // No tier on record: permissive.
            None => true,
            Some(level) => {
                // Free-only monument filtering is exact, not the bottom of
                // the range.
                if criteria.category == Category::Monument && criteria.budget_tier == 0 {
                    level == 0
                } else {
                    level <= criteria.budget_tier
                }
            }
        },
    }
}

fn rating_matches(place: &Place, criteria: &FilterCriteria) -> bool {
    // Normalized to the 5-point scale; raw hotel ratings never meet a
    // 5-point threshold directly.
    place.rating_normalized() >= criteria.min_rating
}

fn area_matches(place: &Place, criteria: &FilterCriteria) -> bool {
    match &criteria.area {
        None => true,
        Some(area) => place
            .address
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&area.to_lowercase()),
    }
}

fn cuisine_matches(place: &Place, criteria: &FilterCriteria) -> bool {
    // Cuisine is a restaurant-only criterion; for other categories it is
    // ignored rather than failing everything.
    if criteria.category != Category::Restaurant {
        return true;
    }
    match &criteria.cuisine {
        None => true,
        Some(cuisine) => place
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&cuisine.to_lowercase()),
    }
}
