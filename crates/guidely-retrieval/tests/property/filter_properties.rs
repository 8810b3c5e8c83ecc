//! Property tests for the filter engine: order-of-results and
//! monotonicity guarantees hold for arbitrary catalogs, not just the
//! curated fixture.

use proptest::prelude::*;

use guidely_catalog::Catalog;
use guidely_core::models::FilterCriteria;
use guidely_core::place::{Category, Place, PlaceDetails};
use guidely_retrieval::filter;
use test_fixtures::{hotel_place, venue_place};

fn venue_rows() -> impl Strategy<Value = Vec<(Option<u8>, Option<f64>)>> {
    prop::collection::vec(
        (prop::option::of(0u8..=4), prop::option::of(0.0f64..=5.0)),
        0..24,
    )
}

fn hotel_rows() -> impl Strategy<Value = Vec<(Option<f64>, Option<f64>)>> {
    prop::collection::vec(
        (prop::option::of(0.0f64..=6000.0), prop::option::of(0.0f64..=10.0)),
        0..24,
    )
}

fn restaurant_catalog(rows: Vec<(Option<u8>, Option<f64>)>) -> Catalog {
    let places: Vec<Place> = rows
        .into_iter()
        .enumerate()
        .map(|(i, (price_level, rating))| {
            venue_place(
                &format!("r{i}"),
                PlaceDetails::Restaurant,
                &format!("Restaurant {i}"),
                price_level,
                rating,
                "Cairo",
                "generated venue",
            )
        })
        .collect();
    Catalog::from_places(places)
}

fn hotel_catalog(rows: Vec<(Option<f64>, Option<f64>)>) -> Catalog {
    let places: Vec<Place> = rows
        .into_iter()
        .enumerate()
        .map(|(i, (price, rating))| {
            hotel_place(&format!("h{i}"), &format!("Hotel {i}"), price, rating, "Cairo")
        })
        .collect();
    Catalog::from_places(places)
}

fn ids(places: &[&Place]) -> Vec<String> {
    places.iter().map(|p| p.id.clone()).collect()
}

proptest! {
    /// Every returned place individually satisfies the criteria check.
    #[test]
    fn results_satisfy_the_criteria(rows in venue_rows(), budget in 0u8..=4, min_rating in 0.0f64..=5.0) {
        let catalog = restaurant_catalog(rows);
        let criteria = FilterCriteria {
            category: Category::Restaurant,
            budget_tier: budget,
            min_rating,
            area: None,
            cuisine: None,
        };
        for place in filter::matching(&catalog, &criteria) {
            prop_assert_eq!(place.category(), Category::Restaurant);
            prop_assert!(filter::matches(place, &criteria));
        }
    }

    /// Results come back with native-scale ratings non-increasing.
    #[test]
    fn results_are_sorted_by_rating(rows in venue_rows()) {
        let catalog = restaurant_catalog(rows);
        let results = filter::matching(&catalog, &FilterCriteria::any(Category::Restaurant));
        for pair in results.windows(2) {
            prop_assert!(pair[0].rating_raw() >= pair[1].rating_raw());
        }
    }

    /// For non-hotel categories the budget is an upper bound: widening it
    /// never loses a result.
    #[test]
    fn widening_a_venue_budget_never_shrinks_results(rows in venue_rows(), budget in 1u8..=3) {
        let catalog = restaurant_catalog(rows);
        let mut criteria = FilterCriteria::any(Category::Restaurant);
        criteria.budget_tier = budget;
        let narrow = ids(&filter::matching(&catalog, &criteria));
        criteria.budget_tier = budget + 1;
        let wide = ids(&filter::matching(&catalog, &criteria));
        for id in &narrow {
            prop_assert!(wide.contains(id));
        }
    }

    /// Lowering the rating threshold never loses a result.
    #[test]
    fn lowering_min_rating_never_shrinks_results(rows in venue_rows(), min_rating in 0.0f64..=5.0) {
        let catalog = restaurant_catalog(rows);
        let mut criteria = FilterCriteria::any(Category::Restaurant);
        criteria.min_rating = min_rating;
        let strict = ids(&filter::matching(&catalog, &criteria));
        criteria.min_rating = min_rating / 2.0;
        let lax = ids(&filter::matching(&catalog, &criteria));
        for id in &strict {
            prop_assert!(lax.contains(id));
        }
    }

    /// The top hotel tier has no upper bound: with no rating floor it
    /// returns every hotel, whatever its nightly rate.
    #[test]
    fn top_hotel_tier_matches_every_hotel(rows in hotel_rows()) {
        let catalog = hotel_catalog(rows);
        let total = catalog.len();
        let results = filter::matching(&catalog, &FilterCriteria::any(Category::Hotel));
        prop_assert_eq!(results.len(), total);
    }

    /// Hotel bands partition the priced hotels: each priced hotel appears in
    /// exactly one of the tiers 1-3 or above the top threshold.
    #[test]
    fn hotel_bands_are_disjoint(rows in hotel_rows()) {
        let catalog = hotel_catalog(rows);
        let mut criteria = FilterCriteria::any(Category::Hotel);
        let mut seen: Vec<String> = Vec::new();
        for tier in 1u8..=3 {
            criteria.budget_tier = tier;
            for id in ids(&filter::matching(&catalog, &criteria)) {
                // A hotel without a recorded rate matches every band, so it
                // is exempt from disjointness.
                let priced = catalog.get(&id).and_then(|p| p.price_per_night()).is_some();
                if priced {
                    prop_assert!(!seen.contains(&id), "hotel {} in two bands", id);
                    seen.push(id);
                }
            }
        }
    }
}
