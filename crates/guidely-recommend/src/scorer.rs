//! Multi-factor recommendation scorer.
//!
//! score = rating × w_rating + clicks × w_click + views × w_view
//!         (+ w_preferred when the place's category is a preferred one)
//!
//! Ratings enter on their native scale: a hotel's 10-point rating counts
//! roughly double a venue's 5-point one, giving hotels a head start in mixed
//! lists. Clicks outweigh views; enough interactions outrank any rating gap.

use serde::{Deserialize, Serialize};
use tracing::debug;

use guidely_catalog::Catalog;
use guidely_core::models::BehaviorLog;
use guidely_core::place::{Category, Place};

/// Scoring weights. The defaults put one click at half a rating point and
/// one view at a fifth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerWeights {
    pub rating: f64,
    pub click: f64,
    pub view: f64,
    /// Flat bonus for places in a preferred category.
    pub preferred_category: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            rating: 10.0,
            click: 5.0,
            view: 2.0,
            preferred_category: 15.0,
        }
    }
}

/// Stateless scorer: behavior data is passed in per call, so one scorer can
/// serve any number of sessions.
pub struct RecommendationScorer {
    weights: ScorerWeights,
    preferred: Vec<Category>,
}

impl RecommendationScorer {
    pub fn new(preferred: Vec<Category>) -> Self {
        Self {
            weights: ScorerWeights::default(),
            preferred,
        }
    }

    pub fn with_weights(preferred: Vec<Category>, weights: ScorerWeights) -> Self {
        Self { weights, preferred }
    }

    /// Score one place against the behavior log. A place nobody has touched
    /// scores on rating (and category preference) alone; a missing rating
    /// contributes zero.
    pub fn score(&self, place: &Place, log: &BehaviorLog) -> f64 {
        let mut score = place.rating_raw() * self.weights.rating;
        score += log.clicks_for(&place.id) as f64 * self.weights.click;
        score += log.views_for(&place.id) as f64 * self.weights.view;
        if self.preferred.contains(&place.category()) {
            score += self.weights.preferred_category;
        }
        score
    }

    /// The top `n` places across the whole catalog by descending score.
    /// Ties keep catalog order; `n` larger than the catalog returns
    /// everything.
    pub fn top<'a>(&self, catalog: &'a Catalog, log: &BehaviorLog, n: usize) -> Vec<&'a Place> {
        let mut scored: Vec<(&Place, f64)> = catalog
            .all()
            .iter()
            .map(|place| (place, self.score(place, log)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        debug!(candidates = scored.len(), n, "recommendations ranked");
        scored.into_iter().take(n).map(|(place, _)| place).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidely_core::place::{PlaceDetails, VenueDetails};

    fn restaurant(id: &str, rating: Option<f64>) -> Place {
        Place {
            id: id.to_string(),
            address: None,
            description: None,
            rating,
            review_count: None,
            image_ref: None,
            details: PlaceDetails::Restaurant(VenueDetails {
                name: format!("Restaurant {id}"),
                price_level: Some(2),
                open_status: None,
            }),
        }
    }

    #[test]
    fn untouched_place_scores_on_rating_alone() {
        let scorer = RecommendationScorer::new(Vec::new());
        let log = BehaviorLog::default();
        assert_eq!(scorer.score(&restaurant("a", Some(4.0)), &log), 40.0);
        assert_eq!(scorer.score(&restaurant("b", None), &log), 0.0);
    }

    #[test]
    fn clicks_outweigh_views() {
        let scorer = RecommendationScorer::new(Vec::new());
        let mut log = BehaviorLog::default();
        log.record_click("a");
        log.record_view("a");
        log.record_view("a");
        // 4.0 * 10 + 1 * 5 + 2 * 2
        assert_eq!(scorer.score(&restaurant("a", Some(4.0)), &log), 49.0);
    }

    #[test]
    fn preferred_category_adds_a_flat_bonus() {
        let scorer = RecommendationScorer::new(vec![Category::Restaurant]);
        let log = BehaviorLog::default();
        assert_eq!(scorer.score(&restaurant("a", Some(4.0)), &log), 55.0);
    }

    #[test]
    fn interactions_can_outrank_a_rating_gap() {
        let scorer = RecommendationScorer::new(Vec::new());
        let mut log = BehaviorLog::default();
        // 4.2-rated place with 3 clicks beats a 4.8-rated one untouched:
        // 42 + 15 > 48.
        for _ in 0..3 {
            log.record_click("low");
        }
        let low = restaurant("low", Some(4.2));
        let high = restaurant("high", Some(4.8));
        assert!(scorer.score(&low, &log) > scorer.score(&high, &log));
    }
}
