//! # guidely-recommend
//!
//! Personalized ranking over the catalog. The scorer combines a place's
//! rating with the user's accumulated clicks and views; the tracker is the
//! write side, funnelling interactions into a [`guidely_core::IBehaviorStore`]
//! through read-modify-write updates.

pub mod scorer;
pub mod tracker;

pub use scorer::{RecommendationScorer, ScorerWeights};
pub use tracker::BehaviorTracker;
