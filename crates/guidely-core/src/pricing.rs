//! Canonical pricing tables and the price/rating classifier.
//!
//! This is the single source of truth for the per-category tier thresholds.
//! The filter engine and the intent detector both import from here; keeping
//! one table avoids the silent drift that near-duplicate copies invite.
//!
//! Hotels are priced by raw nightly rate and their tier is *computed*;
//! every other category carries a pre-assigned tier, so the classifier is
//! identity there. All functions are total: out-of-table inputs degrade to a
//! generic label, never an error.

use crate::constants::MIN_PRICE_TIER;
use crate::place::Category;

/// Hotel nightly-rate thresholds in EGP. A rate below the first entry is
/// tier 1; at or above the last entry is tier 4.
pub const HOTEL_NIGHTLY_THRESHOLDS: [f64; 3] = [1200.0, 2000.0, 3000.0];

/// Derive a hotel's price tier from its nightly rate.
/// Boundary rates belong to the upper band: exactly 1200 is tier 2,
/// exactly 3000 is tier 4.
pub fn tier_for_hotel_price(rate: f64) -> u8 {
    if rate < HOTEL_NIGHTLY_THRESHOLDS[0] {
        1
    } else if rate < HOTEL_NIGHTLY_THRESHOLDS[1] {
        2
    } else if rate < HOTEL_NIGHTLY_THRESHOLDS[2] {
        3
    } else {
        4
    }
}

/// Per-category upper caps (inclusive) for tiers 1-3, used when a user names
/// an explicit amount ("under 500"). An amount above the last cap is tier 4.
pub fn amount_caps(category: Category) -> [u32; 3] {
    match category {
        Category::Restaurant => [200, 500, 1000],
        Category::Cafe => [100, 250, 500],
        Category::Hotel => [1200, 2000, 3000],
        Category::Monument => [100, 300, 500],
    }
}

/// Map an explicit budget amount to a tier. Unlike [`tier_for_hotel_price`],
/// the caps are inclusive ("under 1200" still means the budget band), and a
/// literal 0 for monuments means free-only.
pub fn tier_for_amount(category: Category, amount: u32) -> u8 {
    if category == Category::Monument && amount == 0 {
        return MIN_PRICE_TIER;
    }
    let caps = amount_caps(category);
    if amount <= caps[0] {
        1
    } else if amount <= caps[1] {
        2
    } else if amount <= caps[2] {
        3
    } else {
        4
    }
}

/// Human-readable price range for a `(category, tier)` pair, e.g. restaurants
/// tier 2 → "200-500 EGP". Tier 0 is "Free"; combinations outside the fixed
/// table fall back to "Level {tier}".
pub fn range_label(category: Category, tier: u8) -> String {
    let fixed = match (category, tier) {
        (_, 0) => Some("Free"),
        (Category::Restaurant, 1) => Some("Under 200 EGP"),
        (Category::Restaurant, 2) => Some("200-500 EGP"),
        (Category::Restaurant, 3) => Some("500-1000 EGP"),
        (Category::Restaurant, 4) => Some("Over 1000 EGP"),
        (Category::Cafe, 1) => Some("Under 100 EGP"),
        (Category::Cafe, 2) => Some("100-250 EGP"),
        (Category::Cafe, 3) => Some("250-500 EGP"),
        (Category::Cafe, 4) => Some("Over 500 EGP"),
        (Category::Hotel, 1) => Some("Under 1200 EGP"),
        (Category::Hotel, 2) => Some("1200-2000 EGP"),
        (Category::Hotel, 3) => Some("2000-3000 EGP"),
        (Category::Hotel, 4) => Some("Over 3000 EGP"),
        (Category::Monument, 1) => Some("Under 100 EGP"),
        (Category::Monument, 2) => Some("100-300 EGP"),
        (Category::Monument, 3) => Some("300-500 EGP"),
        (Category::Monument, 4) => Some("Over 500 EGP"),
        _ => None,
    };
    match fixed {
        Some(label) => label.to_string(),
        None => format!("Level {tier}"),
    }
}

/// Short qualitative label for a `(category, tier)` pair, e.g. restaurants
/// tier 3 → "Fine Dining". Same fallback policy as [`range_label`].
pub fn tier_label(category: Category, tier: u8) -> String {
    let fixed = match (category, tier) {
        (_, 0) => Some("Free"),
        (Category::Restaurant, 1) => Some("Budget"),
        (Category::Restaurant, 2) => Some("Casual"),
        (Category::Restaurant, 3) => Some("Fine Dining"),
        (Category::Restaurant, 4) => Some("Premium"),
        (Category::Cafe, 1) => Some("Basic"),
        (Category::Cafe, 2) => Some("Standard"),
        (Category::Cafe, 3) => Some("Premium"),
        (Category::Cafe, 4) => Some("Luxury"),
        (Category::Hotel, 1) => Some("Budget"),
        (Category::Hotel, 2) => Some("Standard"),
        (Category::Hotel, 3) => Some("Luxury"),
        (Category::Hotel, 4) => Some("Premium"),
        (Category::Monument, 1) => Some("Basic"),
        (Category::Monument, 2) => Some("Standard"),
        (Category::Monument, 3) => Some("Premium"),
        (Category::Monument, 4) => Some("VIP"),
        _ => None,
    };
    match fixed {
        Some(label) => label.to_string(),
        None => format!("Level {tier}"),
    }
}
