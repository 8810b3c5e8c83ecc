//! Property tests for the pricing classifier: the functions are total and
//! idempotent over arbitrary inputs, and tiers behave like an ordered scale.

use proptest::prelude::*;

use guidely_core::place::Category;
use guidely_core::pricing;

fn any_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    /// Amount classification always lands in 0-4 and is stable under
    /// repetition.
    #[test]
    fn amount_tiers_stay_in_range(category in any_category(), amount in any::<u32>()) {
        let tier = pricing::tier_for_amount(category, amount);
        prop_assert!(tier <= 4);
        prop_assert_eq!(tier, pricing::tier_for_amount(category, amount));
    }

    /// A bigger budget never classifies into a lower tier.
    #[test]
    fn amount_tiers_are_monotone(category in any_category(), a in any::<u32>(), b in any::<u32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            pricing::tier_for_amount(category, lo) <= pricing::tier_for_amount(category, hi)
        );
    }

    /// Hotel nightly rates classify into tiers 1-4, never 0.
    #[test]
    fn hotel_tiers_stay_in_range(rate in 0.0f64..1.0e9) {
        let tier = pricing::tier_for_hotel_price(rate);
        prop_assert!((1..=4).contains(&tier));
    }

    /// Labels exist for every `(category, tier)` pair, in-table or not, and
    /// repeated calls agree.
    #[test]
    fn labels_are_total_and_idempotent(category in any_category(), tier in any::<u8>()) {
        let range = pricing::range_label(category, tier);
        let label = pricing::tier_label(category, tier);
        prop_assert!(!range.is_empty());
        prop_assert!(!label.is_empty());
        prop_assert_eq!(range, pricing::range_label(category, tier));
        prop_assert_eq!(label, pricing::tier_label(category, tier));
    }
}
