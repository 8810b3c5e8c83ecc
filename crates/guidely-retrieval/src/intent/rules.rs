//! The ordered detection cascade.
//!
//! Each rule is a data object: a name, a short-circuit flag, and an apply
//! function that inspects the (lowercased) utterance and mutates the
//! in-progress [`Detection`]. Later rules may override what earlier rules
//! set — a direct category noun beats an inferred need, an explicit amount
//! beats a qualitative budget word — so the order of [`CASCADE`] is part of
//! the contract and is unit-tested rule by rule.
//!
//! Short-circuit rules return the detection as-is: no slot extraction happens
//! for a greeting even if budget or category words appear later in the input.

use guidely_core::intent::Intent;
use guidely_core::models::Detection;
use guidely_core::place::Category;
use guidely_core::pricing;

use super::patterns as pat;
use super::vocab::Vocabulary;

/// One detection rule. `apply` returns true when the rule matched.
pub struct Rule {
    pub name: &'static str,
    pub short_circuit: bool,
    pub apply: fn(&str, &mut Detection, &Vocabulary) -> bool,
}

/// The cascade, in evaluation order.
pub const CASCADE: &[Rule] = &[
    Rule {
        name: "greeting",
        short_circuit: true,
        apply: greeting,
    },
    Rule {
        name: "help",
        short_circuit: true,
        apply: help,
    },
    Rule {
        name: "thanks",
        short_circuit: true,
        apply: thanks,
    },
    Rule {
        name: "personal",
        short_circuit: true,
        apply: personal,
    },
    Rule {
        name: "hunger",
        short_circuit: false,
        apply: hunger,
    },
    Rule {
        name: "thirst",
        short_circuit: false,
        apply: thirst,
    },
    Rule {
        name: "accommodation",
        short_circuit: false,
        apply: accommodation,
    },
    Rule {
        name: "sightseeing",
        short_circuit: false,
        apply: sightseeing,
    },
    Rule {
        name: "direct_category",
        short_circuit: false,
        apply: direct_category,
    },
    Rule {
        name: "budget_words",
        short_circuit: false,
        apply: budget_words,
    },
    Rule {
        name: "budget_amount",
        short_circuit: false,
        apply: budget_amount,
    },
    Rule {
        name: "free_monument",
        short_circuit: false,
        apply: free_monument,
    },
    Rule {
        name: "rating",
        short_circuit: false,
        apply: rating,
    },
    Rule {
        name: "area",
        short_circuit: false,
        apply: area,
    },
    Rule {
        name: "cuisine",
        short_circuit: false,
        apply: cuisine,
    },
];

fn greeting(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    if pat::is_match(&pat::RE_GREETING, text) {
        det.intent = Intent::Greeting;
        return true;
    }
    false
}

fn help(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    if pat::is_match(&pat::RE_HELP, text) {
        det.intent = Intent::Help;
        return true;
    }
    false
}

fn thanks(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    if text.contains("thank") {
        det.intent = Intent::Thanks;
        return true;
    }
    false
}

fn personal(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    if pat::is_match(&pat::RE_PERSONAL, text) {
        det.intent = Intent::Personal;
        return true;
    }
    false
}

fn hunger(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    if pat::is_match(&pat::RE_HUNGER, text) {
        det.category = Some(Category::Restaurant);
        det.intent = Intent::Hunger;
        return true;
    }
    false
}

fn thirst(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    if pat::is_match(&pat::RE_THIRST, text) {
        det.category = Some(Category::Cafe);
        det.intent = Intent::Thirst;
        return true;
    }
    false
}

fn accommodation(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    if pat::is_match(&pat::RE_ACCOMMODATION, text) {
        det.category = Some(Category::Hotel);
        det.intent = Intent::Accommodation;
        return true;
    }
    false
}

fn sightseeing(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    if pat::is_match(&pat::RE_SIGHTSEEING, text) {
        det.category = Some(Category::Monument);
        det.intent = Intent::Sightseeing;
        return true;
    }
    false
}

/// A directly named category overrides whatever the need rules inferred.
/// First matching noun group wins; the intent is only upgraded from General
/// so a need intent (e.g. Hunger) survives a redundant noun mention.
fn direct_category(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    let named = if pat::is_match(&pat::RE_CAT_HOTEL, text) {
        Some(Category::Hotel)
    } else if pat::is_match(&pat::RE_CAT_RESTAURANT, text) {
        Some(Category::Restaurant)
    } else if pat::is_match(&pat::RE_CAT_CAFE, text) {
        Some(Category::Cafe)
    } else if pat::is_match(&pat::RE_CAT_MONUMENT, text) {
        Some(Category::Monument)
    } else {
        None
    };
    if let Some(category) = named {
        det.category = Some(category);
    }
    if det.category.is_some() && det.intent == Intent::General {
        det.intent = Intent::Category;
    }
    named.is_some()
}

fn budget_words(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    let tier = if pat::is_match(&pat::RE_BUDGET_1, text) {
        Some(1)
    } else if pat::is_match(&pat::RE_BUDGET_2, text) {
        Some(2)
    } else if pat::is_match(&pat::RE_BUDGET_3, text) {
        Some(3)
    } else if pat::is_match(&pat::RE_BUDGET_4, text) {
        Some(4)
    } else {
        None
    };
    if let Some(tier) = tier {
        det.budget_level = Some(tier);
        det.intent = Intent::Budget;
        return true;
    }
    false
}

/// An explicit amount ("under 500", "300 egp") overrides the qualitative
/// tier, using the same canonical caps as the filter engine. With no
/// category in play, hotel caps apply (the assistant's default category).
/// An unparseable number leaves the slot unset.
fn budget_amount(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    let raw = pat::first_capture(&pat::RE_AMOUNT_UNDER, text)
        .or_else(|| pat::first_capture(&pat::RE_AMOUNT_LESS_THAN, text))
        .or_else(|| pat::first_capture(&pat::RE_AMOUNT_BELOW, text))
        .or_else(|| pat::first_capture(&pat::RE_AMOUNT_EGP_SUFFIX, text))
        .or_else(|| pat::first_capture(&pat::RE_AMOUNT_EGP_PREFIX, text));
    let Some(raw) = raw else { return false };
    let Ok(amount) = raw.parse::<u32>() else {
        return false;
    };
    let category = det.category.unwrap_or(Category::Hotel);
    det.budget_level = Some(pricing::tier_for_amount(category, amount));
    det.intent = Intent::Budget;
    true
}

/// "free" in a monument context means free-only, a distinct mode rather than
/// the bottom of the price range.
fn free_monument(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    let monument_context =
        det.category == Some(Category::Monument) || det.intent == Intent::Sightseeing;
    if monument_context && text.contains("free") {
        det.budget_level = Some(0);
        det.category = Some(Category::Monument);
        det.intent = Intent::Budget;
        return true;
    }
    false
}

/// Numeric mentions are accepted only in [3, 5]; a numeric mention outside
/// that range suppresses the word-based fallbacks rather than falling
/// through to them.
fn rating(text: &str, det: &mut Detection, _: &Vocabulary) -> bool {
    let numeric = pat::first_capture(&pat::RE_RATING_STARS, text)
        .or_else(|| pat::first_capture(&pat::RE_RATING_RATING, text))
        .or_else(|| pat::first_capture(&pat::RE_RATING_RATED, text));
    if let Some(raw) = numeric {
        if let Ok(value) = raw.parse::<f64>() {
            if (3.0..=5.0).contains(&value) {
                det.rating_level = Some(value);
                det.intent = Intent::Rating;
                return true;
            }
        }
        return false;
    }
    if pat::is_match(&pat::RE_RATING_SUPERLATIVE, text) {
        det.rating_level = Some(4.5);
        det.intent = Intent::Rating;
        return true;
    }
    if pat::is_match(&pat::RE_RATING_POSITIVE, text) {
        det.rating_level = Some(4.0);
        det.intent = Intent::Rating;
        return true;
    }
    false
}

fn area(text: &str, det: &mut Detection, vocab: &Vocabulary) -> bool {
    if let Some(area) = vocab.match_area(text) {
        det.area = Some(area.to_string());
        det.intent = Intent::Location;
        return true;
    }
    false
}

/// Cuisine extraction only applies when the conversation is about
/// restaurants, directly or via hunger.
fn cuisine(text: &str, det: &mut Detection, vocab: &Vocabulary) -> bool {
    let restaurant_context =
        det.category == Some(Category::Restaurant) || det.intent == Intent::Hunger;
    if !restaurant_context {
        return false;
    }
    if let Some(cuisine) = vocab.match_cuisine(text) {
        det.cuisine = Some(cuisine.to_string());
        det.intent = Intent::Cuisine;
        return true;
    }
    false
}
