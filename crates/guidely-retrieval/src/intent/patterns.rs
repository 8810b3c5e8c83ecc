//! Compiled pattern constants for the detection rules.
//!
//! Patterns are compiled once on first use. A pattern that fails to compile
//! degrades to "never matches" instead of panicking, so a bad pattern can
//! only cost recall, not availability.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! intent_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Conversational (short-circuit) ─────────────────────────────────────────
intent_pattern!(RE_GREETING, r"^(hi|hello|hey|greetings|howdy)");
intent_pattern!(RE_HELP, r"(help me|how (can|do) you|what can you do)");
intent_pattern!(RE_PERSONAL, r"(how are you|how is your day|how do you feel)");

// ── Need-based ─────────────────────────────────────────────────────────────
intent_pattern!(
    RE_HUNGER,
    r"(i('m| am) hungry|food|where (can|should) (i|we) eat|restaurants near)"
);
intent_pattern!(
    RE_THIRST,
    r"(i('m| am) thirsty|coffee|tea|drink|where (can|should) (i|we) get (a drink|coffee))"
);
intent_pattern!(
    RE_ACCOMMODATION,
    r"(where (can|should) (i|we) stay|accommodation|place to sleep|lodging)"
);
intent_pattern!(
    RE_SIGHTSEEING,
    r"(what (can|should) (i|we) see|tourist|attraction|sight|visit)"
);

// ── Direct category nouns ──────────────────────────────────────────────────
intent_pattern!(
    RE_CAT_HOTEL,
    r"\b(hotels?|stay(ing)?|accommodations?|rooms?|lodging)\b"
);
intent_pattern!(
    RE_CAT_RESTAURANT,
    r"\b(restaurants?|food|dining|eat(ing)?|dinner|lunch|breakfast)\b"
);
intent_pattern!(RE_CAT_CAFE, r"\b(cafes?|café|coffee|tea|drinks?)\b");
intent_pattern!(
    RE_CAT_MONUMENT,
    r"\b(monuments?|attractions?|museums?|pyramids?|sights|sightseeing|tours?|landmarks?|histor(y|ical))\b"
);

// ── Budget words, cheapest tier first ──────────────────────────────────────
intent_pattern!(
    RE_BUDGET_1,
    r"\b(cheap|budget|affordable|inexpensive|low cost|economical)\b"
);
intent_pattern!(
    RE_BUDGET_2,
    r"\b(moderate|medium|standard|reasonable|mid-range|middle)\b"
);
intent_pattern!(RE_BUDGET_3, r"\b(nice|high(-| )end|upscale)\b");
intent_pattern!(
    RE_BUDGET_4,
    r"\b(luxury|expensive|premium|top|fine|gourmet|high-class|fancy)\b"
);

// ── Explicit amounts ───────────────────────────────────────────────────────
intent_pattern!(RE_AMOUNT_UNDER, r"under\s*(\d+)");
intent_pattern!(RE_AMOUNT_LESS_THAN, r"less than\s*(\d+)");
intent_pattern!(RE_AMOUNT_BELOW, r"below\s*(\d+)");
intent_pattern!(RE_AMOUNT_EGP_SUFFIX, r"\b(\d+)\s*egp\b");
intent_pattern!(RE_AMOUNT_EGP_PREFIX, r"\begp\s*(\d+)\b");

// ── Ratings ────────────────────────────────────────────────────────────────
intent_pattern!(RE_RATING_STARS, r"(\d(?:\.\d)?)\s*star");
intent_pattern!(RE_RATING_RATING, r"rating\s*(\d(?:\.\d)?)");
intent_pattern!(RE_RATING_RATED, r"rated\s*(\d(?:\.\d)?)");
intent_pattern!(
    RE_RATING_SUPERLATIVE,
    r"\b(top rated|best|highest rating|excellent|outstanding)\b"
);
intent_pattern!(RE_RATING_POSITIVE, r"\b(good|well rated|quality)\b");

/// True when the pattern compiled and matches.
pub fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// First capture group of the first match, if any.
pub fn first_capture<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Option<&'t str> {
    pattern
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
