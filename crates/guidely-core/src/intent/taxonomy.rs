use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The 14 intent types across 4 groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    // Conversational (4) — answered directly, no slot extraction.
    Greeting,
    Help,
    Thanks,
    Personal,
    // Need-based (4) — imply a category without naming one.
    Hunger,
    Thirst,
    Accommodation,
    Sightseeing,
    // Criteria (5) — name a category or constrain the search.
    Category,
    Budget,
    Rating,
    Location,
    Cuisine,
    // Fallback (1) — free-text substring search.
    General,
}

impl Intent {
    /// Total number of intent types.
    pub const COUNT: usize = 14;

    /// All variants for iteration.
    pub const ALL: [Intent; 14] = [
        Self::Greeting,
        Self::Help,
        Self::Thanks,
        Self::Personal,
        Self::Hunger,
        Self::Thirst,
        Self::Accommodation,
        Self::Sightseeing,
        Self::Category,
        Self::Budget,
        Self::Rating,
        Self::Location,
        Self::Cuisine,
        Self::General,
    ];

    /// Group label.
    pub fn group(&self) -> &'static str {
        match self {
            Self::Greeting | Self::Help | Self::Thanks | Self::Personal => "conversational",
            Self::Hunger | Self::Thirst | Self::Accommodation | Self::Sightseeing => "need",
            Self::Category | Self::Budget | Self::Rating | Self::Location | Self::Cuisine => {
                "criteria"
            }
            Self::General => "general",
        }
    }

    /// Conversational intents short-circuit detection: no slots are extracted
    /// and no catalog lookup happens.
    pub fn is_conversational(&self) -> bool {
        self.group() == "conversational"
    }
}
