use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::detection::Detection;
use crate::intent::Intent;
use crate::place::Category;

/// Preference slots accumulated over a conversation. A follow-up utterance
/// that does not respecify a slot inherits the previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct Preferences {
    pub budget: Option<u8>,
    pub rating: Option<f64>,
    pub area: Option<String>,
    pub cuisine: Option<String>,
}

/// Session-scoped conversation state held by the caller, not the detector.
/// Lives only as long as the chat session; there is no persistence and no
/// explicit clear operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversationContext {
    pub session_id: String,
    pub last_intent: Option<Intent>,
    pub last_category: Option<Category>,
    pub preferences: Preferences,
    /// Ids of the most recent result set shown to the user.
    pub suggested_ids: Vec<String>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            last_intent: None,
            last_category: None,
            preferences: Preferences::default(),
            suggested_ids: Vec::new(),
        }
    }

    /// Merge a detection into the context: newly extracted slots win, absent
    /// slots keep their prior values. Conversational intents update only
    /// `last_intent`.
    pub fn absorb(&mut self, detection: &Detection) {
        self.last_intent = Some(detection.intent);
        if detection.intent.is_conversational() {
            return;
        }
        if detection.category.is_some() {
            self.last_category = detection.category;
        }
        if detection.budget_level.is_some() {
            self.preferences.budget = detection.budget_level;
        }
        if detection.rating_level.is_some() {
            self.preferences.rating = detection.rating_level;
        }
        if let Some(area) = &detection.area {
            self.preferences.area = Some(area.clone());
        }
        if let Some(cuisine) = &detection.cuisine {
            self.preferences.cuisine = Some(cuisine.clone());
        }
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}
