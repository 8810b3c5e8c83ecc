//! AssistantEngine: orchestrates one chat turn.
//!
//! detect → absorb into context → structured filter (or free-text search)
//! → sort → truncate. Conversational intents short-circuit before any
//! catalog work.

use tracing::{debug, info};

use guidely_catalog::Catalog;
use guidely_core::config::AssistantConfig;
use guidely_core::intent::Intent;
use guidely_core::models::{ConversationContext, FilterCriteria};
use guidely_core::place::{Category, Place};

use crate::filter;
use crate::intent::{IntentDetector, Vocabulary};

/// Outcome of one assistant turn. The presentation layer renders it; an
/// empty result list is a normal outcome ("no results" state), not an error.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Greeting/help/thanks/small-talk: answered directly, no catalog work.
    Conversational { intent: Intent },
    /// Structured filter results.
    Results {
        intent: Intent,
        criteria: FilterCriteria,
        places: Vec<Place>,
    },
    /// Free-text fallback search results.
    Search { query: String, places: Vec<Place> },
}

/// The chat assistant core. Borrows the catalog; conversation state is held
/// by the caller and passed in per turn.
pub struct AssistantEngine<'a> {
    catalog: &'a Catalog,
    detector: IntentDetector,
    config: AssistantConfig,
}

impl<'a> AssistantEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: AssistantConfig) -> Self {
        Self {
            catalog,
            detector: IntentDetector::new(),
            config,
        }
    }

    /// Use an overridden detection vocabulary.
    pub fn with_vocabulary(mut self, vocab: Vocabulary) -> Self {
        self.detector = IntentDetector::with_vocabulary(vocab);
        self
    }

    /// Handle one utterance: classify, merge slots into the context, and
    /// produce a reply.
    pub fn respond(&self, text: &str, ctx: &mut ConversationContext) -> Reply {
        let detection = self.detector.detect(text);
        debug!(intent = ?detection.intent, "utterance classified");

        ctx.absorb(&detection);

        if detection.intent.is_conversational() {
            return Reply::Conversational {
                intent: detection.intent,
            };
        }

        if detection.intent == Intent::General {
            return self.free_text_search(text, ctx);
        }

        // Build criteria from the merged context; the utterance's own slots
        // were already absorbed, so context values are current.
        let category = detection
            .category
            .or(ctx.last_category)
            .unwrap_or(self.config.default_category);
        let criteria = FilterCriteria {
            category,
            budget_tier: ctx
                .preferences
                .budget
                .unwrap_or(self.config.default_budget_tier),
            min_rating: ctx
                .preferences
                .rating
                .unwrap_or(self.config.default_min_rating),
            area: ctx.preferences.area.clone(),
            cuisine: ctx.preferences.cuisine.clone(),
        };

        let ranked = filter::matching(self.catalog, &criteria);
        let places: Vec<Place> = ranked
            .into_iter()
            .take(self.config.max_results)
            .cloned()
            .collect();

        ctx.last_category = Some(category);
        ctx.suggested_ids = places.iter().map(|p| p.id.clone()).collect();

        info!(
            intent = ?detection.intent,
            category = ?category,
            results = places.len(),
            "turn complete"
        );

        Reply::Results {
            intent: detection.intent,
            criteria,
            places,
        }
    }

    /// The General fallback: substring search preferring the category the
    /// conversation was last about, then the whole catalog.
    fn free_text_search(&self, query: &str, ctx: &ConversationContext) -> Reply {
        let limit = self.config.max_results;
        let scoped: Vec<&Place> = match ctx.last_category {
            Some(category) => self.search_scoped(category, query, limit),
            None => Vec::new(),
        };
        let hits = if scoped.is_empty() {
            self.catalog.text_search(query, limit)
        } else {
            scoped
        };
        debug!(query, results = hits.len(), "free-text fallback");
        Reply::Search {
            query: query.to_string(),
            places: hits.into_iter().cloned().collect(),
        }
    }

    fn search_scoped(&self, category: Category, query: &str, limit: usize) -> Vec<&'a Place> {
        self.catalog.text_search_in(category, query, limit)
    }
}
