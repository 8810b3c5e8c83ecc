//! Write side of the behavior log.
//!
//! Every mutation goes through the store's read-modify-write `update`, so
//! trackers never hold log state of their own and two trackers over the same
//! store observe each other's writes.

use tracing::debug;

use guidely_core::errors::GuidelyResult;
use guidely_core::models::{BehaviorLog, SearchRecord};
use guidely_core::IBehaviorStore;

pub struct BehaviorTracker<'a> {
    store: &'a dyn IBehaviorStore,
}

impl<'a> BehaviorTracker<'a> {
    pub fn new(store: &'a dyn IBehaviorStore) -> Self {
        Self { store }
    }

    /// Count a click (card opened, details viewed) against a place.
    pub fn record_click(&self, place_id: &str) -> GuidelyResult<()> {
        debug!(place_id, "click recorded");
        self.store.update(&mut |log| log.record_click(place_id))
    }

    /// Count a view (hover, impression) against a place.
    pub fn record_view(&self, place_id: &str) -> GuidelyResult<()> {
        self.store.update(&mut |log| log.record_view(place_id))
    }

    /// Append a free-text search to the bounded history.
    pub fn record_search(&self, query: &str) -> GuidelyResult<()> {
        self.store
            .update(&mut |log| log.record_search(SearchRecord::now(query)))
    }

    /// Current log snapshot, for feeding the scorer.
    pub fn snapshot(&self) -> GuidelyResult<BehaviorLog> {
        self.store.load()
    }
}
