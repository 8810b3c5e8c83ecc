use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::SEARCH_HISTORY_CAP;

/// One recorded free-text search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchRecord {
    pub query: String,
    pub at: DateTime<Utc>,
}

impl SearchRecord {
    pub fn now(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            at: Utc::now(),
        }
    }
}

/// Persisted interaction counters plus a bounded search history. Created
/// empty on first use; mutated only through read-modify-write on the owning
/// store. Click/view maps have no size cap or TTL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct BehaviorLog {
    /// Place id → click count.
    pub clicks: HashMap<String, u64>,
    /// Place id → view (hover/impression) count.
    pub views: HashMap<String, u64>,
    /// Most recent searches, oldest first, capped at
    /// [`SEARCH_HISTORY_CAP`] entries.
    pub searches: Vec<SearchRecord>,
}

impl BehaviorLog {
    pub fn record_click(&mut self, place_id: &str) {
        *self.clicks.entry(place_id.to_string()).or_insert(0) += 1;
    }

    pub fn record_view(&mut self, place_id: &str) {
        *self.views.entry(place_id.to_string()).or_insert(0) += 1;
    }

    /// Append a search record, evicting the oldest entries beyond the cap.
    pub fn record_search(&mut self, record: SearchRecord) {
        self.searches.push(record);
        if self.searches.len() > SEARCH_HISTORY_CAP {
            let excess = self.searches.len() - SEARCH_HISTORY_CAP;
            self.searches.drain(..excess);
        }
    }

    pub fn clicks_for(&self, place_id: &str) -> u64 {
        self.clicks.get(place_id).copied().unwrap_or(0)
    }

    pub fn views_for(&self, place_id: &str) -> u64 {
        self.views.get(place_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut log = BehaviorLog::default();
        log.record_click("a");
        log.record_click("a");
        log.record_view("a");
        assert_eq!(log.clicks_for("a"), 2);
        assert_eq!(log.views_for("a"), 1);
        assert_eq!(log.clicks_for("missing"), 0);
    }

    #[test]
    fn search_history_keeps_the_most_recent_20() {
        let mut log = BehaviorLog::default();
        for i in 0..25 {
            log.record_search(SearchRecord::now(format!("query {i}")));
        }
        assert_eq!(log.searches.len(), SEARCH_HISTORY_CAP);
        assert_eq!(log.searches[0].query, "query 5");
        assert_eq!(log.searches[19].query, "query 24");
    }
}
