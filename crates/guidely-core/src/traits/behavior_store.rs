use crate::errors::GuidelyResult;
use crate::models::BehaviorLog;

/// Storage seam for the behavior log. The log lives in a single key-value
/// slot on the presentation side; this trait abstracts it so the tracker and
/// scorer can run against an in-memory fake in tests.
///
/// Read-modify-write via [`update`](IBehaviorStore::update) is the only
/// mutation pattern. Concurrent writers from separate processes are
/// last-write-wins; no merge strategy is provided.
pub trait IBehaviorStore: Send + Sync {
    /// Load the current log. A store with no prior writes returns an empty
    /// log, not an error.
    fn load(&self) -> GuidelyResult<BehaviorLog>;

    /// Replace the stored log wholesale.
    fn save(&self, log: &BehaviorLog) -> GuidelyResult<()>;

    /// Atomic read-modify-write: load, apply `mutate`, save. No partial
    /// updates are observable through this store within one process.
    fn update(&self, mutate: &mut dyn FnMut(&mut BehaviorLog)) -> GuidelyResult<()> {
        let mut log = self.load()?;
        mutate(&mut log);
        self.save(&log)
    }
}
