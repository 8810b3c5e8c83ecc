use std::sync::Mutex;

use guidely_core::errors::{GuidelyResult, StoreError};
use guidely_core::models::BehaviorLog;
use guidely_core::IBehaviorStore;

/// In-memory store. The log lives behind a mutex; `load` returns a copy, so
/// callers never observe a partially applied update.
#[derive(Debug, Default)]
pub struct MemoryBehaviorStore {
    log: Mutex<BehaviorLog>,
}

impl MemoryBehaviorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an existing log.
    pub fn with_log(log: BehaviorLog) -> Self {
        Self {
            log: Mutex::new(log),
        }
    }
}

impl IBehaviorStore for MemoryBehaviorStore {
    fn load(&self) -> GuidelyResult<BehaviorLog> {
        let guard = self.log.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, log: &BehaviorLog) -> GuidelyResult<()> {
        let mut guard = self.log.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = log.clone();
        Ok(())
    }

    fn update(&self, mutate: &mut dyn FnMut(&mut BehaviorLog)) -> GuidelyResult<()> {
        // Mutate in place under the lock rather than load-copy-save.
        let mut guard = self.log.lock().map_err(|_| StoreError::Poisoned)?;
        mutate(&mut guard);
        Ok(())
    }
}
