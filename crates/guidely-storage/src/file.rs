use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use guidely_core::errors::{GuidelyResult, StoreError};
use guidely_core::models::BehaviorLog;
use guidely_core::IBehaviorStore;

/// JSON file store. One log per file; each save rewrites the whole file.
/// Concurrent writers from separate processes are last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IBehaviorStore for JsonFileStore {
    /// A file that does not exist yet is an empty log, not an error.
    fn load(&self) -> GuidelyResult<BehaviorLog> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let log = serde_json::from_str(&content).map_err(StoreError::Serialization)?;
                Ok(log)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no behavior log yet, starting empty");
                Ok(BehaviorLog::default())
            }
            Err(err) => Err(StoreError::Io(err).into()),
        }
    }

    fn save(&self, log: &BehaviorLog) -> GuidelyResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Io)?;
        }
        let blob = serde_json::to_string_pretty(log).map_err(StoreError::Serialization)?;
        fs::write(&self.path, blob).map_err(StoreError::Io)?;
        debug!(path = %self.path.display(), "behavior log saved");
        Ok(())
    }
}
