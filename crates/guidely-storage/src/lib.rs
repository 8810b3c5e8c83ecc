//! # guidely-storage
//!
//! [`IBehaviorStore`] implementations: an in-memory store for tests and
//! single-session use, and a JSON file store for persistence across runs.
//! Both hand out whole-log copies; mutation happens only through the trait's
//! read-modify-write `update`.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryBehaviorStore;
