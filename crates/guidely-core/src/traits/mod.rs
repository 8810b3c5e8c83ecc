//! Trait seams between the core and its collaborators.

mod behavior_store;

pub use behavior_store::IBehaviorStore;
