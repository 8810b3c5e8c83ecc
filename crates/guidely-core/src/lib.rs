//! # guidely-core
//!
//! Foundation crate for the Guidely discovery engine.
//! Defines the place model, intent taxonomy, pricing tables, models, traits,
//! errors, and config. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod place;
pub mod pricing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GuidelyConfig;
pub use errors::{GuidelyError, GuidelyResult};
pub use intent::Intent;
pub use models::{BehaviorLog, ConversationContext, Detection, FilterCriteria, SearchRecord};
pub use place::{Category, Place, PlaceDetails};
pub use traits::IBehaviorStore;
