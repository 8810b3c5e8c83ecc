//! Shared model structs passed between the detector, filter engine, scorer,
//! and the presentation layer.

mod behavior;
mod context;
mod criteria;
mod detection;

pub use behavior::{BehaviorLog, SearchRecord};
pub use context::{ConversationContext, Preferences};
pub use criteria::FilterCriteria;
pub use detection::Detection;
