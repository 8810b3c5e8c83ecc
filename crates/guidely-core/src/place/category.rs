use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four place categories. This is a closed set: a place belongs to
/// exactly one category for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Restaurant,
    Cafe,
    Hotel,
    Monument,
}

impl Category {
    /// Total number of categories.
    pub const COUNT: usize = 4;

    /// All variants for iteration.
    pub const ALL: [Category; 4] = [Self::Restaurant, Self::Cafe, Self::Hotel, Self::Monument];

    /// Parse a category name leniently: singular or plural, any case.
    /// Unknown names return `None`; callers filtering by an unknown name
    /// get an empty result set rather than an error.
    pub fn parse_loose(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "restaurant" | "restaurants" => Some(Self::Restaurant),
            "cafe" | "cafes" | "café" | "cafés" => Some(Self::Cafe),
            "hotel" | "hotels" => Some(Self::Hotel),
            "monument" | "monuments" => Some(Self::Monument),
            _ => None,
        }
    }

    /// The plural key used by the catalog JSON asset ("restaurants", ...).
    pub fn collection_key(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurants",
            Self::Cafe => "cafes",
            Self::Hotel => "hotels",
            Self::Monument => "monuments",
        }
    }

    /// Human-readable plural display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurants",
            Self::Cafe => "Cafes",
            Self::Hotel => "Hotels",
            Self::Monument => "Monuments",
        }
    }
}
