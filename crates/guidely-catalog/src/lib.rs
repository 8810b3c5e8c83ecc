//! # guidely-catalog
//!
//! Read-only place catalog. Composes the four raw category collections into
//! one tagged collection, assigns each place its category exactly once, and
//! answers category and free-text lookups. The catalog is agnostic to where
//! the JSON came from (embedded asset, file, future network fetch).

pub mod raw;

use std::collections::HashSet;

use tracing::debug;

use guidely_core::errors::{CatalogError, GuidelyResult};
use guidely_core::place::{Category, Place, PlaceDetails};

use raw::RawPlaces;

/// The composed, read-only catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Compose a catalog from already-converted places.
    pub fn from_places(places: Vec<Place>) -> Self {
        Self { places }
    }

    /// Compose a catalog from the raw four-collection JSON asset.
    pub fn from_json_str(json: &str) -> GuidelyResult<Self> {
        let raw: RawPlaces = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::from_raw(raw)
    }

    /// Compose from raw collections: concatenate and tag. This is the only
    /// point where a place acquires its category. Ids must be unique across
    /// all four collections.
    pub fn from_raw(raw: RawPlaces) -> GuidelyResult<Self> {
        let mut places = Vec::with_capacity(
            raw.restaurants.len() + raw.cafes.len() + raw.hotels.len() + raw.monuments.len(),
        );
        places.extend(
            raw.restaurants
                .into_iter()
                .map(|v| v.into_place(PlaceDetails::Restaurant)),
        );
        places.extend(
            raw.cafes
                .into_iter()
                .map(|v| v.into_place(PlaceDetails::Cafe)),
        );
        places.extend(raw.hotels.into_iter().map(|h| h.into_place()));
        places.extend(
            raw.monuments
                .into_iter()
                .map(|v| v.into_place(PlaceDetails::Monument)),
        );
        let mut seen = HashSet::with_capacity(places.len());
        for place in &places {
            if !seen.insert(place.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: place.id.clone(),
                }
                .into());
            }
        }
        debug!(total = places.len(), "catalog composed");
        Ok(Self { places })
    }

    pub fn all(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// All places in one category.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Place> {
        self.places.iter().filter(move |p| p.category() == category)
    }

    /// All places whose category matches a loosely parsed name. An unknown
    /// name yields an empty iterator, not an error.
    pub fn by_category_name<'a>(&'a self, name: &str) -> Box<dyn Iterator<Item = &'a Place> + 'a> {
        match Category::parse_loose(name) {
            Some(category) => Box::new(self.by_category(category)),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Case-insensitive substring search over name, address, and description.
    /// Missing fields are treated as empty, never as a failure. Results keep
    /// catalog order; callers truncate for top-N.
    pub fn text_search<'a>(&'a self, query: &str, limit: usize) -> Vec<&'a Place> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.places
            .iter()
            .filter(|p| place_matches_text(p, &needle))
            .take(limit)
            .collect()
    }

    /// Like [`text_search`](Catalog::text_search) but restricted to one
    /// category.
    pub fn text_search_in<'a>(
        &'a self,
        category: Category,
        query: &str,
        limit: usize,
    ) -> Vec<&'a Place> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.by_category(category)
            .filter(|p| place_matches_text(p, &needle))
            .take(limit)
            .collect()
    }
}

fn place_matches_text(place: &Place, needle: &str) -> bool {
    let haystack = format!(
        "{} {} {}",
        place.name(),
        place.address.as_deref().unwrap_or(""),
        place.description.as_deref().unwrap_or("")
    )
    .to_lowercase();
    haystack.contains(needle)
}
