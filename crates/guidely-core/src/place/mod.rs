//! The place model: categories, the tagged `Place` union, and the
//! normalizing accessor layer over the two raw record shapes
//! (hotels vs. everything else).

mod base;
mod category;
mod details;

pub use base::Place;
pub use category::Category;
pub use details::{HotelDetails, PlaceDetails, VenueDetails};
