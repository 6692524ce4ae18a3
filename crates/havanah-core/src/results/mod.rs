//! Result presentation: proposing itineraries for a completed wizard.
//!
//! - [`catalog`]: the [`ItineraryCatalog`] seam and the built-in
//!   [`StaticCatalog`]
//! - [`view`]: [`ResultsView`], the proposals on screen and the user's pick
//! - [`van`]: warnings computed from detailed routes

pub mod catalog;
pub mod van;
pub mod view;

pub use catalog::{ItineraryCatalog, StaticCatalog};
pub use van::check_van_restrictions;
pub use view::ResultsView;
