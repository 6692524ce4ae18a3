//! Core library for the Havanah van-trip planner.
//!
//! The crate models the trip-creation questionnaire as a typed state machine
//! ([`wizard`]), proposes itineraries once it is complete ([`results`]), and
//! keeps the trips travellers pick ([`trips`]). Remote collaborators sit
//! behind traits so they can be swapped: [`geocode::Geocoder`] for place
//! lookups, [`results::ItineraryCatalog`] for proposals and
//! [`routing::Router`] for detailed van routes.
//!
//! [`TripSession`] ties a wizard to those collaborators and owns the
//! cancellation of in-flight work when the questionnaire is closed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use havanah_core::{
//!     models::AnswerKey,
//!     wizard::questions::{DATE_PRECISE, VAN_OWN},
//!     TripBookBuilder, TripSessionBuilder,
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let book = TripBookBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//! let session = TripSessionBuilder::new().with_trip_book(book).build()?;
//!
//! session.with_wizard(|w| w.select_single(AnswerKey::DateType, DATE_PRECISE))?;
//! session.advance().await?;
//! session.with_wizard(|w| {
//!     w.set_date_range(date(2030, 7, 1), Some(date(2030, 7, 8)))
//! })?;
//! session.advance().await?;
//!
//! session.search_departure("Montpellier").await?;
//! let center = session.wizard().region().center();
//! session.with_wizard(|w| w.set_departure(center))?;
//! session.advance().await?;
//!
//! session.with_wizard(|w| w.select_single(AnswerKey::Van, VAN_OWN))?;
//! // ... remaining questions, then `advance` from the last one fetches
//! // proposals and `select` saves the chosen trip.
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod geocode;
pub mod models;
pub mod params;
pub mod results;
pub mod routing;
pub mod session;
pub mod trips;
pub mod wizard;

pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Itineraries, LocalDateTime, OperationStatus, TripSummaries,
    VanWarnings,
};
pub use error::{Result, TripError};
pub use geocode::{Geocoder, NominatimGeocoder};
pub use models::{
    AnswerKey, AnswerValue, Answers, Coordinate, DateRange, DetailedRoute, MapRegion,
    ProposedItinerary, Trip, TripDates, TripPreferences, TripSummary, VanWarning,
};
pub use params::{Id, ListTrips, SaveTrip};
pub use results::{ItineraryCatalog, ResultsView, StaticCatalog};
pub use routing::{GraphHopperRouter, Router, VanRoutingOptions, Vehicle};
pub use session::{TripSession, TripSessionBuilder};
pub use trips::{TripBook, TripBookBuilder};
pub use wizard::{Step, Wizard};
