//! Data models for the trip wizard.
//!
//! This module contains the domain types shared by the wizard, the result
//! presentation, the collaborators and the trip store:
//!
//! - [`geo`]: coordinates and map viewports
//! - [`answers`]: question keys, recorded answers and the frozen
//!   [`TripPreferences`] bundle
//! - [`itinerary`]: proposed itineraries, waypoints, detailed routes and van
//!   warnings
//! - [`trip`]: completed trips as stored by [`crate::trips::TripBook`]
//!
//! Models implement [`std::fmt::Display`] in [`crate::display`] so that the
//! CLI can print them as markdown.
//!
//! # Examples
//!
//! ```rust
//! use havanah_core::models::{Coordinate, DateRange};
//! use jiff::civil::date;
//!
//! let montpellier: Coordinate = "43.6108, 3.8767".parse().unwrap();
//! assert_eq!(montpellier.to_string(), "43.6108, 3.8767");
//!
//! let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 5)).unwrap();
//! assert_eq!(range.length_days(), Some(4));
//! assert_eq!(range.days().count(), 5);
//! ```

pub mod answers;
pub mod geo;
pub mod itinerary;
pub mod trip;


pub use answers::{AnswerKey, AnswerValue, Answers, DateRange, TripDates, TripPreferences};
pub use geo::{Coordinate, MapRegion};
pub use itinerary::{
    DetailedRoute, ProposedItinerary, RouteInstruction, Severity, VanWarning, WarningKind,
    Waypoint, WaypointKind,
};
pub use trip::{Trip, TripSummary};
