//! Parameter structures for trip operations.
//!
//! These carry no framework derives so that each interface can wrap them with
//! its own (clap in the CLI) and convert with `From`.

use crate::models::{ProposedItinerary, TripPreferences};

/// Generic ID parameter for operations that target a single trip.
#[derive(Debug, Clone)]
pub struct Id {
    pub id: u64,
}

/// Parameters for listing saved trips.
#[derive(Debug, Clone, Default)]
pub struct ListTrips {
    /// Only return the most recent `limit` trips
    pub limit: Option<u32>,
}

/// Parameters for saving a completed wizard run.
#[derive(Debug, Clone)]
pub struct SaveTrip {
    pub preferences: TripPreferences,
    pub itinerary: ProposedItinerary,
}
