use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::answers::TripPreferences;

/// A completed wizard run together with the itinerary the user picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Catalog ID of the chosen itinerary
    pub itinerary_id: u32,

    /// Title of the chosen itinerary at the time of selection
    pub itinerary_title: String,

    /// Budget estimate of the chosen itinerary
    pub estimated_budget: Option<String>,

    /// Answers given in the wizard
    pub preferences: TripPreferences,

    /// Timestamp when the trip was saved (UTC)
    pub created_at: Timestamp,
}

/// Compact trip view for listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummary {
    pub id: u64,
    pub itinerary_title: String,
    pub start_date: Date,
    pub end_date: Date,
    pub created_at: Timestamp,
}

impl From<&Trip> for TripSummary {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            itinerary_title: trip.itinerary_title.clone(),
            start_date: trip.preferences.dates.start(),
            end_date: trip.preferences.dates.end(),
            created_at: trip.created_at,
        }
    }
}
