//! Wrappers for displaying operation outcomes.

use std::fmt;

use crate::models::Trip;

/// Result of saving a trip.
///
/// ```rust,no_run
/// # use havanah_core::{display::CreateResult, models::Trip};
/// # fn show(trip: Trip) {
/// let result = CreateResult::new(trip);
/// println!("{result}");
/// # }
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Result of deleting a trip.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted trip '{}' (ID: {})",
            self.resource.itinerary_title, self.resource.id
        )
    }
}
