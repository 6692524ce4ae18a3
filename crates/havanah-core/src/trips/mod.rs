//! Saved trips.
//!
//! [`TripBook`] is the async entry point to the trip database. Every
//! operation opens a [`Database`] inside [`task::spawn_blocking`] so callers
//! on the runtime never block on SQLite.
//!
//! ```rust
//! use havanah_core::{params::ListTrips, TripBookBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let book = TripBookBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let trips = book.list_trips_summary(&ListTrips::default()).await?;
//! println!("{trips}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use log::info;
use tokio::task;

use crate::{
    db::Database,
    display::{DeleteResult, TripSummaries},
    error::{Result, TripError},
    models::{Trip, TripSummary},
    params::{Id, ListTrips, SaveTrip},
};

pub mod builder;


pub use builder::TripBookBuilder;

/// Store for completed wizard runs.
#[derive(Debug, Clone)]
pub struct TripBook {
    db_path: PathBuf,
}

impl TripBook {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Saves a trip for the chosen itinerary.
    pub async fn save_trip(&self, params: &SaveTrip) -> Result<Trip> {
        let db_path = self.db_path.clone();
        let itinerary = params.itinerary.clone();
        let preferences = params.preferences.clone();

        let trip = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_trip(&itinerary, &preferences)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!(
            "Saved trip {} for itinerary '{}'",
            trip.id, trip.itinerary_title
        );
        Ok(trip)
    }

    /// Retrieves a trip by its ID.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_trip(trip_id)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists trips, most recently saved first.
    pub async fn list_trips(&self, params: &ListTrips) -> Result<Vec<Trip>> {
        let db_path = self.db_path.clone();
        let limit = params.limit;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_trips(limit)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists trips whose dates overlap the inclusive period `from..=to`.
    pub async fn trips_between(&self, from: Date, to: Date) -> Result<Vec<Trip>> {
        if from > to {
            return Err(TripError::invalid_input("period")
                .with_reason(format!("{from} is after {to}")));
        }
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_trips_between(from, to)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a trip and returns it.
    ///
    /// # Errors
    ///
    /// Returns `TripError::TripNotFound` if no trip has this ID.
    pub async fn delete_trip(&self, params: &Id) -> Result<Trip> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let trip = db
                .get_trip(trip_id)?
                .ok_or(TripError::TripNotFound { id: trip_id })?;
            db.delete_trip(trip_id)?;
            Ok(trip)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists trips as display summaries.
    pub async fn list_trips_summary(&self, params: &ListTrips) -> Result<TripSummaries> {
        let trips = self.list_trips(params).await?;
        let summaries: Vec<TripSummary> = trips.iter().map(Into::into).collect();
        Ok(TripSummaries(summaries))
    }

    /// Deletes a trip and wraps it for display.
    pub async fn delete_trip_result(&self, params: &Id) -> Result<DeleteResult<Trip>> {
        self.delete_trip(params).await.map(DeleteResult::new)
    }
}
