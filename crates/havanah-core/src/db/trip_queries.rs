//! Trip CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ProposedItinerary, Trip, TripPreferences},
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (itinerary_id, itinerary_title, estimated_budget, start_date, end_date, preferences, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const TRIP_COLUMNS: &str =
    "id, itinerary_id, itinerary_title, estimated_budget, preferences, created_at";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

impl super::Database {
    /// Saves the trip built from `preferences` and the chosen `itinerary`.
    pub fn insert_trip(
        &mut self,
        itinerary: &ProposedItinerary,
        preferences: &TripPreferences,
    ) -> Result<Trip> {
        let preferences_json = serde_json::to_string(preferences)?;
        let now = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_TRIP_SQL,
            params![
                itinerary.id,
                &itinerary.title,
                &itinerary.estimated_budget,
                preferences.dates.start().to_string(),
                preferences.dates.end().to_string(),
                &preferences_json,
                now.to_string(),
            ],
        )
        .db_context("Failed to insert trip")?;

        let rowid = tx.last_insert_rowid();
        let id = u64::try_from(rowid)
            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, rowid))
            .db_context("Failed to read new trip ID")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Trip {
            id,
            itinerary_id: itinerary.id,
            itinerary_title: itinerary.title.clone(),
            estimated_budget: Some(itinerary.estimated_budget.clone()),
            preferences: preferences.clone(),
            created_at: now,
        })
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        // Row IDs are signed 64-bit, larger values cannot exist
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };
        let sql = format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], trip_from_row)
            .optional()
            .db_context("Failed to query trip")
    }

    /// Lists trips, most recently saved first.
    pub fn list_trips(&self, limit: Option<u32>) -> Result<Vec<Trip>> {
        let mut sql = format!("SELECT {TRIP_COLUMNS} FROM trips ORDER BY id DESC");
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let trips = stmt
            .query_map([], trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read trips")?;

        Ok(trips)
    }

    /// Lists trips whose dates overlap `from..=to`.
    pub fn list_trips_between(&self, from: Date, to: Date) -> Result<Vec<Trip>> {
        let sql = format!(
            "SELECT {TRIP_COLUMNS} FROM trips WHERE start_date <= ?2 AND end_date >= ?1 ORDER BY start_date, id"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let trips = stmt
            .query_map(params![from.to_string(), to.to_string()], trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read trips")?;

        Ok(trips)
    }

    /// Deletes a trip. Returns whether a row was removed.
    pub fn delete_trip(&mut self, id: u64) -> Result<bool> {
        let Ok(id) = i64::try_from(id) else {
            return Ok(false);
        };
        let affected = self
            .connection
            .execute(DELETE_TRIP_SQL, params![id])
            .db_context("Failed to delete trip")?;
        Ok(affected > 0)
    }
}

fn trip_from_row(row: &Row<'_>) -> rusqlite::Result<Trip> {
    let preferences_json: String = row.get(4)?;
    let preferences = serde_json::from_str::<TripPreferences>(&preferences_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Trip {
        id: row.get::<_, u64>(0)?,
        itinerary_id: row.get(1)?,
        itinerary_title: row.get(2)?,
        estimated_budget: row.get(3)?,
        preferences,
        created_at: row
            .get::<_, String>(5)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?,
    })
}
