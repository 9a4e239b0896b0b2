//! Waypoint queries.

use jiff::Timestamp;
use rusqlite::{params, TransactionBehavior};

use super::trip_queries::CHECK_TRIP_EXISTS_SQL;
use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::{Coordinate, Location},
};

const INSERT_LOCATION_SQL: &str = "INSERT INTO locations (id, trip_id, name, description, latitude, longitude, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_LOCATIONS_BY_TRIP_SQL: &str = "SELECT id, trip_id, name, description, latitude, longitude FROM locations WHERE trip_id = ?1 ORDER BY rowid";

impl super::Database {
    fn build_location_from_row(row: &rusqlite::Row) -> rusqlite::Result<Location> {
        Ok(Location {
            id: row.get(0)?,
            trip_id: row.get::<_, i64>(1)? as u64,
            name: row.get(2)?,
            description: row.get(3)?,
            coordinate: Coordinate {
                latitude: row.get(4)?,
                longitude: row.get(5)?,
            },
        })
    }

    /// Appends a waypoint to a trip.
    ///
    /// # Errors
    ///
    /// Returns `TripError::TripNotFound` if the trip does not exist and
    /// `TripError::InvalidInput` if the location names a different trip.
    pub fn add_location(&mut self, trip_id: u64, location: &Location) -> Result<()> {
        if location.trip_id != trip_id {
            return Err(TripError::invalid_input("trip_id").with_reason(format!(
                "location belongs to trip {}, not {trip_id}",
                location.trip_id
            )));
        }

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_TRIP_EXISTS_SQL, params![trip_id as i64], |row| row.get(0))
            .db_context("Failed to check trip existence")?;

        if !exists {
            return Err(TripError::TripNotFound { id: trip_id });
        }

        tx.execute(
            INSERT_LOCATION_SQL,
            params![
                location.id,
                trip_id as i64,
                location.name,
                location.description,
                location.coordinate.latitude,
                location.coordinate.longitude,
                Timestamp::now().to_string()
            ],
        )
        .db_context("Failed to insert location")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Lists a trip's waypoints in the order they were added.
    pub fn get_trip_locations(&self, trip_id: u64) -> Result<Vec<Location>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LOCATIONS_BY_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        let locations = stmt
            .query_map(params![trip_id as i64], Self::build_location_from_row)
            .db_context("Failed to query locations")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch locations")?;

        Ok(locations)
    }
}
