//! Trip creation and lookup queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Activity, Trip},
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (user_id, destination_id, name, start_date, end_date, activities, created_at) VALUES (?1, ?2, ?3, ?4, ?5, '[]', ?6)";
const SELECT_TRIP_SQL: &str = "SELECT id, user_id, destination_id, name, start_date, end_date, activities, created_at FROM trips WHERE id = ?1";
const SELECT_TRIPS_BY_USER_SQL: &str = "SELECT id, user_id, destination_id, name, start_date, end_date, activities, created_at FROM trips WHERE user_id = ?1 ORDER BY id";
pub(super) const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";

fn parse_timestamp(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Helper function to construct a Trip from a database row
    fn build_trip_from_row(row: &rusqlite::Row) -> rusqlite::Result<Trip> {
        let activities_json: String = row.get(6)?;
        let activities: Vec<Activity> = serde_json::from_str(&activities_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

        Ok(Trip {
            id: row.get::<_, i64>(0)? as u64,
            user_id: row.get::<_, i64>(1)? as u64,
            destination_id: row.get::<_, i64>(2)? as u64,
            name: row.get(3)?,
            start_date: parse_timestamp(row, 4)?,
            end_date: parse_timestamp(row, 5)?,
            activities,
            created_at: parse_timestamp(row, 7)?,
        })
    }

    /// Creates a new trip for the given user. The trip starts without
    /// activities.
    pub fn create_trip(
        &mut self,
        user_id: u64,
        destination_id: u64,
        name: &str,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<Trip> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_TRIP_SQL,
            params![
                user_id as i64,
                destination_id as i64,
                name,
                start_date.to_string(),
                end_date.to_string(),
                now.to_string()
            ],
        )
        .db_context("Failed to insert trip")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Trip {
            id,
            user_id,
            destination_id,
            name: name.into(),
            start_date,
            end_date,
            created_at: now,
            activities: Vec::new(),
        })
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], Self::build_trip_from_row)
            .optional()
            .db_context("Failed to query trip")
    }

    /// Lists a user's trips in creation order.
    pub fn list_trips_by_user(&self, user_id: u64) -> Result<Vec<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIPS_BY_USER_SQL)
            .db_context("Failed to prepare query")?;

        let trips = stmt
            .query_map(params![user_id as i64], Self::build_trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch trips")?;

        Ok(trips)
    }

}
