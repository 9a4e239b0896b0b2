//! Blocking database calls for TripDb, run off the async executor.

use jiff::Timestamp;
use tokio::task;

use super::TripDb;
use crate::{
    db::Database,
    error::{Result, TripError},
    models::{Location, Trip},
};

impl TripDb {
    /// Runs `op` against a fresh connection on the blocking thread pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(TripError::join)?
    }

    /// Inserts a new trip and returns it with its assigned ID.
    pub async fn insert_trip(
        &self,
        user_id: u64,
        destination_id: u64,
        name: &str,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<Trip> {
        let name = name.to_string();
        self.with_database(move |db| {
            db.create_trip(user_id, destination_id, &name, start_date, end_date)
        })
        .await
    }

    /// Retrieves a trip by its ID.
    pub async fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        self.with_database(move |db| db.get_trip(id)).await
    }

    /// Lists a user's trips in creation order.
    pub async fn list_trips_by_user(&self, user_id: u64) -> Result<Vec<Trip>> {
        self.with_database(move |db| db.list_trips_by_user(user_id))
            .await
    }

    /// Lists a trip's waypoints in the order they were added.
    pub async fn get_trip_locations(&self, trip_id: u64) -> Result<Vec<Location>> {
        self.with_database(move |db| db.get_trip_locations(trip_id))
            .await
    }

    /// Appends a waypoint to an existing trip.
    pub async fn add_location(&self, trip_id: u64, location: Location) -> Result<()> {
        self.with_database(move |db| db.add_location(trip_id, &location))
            .await
    }
}
