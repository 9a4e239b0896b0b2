//! Trip persistence: the store contract and its SQLite implementation.
//!
//! Screens only ever talk to the [`TripStore`] trait. [`TripDb`] is the
//! SQLite-backed implementation; each call opens its own connection on a
//! blocking task so the async caller is never stalled on disk I/O.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Screens     │    │   TripStore     │    │    Database     │
//! │ (create, list,  │───▶│   (TripDb)      │───▶│   (via db/)     │
//! │  detail)        │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use trekker_core::{TripDbBuilder, TripStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TripDbBuilder::new()
//!     .with_database_path(Some("/tmp/trekker.db"))
//!     .build()
//!     .await?;
//!
//! let trips = store.trips_by_user(7).await?;
//! for trip in &trips {
//!     println!("{}", trip.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use jiff::Timestamp;

use crate::{
    error::Result,
    models::{Location, Trip},
};

pub mod builder;
pub mod trip_ops;

pub use builder::TripDbBuilder;

/// Persistence contract used by the screens.
///
/// Implementations must return trips and locations in insertion order.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Creates a trip. `Ok(None)` signals a store that declined to create
    /// the record without raising an error.
    async fn create_trip(
        &self,
        user_id: u64,
        destination_id: u64,
        name: &str,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<Option<Trip>>;

    /// All trips owned by the user.
    async fn trips_by_user(&self, user_id: u64) -> Result<Vec<Trip>>;

    /// The trip with the given ID, if any.
    async fn trip_by_id(&self, id: u64) -> Result<Option<Trip>>;

    /// All waypoints of the trip.
    async fn trip_locations(&self, trip_id: u64) -> Result<Vec<Location>>;

    /// Appends a waypoint to the trip.
    async fn add_location_to_trip(&self, trip_id: u64, location: &Location) -> Result<()>;
}

/// SQLite-backed [`TripStore`].
#[derive(Debug, Clone)]
pub struct TripDb {
    pub(crate) db_path: PathBuf,
}

impl TripDb {
    /// Creates a store over an already initialized database file.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}

#[async_trait]
impl TripStore for TripDb {
    async fn create_trip(
        &self,
        user_id: u64,
        destination_id: u64,
        name: &str,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<Option<Trip>> {
        self.insert_trip(user_id, destination_id, name, start_date, end_date)
            .await
            .map(Some)
    }

    async fn trips_by_user(&self, user_id: u64) -> Result<Vec<Trip>> {
        self.list_trips_by_user(user_id).await
    }

    async fn trip_by_id(&self, id: u64) -> Result<Option<Trip>> {
        self.get_trip(id).await
    }

    async fn trip_locations(&self, trip_id: u64) -> Result<Vec<Location>> {
        self.get_trip_locations(trip_id).await
    }

    async fn add_location_to_trip(&self, trip_id: u64, location: &Location) -> Result<()> {
        self.add_location(trip_id, location.clone()).await
    }
}
