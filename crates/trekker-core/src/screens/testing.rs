//! In-memory stores for controller tests.
//!
//! [`RecordingStore`] counts calls and fails on request. [`GatedStore`] wraps
//! it and, once armed, parks every read and write until released, so a test
//! can close the screen while a call is in flight.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::Notify;

use crate::{
    error::{Result, TripError},
    models::{Location, Trip},
    store::TripStore,
};

#[derive(Default)]
pub(crate) struct RecordingStore {
    pub trips: Mutex<Vec<Trip>>,
    pub locations: Mutex<Vec<Location>>,
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
    pub decline_create: AtomicBool,
    next_id: AtomicU64,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trips(trips: Vec<Trip>) -> Self {
        let store = Self::new();
        store
            .next_id
            .store(trips.iter().map(|t| t.id).max().unwrap_or(0), Ordering::SeqCst);
        *store.trips.lock().unwrap() = trips;
        store
    }

    pub fn failing() -> Self {
        let store = Self::new();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(TripError::Configuration {
                message: "store offline".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn trip(id: u64, user_id: u64, name: &str, start: &str, end: &str) -> Trip {
    Trip {
        id,
        user_id,
        destination_id: 1,
        name: name.to_string(),
        start_date: start.parse().unwrap(),
        end_date: end.parse().unwrap(),
        created_at: Timestamp::UNIX_EPOCH,
        activities: Vec::new(),
    }
}

#[async_trait]
impl TripStore for RecordingStore {
    async fn create_trip(
        &self,
        user_id: u64,
        destination_id: u64,
        name: &str,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<Option<Trip>> {
        self.record()?;
        if self.decline_create.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let trip = Trip {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id,
            destination_id,
            name: name.to_string(),
            start_date,
            end_date,
            created_at: Timestamp::UNIX_EPOCH,
            activities: Vec::new(),
        };
        self.trips.lock().unwrap().push(trip.clone());
        Ok(Some(trip))
    }

    async fn trips_by_user(&self, user_id: u64) -> Result<Vec<Trip>> {
        self.record()?;
        Ok(self
            .trips
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn trip_by_id(&self, id: u64) -> Result<Option<Trip>> {
        self.record()?;
        Ok(self.trips.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn trip_locations(&self, trip_id: u64) -> Result<Vec<Location>> {
        self.record()?;
        Ok(self
            .locations
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.trip_id == trip_id)
            .cloned()
            .collect())
    }

    async fn add_location_to_trip(&self, trip_id: u64, location: &Location) -> Result<()> {
        self.record()?;
        if !self.trips.lock().unwrap().iter().any(|t| t.id == trip_id) {
            return Err(TripError::TripNotFound { id: trip_id });
        }
        self.locations.lock().unwrap().push(location.clone());
        Ok(())
    }
}

pub(crate) struct GatedStore {
    pub inner: RecordingStore,
    pub armed: AtomicBool,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedStore {
    pub fn new(inner: RecordingStore) -> Self {
        Self {
            inner,
            armed: AtomicBool::new(false),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Holds every following store call until [`GatedStore::release`] fires.
    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    async fn gate(&self) {
        if self.armed.load(Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
    }
}

#[async_trait]
impl TripStore for GatedStore {
    async fn create_trip(
        &self,
        user_id: u64,
        destination_id: u64,
        name: &str,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<Option<Trip>> {
        self.gate().await;
        self.inner
            .create_trip(user_id, destination_id, name, start_date, end_date)
            .await
    }

    async fn trips_by_user(&self, user_id: u64) -> Result<Vec<Trip>> {
        self.gate().await;
        self.inner.trips_by_user(user_id).await
    }

    async fn trip_by_id(&self, id: u64) -> Result<Option<Trip>> {
        self.gate().await;
        self.inner.trip_by_id(id).await
    }

    async fn trip_locations(&self, trip_id: u64) -> Result<Vec<Location>> {
        self.gate().await;
        self.inner.trip_locations(trip_id).await
    }

    async fn add_location_to_trip(&self, trip_id: u64, location: &Location) -> Result<()> {
        self.gate().await;
        self.inner.add_location_to_trip(trip_id, location).await
    }
}
