//! One trip, its waypoints, and capturing new waypoints from the map.
//!
//! Two small state machines live here. The trip itself goes
//! `Loading → Loaded | NotFound | Failed`. Waypoint capture goes
//! `Idle → CoordinateSelected → Idle`: pressing the map opens the capture
//! modal on that point, and the modal closes on cancel or after the store has
//! accepted the new waypoint.

use serde::Serialize;

use super::{Alert, ScreenError};
use crate::{
    error::TripError,
    map::MapView,
    models::{Coordinate, Location, Trip},
    scope::ScreenScope,
    store::TripStore,
};

pub const LOAD_FAILED: &str = "Impossible de charger les détails du voyage";
pub const NOT_FOUND: &str = "Voyage introuvable";
pub const ADD_FAILED: &str = "Impossible d'ajouter cette étape";
pub const WAYPOINT_ADDED: &str = "Nouvelle étape ajoutée au voyage";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DetailState {
    Loading,
    Loaded {
        trip: Trip,
        locations: Vec<Location>,
    },
    NotFound,
    Failed,
}

/// A pressed point waiting for a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingWaypoint {
    pub coordinate: Coordinate,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CaptureState {
    Idle,
    CoordinateSelected(PendingWaypoint),
}

/// Controller for the trip detail screen.
#[derive(Debug)]
pub struct TripDetail {
    state: DetailState,
    capture: CaptureState,
    alert: Option<Alert>,
    scope: ScreenScope,
}

impl TripDetail {
    pub fn new() -> Self {
        Self {
            state: DetailState::Loading,
            capture: CaptureState::Idle,
            alert: None,
            scope: ScreenScope::new(),
        }
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn capture(&self) -> &CaptureState {
        &self.capture
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// The loaded trip, if any.
    pub fn trip(&self) -> Option<&Trip> {
        match &self.state {
            DetailState::Loaded { trip, .. } => Some(trip),
            _ => None,
        }
    }

    /// Waypoints of the loaded trip; empty until loaded.
    pub fn locations(&self) -> &[Location] {
        match &self.state {
            DetailState::Loaded { locations, .. } => locations,
            _ => &[],
        }
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.capture, CaptureState::CoordinateSelected(_))
    }

    /// Fetches the trip and then its waypoints.
    ///
    /// Loading a different trip than the one shown closes the capture modal.
    /// If the screen is cancelled mid-fetch, the previous state is restored.
    pub async fn load<S>(&mut self, store: &S, trip_id: u64) -> Result<(), ScreenError>
    where
        S: TripStore + ?Sized,
    {
        if self.scope.is_cancelled() {
            return Err(ScreenError::Cancelled);
        }
        let switching = self.trip().map(|trip| trip.id) != Some(trip_id);

        let previous = std::mem::replace(&mut self.state, DetailState::Loading);
        let Some(fetched) = self.scope.run(fetch_trip(store, trip_id)).await else {
            self.state = previous;
            return Err(ScreenError::Cancelled);
        };

        self.alert = None;
        if switching {
            self.capture = CaptureState::Idle;
        }

        match fetched {
            Ok(Some((trip, locations))) => {
                log::debug!("Loaded trip {trip_id} with {} waypoints", locations.len());
                self.state = DetailState::Loaded { trip, locations };
                Ok(())
            }
            Ok(None) => {
                log::debug!("Trip {trip_id} not found");
                self.state = DetailState::NotFound;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load trip {trip_id}: {e}");
                self.state = DetailState::Failed;
                let err = ScreenError::persistence(LOAD_FAILED, e);
                self.alert = err.alert();
                Err(err)
            }
        }
    }

    /// Opens the capture modal on the pressed point.
    ///
    /// Ignored until a trip is loaded. Returns whether the modal opened.
    pub fn press_map(&mut self, coordinate: Coordinate) -> bool {
        if self.trip().is_none() {
            return false;
        }
        self.capture = CaptureState::CoordinateSelected(PendingWaypoint {
            coordinate,
            name: String::new(),
            description: String::new(),
        });
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let CaptureState::CoordinateSelected(pending) = &mut self.capture {
            pending.name = name.into();
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        if let CaptureState::CoordinateSelected(pending) = &mut self.capture {
            pending.description = description.into();
        }
    }

    /// Closes the modal and drops the pending point.
    pub fn cancel(&mut self) {
        self.capture = CaptureState::Idle;
    }

    /// Saves the pending waypoint.
    ///
    /// Does nothing and returns `Ok(None)` when no point is pending, the name
    /// is empty, or no trip is loaded. The waypoint only joins the list once
    /// the store has accepted it; on failure the list and the modal stay as
    /// they were so the user can retry.
    pub async fn confirm<S>(&mut self, store: &S) -> Result<Option<Location>, ScreenError>
    where
        S: TripStore + ?Sized,
    {
        let Some(trip_id) = self.trip().map(|trip| trip.id) else {
            return Ok(None);
        };
        let CaptureState::CoordinateSelected(pending) = &self.capture else {
            return Ok(None);
        };
        if pending.name.is_empty() {
            return Ok(None);
        }

        let location = Location::new(
            trip_id,
            pending.name.clone(),
            pending.description.clone(),
            pending.coordinate,
        );
        let saved = self
            .scope
            .run(store.add_location_to_trip(trip_id, &location))
            .await
            .ok_or(ScreenError::Cancelled)?;

        if let Err(e) = saved {
            log::error!("Failed to add waypoint to trip {trip_id}: {e}");
            let err = ScreenError::persistence(ADD_FAILED, e);
            self.alert = err.alert();
            return Err(err);
        }

        if let DetailState::Loaded { locations, .. } = &mut self.state {
            locations.push(location.clone());
        }
        self.capture = CaptureState::Idle;
        self.alert = Some(Alert::success(WAYPOINT_ADDED));
        log::info!("Added waypoint {} to trip {trip_id}", location.id);
        Ok(Some(location))
    }

    /// Markers for every waypoint plus the pending point.
    pub fn map_view(&self) -> MapView {
        let selected = match &self.capture {
            CaptureState::CoordinateSelected(pending) => Some(pending.coordinate),
            CaptureState::Idle => None,
        };
        MapView::new(self.locations(), selected)
    }
}

impl Default for TripDetail {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_trip<S>(store: &S, trip_id: u64) -> Result<Option<(Trip, Vec<Location>)>, TripError>
where
    S: TripStore + ?Sized,
{
    let Some(trip) = store.trip_by_id(trip_id).await? else {
        return Ok(None);
    };
    let locations = store.trip_locations(trip_id).await?;
    Ok(Some((trip, locations)))
}
