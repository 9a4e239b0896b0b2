//! Trip waypoints and geographic coordinates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TripError};

/// A point on the map, in floating point degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks that both components are finite and within the WGS84 ranges.
    ///
    /// Map presses always yield valid coordinates; this is for values typed
    /// in by hand on the command line or received over MCP.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TripError::invalid_input("latitude")
                .with_reason(format!("{} is not within -90..=90", self.latitude)));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TripError::invalid_input("longitude")
                .with_reason(format!("{} is not within -180..=180", self.longitude)));
        }
        Ok(())
    }
}

/// A named waypoint attached to exactly one trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique identifier (random UUID v4 for waypoints created here)
    pub id: String,

    /// ID of the owning trip
    pub trip_id: u64,

    /// Short name shown as the marker title
    pub name: String,

    /// Free-text notes, possibly empty
    pub description: String,

    /// Where the waypoint sits on the map
    pub coordinate: Coordinate,
}

impl Location {
    /// Builds a new waypoint with a freshly generated identifier.
    pub fn new(
        trip_id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            name: name.into(),
            description: description.into(),
            coordinate,
        }
    }
}
