//! Parameter structures for Trekker operations
//!
//! These are the plain request shapes shared by the interfaces built on top
//! of the core (the command line and the MCP server). They carry no
//! framework-specific derives beyond serde; JSON schema generation is behind
//! the `schema` feature so only the MCP side pays for it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates stay as the `JJ/MM/AAAA` text the user typed: parsing and
//! validation belong to the trip creation screen, which reports problems
//! with its own messages.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the trip to operate on
    pub id: u64,
}

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTrip {
    /// Name of the trip (required)
    pub name: String,
    /// First day of the trip, formatted DD/MM/YYYY
    pub start_date: String,
    /// Last day of the trip, formatted DD/MM/YYYY
    pub end_date: String,
}

/// Parameters for attaching a waypoint to a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddLocation {
    /// ID of the trip to add the waypoint to
    pub trip_id: u64,
    /// Latitude in degrees, -90 to 90
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180
    pub longitude: f64,
    /// Name of the waypoint (required)
    pub name: String,
    /// Optional notes about the waypoint
    #[serde(default)]
    pub description: Option<String>,
}

impl AddLocation {
    /// The point the waypoint should be pinned at.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// The description, or an empty string when none was given.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
