//! What the trip detail map shows: waypoint markers and the pending pin.

use serde::Serialize;

use crate::models::{Coordinate, Location};

/// Pin color for confirmed waypoints, the app's accent blue.
pub const WAYPOINT_PIN_COLOR: &str = "#3b5998";

/// A pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub coordinate: Coordinate,
    pub title: String,
    pub description: String,
    /// `None` leaves the color to the map renderer
    pub pin_color: Option<&'static str>,
}

impl From<&Location> for Marker {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            coordinate: location.coordinate,
            title: location.name.clone(),
            description: location.description.clone(),
            pin_color: Some(WAYPOINT_PIN_COLOR),
        }
    }
}

/// Map contents for one trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapView {
    /// One marker per confirmed waypoint, in list order
    pub markers: Vec<Marker>,
    /// The pressed point awaiting a name, if the capture modal is open
    pub selected: Option<Coordinate>,
}

impl MapView {
    pub fn new(locations: &[Location], selected: Option<Coordinate>) -> Self {
        Self {
            markers: locations.iter().map(Marker::from).collect(),
            selected,
        }
    }

    /// Marker for the pending selection, drawn apart from the waypoints in
    /// the renderer's default color.
    pub fn selection_marker(&self) -> Option<Marker> {
        self.selected.map(|coordinate| Marker {
            id: "selection".to_string(),
            coordinate,
            title: String::new(),
            description: String::new(),
            pin_color: None,
        })
    }
}
