//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::collections::Waypoints;
use crate::models::{Location, Trip};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use trekker_core::{display::CreateResult, models::Trip};
/// use jiff::Timestamp;
///
/// let trip = Trip {
///     id: 1,
///     user_id: 7,
///     destination_id: 1,
///     name: "Paris Trip".to_string(),
///     start_date: Timestamp::now(),
///     end_date: Timestamp::now(),
///     created_at: Timestamp::now(),
///     activities: vec![],
/// };
///
/// let result = CreateResult::new(trip);
/// assert!(result.to_string().contains("Created trip with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Location> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added waypoint to trip {} with ID: {}",
            self.resource.trip_id, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// A trip shown together with its waypoints, as on the detail screen.
pub struct TripOverview<'a> {
    pub trip: &'a Trip,
    pub locations: &'a [Location],
}

impl fmt::Display for TripOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.trip)?;
        writeln!(f, "\n## Waypoints")?;
        writeln!(f)?;
        write!(f, "{}", Waypoints(self.locations))
    }
}
