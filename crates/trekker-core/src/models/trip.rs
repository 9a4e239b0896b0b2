//! Trip model and derived values.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Destination assigned to trips created from the creation form.
pub const DEFAULT_DESTINATION_ID: u64 = 1;

const DAY_MS: u128 = 1000 * 60 * 60 * 24;

/// An activity planned within a trip.
///
/// Activities are not interpreted by this crate; they are stored and counted
/// as opaque JSON values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Activity(pub serde_json::Value);

/// A trip owned by a user, spanning a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// ID of the user who created the trip
    pub user_id: u64,

    /// ID of the trip's destination
    pub destination_id: u64,

    /// Free-text name of the trip
    pub name: String,

    /// First day of the trip (UTC instant)
    pub start_date: Timestamp,

    /// Last day of the trip (UTC instant)
    pub end_date: Timestamp,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Planned activities, in order
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Trip {
    /// Number of days covered by the trip.
    ///
    /// Computed as the ceiling of the absolute elapsed milliseconds divided by
    /// one day, so any non-zero span counts as at least one day and the order
    /// of the two dates does not matter.
    pub fn duration_days(&self) -> u64 {
        duration_days(self.start_date, self.end_date)
    }

    /// Number of planned activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

/// Whole days between two instants, rounded up.
pub fn duration_days(start: Timestamp, end: Timestamp) -> u64 {
    let elapsed_ms = end.duration_since(start).as_millis().unsigned_abs();
    elapsed_ms.div_ceil(DAY_MS) as u64
}
