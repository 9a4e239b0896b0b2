//! List projection of a trip.

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use super::Trip;
use crate::display::ShortDate;

/// Cover pictures cycled through by list position.
pub const COVER_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800",
    "https://images.unsplash.com/photo-1476514525535-07fb3b4ae5f1",
    "https://images.unsplash.com/photo-1504609773096-104ff2c73ba4",
    "https://images.unsplash.com/photo-1530521954074-e64f6810b32d",
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470",
];

/// What the trip list shows for one trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripCard {
    /// Trip ID, used to navigate to the detail screen
    pub id: u64,
    /// Trip name
    pub name: String,
    /// Formatted `start - end` range
    pub date_range: String,
    /// Whole days covered, rounded up
    pub duration_days: u64,
    /// Number of planned activities
    pub activity_count: usize,
    /// Cover picture chosen from the card's list position
    pub cover_image: String,
}

impl TripCard {
    /// Projects a trip shown at `index` in the list, formatting dates in `tz`.
    pub fn from_trip(trip: &Trip, index: usize, tz: &TimeZone) -> Self {
        Self {
            id: trip.id,
            name: trip.name.clone(),
            date_range: format!(
                "{} - {}",
                ShortDate::new(&trip.start_date, tz),
                ShortDate::new(&trip.end_date, tz)
            ),
            duration_days: trip.duration_days(),
            activity_count: trip.activity_count(),
            cover_image: COVER_IMAGES[index % COVER_IMAGES.len()].to_string(),
        }
    }
}
