//! Data models for trips, their waypoints and the signed-in user.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use trekker_core::models::{Coordinate, Location, Trip};
//! use jiff::Timestamp;
//!
//! let trip = Trip {
//!     id: 1,
//!     user_id: 7,
//!     destination_id: 1,
//!     name: "Paris Trip".to_string(),
//!     start_date: "2024-06-15T00:00:00Z".parse().unwrap(),
//!     end_date: "2024-06-30T00:00:00Z".parse().unwrap(),
//!     created_at: Timestamp::now(),
//!     activities: vec![],
//! };
//! assert_eq!(trip.duration_days(), 15);
//!
//! let stop = Location::new(trip.id, "Tour Eiffel", "", Coordinate::new(48.8584, 2.2945));
//! assert_eq!(stop.trip_id, 1);
//! ```

pub mod card;
pub mod location;
pub mod trip;
pub mod user;

pub use card::TripCard;
pub use location::{Coordinate, Location};
pub use trip::{Activity, Trip, DEFAULT_DESTINATION_ID};
pub use user::User;
