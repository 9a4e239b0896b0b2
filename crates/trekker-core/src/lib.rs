//! Core library for the Trekker travel planner.
//!
//! Users create trips with a date range, pin waypoints on a map and browse
//! their trip list. This crate holds everything below the user interface:
//!
//! - **Models** ([`models`]): trips, waypoints, users and list cards
//! - **Persistence** ([`store`], [`db`]): the [`TripStore`] contract and its
//!   SQLite implementation [`TripDb`]
//! - **Session** ([`session`]): the signed-in user, passed explicitly
//! - **Screens** ([`screens`]): controllers for trip creation, the trip list
//!   and the trip detail map, each tied to a [`ScreenScope`]
//! - **Display** ([`display`]): markdown formatting of all of the above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trekker_core::{models::User, Session, TripCreation, TripDbBuilder, TripList};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TripDbBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//! let session = Session::signed_in(User::new(7));
//!
//! let mut form = TripCreation::new().with_fields("Paris Trip", "15/06/2024", "30/06/2024");
//! let trip = form.submit(&session, &store).await?;
//! println!("Created trip {} lasting {} days", trip.id, trip.duration_days());
//!
//! let mut list = TripList::new();
//! list.load(&session, &store).await?;
//! print!("{}", list.cards());
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod db;
pub mod display;
pub mod error;
pub mod map;
pub mod models;
pub mod params;
pub mod scope;
pub mod screens;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, LocalDateTime, OperationStatus, ShortDate, TripCards, TripOverview, Waypoints,
};
pub use error::{Result, TripError};
pub use map::{MapView, Marker};
pub use models::{Activity, Coordinate, Location, Trip, TripCard, User};
pub use params::{AddLocation, CreateTrip, Id};
pub use scope::ScreenScope;
pub use screens::{Alert, ScreenError, TripCreation, TripDetail, TripList, TripRoute};
pub use session::{require_user, Session};
pub use store::{TripDb, TripDbBuilder, TripStore};
