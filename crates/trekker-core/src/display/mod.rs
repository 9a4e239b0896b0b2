//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context: collections with empty-state messages,
//! creation results and status lines. Everything formats as markdown so the
//! CLI can render it through termimad and the MCP server can return it as
//! text.
//!
//! - [`collections`]: trip card list and waypoint list
//! - [`results`]: creation results and the trip overview
//! - [`status`]: success/failure lines
//! - [`datetime`]: timestamp and short French date formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{TripCards, Waypoints};
pub use datetime::{LocalDateTime, ShortDate};
pub use results::{CreateResult, TripOverview};
pub use status::OperationStatus;
