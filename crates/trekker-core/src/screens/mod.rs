//! Screen controllers.
//!
//! Each screen of the app is a plain state machine: it owns the view state
//! the UI renders, takes user input through methods, and calls the
//! [`TripStore`](crate::store::TripStore) through its [`ScreenScope`] so that
//! results arriving after the screen is gone are dropped.
//!
//! - [`TripCreation`]: the create-a-trip form
//! - [`TripList`]: the signed-in user's trips
//! - [`TripDetail`]: one trip, its waypoints and the map capture flow
//!
//! Failures come back as [`ScreenError`]. Validation problems are detected
//! locally and never reach the store; persistence problems are logged and
//! surfaced with a generic message. Either way the screen also keeps the
//! [`Alert`] the UI should pop up.
//!
//! [`ScreenScope`]: crate::scope::ScreenScope

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{display::OperationStatus, error::TripError};

pub mod creation;
pub mod detail;
pub mod list;

#[cfg(test)]
pub(crate) mod testing;

pub use creation::TripCreation;
pub use detail::{CaptureState, DetailState, PendingWaypoint, TripDetail};
pub use list::TripList;

/// Navigation target for the trip detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripRoute {
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    Success,
    Error,
}

/// A message box for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    /// Title of the message box.
    pub fn title(&self) -> &'static str {
        match self.kind {
            AlertKind::Success => "Succès",
            AlertKind::Error => "Erreur",
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Error
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message)
    }
}

impl From<&Alert> for OperationStatus {
    fn from(alert: &Alert) -> Self {
        match alert.kind {
            AlertKind::Success => OperationStatus::success(alert.message.clone()),
            AlertKind::Error => OperationStatus::failure(alert.message.clone()),
        }
    }
}

/// Why a screen action did not go through.
#[derive(Error, Debug)]
pub enum ScreenError {
    /// Input rejected before any store call
    #[error("{0}")]
    Validation(String),
    /// The store failed or declined the request
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: Option<TripError>,
    },
    /// The screen was dismissed before the store answered
    #[error("Screen closed before the operation finished")]
    Cancelled,
}

impl ScreenError {
    pub(crate) fn persistence(message: &str, source: impl Into<Option<TripError>>) -> Self {
        Self::Persistence {
            message: message.to_string(),
            source: source.into(),
        }
    }

    /// The alert to show for this error. Cancelled screens show nothing.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Self::Validation(message) | Self::Persistence { message, .. } => {
                Some(Alert::error(message.clone()))
            }
            Self::Cancelled => None,
        }
    }
}
