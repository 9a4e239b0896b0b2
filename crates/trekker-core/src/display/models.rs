//! Display implementations for domain models.
//!
//! The Display implementations provide markdown-formatted output for rich
//! terminal display. Trip dates are shown in the system time zone.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::{LocalDateTime, ShortDate};
use crate::models::{Location, Trip, TripCard};

/// Shown in place of an empty waypoint description.
pub const NO_DESCRIPTION: &str = "Aucune description";

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tz = TimeZone::system();

        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Dates: {} - {}",
            ShortDate::new(&self.start_date, &tz),
            ShortDate::new(&self.end_date, &tz)
        )?;
        writeln!(f, "- Duration: {} days", self.duration_days())?;
        writeln!(f, "- Activities: {}", self.activity_count())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        Ok(())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Coordinates: {:.6}, {:.6}",
            self.coordinate.latitude, self.coordinate.longitude
        )?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f)?;

        if self.description.is_empty() {
            writeln!(f, "{NO_DESCRIPTION}")?;
        } else {
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for TripCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Dates**: {}", self.date_range)?;
        writeln!(f, "- **Duration**: {} jours", self.duration_days)?;
        writeln!(f, "- **Activities**: {} activités", self.activity_count)?;
        writeln!(f)?;
        Ok(())
    }
}
