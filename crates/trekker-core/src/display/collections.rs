//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Location, TripCard};

/// Shown when the signed-in user has no trips.
pub const NO_TRIPS: &str = "Vous n'avez pas encore de voyages";

/// Shown when a trip has no waypoints.
pub const NO_WAYPOINTS: &str = "Aucune étape pour ce voyage";

/// Newtype wrapper for displaying the trip list.
///
/// Cards are kept in the order the store returned them.
///
/// # Examples
///
/// ```rust
/// use trekker_core::{display::TripCards, models::TripCard};
///
/// let cards = TripCards(vec![TripCard {
///     id: 1,
///     name: "Paris Trip".to_string(),
///     date_range: "15 juin 2024 - 30 juin 2024".to_string(),
///     duration_days: 15,
///     activity_count: 0,
///     cover_image: String::new(),
/// }]);
/// assert!(cards.to_string().contains("Paris Trip"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripCards(pub Vec<TripCard>);

impl TripCards {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of cards in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the card at the given index.
    pub fn get(&self, index: usize) -> Option<&TripCard> {
        self.0.get(index)
    }

    /// Get an iterator over the cards.
    pub fn iter(&self) -> std::slice::Iter<'_, TripCard> {
        self.0.iter()
    }
}

impl Index<usize> for TripCards {
    type Output = TripCard;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a TripCards {
    type Item = &'a TripCard;
    type IntoIter = std::slice::Iter<'a, TripCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TripCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "{NO_TRIPS}")
        } else {
            for card in &self.0 {
                write!(f, "{card}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a trip's waypoints.
pub struct Waypoints<'a>(pub &'a [Location]);

impl fmt::Display for Waypoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "{NO_WAYPOINTS}")
        } else {
            for location in self.0 {
                write!(f, "{location}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    #[test]
    fn test_empty_collections() {
        assert_eq!(TripCards::default().to_string(), format!("{NO_TRIPS}\n"));
        assert_eq!(Waypoints(&[]).to_string(), format!("{NO_WAYPOINTS}\n"));
    }

    #[test]
    fn test_waypoints_keep_order() {
        let stops = vec![
            Location::new(1, "First", "", Coordinate::new(1.0, 1.0)),
            Location::new(1, "Second", "", Coordinate::new(2.0, 2.0)),
        ];
        let output = Waypoints(&stops).to_string();
        let first = output.find("### First").unwrap();
        let second = output.find("### Second").unwrap();
        assert!(first < second);
    }
}
