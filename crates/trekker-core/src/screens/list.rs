//! The signed-in user's trips.

use jiff::tz::TimeZone;

use super::{Alert, ScreenError, TripRoute};
use crate::{
    display::TripCards,
    models::TripCard,
    scope::ScreenScope,
    session::Session,
    store::TripStore,
};

pub const LOAD_FAILED: &str = "Impossible de charger vos voyages";

/// Trip list state: a loading flag and one card per trip.
#[derive(Debug)]
pub struct TripList {
    loading: bool,
    cards: TripCards,
    alert: Option<Alert>,
    tz: TimeZone,
    scope: ScreenScope,
}

impl TripList {
    /// An empty list, formatting dates in the system time zone.
    pub fn new() -> Self {
        Self {
            loading: true,
            cards: TripCards::default(),
            alert: None,
            tz: TimeZone::system(),
            scope: ScreenScope::new(),
        }
    }

    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Cards in the order the store returned the trips.
    pub fn cards(&self) -> &TripCards {
        &self.cards
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Fetches the signed-in user's trips and rebuilds the cards.
    ///
    /// Without a signed-in user the list is emptied and the store is not
    /// called. A failed fetch also leaves the list empty and raises an alert,
    /// which the next successful load clears. If the screen is cancelled
    /// mid-fetch, nothing is changed.
    pub async fn load<S>(&mut self, session: &Session, store: &S) -> Result<(), ScreenError>
    where
        S: TripStore + ?Sized,
    {
        if self.scope.is_cancelled() {
            return Err(ScreenError::Cancelled);
        }

        let Some(user) = session.current_user() else {
            self.cards = TripCards::default();
            self.loading = false;
            self.alert = None;
            return Ok(());
        };

        let was_loading = std::mem::replace(&mut self.loading, true);
        let fetched = self.scope.run(store.trips_by_user(user.id)).await;
        self.loading = false;
        let Some(fetched) = fetched else {
            self.loading = was_loading;
            return Err(ScreenError::Cancelled);
        };
        self.alert = None;

        match fetched {
            Ok(trips) => {
                log::debug!("Loaded {} trips for user {}", trips.len(), user.id);
                self.cards = TripCards(
                    trips
                        .iter()
                        .enumerate()
                        .map(|(index, trip)| TripCard::from_trip(trip, index, &self.tz))
                        .collect(),
                );
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load trips for user {}: {e}", user.id);
                self.cards = TripCards::default();
                let err = ScreenError::persistence(LOAD_FAILED, e);
                self.alert = err.alert();
                Err(err)
            }
        }
    }

    /// Where tapping the card at `index` navigates.
    pub fn select(&self, index: usize) -> Option<TripRoute> {
        self.cards.get(index).map(|card| TripRoute { id: card.id })
    }

    /// Loads now, then reloads every time the session's user changes.
    ///
    /// Returns once the screen scope is cancelled or the session is gone.
    /// Failed reloads are reported through [`TripList::alert`] and do not
    /// stop watching.
    pub async fn watch<S>(&mut self, session: &Session, store: &S)
    where
        S: TripStore + ?Sized,
    {
        let scope = self.scope.clone();
        let mut changes = session.subscribe();

        if let Err(ScreenError::Cancelled) = self.load(session, store).await {
            return;
        }

        loop {
            tokio::select! {
                _ = scope.cancelled() => break,
                change = changes.changed() => {
                    if change.is_none() {
                        break;
                    }
                    if let Err(ScreenError::Cancelled) = self.load(session, store).await {
                        break;
                    }
                }
            }
        }
        log::debug!("Stopped watching session for trip list");
    }
}

impl Default for TripList {
    fn default() -> Self {
        Self::new()
    }
}
