//! The create-a-trip form.

use jiff::{tz::TimeZone, Timestamp};

use super::{Alert, ScreenError};
use crate::{
    dates::parse_day_month_year,
    error::TripError,
    models::{Trip, DEFAULT_DESTINATION_ID},
    scope::ScreenScope,
    session::{require_user, Session},
    store::TripStore,
};

pub const NAME_REQUIRED: &str = "Veuillez entrer un nom pour le voyage";
pub const DATES_REQUIRED: &str = "Veuillez spécifier les dates de début et de fin";
pub const INVALID_DATE: &str = "Format de date invalide. Utilisez le format JJ/MM/AAAA";
pub const END_BEFORE_START: &str = "La date de fin doit être après la date de début";
pub const SIGN_IN_REQUIRED: &str = "Vous devez être connecté pour créer un voyage";
pub const CREATE_FAILED: &str = "Une erreur est survenue lors de la création du voyage";
pub const TRIP_CREATED: &str = "Votre voyage a été créé avec succès";

/// Form state for creating a trip.
///
/// Dates are typed as `JJ/MM/AAAA` and interpreted as local midnight in the
/// form's time zone.
#[derive(Debug)]
pub struct TripCreation {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    alert: Option<Alert>,
    tz: TimeZone,
    scope: ScreenScope,
}

impl TripCreation {
    /// An empty form using the system time zone.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            alert: None,
            tz: TimeZone::system(),
            scope: ScreenScope::new(),
        }
    }

    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }

    /// Fills in all three fields at once.
    pub fn with_fields(
        mut self,
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.start_date = start_date.into();
        self.end_date = end_date.into();
        self
    }

    /// Handle the host uses to cancel the screen.
    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// The last message shown to the user.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Validates the form and creates the trip for the signed-in user.
    ///
    /// On success the fields are cleared and the created trip is returned.
    /// On failure the fields are left as typed so the user can fix them.
    ///
    /// # Errors
    ///
    /// * `ScreenError::Validation` - missing name or dates, unparseable date,
    ///   end before start, or nobody signed in. The store is not called.
    /// * `ScreenError::Persistence` - the store failed or returned no trip
    /// * `ScreenError::Cancelled` - the screen was closed first
    pub async fn submit<S>(&mut self, session: &Session, store: &S) -> Result<Trip, ScreenError>
    where
        S: TripStore + ?Sized,
    {
        let result = self.create(session, store).await;
        match &result {
            Ok(_) => {
                self.name.clear();
                self.start_date.clear();
                self.end_date.clear();
                self.alert = Some(Alert::success(TRIP_CREATED));
            }
            Err(ScreenError::Cancelled) => {}
            Err(e) => self.alert = e.alert(),
        }
        result
    }

    fn validated_dates(&self) -> Result<(Timestamp, Timestamp), ScreenError> {
        if self.name.trim().is_empty() {
            return Err(ScreenError::Validation(NAME_REQUIRED.to_string()));
        }
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err(ScreenError::Validation(DATES_REQUIRED.to_string()));
        }

        let start = parse_day_month_year(&self.start_date, &self.tz);
        let end = parse_day_month_year(&self.end_date, &self.tz);
        let (Some(start), Some(end)) = (start, end) else {
            return Err(ScreenError::Validation(INVALID_DATE.to_string()));
        };

        if end < start {
            return Err(ScreenError::Validation(END_BEFORE_START.to_string()));
        }
        Ok((start, end))
    }

    async fn create<S>(&self, session: &Session, store: &S) -> Result<Trip, ScreenError>
    where
        S: TripStore + ?Sized,
    {
        let (start, end) = self.validated_dates()?;
        let user = require_user(session)
            .map_err(|_| ScreenError::Validation(SIGN_IN_REQUIRED.to_string()))?;

        let created = self
            .scope
            .run(store.create_trip(user.id, DEFAULT_DESTINATION_ID, &self.name, start, end))
            .await
            .ok_or(ScreenError::Cancelled)?;

        match created {
            Ok(Some(trip)) => {
                log::info!("Created trip {} for user {}", trip.id, user.id);
                Ok(trip)
            }
            Ok(None) => {
                log::error!("Trip store returned no trip for user {}", user.id);
                Err(ScreenError::persistence(CREATE_FAILED, None::<TripError>))
            }
            Err(e) => {
                log::error!("Failed to create trip: {e}");
                Err(ScreenError::persistence(CREATE_FAILED, e))
            }
        }
    }
}

impl Default for TripCreation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::{models::User, screens::testing::RecordingStore};

    fn form(name: &str, start: &str, end: &str) -> TripCreation {
        TripCreation::new()
            .with_time_zone(TimeZone::UTC)
            .with_fields(name, start, end)
    }

    fn validation_message(result: Result<Trip, ScreenError>) -> String {
        match result {
            Err(ScreenError::Validation(message)) => message,
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_paris_trip_spans_fifteen_days() {
        let session = Session::signed_in(User::new(7));
        let store = RecordingStore::new();
        let mut screen = form("Paris Trip", "15/06/2024", "30/06/2024");

        let trip = screen.submit(&session, &store).await.unwrap();

        assert_eq!(trip.name, "Paris Trip");
        assert_eq!(trip.user_id, 7);
        assert_eq!(trip.destination_id, DEFAULT_DESTINATION_ID);
        assert_eq!(trip.start_date.to_string(), "2024-06-15T00:00:00Z");
        assert_eq!(trip.duration_days(), 15);
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_confirms() {
        let session = Session::signed_in(User::new(7));
        let store = RecordingStore::new();
        let mut screen = form("  Lisbonne ", "01/05/2024", "03/05/2024");

        let trip = screen.submit(&session, &store).await.unwrap();

        // Passed through as typed
        assert_eq!(trip.name, "  Lisbonne ");
        assert!(screen.name.is_empty());
        assert!(screen.start_date.is_empty());
        assert!(screen.end_date.is_empty());
        assert_eq!(screen.alert(), Some(&Alert::success(TRIP_CREATED)));
    }

    #[tokio::test]
    async fn test_end_before_start_never_reaches_store() {
        let session = Session::signed_in(User::new(7));
        let store = RecordingStore::new();
        let mut screen = form("Paris Trip", "15/06/2024", "10/06/2024");

        let message = validation_message(screen.submit(&session, &store).await);

        assert_eq!(message, END_BEFORE_START);
        assert_eq!(store.calls(), 0);
        assert_eq!(screen.end_date, "10/06/2024");
        assert_eq!(screen.alert(), Some(&Alert::error(END_BEFORE_START)));
    }

    #[tokio::test]
    async fn test_same_day_trip_is_accepted() {
        let session = Session::signed_in(User::new(1));
        let store = RecordingStore::new();
        let mut screen = form("Aller-retour", "15/06/2024", "15/06/2024");

        let trip = screen.submit(&session, &store).await.unwrap();
        assert_eq!(trip.duration_days(), 0);
    }

    #[tokio::test]
    async fn test_validation_order() {
        let session = Session::signed_in(User::new(7));
        let store = RecordingStore::new();

        let cases = [
            ("   ", "", "", NAME_REQUIRED),
            ("Rome", "", "20/06/2024", DATES_REQUIRED),
            ("Rome", "15/06/2024", "", DATES_REQUIRED),
            ("Rome", "15-06-2024", "20/06/2024", INVALID_DATE),
            ("Rome", "15/06/2024", "vingt/06/2024", INVALID_DATE),
            ("Rome", "15/06", "20/06/2024", INVALID_DATE),
        ];
        for (name, start, end, expected) in cases {
            let mut screen = form(name, start, end);
            let message = validation_message(screen.submit(&session, &store).await);
            assert_eq!(message, expected, "for {name:?} {start:?} {end:?}");
        }
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_rolled_over_dates_are_accepted() {
        let session = Session::signed_in(User::new(7));
        let store = RecordingStore::new();
        let mut screen = form("Été", "31/06/2024", "02/07/2024");

        let trip = screen.submit(&session, &store).await.unwrap();
        assert_eq!(trip.start_date.to_string(), "2024-07-01T00:00:00Z");
        assert_eq!(trip.duration_days(), 1);
    }

    #[tokio::test]
    async fn test_requires_signed_in_user() {
        let session = Session::new();
        let store = RecordingStore::new();
        let mut screen = form("Paris Trip", "15/06/2024", "30/06/2024");

        let message = validation_message(screen.submit(&session, &store).await);

        assert_eq!(message, SIGN_IN_REQUIRED);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_keeps_fields() {
        let session = Session::signed_in(User::new(7));
        let store = RecordingStore::failing();
        let mut screen = form("Paris Trip", "15/06/2024", "30/06/2024");

        let err = screen.submit(&session, &store).await.unwrap_err();

        assert!(matches!(err, ScreenError::Persistence { source: Some(_), .. }));
        assert_eq!(err.to_string(), CREATE_FAILED);
        assert_eq!(screen.name, "Paris Trip");
        assert_eq!(screen.start_date, "15/06/2024");
        assert_eq!(screen.alert(), Some(&Alert::error(CREATE_FAILED)));
    }

    #[tokio::test]
    async fn test_declined_create_is_a_failure() {
        let session = Session::signed_in(User::new(7));
        let store = RecordingStore::new();
        store.decline_create.store(true, Ordering::SeqCst);
        let mut screen = form("Paris Trip", "15/06/2024", "30/06/2024");

        let err = screen.submit(&session, &store).await.unwrap_err();

        assert!(matches!(err, ScreenError::Persistence { source: None, .. }));
        assert_eq!(screen.name, "Paris Trip");
    }

    #[tokio::test]
    async fn test_cancelled_screen_does_not_submit() {
        let session = Session::signed_in(User::new(7));
        let store = RecordingStore::new();
        let mut screen = form("Paris Trip", "15/06/2024", "30/06/2024");
        screen.scope().cancel();

        let err = screen.submit(&session, &store).await.unwrap_err();

        assert!(matches!(err, ScreenError::Cancelled));
        assert_eq!(store.calls(), 0);
        assert_eq!(screen.name, "Paris Trip");
        assert!(screen.alert().is_none());
    }
}
