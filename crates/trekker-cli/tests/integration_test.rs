//! CLI output matches the core Display implementations it is built from.

use std::process::Command;

use trekker_core::{
    display::{TripCards, TripOverview},
    models::TripCard,
    TripDb, TripDbBuilder, TripStore,
};
use tempfile::TempDir;

async fn create_test_store() -> (TripDb, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let store = TripDbBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create store");

    (store, temp_dir)
}

/// Run a CLI command as user 7 and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trekker"));
    cmd.env_remove("TREKKER_USER")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .arg("--user")
        .arg("7");

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_trip_list_matches_card_display() {
    let (store, temp_dir) = create_test_store().await;
    let db_path = store.database_path().to_str().unwrap().to_string();

    run_cli_command(&db_path, &["trip", "create", "Paris Trip", "15/06/2024", "30/06/2024"]);
    run_cli_command(&db_path, &["trip", "create", "Nice", "01/07/2024", "04/07/2024"]);

    let trips = store.trips_by_user(7).await.unwrap();
    assert_eq!(trips.len(), 2);

    let tz = jiff::tz::TimeZone::system();
    let cards = TripCards(
        trips
            .iter()
            .enumerate()
            .map(|(index, trip)| TripCard::from_trip(trip, index, &tz))
            .collect(),
    );

    let output = run_cli_command(&db_path, &["trip", "list"]);
    assert_eq!(output, format!("# Trips\n\n{cards}"));
    drop(temp_dir);
}

#[tokio::test]
async fn test_trip_show_matches_overview_display() {
    let (store, _temp_dir) = create_test_store().await;
    let db_path = store.database_path().to_str().unwrap().to_string();

    run_cli_command(&db_path, &["trip", "create", "Bretagne", "01/07/2024", "10/07/2024"]);
    run_cli_command(&db_path, &["location", "add", "1", "48.649", "-2.0257", "Saint-Malo"]);

    let trip = store.trip_by_id(1).await.unwrap().unwrap();
    let locations = store.trip_locations(1).await.unwrap();
    let expected = TripOverview {
        trip: &trip,
        locations: &locations,
    }
    .to_string();

    assert_eq!(run_cli_command(&db_path, &["trip", "show", "1"]), expected);
}
