use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn trekker_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("trekker").expect("Failed to find trekker binary");
    cmd.env_remove("TREKKER_USER")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn create_paris_trip(temp_dir: &TempDir) {
    trekker_cmd(temp_dir)
        .args(["--user", "7", "trip", "create", "Paris Trip", "15/06/2024", "30/06/2024"])
        .assert()
        .success();
}

#[test]
fn test_cli_create_trip_success() {
    let temp_dir = create_cli_test_environment();

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "trip", "create", "Paris Trip", "15/06/2024", "30/06/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created trip with ID: 1"))
        .stdout(predicate::str::contains("# 1. Paris Trip"))
        .stdout(predicate::str::contains("- Duration: 15 days"))
        .stdout(predicate::str::contains(
            "Success: Votre voyage a été créé avec succès",
        ));
}

#[test]
fn test_cli_create_trip_end_before_start() {
    let temp_dir = create_cli_test_environment();

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "trip", "create", "Paris Trip", "15/06/2024", "10/06/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: La date de fin doit être après la date de début",
        ));

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vous n'avez pas encore de voyages"));
}

#[test]
fn test_cli_create_trip_invalid_date() {
    let temp_dir = create_cli_test_environment();

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "trip", "c", "Rome", "2024-06-15", "20/06/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Utilisez le format JJ/MM/AAAA"));
}

#[test]
fn test_cli_create_trip_requires_user() {
    let temp_dir = create_cli_test_environment();

    trekker_cmd(&temp_dir)
        .args(["trip", "create", "Paris Trip", "15/06/2024", "30/06/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Vous devez être connecté pour créer un voyage",
        ));
}

#[test]
fn test_cli_user_from_environment() {
    let temp_dir = create_cli_test_environment();

    trekker_cmd(&temp_dir)
        .env("TREKKER_USER", "7")
        .args(["trip", "create", "Lyon", "01/03/2024", "02/03/2024"])
        .assert()
        .success();

    trekker_cmd(&temp_dir)
        .args(["--user", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Lyon (ID: 1)"));
}

#[test]
fn test_cli_list_trips() {
    let temp_dir = create_cli_test_environment();
    create_paris_trip(&temp_dir);

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "trip", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trips"))
        .stdout(predicate::str::contains("## Paris Trip (ID: 1)"))
        .stdout(predicate::str::contains("15 juin 2024 - 30 juin 2024"))
        .stdout(predicate::str::contains("15 jours"));

    trekker_cmd(&temp_dir)
        .args(["--user", "8", "trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vous n'avez pas encore de voyages"));
}

#[test]
fn test_cli_list_without_user_is_empty() {
    let temp_dir = create_cli_test_environment();
    create_paris_trip(&temp_dir);

    trekker_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Vous n'avez pas encore de voyages"));
}

#[test]
fn test_cli_add_location_and_show() {
    let temp_dir = create_cli_test_environment();
    create_paris_trip(&temp_dir);

    trekker_cmd(&temp_dir)
        .args([
            "--user",
            "7",
            "location",
            "add",
            "1",
            "48.8584",
            "2.2945",
            "Tour Eiffel",
            "-d",
            "Sommet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added waypoint to trip 1"))
        .stdout(predicate::str::contains(
            "Success: Nouvelle étape ajoutée au voyage",
        ));

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "trip", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Paris Trip"))
        .stdout(predicate::str::contains("## Waypoints"))
        .stdout(predicate::str::contains("### Tour Eiffel"))
        .stdout(predicate::str::contains("48.858400, 2.294500"))
        .stdout(predicate::str::contains("Sommet"));
}

#[test]
fn test_cli_add_location_negative_coordinates() {
    let temp_dir = create_cli_test_environment();
    create_paris_trip(&temp_dir);

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "loc", "a", "1", "-22.9519", "-43.2105", "Corcovado"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Corcovado"))
        .stdout(predicate::str::contains("Aucune description"));
}

#[test]
fn test_cli_add_location_out_of_range() {
    let temp_dir = create_cli_test_environment();
    create_paris_trip(&temp_dir);

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "location", "add", "1", "91", "0", "Pôle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("latitude"));
}

#[test]
fn test_cli_show_missing_trip() {
    let temp_dir = create_cli_test_environment();

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "trip", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Voyage introuvable"));
}

#[test]
fn test_cli_add_location_missing_trip() {
    let temp_dir = create_cli_test_environment();

    trekker_cmd(&temp_dir)
        .args(["--user", "7", "location", "add", "42", "1", "1", "Nulle part"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Voyage introuvable"));
}

#[test]
fn test_cli_show_requires_user() {
    let temp_dir = create_cli_test_environment();
    create_paris_trip(&temp_dir);

    trekker_cmd(&temp_dir)
        .args(["trip", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user is signed in"));
}
