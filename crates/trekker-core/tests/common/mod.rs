use tempfile::TempDir;
use trekker_core::{TripDb, TripDbBuilder};

/// Helper function to create a store backed by a fresh database file
pub async fn create_test_store() -> (TempDir, TripDb) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = TripDbBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}
