//! Builder for creating and configuring TripDb instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::TripDb;
use crate::{
    db::Database,
    error::{Result, TripError},
};

/// Builder for creating and configuring TripDb instances.
#[derive(Debug, Clone, Default)]
pub struct TripDbBuilder {
    database_path: Option<PathBuf>,
}

impl TripDbBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/trekker/trekker.db` or `~/.local/share/trekker/trekker.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `TripError::FileSystem` if the parent directory cannot be created
    /// Returns `TripError::Database` if database initialization fails
    pub async fn build(self) -> Result<TripDb> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .map_err(TripError::join)??;

        log::debug!("Trip database ready at {}", db_path.display());
        Ok(TripDb::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("trekker")
            .place_data_file("trekker.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}
