//! Builder for creating and configuring TripBook instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::TripBook;
use crate::{
    db::Database,
    error::{Result, TripError},
};

/// Builder for creating and configuring TripBook instances.
#[derive(Debug, Clone)]
pub struct TripBookBuilder {
    database_path: Option<PathBuf>,
}

impl TripBookBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/havanah/trips.db` or `~/.local/share/havanah/trips.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the trip book, creating the database file and schema.
    ///
    /// # Errors
    ///
    /// Returns `TripError::FileSystem` if the parent directory cannot be
    /// created, `TripError::XdgDirectory` if no default location exists and
    /// `TripError::Database` if initialization fails.
    pub async fn build(self) -> Result<TripBook> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening trip database at {}", db_path.display());
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TripError>(())
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(TripBook::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("havanah")
            .place_data_file("trips.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}

impl Default for TripBookBuilder {
    fn default() -> Self {
        Self::new()
    }
}
