//! Builder for creating and configuring Directory instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use tokio::task;

use super::Directory;
use crate::{
    db::{Database, DEFAULT_BUSY_TIMEOUT},
    error::{DirectoryError, Result},
};

/// Builder for creating and configuring Directory instances.
#[derive(Debug, Clone)]
pub struct DirectoryBuilder {
    database_path: Option<PathBuf>,
    busy_timeout: Duration,
}

impl DirectoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/infodesk/infodesk.db` or
    /// `~/.local/share/infodesk/infodesk.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how long a statement waits on a locked database file.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Opens the database and builds the directory.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::FileSystem` if the database path is invalid
    /// Returns `DirectoryError::Database` if database initialization fails
    pub async fn build(self) -> Result<Directory> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DirectoryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening facility database at {}", db_path.display());

        let db_path_clone = db_path.clone();
        let busy_timeout = self.busy_timeout;
        let db = task::spawn_blocking(move || Database::open(&db_path_clone, busy_timeout))
            .await
            .map_err(|e| DirectoryError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Directory::new(db_path, db))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("infodesk")
            .place_data_file("infodesk.db")
            .map_err(|e| DirectoryError::XdgDirectory(e.to_string()))
    }
}

impl Default for DirectoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
