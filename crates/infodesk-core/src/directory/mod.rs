//! High-level directory API for facility reports and updates.
//!
//! [`Directory`] is the async entry point used by interfaces. It owns the
//! single database connection for the session and runs every blocking
//! SQLite call on tokio's blocking pool.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Directory     │    │    Resolver     │    │    Database     │
//! │ (async facade,  │───▶│ (path selection │───▶│   (via db/)     │
//! │  params in)     │    │  & waypoints)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use infodesk_core::{params::PathQuery, DirectoryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = DirectoryBuilder::new()
//!     .with_database_path(Some("/var/lib/infodesk/facility.db"))
//!     .build()
//!     .await?;
//!
//! let outcome = directory
//!     .shortest_path(&PathQuery {
//!         start: "Lobby".to_string(),
//!         end: "Clinic".to_string(),
//!     })
//!     .await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tokio::task;

use crate::{
    db::Database,
    error::{DirectoryError, Result},
};

pub mod builder;
pub mod operations;


pub use builder::DirectoryBuilder;

/// Main directory interface for reports and updates.
pub struct Directory {
    db_path: PathBuf,
    db: Arc<Mutex<Database>>,
}

impl Directory {
    pub(crate) fn new(db_path: PathBuf, db: Database) -> Self {
        Self {
            db_path,
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Path of the database file backing this directory.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` against the shared connection on the blocking pool.
    async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || {
            let mut guard = db.lock().map_err(|_| DirectoryError::Configuration {
                message: "Database connection lock poisoned".to_string(),
            })?;
            f(&mut guard)
        })
        .await
        .map_err(|e| DirectoryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
