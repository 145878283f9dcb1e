//! Database operations and SQLite management for the facility directory.
//!
//! This module provides low-level database operations over the facility
//! schema. It handles the SQLite connection and schema setup, and provides
//! specialized query interfaces for providers, services and paths.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod path_queries;
pub mod provider_queries;
pub mod schema;
pub mod service_queries;

/// How long a statement waits on a locked database file before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Opens a database file with an explicit busy timeout.
    pub fn open<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection, busy_timeout)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection, DEFAULT_BUSY_TIMEOUT)
    }

    fn from_connection(connection: Connection, busy_timeout: Duration) -> Result<Self> {
        connection
            .busy_timeout(busy_timeout)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Executes a batch of SQL statements, such as a facility data script.
    ///
    /// The batch runs inside one transaction, so a failing statement leaves
    /// the database unchanged.
    pub fn execute_script(&mut self, sql: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute_batch(sql)
            .db_context("Failed to execute SQL script")?;

        tx.commit().db_context("Failed to commit transaction")
    }
}
