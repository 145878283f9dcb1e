//! Error types for the directory library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all directory operations.
///
/// A path or record that simply does not exist is not an error: lookups
/// return `Option` and path resolution returns
/// [`PathOutcome::NoPathFound`](crate::models::PathOutcome::NoPathFound).
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A path was selected but none of its waypoints could be retrieved
    #[error("Path {path_id} was selected but has no retrievable waypoints")]
    ConsistencyAnomaly { path_id: i64 },
    /// Service not found for the given name
    #[error("Service '{name}' not found")]
    ServiceNotFound { name: String },
    /// Location not found for the given name
    #[error("Location '{name}' not found")]
    LocationNotFound { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DirectoryError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates a new input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error originated in the storage layer.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Database { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DirectoryError::database_error(message, e))
    }
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
