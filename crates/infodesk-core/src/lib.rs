//! Core library for the Infodesk hospital facility directory.
//!
//! This crate provides the reports and updates behind the `infodesk` tool:
//! provider and service lookups, service relocation, and shortest-path
//! resolution between named locations over paths stored in the facility
//! database.
//!
//! # Layout
//!
//! - [`db`]: SQLite connection, schema and parameter-bound queries
//! - [`resolver`]: path selection and materialization over a [`PathStore`]
//! - [`directory`]: async facade used by interfaces
//! - [`models`] and [`display`]: domain types and their markdown rendering
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use infodesk_core::{params::PathQuery, DirectoryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = DirectoryBuilder::new()
//!     .with_database_path(Some("facility.db"))
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

pub mod db;
pub mod directory;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod resolver;

// Re-export commonly used types
pub use db::Database;
pub use directory::{Directory, DirectoryBuilder};
pub use display::{OperationStatus, UpdateResult};
pub use error::{DirectoryError, Result};
pub use models::{
    Location, PathNode, PathOutcome, PathSegmentCount, Provider, ResolvedPath, Service,
};
pub use params::{LoadScript, PathQuery, ProviderLookup, ServiceLookup, UpdateServiceLocation};
pub use resolver::{materialize_path, resolve_and_describe, select_shortest_path_id, PathStore};
