//! Display formatting for reports and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown that the CLI renders either richly or as plain text.
//! Operation outcomes that need extra context are wrapped in the types from
//! [`results`] and [`status`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result Wrappers │    │    Markdown     │
//! │ (Provider, Path)│───▶│ (UpdateResult,  │───▶│     Output      │
//! │                 │    │  OperationStatus│    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use infodesk_core::models::{PathNode, ResolvedPath};
//!
//! let mut path = ResolvedPath::new(2, "Lobby", "Clinic");
//! path.push_node(PathNode::new(1, "Lobby", "1"));
//! path.push_node(PathNode::new(2, "Clinic", "2"));
//!
//! let output = path.to_string();
//! assert!(output.contains("- Start: Lobby"));
//! assert!(output.contains("| 2 | Clinic | 2 |"));
//! ```

pub mod models;
pub mod results;
pub mod status;

pub use results::UpdateResult;
pub use status::{OperationStatus, StatusKind};
