//! Data models for the facility directory.
//!
//! This module contains the domain models read from and written to the
//! facility database. Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay separate from
//! presentation.
//!
//! # Path Models
//!
//! A stored path is a path ID with start and end names
//! plus an ordered set of segment rows. Resolution works with two derived
//! shapes:
//!
//! - [`PathSegmentCount`]: one candidate path and how many stops it has
//! - [`PathNode`]: one display-ready `(order, location, floor)` waypoint
//!
//! and produces a [`PathOutcome`], which is either a [`ResolvedPath`] or a
//! clean "no path" answer.
//!
//! # Examples
//!
//! ```rust
//! use infodesk_core::models::{PathNode, ResolvedPath};
//!
//! let mut path = ResolvedPath::new(2, "Lobby", "Clinic");
//! assert!(path.push_node(PathNode::new(1, "Lobby", "1")));
//! assert!(!path.push_node(PathNode::new(1, "Lobby", "1")));
//! assert_eq!(path.nodes.len(), 1);
//! ```

pub mod location;
pub mod path;
pub mod provider;
pub mod service;


pub use location::Location;
pub use path::{PathNode, PathOutcome, PathSegmentCount, ResolvedPath};
pub use provider::Provider;
pub use service::Service;
