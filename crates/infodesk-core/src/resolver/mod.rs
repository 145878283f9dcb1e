//! Shortest-path resolution over stored facility paths.
//!
//! A path report runs in two strictly sequential stages against a
//! [`PathStore`]:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Selector     │    │  Materializer   │    │   PathOutcome   │
//! │ (fewest stops,  │───▶│ (ordered, dedup │───▶│ (Found /        │
//! │  lowest ID)     │    │  waypoints)     │    │  NoPathFound)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`selector`]: picks the path ID with the fewest segment rows
//! - [`materializer`]: loads that path's waypoints into a [`ResolvedPath`]
//! - [`orchestrator`]: composes both and classifies the outcome
//!
//! "Shortest" means fewest recorded stops. Stored paths carry no distance
//! or weight, and no search over individual edges is performed.
//!
//! # Examples
//!
//! ```rust
//! use infodesk_core::{resolver::resolve_and_describe, Database};
//!
//! # fn example() -> infodesk_core::Result<()> {
//! let mut db = Database::open_in_memory()?;
//! db.execute_script(
//!     "INSERT INTO Location VALUES (1, 'Lobby', '1'), (2, 'Clinic', '2');
//!      INSERT INTO Path VALUES (1, 'Lobby', 'Clinic');
//!      INSERT INTO PathContains VALUES (1, 1, 1), (1, 2, 2);",
//! )?;
//!
//! let outcome = resolve_and_describe(&db, "Lobby", "Clinic")?;
//! assert_eq!(outcome.path().map(|p| p.nodes.len()), Some(2));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [`ResolvedPath`]: crate::models::ResolvedPath

use crate::{
    error::Result,
    models::{PathNode, PathSegmentCount},
};

pub mod materializer;
pub mod orchestrator;
pub mod selector;


pub use materializer::materialize_path;
pub use orchestrator::resolve_and_describe;
pub use selector::select_shortest_path_id;

/// Read-only storage queries needed to resolve a path.
///
/// Implementations bind `start`, `end` and `path_id` as query parameters and
/// must report storage failures as errors rather than as empty results.
pub trait PathStore {
    /// Returns every path whose start and end exactly match the given names,
    /// with the number of segment rows recorded for each.
    ///
    /// Paths without any segment rows are not returned. No ordering is
    /// guaranteed.
    fn path_segment_counts(&self, start: &str, end: &str) -> Result<Vec<PathSegmentCount>>;

    /// Returns the waypoints of one path, ascending by path order.
    fn path_waypoints(&self, path_id: i64) -> Result<Vec<PathNode>>;
}

impl<T: PathStore + ?Sized> PathStore for &T {
    fn path_segment_counts(&self, start: &str, end: &str) -> Result<Vec<PathSegmentCount>> {
        (**self).path_segment_counts(start, end)
    }

    fn path_waypoints(&self, path_id: i64) -> Result<Vec<PathNode>> {
        (**self).path_waypoints(path_id)
    }
}
