//! Path models used by shortest-path resolution.

use serde::{Deserialize, Serialize};

/// One candidate path for a `(start, end)` pair and its number of stops.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathSegmentCount {
    /// Identifier of the stored path
    pub path_id: i64,

    /// Number of segment rows recorded for the path
    pub segment_count: i64,
}

impl PathSegmentCount {
    pub fn new(path_id: i64, segment_count: i64) -> Self {
        Self {
            path_id,
            segment_count,
        }
    }

    /// Ordering key for selection: fewest stops first, then lowest ID.
    pub(crate) fn selection_key(&self) -> (i64, i64) {
        (self.segment_count, self.path_id)
    }
}

/// A display-ready waypoint on a path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PathNode {
    /// Position of the stop within its path
    pub order: i64,

    /// Name of the location at this stop
    pub location: String,

    /// Floor of the location at this stop
    pub floor: String,
}

impl PathNode {
    pub fn new(order: i64, location: impl Into<String>, floor: impl Into<String>) -> Self {
        Self {
            order,
            location: location.into(),
            floor: floor.into(),
        }
    }
}

/// A selected path with its waypoints, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Identifier of the selected path
    pub path_id: i64,

    /// Start location name as requested
    pub start: String,

    /// End location name as requested
    pub end: String,

    /// Waypoints in the order they were retrieved
    pub nodes: Vec<PathNode>,
}

impl ResolvedPath {
    /// Creates a path with no waypoints yet.
    pub fn new(path_id: i64, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            path_id,
            start: start.into(),
            end: end.into(),
            nodes: Vec::new(),
        }
    }

    /// Appends a waypoint unless an identical one is already present.
    ///
    /// Returns `true` when the node was appended.
    pub fn push_node(&mut self, node: PathNode) -> bool {
        if self.nodes.contains(&node) {
            return false;
        }
        self.nodes.push(node);
        true
    }
}

/// Result of resolving a path between two named locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PathOutcome {
    /// A stored path was selected and materialized
    Found(ResolvedPath),
    /// No stored path connects the two locations
    NoPathFound { start: String, end: String },
}

impl PathOutcome {
    /// Returns the resolved path, if one was found.
    pub fn path(&self) -> Option<&ResolvedPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPathFound { .. } => None,
        }
    }

    /// Returns true if no path connects the requested locations.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}
