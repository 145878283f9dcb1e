//! Materialization of a selected path into display-ready waypoints.

use log::warn;

use super::PathStore;
use crate::{error::Result, models::ResolvedPath};

/// Loads the waypoints of `path_id` into a [`ResolvedPath`].
///
/// Rows keep the order the store returned them in. A row identical to one
/// already appended is dropped. Returns `None` if the path has no waypoints.
///
/// `start` and `end` are carried into the result for display and are not
/// checked against the waypoints.
pub fn materialize_path<S: PathStore>(
    store: &S,
    path_id: i64,
    start: &str,
    end: &str,
) -> Result<Option<ResolvedPath>> {
    let rows = store.path_waypoints(path_id)?;
    if rows.is_empty() {
        return Ok(None);
    }

    let mut path = ResolvedPath::new(path_id, start, end);
    for node in rows {
        if let Some(last) = path.nodes.last() {
            if node.order < last.order {
                warn!(
                    "Path {path_id} returned order {} after {}; keeping retrieval order",
                    node.order, last.order
                );
            }
        }
        path.push_node(node);
    }

    Ok(Some(path))
}
