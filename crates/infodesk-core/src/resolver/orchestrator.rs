//! Path report orchestration: selection followed by materialization.

use log::{debug, warn};

use super::{materialize_path, select_shortest_path_id, PathStore};
use crate::{
    error::{DirectoryError, Result},
    models::PathOutcome,
};

/// Resolves the shortest stored path from `start` to `end`.
///
/// # Errors
///
/// Returns `DirectoryError::Database` if either query fails. Returns
/// `DirectoryError::ConsistencyAnomaly` if a path is selected but has no
/// waypoints by the time it is loaded.
pub fn resolve_and_describe<S: PathStore>(
    store: &S,
    start: &str,
    end: &str,
) -> Result<PathOutcome> {
    let Some(path_id) = select_shortest_path_id(store, start, end)? else {
        debug!("No stored path from {start:?} to {end:?}");
        return Ok(PathOutcome::NoPathFound {
            start: start.to_string(),
            end: end.to_string(),
        });
    };

    match materialize_path(store, path_id, start, end)? {
        Some(path) => Ok(PathOutcome::Found(path)),
        None => {
            warn!("Path {path_id} was selected but returned no waypoints");
            Err(DirectoryError::ConsistencyAnomaly { path_id })
        }
    }
}
