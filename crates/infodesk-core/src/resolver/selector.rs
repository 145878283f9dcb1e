//! Selection of the shortest stored path between two locations.

use log::debug;

use super::PathStore;
use crate::error::Result;

/// Returns the ID of the stored path from `start` to `end` with the fewest
/// segments, or `None` when no stored path connects them.
///
/// Ties on segment count go to the lowest path ID, so the answer does not
/// depend on the order in which the store returns candidates. Names are
/// compared exactly as given.
pub fn select_shortest_path_id<S: PathStore>(
    store: &S,
    start: &str,
    end: &str,
) -> Result<Option<i64>> {
    let candidates = store.path_segment_counts(start, end)?;

    let selected = candidates
        .iter()
        .min_by_key(|candidate| candidate.selection_key())
        .map(|candidate| candidate.path_id);

    debug!(
        "Selected path {selected:?} from {} candidate(s) for {start:?} -> {end:?}",
        candidates.len()
    );

    Ok(selected)
}
