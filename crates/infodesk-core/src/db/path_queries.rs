//! Path queries backing shortest-path resolution.

use log::debug;
use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{PathNode, PathSegmentCount},
    resolver::PathStore,
};

const SELECT_PATH_SEGMENT_COUNTS_SQL: &str = "SELECT p.PathID, COUNT(*) FROM Path p JOIN PathContains pc ON pc.PathID = p.PathID WHERE p.PathStart = ?1 AND p.PathEnd = ?2 GROUP BY p.PathID";
const SELECT_PATH_WAYPOINTS_SQL: &str = "SELECT pc.PathOrder, l.LocationName, l.FloorID FROM PathContains pc JOIN Location l ON l.LocationID = pc.LocationID WHERE pc.PathID = ?1 ORDER BY pc.PathOrder ASC, pc.rowid ASC";

impl PathStore for super::Database {
    fn path_segment_counts(&self, start: &str, end: &str) -> Result<Vec<PathSegmentCount>> {
        debug!("Counting path segments from {start:?} to {end:?}");

        let mut stmt = self
            .connection
            .prepare(SELECT_PATH_SEGMENT_COUNTS_SQL)
            .db_context("Failed to prepare path count query")?;

        let counts = stmt
            .query_map(params![start, end], |row| {
                Ok(PathSegmentCount {
                    path_id: row.get(0)?,
                    segment_count: row.get(1)?,
                })
            })
            .db_context("Failed to query path counts")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read path counts")?;

        Ok(counts)
    }

    fn path_waypoints(&self, path_id: i64) -> Result<Vec<PathNode>> {
        debug!("Loading waypoints for path {path_id}");

        let mut stmt = self
            .connection
            .prepare(SELECT_PATH_WAYPOINTS_SQL)
            .db_context("Failed to prepare waypoint query")?;

        let nodes = stmt
            .query_map(params![path_id], |row| {
                Ok(PathNode {
                    order: row.get(0)?,
                    location: row.get(1)?,
                    floor: row.get(2)?,
                })
            })
            .db_context("Failed to query waypoints")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read waypoints")?;

        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn seeded_db() -> Database {
        let mut db = Database::open_in_memory().expect("Failed to open database");
        db.execute_script(
            "INSERT INTO Location VALUES (1, 'Lobby', '1'), (2, 'Hall', '1'), (3, 'Clinic', '2');
             INSERT INTO Path VALUES (10, 'Lobby', 'Clinic'), (11, 'Lobby', 'Clinic'), (12, 'Lobby', 'Clinic');
             INSERT INTO PathContains VALUES (10, 1, 1), (10, 2, 2), (10, 3, 3);
             INSERT INTO PathContains VALUES (11, 3, 2), (11, 1, 1);",
        )
        .expect("Failed to seed database");
        db
    }

    #[test]
    fn test_segment_counts_skip_paths_without_segments() {
        let db = seeded_db();

        let mut counts = db
            .path_segment_counts("Lobby", "Clinic")
            .expect("Failed to count segments");
        counts.sort_by_key(|c| c.path_id);

        assert_eq!(
            counts,
            vec![PathSegmentCount::new(10, 3), PathSegmentCount::new(11, 2)]
        );
    }

    #[test]
    fn test_segment_counts_use_exact_match() {
        let db = seeded_db();

        let counts = db
            .path_segment_counts("lobby", "Clinic ")
            .expect("Failed to count segments");
        assert!(counts.is_empty());
    }

    #[test]
    fn test_waypoints_are_ordered_by_path_order() {
        let db = seeded_db();

        let nodes = db.path_waypoints(11).expect("Failed to load waypoints");
        assert_eq!(
            nodes,
            vec![PathNode::new(1, "Lobby", "1"), PathNode::new(2, "Clinic", "2")]
        );
    }

    #[test]
    fn test_waypoints_for_unknown_path_are_empty() {
        let db = seeded_db();
        assert!(db.path_waypoints(99).expect("Failed to query").is_empty());
    }
}
