use infodesk_core::Database;
use tempfile::NamedTempFile;

/// Locations, providers, services and paths shared by the integration tests.
///
/// Lobby -> Clinic has two stored paths: path 1 with three stops and path 2
/// with two. Lobby -> Radiology has path 7 with two stops and path 4 with
/// four segment rows, one of them a duplicate.
pub const FACILITY_SQL: &str = "
INSERT INTO Location VALUES
    (1, 'Lobby', '1'), (2, 'Hall', '1'), (3, 'Clinic', '2'),
    (4, 'Radiology', 'B1'), (5, 'Elevator', '1'), (6, 'Pharmacy', '1');
INSERT INTO Path VALUES
    (1, 'Lobby', 'Clinic'), (2, 'Lobby', 'Clinic'),
    (7, 'Lobby', 'Radiology'), (4, 'Lobby', 'Radiology');
INSERT INTO PathContains VALUES (1, 1, 1), (1, 2, 2), (1, 3, 3);
INSERT INTO PathContains VALUES (2, 1, 1), (2, 3, 2);
INSERT INTO PathContains VALUES (7, 1, 1), (7, 4, 2);
INSERT INTO PathContains VALUES (4, 1, 1), (4, 5, 2), (4, 5, 2), (4, 4, 3);
";

/// Helper function to create a temporary database loaded with facility data
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let mut db = Database::new(temp_file.path()).expect("Failed to create test database");
    db.execute_script(FACILITY_SQL)
        .expect("Failed to load facility data");
    (temp_file, db)
}
