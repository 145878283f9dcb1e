use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FACILITY_SQL: &str = "
INSERT INTO Location VALUES (1, 'Lobby', '1'), (2, 'Hall', '1'), (3, 'Clinic', '2'), (4, 'West Wing', '3');
INSERT INTO Provider VALUES (1, 'Grace', 'Hopper');
INSERT INTO ProviderTitle VALUES (1, 'RN'), (1, 'NP');
INSERT INTO Office VALUES (1, 3);
INSERT INTO Services VALUES ('Radiology', 'Imaging');
INSERT INTO ResidesIn VALUES ('Radiology', 3);
INSERT INTO Path VALUES (1, 'Lobby', 'Clinic'), (2, 'Lobby', 'Clinic');
INSERT INTO PathContains VALUES (1, 1, 1), (1, 2, 2), (1, 3, 3);
INSERT INTO PathContains VALUES (2, 1, 1), (2, 3, 2);
";

/// Helper function to create a Command with --no-color flag for testing
fn infodesk_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("infodesk").expect("Failed to find infodesk binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Helper function to create a database loaded with facility data
fn create_loaded_database() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("cli_test.db");
    let script_path = temp_dir.path().join("facility.sql");
    std::fs::write(&script_path, FACILITY_SQL).expect("Failed to write script");

    infodesk_cmd(&db_path)
        .arg("load")
        .arg(&script_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Loaded"));

    (temp_dir, db_path)
}

#[test]
fn test_cli_path_report() {
    let (_temp_dir, db_path) = create_loaded_database();

    infodesk_cmd(&db_path)
        .args(["path", "Lobby", "Clinic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Path 2"))
        .stdout(predicate::str::contains("- Start: Lobby"))
        .stdout(predicate::str::contains("- End: Clinic"))
        .stdout(predicate::str::contains("| 1 | Lobby | 1 |"))
        .stdout(predicate::str::contains("| 2 | Clinic | 2 |"))
        .stdout(predicate::str::contains("Hall").not());
}

#[test]
fn test_cli_path_not_found_is_success() {
    let (_temp_dir, db_path) = create_loaded_database();

    infodesk_cmd(&db_path)
        .args(["path", "Lobby", "Pharmacy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from Lobby to Pharmacy."));
}

#[test]
fn test_cli_path_json() {
    let (_temp_dir, db_path) = create_loaded_database();

    let output = infodesk_cmd(&db_path)
        .args(["--json", "path", "Lobby", "Clinic"])
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(value["outcome"], "found");
    assert_eq!(value["path_id"], 2);
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_cli_provider_report() {
    let (_temp_dir, db_path) = create_loaded_database();

    infodesk_cmd(&db_path)
        .args(["provider", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- First Name: Grace"))
        .stdout(predicate::str::contains("- Title: RN, NP"))
        .stdout(predicate::str::contains("- Office Location: Clinic"));
}

#[test]
fn test_cli_unknown_provider() {
    let (_temp_dir, db_path) = create_loaded_database();

    infodesk_cmd(&db_path)
        .args(["provider", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No provider found with ID 99."));
}

#[test]
fn test_cli_update_service_then_report() {
    let (_temp_dir, db_path) = create_loaded_database();

    infodesk_cmd(&db_path)
        .args(["update-service", "Radiology", "West Wing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated service Radiology"));

    infodesk_cmd(&db_path)
        .args(["service", "Radiology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Location: West Wing"))
        .stdout(predicate::str::contains("- Floor: 3"));
}

#[test]
fn test_cli_update_unknown_location_fails() {
    let (_temp_dir, db_path) = create_loaded_database();

    infodesk_cmd(&db_path)
        .args(["update-service", "Radiology", "Basement"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Location 'Basement' not found"));
}

#[test]
fn test_cli_menu_session() {
    let (_temp_dir, db_path) = create_loaded_database();

    infodesk_cmd(&db_path)
        .write_stdin("2\nRadiology\n3\nLobby\nClinic\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 - Report Health Provider Information"))
        .stdout(predicate::str::contains("- Health Type: Imaging"))
        .stdout(predicate::str::contains("# Path 2"));
}

#[test]
fn test_cli_menu_continues_after_error() {
    let (_temp_dir, db_path) = create_loaded_database();

    infodesk_cmd(&db_path)
        .write_stdin("4\nRadiology\nBasement\n1\n1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Location 'Basement' not found"))
        .stdout(predicate::str::contains("- Last Name: Hopper"));
}
