use crate::cli::support::{routefinder, write_map, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Error reporting and exit codes
// ============================================================================

#[test]
fn test_unknown_village_exits_with_data_error() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .arg("search")
        .arg(&map)
        .args(["--from", "A", "--to", "Z"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown village: Z"))
        .stderr(predicate::str::contains("hint: `routefinder villages <MAP>`"));
}

#[test]
fn test_malformed_row_reports_line() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", "2\nA\tB\t2\nA\tB\tfar\n");

    routefinder()
        .arg("villages")
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed row at line 3"))
        .stderr(predicate::str::contains("hint:").not());
}

#[test]
fn test_header_count_mismatch() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", "5\nA\tB\t2\n");

    routefinder()
        .arg("distances")
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed map header"));
}

#[test]
fn test_missing_map_file() {
    let dir = tempdir().unwrap();

    routefinder()
        .arg("villages")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    let output = routefinder()
        .args(["--format", "json", "search"])
        .arg(&map)
        .args(["--from", "nowhere", "--to", "C"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_node");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_json_usage_error_envelope() {
    let output = routefinder()
        .args(["--format", "json", "search", "map.txt", "--from", "A"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .args(["--quiet", "search"])
        .arg(&map)
        .args(["--from", "A", "--to", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
