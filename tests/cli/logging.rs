use crate::cli::support::{routefinder, write_map, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .args(["--log-level", "debug", "villages"])
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("route_map"));
}

#[test]
fn test_default_level_is_silent() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .arg("villages")
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_shows_search_progress() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .args(["--verbose", "search"])
        .arg(&map)
        .args(["--from", "A", "--to", "C"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search_complete"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_structured_lines() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    let output = routefinder()
        .args(["--log-level", "debug", "--log-json", "villages"])
        .arg(&map)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("expected log output");
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}

#[test]
fn test_routefinder_log_env_filter() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .env("ROUTEFINDER_LOG", "routefinder_core=debug")
        .arg("villages")
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::contains("ingest"))
        .stderr(predicate::str::contains("parse_args").not());
}
