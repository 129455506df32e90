use crate::cli::support::{routefinder, stdout_json, write_map, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Villages command tests
// ============================================================================

#[test]
fn test_villages_in_first_seen_order() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", "3\nmill\tford\t1\nford\tabbey\t2\n");

    routefinder()
        .arg("villages")
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("MILL\nFORD\nABBEY\n"))
        .stdout(predicate::str::contains("3 villages"));
}

#[test]
fn test_villages_quiet_omits_count() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .args(["--quiet", "villages"])
        .arg(&map)
        .assert()
        .success()
        .stdout("A\nB\nC\n");
}

#[test]
fn test_villages_json() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    let output = routefinder()
        .args(["--format", "json", "villages"])
        .arg(&map)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["count"], 3);
    assert_eq!(json["villages"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_villages_records() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .args(["--format", "records", "villages"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("H routefinder=1 records=1 mode=villages"))
        .stdout(predicate::str::contains(r#"V 1 "A""#))
        .stdout(predicate::str::contains(r#"V 3 "C""#));
}
