use crate::cli::support::{routefinder, stdout_json, write_map};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Distances command tests
// ============================================================================

const WITH_DUPLICATE: &str = "2\nA\tB\t2\nb\ta\t5\n";

#[test]
fn test_distances_table() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", WITH_DUPLICATE);

    let output = routefinder().arg("distances").arg(&map).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("1st Village"));
    assert!(lines[0].contains("2nd Village"));
    assert!(lines[0].ends_with("Distance"));
    // Every row is shown, including the duplicate connection
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with('A') && lines[2].ends_with("2.0"));
    assert!(lines[3].starts_with('B') && lines[3].ends_with("5.0"));
}

#[test]
fn test_distances_json() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", WITH_DUPLICATE);

    let output = routefinder()
        .args(["--format", "json", "distances"])
        .arg(&map)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(
        json["columns"],
        serde_json::json!(["1st Village", "2nd Village", "Distance"])
    );
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["from"], "B");
    assert_eq!(rows[1]["to"], "A");
    assert_eq!(rows[1]["distance"], 5.0);
}

#[test]
fn test_distances_records() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", WITH_DUPLICATE);

    routefinder()
        .args(["--format", "records", "distances"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=distances"))
        .stdout(predicate::str::contains("rows=2"))
        .stdout(predicate::str::contains(r#"D "A" "B" distance=2.0"#));
}
