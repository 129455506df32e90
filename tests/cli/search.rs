use crate::cli::support::{routefinder, stdout_json, write_map, ISLANDS, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Search command tests
// ============================================================================

#[test]
fn test_depth_first_trace() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    let output = routefinder()
        .arg("search")
        .arg(&map)
        .args(["--from", "a", "--to", "c"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = "\
Explored: []
Frontier: [A]

Current Node: A
Explored: [A]
Frontier: [C, B]

Current Node: B
Explored: [A, B]
Frontier: [C, C]

Current Node: C
Path Found: [A, B, C]
The cost of the found path is: 5.0
";
    assert_eq!(stdout, expected);
}

#[test]
fn test_breadth_first_takes_direct_edge() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .arg("search")
        .arg(&map)
        .args(["--from", "A", "--to", "C", "--strategy", "breadth-first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frontier: [B, C]"))
        .stdout(predicate::str::contains("Path Found: [A, C]"))
        .stdout(predicate::str::contains("The cost of the found path is: 10.0"));
}

#[test]
fn test_no_steps_prints_only_the_result() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .arg("search")
        .arg(&map)
        .args(["--from", "A", "--to", "C", "--no-steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Explored:").not())
        .stdout(predicate::str::contains("Path Found: [A, B, C]"));
}

#[test]
fn test_disconnected_map_has_no_path() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", ISLANDS);

    routefinder()
        .arg("search")
        .arg(&map)
        .args(["--from", "A", "--to", "D", "-s", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No path can be found between the villages.",
        ))
        .stdout(predicate::str::contains("Path Found").not());
}

#[test]
fn test_start_equals_end() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .arg("search")
        .arg(&map)
        .args(["--from", "B", "--to", "b", "--no-steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path Found: [B]"))
        .stdout(predicate::str::contains("The cost of the found path is: 0.0"));
}

#[test]
fn test_search_json() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    let output = routefinder()
        .args(["--format", "json", "search"])
        .arg(&map)
        .args(["--from", "A", "--to", "C"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["strategy"], "depth-first");
    assert_eq!(json["start"], "A");
    assert_eq!(json["steps"].as_array().unwrap().len(), 3);
    assert_eq!(json["steps"][0]["frontier"], serde_json::json!(["C", "B"]));
    assert_eq!(json["steps"][2]["status"], "solved");
    assert_eq!(json["outcome"]["result"], "found");
    assert_eq!(json["outcome"]["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["outcome"]["cost"], 5.0);
}

#[test]
fn test_search_json_no_path() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", ISLANDS);

    let output = routefinder()
        .args(["--format", "json", "search"])
        .arg(&map)
        .args(["--from", "A", "--to", "D"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["outcome"]["result"], "no_path");
}

#[test]
fn test_search_records() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .args(["--format", "records", "search"])
        .arg(&map)
        .args(["--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H routefinder=1 records=1 mode=search",
        ))
        .stdout(predicate::str::contains("strategy=depth-first"))
        .stdout(predicate::str::contains(
            r#"S 1 current="A" status=searching explored="A" frontier="C","B""#,
        ))
        .stdout(predicate::str::contains(
            r#"R found path="A","B","C" cost=5.0"#,
        ));
}

#[test]
fn test_search_json_without_steps_reports_step_count() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    let output = routefinder()
        .args(["--format", "json", "search"])
        .arg(&map)
        .args(["--from", "A", "--to", "C", "--no-steps"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["step_count"], 3);
    assert!(json.get("steps").is_none());
    assert_eq!(json["outcome"]["cost"], 5.0);
}

#[test]
fn test_search_records_without_steps() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .args(["--format", "records", "search"])
        .arg(&map)
        .args(["--from", "A", "--to", "C", "-s", "bfs", "--no-steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S 1").not())
        .stdout(predicate::str::contains(r#"R found path="A","C" cost=10.0"#));
}
