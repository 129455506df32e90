use crate::cli::support::{routefinder, write_map, TRIANGLE};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_working_directory_config_sets_default_strategy() {
    let dir = tempdir().unwrap();
    write_map(dir.path(), "map.txt", TRIANGLE);
    fs::write(
        dir.path().join("routefinder.toml"),
        "[search]\nstrategy = \"breadth-first\"\nshow_steps = false\n",
    )
    .unwrap();

    routefinder()
        .current_dir(dir.path())
        .args(["search", "map.txt", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Explored:").not())
        .stdout(predicate::str::contains("Path Found: [A, C]"));
}

#[test]
fn test_strategy_flag_overrides_config() {
    let dir = tempdir().unwrap();
    write_map(dir.path(), "map.txt", TRIANGLE);
    fs::write(
        dir.path().join("routefinder.toml"),
        "[search]\nstrategy = \"bfs\"\n",
    )
    .unwrap();

    routefinder()
        .current_dir(dir.path())
        .args(["search", "map.txt", "--from", "A", "--to", "C", "--strategy", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path Found: [A, B, C]"));
}

#[test]
fn test_explicit_config_with_custom_layout() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.csv", "a,b,2\nb,c,3\na,c,10\n");
    let config = dir.path().join("layout.toml");
    fs::write(&config, "[map]\ndelimiter = \",\"\ncount_header = false\n").unwrap();

    routefinder()
        .arg("--config")
        .arg(&config)
        .arg("villages")
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A\nB\nC\n"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.txt", TRIANGLE);

    routefinder()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("villages")
        .arg(&map)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_invalid_delimiter_is_data_error() {
    let dir = tempdir().unwrap();
    write_map(dir.path(), "map.txt", TRIANGLE);
    fs::write(dir.path().join("routefinder.toml"), "[map]\ndelimiter = \"\"\n").unwrap();

    routefinder()
        .current_dir(dir.path())
        .args(["villages", "map.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid map delimiter"));
}
