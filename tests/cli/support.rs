use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Triangle where depth-first and breadth-first disagree on the route A to C
pub const TRIANGLE: &str = "3\nA\tB\t2\nB\tC\t3\nA\tC\t10\n";

/// Two islands with no connection between them
pub const ISLANDS: &str = "4\nA\tB\t1\nC\tD\t1\n";

/// Get a Command for routefinder with the log environment cleared
pub fn routefinder() -> Command {
    let mut cmd = cargo_bin_cmd!("routefinder");
    cmd.env_remove("RUST_LOG").env_remove("ROUTEFINDER_LOG");
    cmd
}

/// Write a map file into `dir` and return its path
pub fn write_map(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Parse stdout as JSON
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be valid JSON")
}
