use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::Value;

/// Get a Command for rategraph
pub fn rategraph() -> Command {
    cargo_bin_cmd!("rategraph")
}

/// Run a command expected to succeed and parse its stdout as JSON
pub fn run_json(args: &[&str]) -> Value {
    let output = rategraph()
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Three nodes where the two-hop route A -> B -> C (25) beats A -> C (30)
pub const TRIANGLE: &str = r#"{
  "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}],
  "edges": [
    {"from": "A", "to": "B", "weight_cost": 10.0, "weight_neglog": 0.1},
    {"from": "B", "to": "C", "weight_cost": 15.0, "weight_neglog": 0.1},
    {"from": "A", "to": "C", "weight_cost": 30.0, "weight_neglog": 0.3}
  ],
  "metadata": {"node_count": 3, "edge_count": 3}
}"#;

/// A -> B -> C -> A whose neglog weights sum below zero
#[allow(dead_code)]
pub const PROFITABLE_LOOP: &str = r#"{
  "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}],
  "edges": [
    {"from": "A", "to": "B", "weight_cost": 1.0, "weight_neglog": -0.1},
    {"from": "B", "to": "C", "weight_cost": 1.0, "weight_neglog": -0.1},
    {"from": "C", "to": "A", "weight_cost": 1.0, "weight_neglog": -0.1}
  ],
  "metadata": {"node_count": 3, "edge_count": 3}
}"#;

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
