use crate::support::{rategraph, write_file, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Exit codes and error envelopes
// ============================================================================

#[test]
fn test_unknown_scenario_is_not_found() {
    rategraph()
        .args(["generate", "--scenario", "nope"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("scenario not found: nope"))
        .stderr(predicate::str::contains("Available: negative_cycle"));
}

#[test]
fn test_unknown_start_node_is_not_found() {
    rategraph()
        .args(["bfs", "--scenario", "dense_graph", "--start", "ZZZ"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_json_error_envelope_on_stderr() {
    let output = rategraph()
        .args(["--format", "json", "dfs", "--start", "ZZZ"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "not_found");
}

#[test]
fn test_json_envelope_for_usage_errors() {
    let output = rategraph()
        .args(["--format", "json", "dijkstra"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_graph_and_scenario_conflict() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.json", TRIANGLE);

    rategraph()
        .args(["mst", "--scenario", "dense_graph", "--graph"])
        .arg(&graph)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_custom_values_missing_nodes_is_validation_error() {
    let dir = tempdir().unwrap();
    let values = write_file(dir.path(), "values.json", r#"{"EUR": 0.9}"#);

    rategraph()
        .args(["generate", "--nodes", "EUR,GBP", "--custom"])
        .arg(&values)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("GBP"));
}

#[test]
fn test_malformed_custom_values_file() {
    let dir = tempdir().unwrap();
    let values = write_file(dir.path(), "values.json", r#"["EUR"]"#);

    rategraph()
        .args(["generate", "--custom"])
        .arg(&values)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn test_malformed_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.json", "{ not json");

    rategraph()
        .args(["bfs", "--start", "A", "--graph"])
        .arg(&graph)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_quiet_suppresses_human_error() {
    rategraph()
        .args(["--quiet", "generate", "--scenario", "nope"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::is_empty());
}
