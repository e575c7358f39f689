use crate::support::{rategraph, run_json, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Generate command tests
// ============================================================================

#[test]
fn test_generate_default_scenario_json() {
    let json = run_json(&["generate"]);
    assert_eq!(json["dataset_type"], "scenario");
    assert_eq!(json["scenario_id"], "negative_cycle");
    assert_eq!(json["node_count"], 11);
    assert_eq!(json["edge_count"], 50);
    assert!(json["snapshot_id"]
        .as_str()
        .unwrap()
        .ends_with("_negative_cycle_USD"));
    assert_eq!(json["graph_payload"]["metadata"]["edge_count"], 50);
}

#[test]
fn test_generate_human_summary() {
    rategraph()
        .args(["generate", "--scenario", "balanced_tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_balanced_tree_USD"))
        .stdout(predicate::str::contains("dataset: scenario (balanced_tree)"));
}

#[test]
fn test_generate_custom_values() {
    let dir = tempdir().unwrap();
    let values = write_file(dir.path(), "values.json", r#"{"EUR": 0.9, "GBP": 0.8}"#);

    let json = run_json(&[
        "generate",
        "--custom",
        values.to_str().unwrap(),
        "--nodes",
        "EUR,GBP",
        "--anchor",
        "USD",
    ]);
    assert_eq!(json["dataset_type"], "custom");
    assert_eq!(json["node_count"], 3);
    assert_eq!(json["edge_count"], 6);
    assert!(json["scenario_id"].is_null());
}

#[test]
fn test_generate_custom_with_pairs() {
    let dir = tempdir().unwrap();
    let values = write_file(dir.path(), "values.json", r#"{"EUR": 0.9, "GBP": 0.8}"#);

    let json = run_json(&[
        "generate",
        "--custom",
        values.to_str().unwrap(),
        "--nodes",
        "USD,EUR,GBP",
        "--pair",
        "USD:EUR",
        "--pair",
        "EUR:GBP",
    ]);
    assert_eq!(json["edge_count"], 2);
}

#[test]
fn test_generate_random_is_reproducible_with_seed() {
    let args = [
        "generate", "--random", "--seed", "7", "--nodes", "USD,EUR,JPY",
    ];
    let first = run_json(&args);
    let second = run_json(&args);

    assert_eq!(first["dataset_type"], "random");
    assert_eq!(first["node_count"], 3);
    assert_eq!(first["graph_payload"], second["graph_payload"]);
}

#[test]
fn test_generate_writes_output_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("snapshot.json");

    rategraph()
        .args(["generate", "--scenario", "linear_chain", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(saved["scenario_id"], "linear_chain");
    assert!(saved["graph_payload"]["nodes"].is_array());
}

#[test]
fn test_generate_seed_requires_random() {
    rategraph()
        .args(["generate", "--seed", "1"])
        .assert()
        .failure()
        .code(2);
}
