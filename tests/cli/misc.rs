use crate::support::{rategraph, run_json, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version, catalog and config
// ============================================================================

#[test]
fn test_help_flag() {
    rategraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rategraph"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("bellman-ford"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn test_version_flag() {
    rategraph()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rategraph"));
}

#[test]
fn test_no_command_prints_hint() {
    rategraph()
        .assert()
        .success()
        .stdout(predicate::str::contains("rategraph --help"));
}

#[test]
fn test_scenarios_json_lists_all_presets() {
    let json = run_json(&["scenarios"]);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        [
            "negative_cycle",
            "sparse_graph",
            "dense_graph",
            "hub_and_spoke",
            "disconnected_components",
            "balanced_tree",
            "linear_chain",
        ]
    );
    assert!(json[0]["pairs"].as_array().unwrap().len() > 0);
}

#[test]
fn test_scenarios_human_marks_default() {
    rategraph()
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("negative_cycle (default)"));
}

#[test]
fn test_health_on_fresh_engine() {
    let json = run_json(&["health"]);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["snapshot_count"], 0);
    assert!(json["latest_snapshot"].is_null());
}

#[test]
fn test_config_file_overrides_nodes() {
    let dir = tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "rategraph.toml",
        "[nodes]\navailable = [\"USD\", \"EUR\"]\n",
    );

    let output = rategraph()
        .args(["--format", "json", "nodes", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let nodes: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(nodes, ["USD", "EUR"]);
}

#[test]
fn test_config_cost_model_changes_weights() {
    let dir = tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "rategraph.toml",
        "[cost_model]\nbase_cost = 40.0\nextra_cost = 20.0\n",
    );

    let output = rategraph()
        .args(["--format", "json", "generate", "--scenario", "linear_chain"])
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let costly: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let default = run_json(&["generate", "--scenario", "linear_chain"]);

    let weight = |json: &serde_json::Value| json["graph_payload"]["edges"][0]["weight_cost"]
        .as_f64()
        .unwrap();
    assert!(weight(&costly) > weight(&default));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "rategraph.toml", "[cost_model]\nbase_cost = -1.0\n");

    rategraph()
        .args(["health", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(2);
}
