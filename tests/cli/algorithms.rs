use crate::support::{rategraph, run_json, write_file, PROFITABLE_LOOP, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Algorithm commands over graph files
// ============================================================================

#[test]
fn test_dijkstra_on_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.json", TRIANGLE);

    let json = run_json(&[
        "dijkstra",
        "--graph",
        graph.to_str().unwrap(),
        "--from",
        "A",
        "--to",
        "C",
    ]);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 25.0);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["path_details"][0]["from"], "A");
    assert_eq!(json["path_details"][0]["to"], "B");
    assert_eq!(json["path_details"][1]["weight"], 15.0);
    assert!(json["snapshot_id"].as_str().unwrap().starts_with("local-"));
}

#[test]
fn test_dijkstra_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.json", TRIANGLE);

    rategraph()
        .args(["dijkstra", "--from", "A", "--to", "C", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 25.0000"))
        .stdout(predicate::str::contains("path: A -> B -> C"));
}

#[test]
fn test_graph_from_stdin() {
    let output = rategraph()
        .args(["--format", "json", "bfs", "--start", "A", "--graph", "-"])
        .write_stdin(TRIANGLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["order"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["depth"]["C"], 1);
    assert!(json["parent"]["A"].is_null());
}

#[test]
fn test_generate_output_feeds_algorithm_commands() {
    let dir = tempdir().unwrap();
    let snapshot = dir.path().join("snapshot.json");

    rategraph()
        .args(["generate", "--scenario", "hub_and_spoke", "--output"])
        .arg(&snapshot)
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&snapshot).unwrap()).unwrap();
    let json = run_json(&["mst", "--graph", snapshot.to_str().unwrap()]);
    assert_eq!(json["snapshot_id"], saved["snapshot_id"]);
    assert_eq!(json["algorithm"], "mst_prim");
}

#[test]
fn test_bellman_ford_reports_negative_cycle() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "loop.json", PROFITABLE_LOOP);

    let json = run_json(&[
        "bellman-ford",
        "--graph",
        graph.to_str().unwrap(),
        "--from",
        "A",
    ]);
    assert_eq!(json["negative_cycle_found"], true);
    assert_eq!(json["cycle"], serde_json::json!(["A", "B", "C", "A"]));
    assert_eq!(json["distances"], serde_json::json!({}));
}

#[test]
fn test_bellman_ford_without_cycle_check() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.json", TRIANGLE);

    let json = run_json(&[
        "bellman-ford",
        "--graph",
        graph.to_str().unwrap(),
        "--from",
        "A",
        "--no-cycle-check",
    ]);
    assert_eq!(json["negative_cycle_found"], false);
    assert!(json["cycle"].is_null());
    assert_eq!(json["paths"]["C"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_floyd_warshall_weight_modes() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.json", TRIANGLE);
    let path = graph.to_str().unwrap();

    let cost = run_json(&["floyd-warshall", "--graph", path]);
    assert_eq!(cost["weight_mode"], "cost");
    assert_eq!(cost["distance_matrix"]["A"]["C"], 25.0);
    assert!(cost["distance_matrix"]["C"]["A"].is_null());
    assert_eq!(cost["central_node"], "A");
    assert_eq!(cost["centrality"]["A"]["reachable_count"], 2);

    let neglog = run_json(&["floyd-warshall", "--graph", path, "--weight", "neglog"]);
    assert_eq!(neglog["weight_mode"], "neglog");
    assert_eq!(neglog["node_order"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_floyd_warshall_rejects_unknown_weight() {
    rategraph()
        .args(["floyd-warshall", "--weight", "heavy"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_mst_algorithms_agree_on_total() {
    let prim = run_json(&["mst", "--scenario", "dense_graph"]);
    let kruskal = run_json(&[
        "mst",
        "--scenario",
        "dense_graph",
        "--algorithm",
        "kruskal",
    ]);
    assert_eq!(prim["algorithm"], "mst_prim");
    assert_eq!(kruskal["algorithm"], "mst_kruskal");
    let prim_total = prim["total_cost"].as_f64().unwrap();
    let kruskal_total = kruskal["total_cost"].as_f64().unwrap();
    assert!((prim_total - kruskal_total).abs() < 1e-9);
    assert_eq!(
        prim["edges"].as_array().unwrap().len(),
        kruskal["edges"].as_array().unwrap().len()
    );
    assert_eq!(prim["is_forest"], false);
}

#[test]
fn test_mst_on_disconnected_scenario_is_forest() {
    let json = run_json(&["mst", "--scenario", "disconnected_components"]);
    assert_eq!(json["is_forest"], true);
    assert!(json["num_components"].as_u64().unwrap() >= 2);
}

// ============================================================================
// Algorithm commands over scenarios
// ============================================================================

#[test]
fn test_bfs_on_balanced_tree() {
    let json = run_json(&["bfs", "--scenario", "balanced_tree", "--start", "USD"]);
    assert_eq!(json["order"][0], "USD");
    assert_eq!(json["depth"]["USD"], 0);
    assert_eq!(json["depth"]["MXN"], 3);
}

#[test]
fn test_dfs_on_balanced_tree() {
    let json = run_json(&["dfs", "--scenario", "balanced_tree", "--start", "USD"]);
    assert_eq!(json["discovery_time"]["USD"], 1);
    assert_eq!(json["finish_time"]["USD"], 26);
}

#[test]
fn test_algorithm_defaults_to_default_scenario() {
    let json = run_json(&["dijkstra", "--from", "USD"]);
    assert!(json["snapshot_id"]
        .as_str()
        .unwrap()
        .ends_with("_negative_cycle_USD"));
    assert!(json["target"].is_null());
    assert_eq!(json["all_distances"]["USD"], 0.0);
    assert_eq!(json["all_distances"].as_object().unwrap().len(), 11);
}
