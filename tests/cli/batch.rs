use crate::support::{rategraph, write_file};
use serde_json::Value;
use tempfile::tempdir;

fn parse_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// ============================================================================
// Batch command tests
// ============================================================================

#[test]
fn test_batch_shares_snapshots_across_lines() {
    let input = concat!(
        "{\"op\": \"generate\", \"scenario_id\": \"sparse_graph\"}\n",
        "{\"op\": \"dijkstra\", \"source\": \"USD\"}\n",
        "{\"op\": \"floyd_warshall\", \"weight_mode\": \"neglog\"}\n",
        "{\"op\": \"mst_kruskal\"}\n",
        "{\"op\": \"health\"}\n",
    );

    let output = rategraph().arg("batch").write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let lines = parse_lines(&output.stdout);
    assert_eq!(lines.len(), 5);
    let snapshot_id = lines[0]["snapshot_id"].as_str().unwrap();
    assert_eq!(lines[1]["snapshot_id"], snapshot_id);
    assert_eq!(lines[2]["snapshot_id"], snapshot_id);
    assert_eq!(lines[2]["weight_mode"], "neglog");
    assert_eq!(lines[3]["algorithm"], "mst_kruskal");
    assert_eq!(lines[4]["status"], "healthy");
    assert_eq!(lines[4]["snapshot_count"], 1);
}

#[test]
fn test_batch_reads_file_and_continues_after_errors() {
    let dir = tempdir().unwrap();
    let input = write_file(
        dir.path(),
        "requests.ndjson",
        concat!(
            "{\"op\": \"bfs\", \"start_node\": \"USD\"}\n",
            "{\"op\": \"teleport\"}\n",
            "\n",
            "{\"op\": \"generate\", \"scenario_id\": \"nope\"}\n",
            "{\"op\": \"nodes\"}\n",
        ),
    );

    let output = rategraph().arg("batch").arg(&input).output().unwrap();
    assert!(output.status.success());

    let lines = parse_lines(&output.stdout);
    assert_eq!(lines.len(), 4);
    // No snapshot is cached yet
    assert_eq!(lines[0]["error"]["type"], "validation_error");
    assert_eq!(lines[0]["error"]["line"], 1);
    assert_eq!(lines[1]["error"]["type"], "json_error");
    assert_eq!(lines[2]["error"]["type"], "not_found");
    assert_eq!(lines[2]["error"]["code"], 3);
    assert_eq!(lines[2]["error"]["line"], 4);
    assert!(lines[3].as_array().unwrap().iter().any(|n| n == "USD"));
}

#[test]
fn test_batch_missing_file_fails() {
    rategraph()
        .args(["batch", "/nonexistent/requests.ndjson"])
        .assert()
        .failure()
        .code(1);
}
