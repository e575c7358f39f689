use crate::support::rategraph;
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    rategraph()
        .args(["--log-level", "debug", "scenarios"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    rategraph()
        .args(["--log-level", "warn", "scenarios"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_logs_generation() {
    rategraph()
        .args(["--verbose", "generate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("engine_ready"));
}

#[test]
fn test_log_json_emits_structured_lines() {
    let output = rategraph()
        .args(["--log-level", "debug", "--log-json", "nodes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let json: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(json.get("fields").is_some());
}

#[test]
fn test_logs_do_not_pollute_json_stdout() {
    let output = rategraph()
        .args(["--verbose", "--format", "json", "nodes"])
        .output()
        .unwrap();
    let nodes: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(nodes.contains(&"EUR".to_string()));
}
