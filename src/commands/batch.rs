//! `rategraph batch` - newline-delimited JSON requests against one engine
//!
//! Each non-blank input line is a request tagged by `op`. Each produces one
//! output line: the response, or an error envelope carrying the line number.
//! A failing line does not stop the batch.

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use rategraph_core::engine::Engine;
use rategraph_core::error::{GraphError, Result};
use rategraph_core::models::BatchRequest;

pub fn execute(engine: &Engine, input: &Path) -> Result<()> {
    let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(std::fs::File::open(input)?))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_batch(engine, reader, &mut out)
}

/// Process every request in `reader`, writing one JSON line per request
pub fn run_batch<R: BufRead, W: Write>(engine: &Engine, reader: R, out: &mut W) -> Result<()> {
    let mut processed = 0usize;
    let mut failed = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        processed += 1;

        let output = match handle_line(engine, &line) {
            Ok(value) => value,
            Err(e) => {
                failed += 1;
                warn!(line = line_number, error = %e, "batch_request_failed");
                error_line(&e, line_number)
            }
        };
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    }

    debug!(processed, failed, "batch_done");
    Ok(())
}

fn handle_line(engine: &Engine, line: &str) -> Result<Value> {
    let request: BatchRequest = serde_json::from_str(line)?;
    debug!(op = request.op(), "batch_request");
    let response = engine.handle(&request)?;
    Ok(serde_json::to_value(response)?)
}

fn error_line(error: &GraphError, line_number: usize) -> Value {
    let mut envelope = error.to_json();
    if let Some(obj) = envelope.get_mut("error").and_then(Value::as_object_mut) {
        obj.insert("line".to_string(), Value::from(line_number));
    }
    envelope
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Vec<Value> {
        let engine = Engine::default();
        let mut out = Vec::new();
        run_batch(&engine, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_generate_then_use_latest_snapshot() {
        let lines = run(concat!(
            "{\"op\": \"generate\", \"scenario_id\": \"balanced_tree\"}\n",
            "\n",
            "{\"op\": \"bfs\", \"start_node\": \"USD\"}\n",
            "{\"op\": \"health\"}\n",
        ));
        assert_eq!(lines.len(), 3);
        let snapshot_id = lines[0]["snapshot_id"].as_str().unwrap();
        assert_eq!(lines[1]["snapshot_id"], snapshot_id);
        assert_eq!(lines[1]["algorithm"], "bfs");
        assert_eq!(lines[2]["snapshot_count"], 1);
    }

    #[test]
    fn test_failing_line_reports_and_continues() {
        let lines = run(concat!(
            "{\"op\": \"bfs\", \"start_node\": \"USD\", \"snapshot_id\": \"missing\"}\n",
            "not json\n",
            "{\"op\": \"scenarios\"}\n",
        ));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["error"]["type"], "not_found");
        assert_eq!(lines[0]["error"]["line"], 1);
        assert_eq!(lines[1]["error"]["type"], "json_error");
        assert_eq!(lines[1]["error"]["line"], 2);
        assert!(lines[2].as_array().unwrap().len() >= 7);
    }
}
