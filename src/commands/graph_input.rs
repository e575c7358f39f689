//! Resolve `--graph` / `--scenario` into a graph source for the engine
//!
//! A graph file holds either a bare graph payload or the full output of
//! `rategraph generate`; the latter keeps its snapshot id.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::cli::GraphSourceArgs;
use rategraph_core::engine::Engine;
use rategraph_core::error::Result;
use rategraph_core::graph::GraphPayload;
use rategraph_core::models::{GenerationRequest, GraphSource};

pub fn resolve(engine: &Engine, args: &GraphSourceArgs) -> Result<GraphSource> {
    if let Some(path) = &args.graph {
        let text = read_input(path)?;
        return parse_graph_document(&text);
    }

    // Without a file, the graph comes from a scenario (the default one if unnamed)
    let request = GenerationRequest {
        scenario_id: args.scenario.clone(),
        ..GenerationRequest::default()
    };
    let generated = engine.generate(&request)?;
    debug!(snapshot_id = %generated.snapshot_id, "scenario_graph_ready");
    Ok(GraphSource::snapshot(generated.snapshot_id))
}

/// Read a file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Accept a bare payload or a document wrapping one under `graph_payload`
pub fn parse_graph_document(text: &str) -> Result<GraphSource> {
    let mut document: Value = serde_json::from_str(text)?;

    let Some(payload) = document.get_mut("graph_payload").map(Value::take) else {
        let payload: GraphPayload = serde_json::from_value(document)?;
        return Ok(GraphSource::payload(payload));
    };

    let snapshot_id = document
        .get("snapshot_id")
        .and_then(Value::as_str)
        .map(str::to_string);
    Ok(GraphSource {
        snapshot_id,
        graph_payload: Some(serde_json::from_value(payload)?),
    })
}
