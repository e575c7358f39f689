//! `rategraph generate` - build and cache a graph snapshot

use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::commands::data::GenerateArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use crate::commands::graph_input::read_input;
use rategraph_core::engine::Engine;
use rategraph_core::error::{GraphError, Result};
use rategraph_core::models::{GenerationMode, GenerationRequest, GenerationResponse};

/// Translate CLI flags into a generation request
pub fn build_request(args: &GenerateArgs) -> Result<GenerationRequest> {
    let mode = if args.random {
        GenerationMode::Random
    } else if args.custom.is_some() {
        GenerationMode::Custom
    } else {
        GenerationMode::Scenario
    };

    let custom_values = match &args.custom {
        Some(path) => Some(read_custom_values(path)?),
        None => None,
    };

    Ok(GenerationRequest {
        mode,
        scenario_id: args.scenario.clone(),
        custom_values,
        anchor_node: args.anchor.clone(),
        nodes: args.nodes.clone(),
        pairs: (!args.pairs.is_empty()).then(|| args.pairs.clone()),
        seed: args.seed,
        variance: args.variance,
        value_min: args.value_min,
        value_max: args.value_max,
    })
}

fn read_custom_values(path: &Path) -> Result<BTreeMap<String, f64>> {
    let text = read_input(path)?;
    serde_json::from_str(&text).map_err(|e| {
        GraphError::validation(format!(
            "custom values in {} must be a JSON object of node -> number: {}",
            path.display(),
            e
        ))
    })
}

/// Execute the generate command
pub fn execute(
    cli: &Cli,
    engine: &Engine,
    request: &GenerationRequest,
    output: Option<&Path>,
) -> Result<()> {
    let response = engine.generate(request)?;

    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&response)?)?;
        match cli.format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "snapshot_id": response.snapshot_id,
                "output": path.display().to_string(),
            }))?,
            OutputFormat::Human => {
                if !cli.quiet {
                    println!("Wrote {} to {}", response.snapshot_id, path.display());
                }
            }
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Human => output_human(cli, &response),
    }
    Ok(())
}

fn output_human(cli: &Cli, response: &GenerationResponse) {
    println!("{}", response.snapshot_id);
    if cli.quiet {
        return;
    }
    match &response.scenario_id {
        Some(id) => println!("  dataset: {} ({})", response.dataset_type, id),
        None => println!("  dataset: {}", response.dataset_type),
    }
    println!(
        "  nodes: {}, edges: {}",
        response.node_count, response.edge_count
    );
    let ids: Vec<&str> = response
        .graph_payload
        .nodes
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    println!("  {}", ids.join(", "));
}
