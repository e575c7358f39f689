//! `rategraph scenarios`, `nodes` and `health`

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use rategraph_core::engine::Engine;
use rategraph_core::error::Result;
use rategraph_core::generation::DEFAULT_SCENARIO_ID;

pub fn execute_scenarios(cli: &Cli, engine: &Engine) -> Result<()> {
    let scenarios = engine.scenarios();
    match cli.format {
        OutputFormat::Json => print_json(&scenarios)?,
        OutputFormat::Human => {
            for scenario in &scenarios {
                let marker = if scenario.id == DEFAULT_SCENARIO_ID {
                    " (default)"
                } else {
                    ""
                };
                println!("{}{} - {}", scenario.id, marker, scenario.display_name);
                if !cli.quiet {
                    println!("  {}", scenario.description);
                    println!(
                        "  {} nodes, {} pairs",
                        scenario.nodes.len(),
                        scenario.pairs.len()
                    );
                }
            }
        }
    }
    Ok(())
}

pub fn execute_nodes(cli: &Cli, engine: &Engine) -> Result<()> {
    let nodes = engine.available_nodes();
    match cli.format {
        OutputFormat::Json => print_json(&nodes)?,
        OutputFormat::Human => println!("{}", nodes.join(", ")),
    }
    Ok(())
}

pub fn execute_health(cli: &Cli, engine: &Engine) -> Result<()> {
    let health = engine.health();
    match cli.format {
        OutputFormat::Json => print_json(&health)?,
        OutputFormat::Human => {
            println!("status: {}", health.status);
            println!("snapshots: {}", health.snapshot_count);
            if let Some(latest) = health.latest_snapshot {
                println!("latest: {}", latest.to_rfc3339());
            }
        }
    }
    Ok(())
}
