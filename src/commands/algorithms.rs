//! Output for the algorithm commands

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{format_distance, format_path, print_json};
use rategraph_core::error::Result;
use rategraph_core::models::{
    BellmanFordResponse, BfsResponse, DfsResponse, DijkstraResponse, FloydWarshallResponse,
    MstResponse,
};

fn header(cli: &Cli, algorithm: &str, snapshot_id: &str) {
    if !cli.quiet {
        println!("{} on {}", algorithm, snapshot_id);
    }
}

pub fn output_bfs(cli: &Cli, response: &BfsResponse) -> Result<()> {
    if cli.format == OutputFormat::Json {
        return print_json(response);
    }
    header(cli, response.algorithm, &response.snapshot_id);
    for node in &response.order {
        let depth = response.depth.get(node).copied().unwrap_or_default();
        let parent = response.parent.get(node).cloned().flatten();
        match parent {
            Some(parent) => println!("{:>3}  {} (via {})", depth, node, parent),
            None => println!("{:>3}  {}", depth, node),
        }
    }
    Ok(())
}

pub fn output_dfs(cli: &Cli, response: &DfsResponse) -> Result<()> {
    if cli.format == OutputFormat::Json {
        return print_json(response);
    }
    header(cli, response.algorithm, &response.snapshot_id);
    for node in &response.order {
        let discovered = response.discovery_time.get(node).copied().unwrap_or_default();
        let finished = response.finish_time.get(node).copied().unwrap_or_default();
        println!("{:>3}/{:<3} {}", discovered, finished, node);
    }
    Ok(())
}

pub fn output_dijkstra(cli: &Cli, response: &DijkstraResponse) -> Result<()> {
    if cli.format == OutputFormat::Json {
        return print_json(response);
    }
    header(cli, response.algorithm, &response.snapshot_id);

    if let Some(target) = &response.target {
        if !response.found {
            println!("no path from {} to {}", response.source, target);
            return Ok(());
        }
        println!("distance: {}", format_distance(response.distance));
        println!("path: {}", format_path(&response.path));
        for hop in &response.path_details {
            println!("  {} -> {}  {:.4}", hop.source, hop.target, hop.weight);
        }
        return Ok(());
    }

    for (node, distance) in &response.all_distances {
        println!("{:<8} {}", node, format_distance(*distance));
    }
    Ok(())
}

pub fn output_bellman_ford(cli: &Cli, response: &BellmanFordResponse) -> Result<()> {
    if cli.format == OutputFormat::Json {
        return print_json(response);
    }
    header(cli, response.algorithm, &response.snapshot_id);

    if response.negative_cycle_found {
        let cycle = response.cycle.as_deref().unwrap_or_default();
        println!("negative cycle: {}", format_path(cycle));
        return Ok(());
    }

    for (node, distance) in &response.distances {
        let path = response
            .paths
            .get(node)
            .map(|p| format_path(p))
            .unwrap_or_else(|| "-".to_string());
        println!("{:<8} {:>12}  {}", node, format_distance(*distance), path);
    }
    Ok(())
}

pub fn output_floyd_warshall(cli: &Cli, response: &FloydWarshallResponse) -> Result<()> {
    if cli.format == OutputFormat::Json {
        return print_json(response);
    }
    header(cli, response.algorithm, &response.snapshot_id);
    println!("weight mode: {}", response.weight_mode);

    print!("{:<8}", "");
    for node in &response.node_order {
        print!(" {:>12}", node);
    }
    println!();
    for row_node in &response.node_order {
        print!("{:<8}", row_node);
        for col_node in &response.node_order {
            let distance = response
                .distance_matrix
                .get(row_node)
                .and_then(|row| row.get(col_node))
                .copied()
                .flatten();
            let cell = match distance {
                Some(d) => format!("{:.4}", d),
                None => "inf".to_string(),
            };
            print!(" {:>12}", cell);
        }
        println!();
    }

    match &response.central_node {
        Some(node) => println!("central node: {}", node),
        None => println!("central node: none"),
    }
    if !cli.quiet {
        println!("{}", response.centrality_note);
    }
    Ok(())
}

pub fn output_mst(cli: &Cli, response: &MstResponse) -> Result<()> {
    if cli.format == OutputFormat::Json {
        return print_json(response);
    }
    header(cli, response.algorithm, &response.snapshot_id);
    for edge in &response.edges {
        println!("{} - {}  {:.4}", edge.u, edge.v, edge.weight);
    }
    println!("total cost: {:.4}", response.total_cost);
    if response.is_forest {
        println!("forest with {} components", response.num_components);
    }
    Ok(())
}
