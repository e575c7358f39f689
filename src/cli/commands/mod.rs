//! Main CLI commands enum

use clap::Subcommand;

pub mod algorithms;
pub mod data;

use algorithms::*;
use data::*;

/// Top-level rategraph commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a graph snapshot from a scenario, custom values or random draws
    Generate(GenerateArgs),

    /// List preset scenarios
    Scenarios,

    /// List node ids the engine advertises
    Nodes,

    /// Report engine status
    Health,

    /// Breadth-first traversal
    Bfs(TraversalArgs),

    /// Depth-first traversal
    Dfs(TraversalArgs),

    /// Shortest paths on cost weights
    Dijkstra(DijkstraArgs),

    /// Shortest paths on neglog weights with negative-cycle detection
    BellmanFord(BellmanFordArgs),

    /// All-pairs distances and central node
    FloydWarshall(FloydWarshallArgs),

    /// Minimum spanning forest on cost weights
    Mst(MstArgs),

    /// Run newline-delimited JSON requests, one response per line
    Batch(BatchArgs),
}
