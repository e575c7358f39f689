//! Algorithm command argument structures

use clap::{Args, ValueEnum};

use crate::cli::args::GraphSourceArgs;
use crate::cli::parse::parse_weight_kind;
use rategraph_core::graph::WeightKind;

/// Arguments for bfs and dfs.
#[derive(Args, Debug)]
pub struct TraversalArgs {
    #[command(flatten)]
    pub source: GraphSourceArgs,

    /// Node to start from
    #[arg(long)]
    pub start: String,
}

/// Arguments for the dijkstra command.
#[derive(Args, Debug)]
pub struct DijkstraArgs {
    #[command(flatten)]
    pub source: GraphSourceArgs,

    /// Source node
    #[arg(long)]
    pub from: String,

    /// Target node (omit for distances to every node)
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the bellman-ford command.
#[derive(Args, Debug)]
pub struct BellmanFordArgs {
    #[command(flatten)]
    pub source: GraphSourceArgs,

    /// Source node
    #[arg(long)]
    pub from: String,

    /// Skip the negative-cycle detection pass
    #[arg(long)]
    pub no_cycle_check: bool,
}

/// Arguments for the floyd-warshall command.
#[derive(Args, Debug)]
pub struct FloydWarshallArgs {
    #[command(flatten)]
    pub source: GraphSourceArgs,

    /// Edge weight to use (cost, neglog)
    #[arg(long, default_value = "cost", value_parser = parse_weight_kind)]
    pub weight: WeightKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MstAlgorithm {
    #[default]
    Prim,
    Kruskal,
}

/// Arguments for the mst command.
#[derive(Args, Debug)]
pub struct MstArgs {
    #[command(flatten)]
    pub source: GraphSourceArgs,

    /// Spanning forest algorithm
    #[arg(long, value_enum, default_value = "prim")]
    pub algorithm: MstAlgorithm,
}
