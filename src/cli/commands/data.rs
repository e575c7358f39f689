//! Generation and batch argument structures

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::{parse_pair, parse_variance};
use rategraph_core::generation::Variance;

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Preset scenario id (default mode)
    #[arg(long, conflicts_with_all = ["custom", "random"])]
    pub scenario: Option<String>,

    /// JSON file mapping node ids to values
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    pub custom: Option<PathBuf>,

    /// Draw node values at random
    #[arg(long)]
    pub random: bool,

    /// Seed for random values
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Spread of random values (low, medium, high)
    #[arg(long, requires = "random", value_parser = parse_variance)]
    pub variance: Option<Variance>,

    /// Lower bound for random values
    #[arg(long, requires = "random")]
    pub value_min: Option<f64>,

    /// Upper bound for random values
    #[arg(long, requires = "random")]
    pub value_max: Option<f64>,

    /// Anchor node (valued at 1.0)
    #[arg(long)]
    pub anchor: Option<String>,

    /// Nodes to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub nodes: Option<Vec<String>>,

    /// Directed pair to connect, as SOURCE:TARGET (repeatable)
    #[arg(long = "pair", value_parser = parse_pair)]
    pub pairs: Vec<(String, String)>,

    /// Write the snapshot JSON to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the batch command.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// NDJSON request file (`-` for stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,
}
