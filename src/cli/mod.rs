//! CLI argument parsing for rategraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod commands;
pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use args::GraphSourceArgs;
pub use commands::Commands;
pub use output::OutputFormat;

/// Rategraph - graph algorithms over value-ratio graphs
#[derive(Parser, Debug)]
#[command(name = "rategraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Engine configuration file (TOML or YAML)
    #[arg(long, global = true, env = "RATEGRAPH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
