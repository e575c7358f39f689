use std::path::PathBuf;

use clap::Args;

/// Where an algorithm command reads its graph from
#[derive(Args, Debug, Clone, Default)]
pub struct GraphSourceArgs {
    /// Graph payload or generate output as JSON (`-` for stdin)
    #[arg(long, short = 'g', value_name = "FILE", conflicts_with = "scenario")]
    pub graph: Option<PathBuf>,

    /// Generate the graph from a preset scenario
    #[arg(long, short = 's', value_name = "ID")]
    pub scenario: Option<String>,
}
