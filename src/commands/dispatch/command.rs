//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use rategraph_core::engine::Engine;
use rategraph_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub engine: &'a Engine,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, engine: &'a Engine, start: Instant) -> Self {
        Self { cli, engine, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("rategraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph algorithms over value-ratio graphs.");
        println!();
        println!("Run `rategraph --help` for usage information.");
        Ok(())
    }
}
