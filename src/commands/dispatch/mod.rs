//! Command dispatch logic for rategraph

use std::time::Instant;

use crate::cli::Cli;
use rategraph_core::config::EngineConfig;
use rategraph_core::engine::Engine;
use rategraph_core::error::Result;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = EngineConfig::discover(cli.config.as_deref())?;
    let engine = Engine::with_config(config);

    trace_command!(start, "engine_ready");

    let ctx = CommandContext::new(cli, &engine, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
