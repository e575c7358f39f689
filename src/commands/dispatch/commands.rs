//! Command implementations for all rategraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use rategraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::commands::algorithms::*;
    use crate::cli::commands::data::*;
    use crate::commands::dispatch::macros::trace_command;
    use crate::commands::{algorithms, batch, catalog, generate, graph_input};
    use rategraph_core::models::{
        BellmanFordRequest, DijkstraRequest, FloydWarshallRequest, MstRequest, TraversalRequest,
    };

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        let result = match cmd {
            Commands::Generate(args) => execute_generate(ctx, args),
            Commands::Scenarios => catalog::execute_scenarios(ctx.cli, ctx.engine),
            Commands::Nodes => catalog::execute_nodes(ctx.cli, ctx.engine),
            Commands::Health => catalog::execute_health(ctx.cli, ctx.engine),
            Commands::Bfs(args) => execute_bfs(ctx, args),
            Commands::Dfs(args) => execute_dfs(ctx, args),
            Commands::Dijkstra(args) => execute_dijkstra(ctx, args),
            Commands::BellmanFord(args) => execute_bellman_ford(ctx, args),
            Commands::FloydWarshall(args) => execute_floyd_warshall(ctx, args),
            Commands::Mst(args) => execute_mst(ctx, args),
            Commands::Batch(args) => batch::execute(ctx.engine, &args.input),
        };
        trace_command!(ctx.start, "command_done");
        result
    }

    fn execute_generate(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
        let request = generate::build_request(args)?;
        generate::execute(ctx.cli, ctx.engine, &request, args.output.as_deref())
    }

    fn execute_bfs(ctx: &CommandContext, args: &TraversalArgs) -> Result<()> {
        let request = TraversalRequest {
            graph: graph_input::resolve(ctx.engine, &args.source)?,
            start_node: args.start.clone(),
        };
        let response = ctx.engine.bfs(&request)?;
        algorithms::output_bfs(ctx.cli, &response)
    }

    fn execute_dfs(ctx: &CommandContext, args: &TraversalArgs) -> Result<()> {
        let request = TraversalRequest {
            graph: graph_input::resolve(ctx.engine, &args.source)?,
            start_node: args.start.clone(),
        };
        let response = ctx.engine.dfs(&request)?;
        algorithms::output_dfs(ctx.cli, &response)
    }

    fn execute_dijkstra(ctx: &CommandContext, args: &DijkstraArgs) -> Result<()> {
        let request = DijkstraRequest {
            graph: graph_input::resolve(ctx.engine, &args.source)?,
            source: args.from.clone(),
            target: args.to.clone(),
        };
        let response = ctx.engine.dijkstra(&request)?;
        algorithms::output_dijkstra(ctx.cli, &response)
    }

    fn execute_bellman_ford(ctx: &CommandContext, args: &BellmanFordArgs) -> Result<()> {
        let request = BellmanFordRequest {
            graph: graph_input::resolve(ctx.engine, &args.source)?,
            source: args.from.clone(),
            detect_negative_cycle: !args.no_cycle_check,
        };
        let response = ctx.engine.bellman_ford(&request)?;
        algorithms::output_bellman_ford(ctx.cli, &response)
    }

    fn execute_floyd_warshall(ctx: &CommandContext, args: &FloydWarshallArgs) -> Result<()> {
        let request = FloydWarshallRequest {
            graph: graph_input::resolve(ctx.engine, &args.source)?,
            weight_mode: args.weight,
        };
        let response = ctx.engine.floyd_warshall(&request)?;
        algorithms::output_floyd_warshall(ctx.cli, &response)
    }

    fn execute_mst(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
        let request = MstRequest {
            graph: graph_input::resolve(ctx.engine, &args.source)?,
        };
        let response = match args.algorithm {
            MstAlgorithm::Prim => ctx.engine.mst_prim(&request)?,
            MstAlgorithm::Kruskal => ctx.engine.mst_kruskal(&request)?,
        };
        algorithms::output_mst(ctx.cli, &response)
    }
}
