//! Command implementations for every graphkit subcommand

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{adjacency, interactive, mst, path, traverse, visualize};
use graphkit_core::error::Result;
use graphkit_core::graph::{MstAlgorithm, TraversalKind};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Dfs(args) => traverse::execute(ctx, TraversalKind::Dfs, args),
            Commands::Bfs(args) => traverse::execute(ctx, TraversalKind::Bfs, args),
            Commands::Path(args) => path::execute(ctx, args),
            Commands::Prim(args) => mst::execute(ctx, MstAlgorithm::Prim, args),
            Commands::Kruskal(args) => mst::execute(ctx, MstAlgorithm::Kruskal, args),
            Commands::Adjacency => adjacency::execute(ctx),
            Commands::Visualize(args) => visualize::execute(ctx, args),
            Commands::Interactive => interactive::execute(ctx),
        }
    }
}
