//! Adjacency list command
use std::io;

use crate::commands::dispatch::CommandContext;
use crate::commands::render;
use graphkit_core::error::Result;

/// Execute the adjacency command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let stdout = io::stdout();
    render::adjacency(&mut stdout.lock(), ctx.cli.format, &graph)
}
