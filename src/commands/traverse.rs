//! DFS/BFS spanning tree commands
use std::io;
use std::time::Instant;

use tracing::debug;

use crate::cli::TraverseArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render;
use crate::commands::visualize::VisualGraph;
use graphkit_core::error::Result;
use graphkit_core::graph::{spanning_tree, TraversalKind};
use graphkit_core::trace_time;

/// Execute the dfs or bfs command
pub fn execute(ctx: &CommandContext, kind: TraversalKind, args: &TraverseArgs) -> Result<()> {
    ctx.check_export_target(args.export.as_deref())?;
    let graph = ctx.load_graph()?;

    let start = Instant::now();
    let tree = spanning_tree(&graph, kind, args.source, &ctx.traversal_options())?;
    trace_time!(start, "spanning_tree");

    if ctx.cli.verbose {
        debug!(
            kind = %kind,
            reached = tree.order.len(),
            truncated = tree.truncated,
            "traverse"
        );
    }

    let stdout = io::stdout();
    render::spanning_tree(&mut stdout.lock(), ctx.cli.format, &tree)?;

    if let Some(path) = &args.export {
        let mut visual = VisualGraph::new(&graph).with_title(format!("{} spanning tree", kind));
        visual.highlight_tree(&tree);
        visual.save(path)?;
    }
    Ok(())
}
