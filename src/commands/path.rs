//! Shortest path command
use std::io;
use std::time::Instant;

use crate::cli::PathArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render;
use crate::commands::visualize::VisualGraph;
use graphkit_core::error::Result;
use graphkit_core::graph::shortest_path;
use graphkit_core::trace_time;

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    ctx.check_export_target(args.export.as_deref())?;
    let graph = ctx.load_graph()?;

    let start = Instant::now();
    let path = shortest_path(&graph, args.source, args.target)?;
    trace_time!(start, "shortest_path", hops = path.hops());

    let stdout = io::stdout();
    render::shortest_path(&mut stdout.lock(), ctx.cli.format, &path)?;

    if let Some(file) = &args.export {
        let mut visual = VisualGraph::new(&graph)
            .with_title(format!("shortest path {} -> {}", path.source, path.target));
        visual.highlight_path(&path);
        visual.save(file)?;
    }
    Ok(())
}
