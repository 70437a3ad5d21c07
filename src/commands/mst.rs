//! Minimum spanning tree commands
use std::io;
use std::time::Instant;

use crate::cli::MstArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render;
use crate::commands::visualize::{NodeRole, VisualGraph};
use graphkit_core::error::Result;
use graphkit_core::graph::{minimum_spanning_tree, MstAlgorithm};
use graphkit_core::trace_time;

/// Execute the prim or kruskal command
pub fn execute(ctx: &CommandContext, algorithm: MstAlgorithm, args: &MstArgs) -> Result<()> {
    ctx.check_export_target(args.export.as_deref())?;
    let graph = ctx.load_graph()?;
    let prim_start = ctx.prim_start(args.start);

    let start = Instant::now();
    let mst = minimum_spanning_tree(&graph, algorithm, prim_start)?;
    trace_time!(start, "minimum_spanning_tree", edges = mst.edges.len());

    let stdout = io::stdout();
    render::minimum_spanning_tree(&mut stdout.lock(), ctx.cli.format, &mst)?;

    if let Some(path) = &args.export {
        let mut visual = VisualGraph::new(&graph)
            .with_title(format!("{} minimum spanning tree", algorithm.display_name()));
        if algorithm == MstAlgorithm::Prim {
            visual.mark(prim_start, NodeRole::Source);
        }
        visual.highlight_mst(&mst);
        visual.save(path)?;
    }
    Ok(())
}
