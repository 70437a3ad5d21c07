//! Result rendering in the three output formats
//!
//! Every renderer writes to a `dyn Write` so the interactive session and
//! the one-shot commands share the same text.

pub mod human;
pub mod json;
pub mod records;

use std::io::Write;

use crate::cli::OutputFormat;
use graphkit_core::error::Result;
use graphkit_core::graph::{Graph, MinimumSpanningTree, PathResult, SpanningTree};

pub fn spanning_tree(out: &mut dyn Write, format: OutputFormat, tree: &SpanningTree) -> Result<()> {
    match format {
        OutputFormat::Human => human::spanning_tree(out, tree),
        OutputFormat::Json => json::spanning_tree(out, tree),
        OutputFormat::Records => records::spanning_tree(out, tree),
    }
}

pub fn shortest_path(out: &mut dyn Write, format: OutputFormat, path: &PathResult) -> Result<()> {
    match format {
        OutputFormat::Human => human::shortest_path(out, path),
        OutputFormat::Json => json::shortest_path(out, path),
        OutputFormat::Records => records::shortest_path(out, path),
    }
}

pub fn minimum_spanning_tree(
    out: &mut dyn Write,
    format: OutputFormat,
    mst: &MinimumSpanningTree,
) -> Result<()> {
    match format {
        OutputFormat::Human => human::minimum_spanning_tree(out, mst),
        OutputFormat::Json => json::minimum_spanning_tree(out, mst),
        OutputFormat::Records => records::minimum_spanning_tree(out, mst),
    }
}

pub fn adjacency(out: &mut dyn Write, format: OutputFormat, graph: &Graph) -> Result<()> {
    match format {
        OutputFormat::Human => human::adjacency(out, graph),
        OutputFormat::Json => json::adjacency(out, graph),
        OutputFormat::Records => records::adjacency(out, graph),
    }
}
