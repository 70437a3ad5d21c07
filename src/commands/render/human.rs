use std::io::Write;

use graphkit_core::error::Result;
use graphkit_core::graph::{Graph, MinimumSpanningTree, PathResult, SpanningTree};

pub fn spanning_tree(out: &mut dyn Write, tree: &SpanningTree) -> Result<()> {
    let label = tree.kind.to_string().to_uppercase();
    if tree.edges.is_empty() {
        writeln!(out, "{} spanning tree from {}: no edges", label, tree.source)?;
    } else {
        writeln!(out, "{} spanning tree edges from {}:", label, tree.source)?;
        for edge in &tree.edges {
            writeln!(out, "{} -> {}", edge.parent, edge.child)?;
        }
    }

    let unreachable = tree.unreachable();
    if !unreachable.is_empty() {
        writeln!(out, "Unreachable: {}", join(&unreachable, " "))?;
    }
    if let Some(reason) = &tree.truncation_reason {
        writeln!(out, "Truncated: {}", reason)?;
    }
    if !tree.cut_off.is_empty() {
        writeln!(out, "Cut off: {}", join(&tree.cut_off, " "))?;
    }
    Ok(())
}

pub fn shortest_path(out: &mut dyn Write, path: &PathResult) -> Result<()> {
    writeln!(
        out,
        "Shortest distance {} -> {} = {}",
        path.source, path.target, path.distance
    )?;
    writeln!(out, "Path: {}", join(&path.path, " -> "))?;
    Ok(())
}

pub fn minimum_spanning_tree(out: &mut dyn Write, mst: &MinimumSpanningTree) -> Result<()> {
    writeln!(
        out,
        "{} MST total weight = {}",
        mst.algorithm.display_name(),
        mst.total_weight
    )?;
    for edge in &mst.edges {
        writeln!(out, "{} - {} : {}", edge.u, edge.v, edge.weight)?;
    }
    Ok(())
}

pub fn adjacency(out: &mut dyn Write, graph: &Graph) -> Result<()> {
    for entry in graph.adjacency() {
        if entry.neighbors.is_empty() {
            writeln!(out, "{}: (none)", entry.vertex)?;
            continue;
        }
        let neighbors: Vec<String> = entry
            .neighbors
            .iter()
            .map(|n| format!("{} ({})", n.vertex, n.weight))
            .collect();
        writeln!(out, "{}: {}", entry.vertex, neighbors.join(", "))?;
    }
    Ok(())
}

fn join(vertices: &[usize], sep: &str) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
