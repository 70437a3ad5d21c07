use std::io::Write;

use serde::Serialize;

use graphkit_core::error::Result;
use graphkit_core::graph::{Graph, MinimumSpanningTree, PathResult, SpanningTree};

pub fn spanning_tree(out: &mut dyn Write, tree: &SpanningTree) -> Result<()> {
    let mut value = serde_json::to_value(tree)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "unreachable".to_string(),
            serde_json::json!(tree.unreachable()),
        );
    }
    write_pretty(out, &value)
}

pub fn shortest_path(out: &mut dyn Write, path: &PathResult) -> Result<()> {
    let mut value = serde_json::to_value(path)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("hops".to_string(), serde_json::json!(path.hops()));
    }
    write_pretty(out, &value)
}

pub fn minimum_spanning_tree(out: &mut dyn Write, mst: &MinimumSpanningTree) -> Result<()> {
    write_pretty(out, mst)
}

pub fn adjacency(out: &mut dyn Write, graph: &Graph) -> Result<()> {
    let value = serde_json::json!({
        "vertex_count": graph.vertex_count(),
        "edge_count": graph.edge_count(),
        "adjacency": graph.adjacency(),
    });
    write_pretty(out, &value)
}

pub fn write_pretty<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
