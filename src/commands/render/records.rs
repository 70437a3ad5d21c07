use std::io::Write;

use graphkit_core::error::Result;
use graphkit_core::format::records_header;
use graphkit_core::graph::{Graph, MinimumSpanningTree, PathResult, SpanningTree};

pub fn spanning_tree(out: &mut dyn Write, tree: &SpanningTree) -> Result<()> {
    let unreachable = tree.unreachable();
    let mut fields = vec![
        ("source", tree.source.to_string()),
        ("reached", tree.order.len().to_string()),
        ("edges", tree.edges.len().to_string()),
    ];
    if let Some(reason) = &tree.truncation_reason {
        fields.push(("truncated", reason.clone()));
    }
    writeln!(out, "{}", records_header(tree.kind.as_str(), &fields))?;

    for edge in &tree.edges {
        writeln!(out, "E {} {}", edge.parent, edge.child)?;
    }
    for vertex in unreachable {
        writeln!(out, "U {}", vertex)?;
    }
    for vertex in &tree.cut_off {
        writeln!(out, "C {}", vertex)?;
    }
    Ok(())
}

pub fn shortest_path(out: &mut dyn Write, path: &PathResult) -> Result<()> {
    let fields = [
        ("from", path.source.to_string()),
        ("to", path.target.to_string()),
        ("distance", path.distance.to_string()),
        ("hops", path.hops().to_string()),
    ];
    writeln!(out, "{}", records_header("path", &fields))?;

    let vertices: Vec<String> = path.path.iter().map(|v| v.to_string()).collect();
    writeln!(out, "P {}", vertices.join(" "))?;
    Ok(())
}

pub fn minimum_spanning_tree(out: &mut dyn Write, mst: &MinimumSpanningTree) -> Result<()> {
    let fields = [
        ("algorithm", mst.algorithm.as_str().to_string()),
        ("total_weight", mst.total_weight.to_string()),
        ("edges", mst.edges.len().to_string()),
    ];
    writeln!(out, "{}", records_header("mst", &fields))?;

    for edge in &mst.edges {
        writeln!(out, "E {} {} {}", edge.u, edge.v, edge.weight)?;
    }
    Ok(())
}

pub fn adjacency(out: &mut dyn Write, graph: &Graph) -> Result<()> {
    let fields = [
        ("vertices", graph.vertex_count().to_string()),
        ("edges", graph.edge_count().to_string()),
    ];
    writeln!(out, "{}", records_header("adjacency", &fields))?;

    for entry in graph.adjacency() {
        let mut line = format!("A {}", entry.vertex);
        for neighbor in entry.neighbors {
            line.push_str(&format!(" {}:{}", neighbor.vertex, neighbor.weight));
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
