//! Graph visualization documents
//!
//! A `VisualGraph` is a JSON description of the graph that a front end can
//! draw: every vertex with a role, every edge with its weight and whether
//! the last algorithm result uses it.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::cli::VisualizeArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::json::write_pretty;
use graphkit_core::error::{GraphkitError, Result};
use graphkit_core::graph::{
    Graph, MinimumSpanningTree, PathResult, SpanningTree, VertexId, Weight,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Source,
    Target,
    Plain,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualNode {
    pub id: VertexId,
    pub role: NodeRole,
    pub degree: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualEdge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: Weight,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualGraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub vertex_count: usize,
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

impl VisualGraph {
    pub fn new(graph: &Graph) -> Self {
        let nodes = graph
            .vertices()
            .map(|id| VisualNode {
                id,
                role: NodeRole::Plain,
                degree: graph.neighbors(id).len(),
            })
            .collect();
        let edges = graph
            .edges()
            .iter()
            .map(|e| VisualEdge {
                u: e.u,
                v: e.v,
                weight: e.weight,
                highlighted: false,
            })
            .collect();

        Self {
            title: None,
            vertex_count: graph.vertex_count(),
            nodes,
            edges,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn mark(&mut self, vertex: VertexId, role: NodeRole) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == vertex) {
            node.role = role;
        }
    }

    /// Highlight the first unhighlighted edge joining `a` and `b`.
    ///
    /// With a weight, only an edge of exactly that weight matches.
    pub fn highlight(&mut self, a: VertexId, b: VertexId, weight: Option<Weight>) -> bool {
        let found = self.edges.iter_mut().find(|e| {
            !e.highlighted && joins(e, a, b) && weight.is_none_or(|w| e.weight == w)
        });
        match found {
            Some(edge) => {
                edge.highlighted = true;
                true
            }
            None => false,
        }
    }

    /// Highlight the lightest unhighlighted edge joining `a` and `b`
    fn highlight_lightest(&mut self, a: VertexId, b: VertexId) -> bool {
        let lightest = self
            .edges
            .iter()
            .filter(|e| !e.highlighted && joins(e, a, b))
            .map(|e| e.weight)
            .min_by(|x, y| x.total_cmp(y));
        match lightest {
            Some(weight) => self.highlight(a, b, Some(weight)),
            None => false,
        }
    }

    pub fn highlight_tree(&mut self, tree: &SpanningTree) {
        self.mark(tree.source, NodeRole::Source);
        for edge in &tree.edges {
            self.highlight(edge.parent, edge.child, None);
        }
    }

    pub fn highlight_path(&mut self, path: &PathResult) {
        self.mark(path.source, NodeRole::Source);
        self.mark(path.target, NodeRole::Target);
        for hop in path.path.windows(2) {
            self.highlight_lightest(hop[0], hop[1]);
        }
    }

    pub fn highlight_mst(&mut self, mst: &MinimumSpanningTree) {
        for edge in &mst.edges {
            self.highlight(edge.u, edge.v, Some(edge.weight));
        }
    }

    pub fn highlighted_count(&self) -> usize {
        self.edges.iter().filter(|e| e.highlighted).count()
    }

    pub fn write(&self, out: &mut dyn Write) -> Result<()> {
        write_pretty(out, self)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content + "\n").map_err(|e| {
            GraphkitError::Other(format!(
                "failed to write visualization to {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(
            path = %path.display(),
            highlighted = self.highlighted_count(),
            "export_visualization"
        );
        Ok(())
    }
}

fn joins(edge: &VisualEdge, a: VertexId, b: VertexId) -> bool {
    (edge.u == a && edge.v == b) || (edge.u == b && edge.v == a)
}

/// Execute the visualize command
pub fn execute(ctx: &CommandContext, args: &VisualizeArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    let visual = VisualGraph::new(&graph).with_title("graph");

    match &args.output {
        Some(path) => {
            visual.save(path)?;
            if !ctx.cli.quiet {
                println!("Visualization written to {}", path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            visual.write(&mut stdout.lock())?;
        }
    }
    Ok(())
}
