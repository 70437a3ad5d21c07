use crate::error::Result;
use crate::graph::algos::shared::{cut_off_vertices, set_truncation, validate_vertex};
use crate::graph::types::{
    Predecessors, SpanningTree, TraversalKind, TraversalOptions, TreeEdge, VertexId,
};
use crate::graph::GraphProvider;
use std::time::Instant;

/// One suspended call of the equivalent recursive DFS
struct Frame {
    vertex: VertexId,
    depth: usize,
    /// Index of the next neighbor to try
    cursor: usize,
}

/// Build a depth-first spanning tree from `source`.
///
/// Uses an explicit stack of frames, each remembering how far through its
/// neighbor list it has got. This reproduces recursive discovery order
/// exactly: neighbors are tried in stored order and a neighbor's subtree is
/// finished before its next sibling is considered.
#[tracing::instrument(skip(provider, opts), fields(vertex_count = provider.vertex_count(), max_depth = ?opts.max_depth))]
pub fn dfs_spanning_tree(
    provider: &dyn GraphProvider,
    source: VertexId,
    opts: &TraversalOptions,
) -> Result<SpanningTree> {
    validate_vertex(provider, source)?;
    let start = Instant::now();

    let n = provider.vertex_count();
    let mut visited = vec![false; n];
    let mut parents = Predecessors::new(n);
    let mut edges = Vec::new();
    let mut order = vec![source];
    let mut truncated = false;
    let mut truncation_reason = None;

    visited[source - 1] = true;
    let mut stack = vec![Frame {
        vertex: source,
        depth: 0,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let vertex = frame.vertex;
        let depth = frame.depth;
        let neighbors = provider.neighbors(vertex);

        if opts.max_depth.is_some_and(|max| depth >= max) {
            if neighbors.iter().any(|nb| !visited[nb.vertex - 1]) {
                set_truncation(&mut truncated, &mut truncation_reason, "max_depth");
            }
            stack.pop();
            continue;
        }

        let Some(neighbor) = neighbors.get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        let next = neighbor.vertex;
        if visited[next - 1] {
            continue;
        }

        visited[next - 1] = true;
        parents.set(next, vertex);
        edges.push(TreeEdge {
            parent: vertex,
            child: next,
        });
        order.push(next);
        stack.push(Frame {
            vertex: next,
            depth: depth + 1,
            cursor: 0,
        });
    }

    let cut_off = if truncated {
        cut_off_vertices(provider, &visited)
    } else {
        Vec::new()
    };

    tracing::debug!(
        reached = order.len(),
        cut_off = cut_off.len(),
        tree_edges = edges.len(),
        truncated,
        "dfs_complete"
    );
    crate::trace_time!(start, "dfs_spanning_tree");

    Ok(SpanningTree {
        kind: TraversalKind::Dfs,
        source,
        edges,
        parents,
        order,
        truncated,
        truncation_reason,
        cut_off,
    })
}
