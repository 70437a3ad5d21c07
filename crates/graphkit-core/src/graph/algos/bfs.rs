use crate::error::Result;
use crate::graph::algos::shared::{cut_off_vertices, set_truncation, validate_vertex};
use crate::graph::types::{
    Predecessors, SpanningTree, TraversalKind, TraversalOptions, TreeEdge, VertexId,
};
use crate::graph::GraphProvider;
use std::collections::VecDeque;
use std::time::Instant;

/// Build a breadth-first spanning tree from `source`.
///
/// Vertices are marked discovered when enqueued, so each is recorded once
/// and the discovery order is non-decreasing in hop distance.
#[tracing::instrument(skip(provider, opts), fields(vertex_count = provider.vertex_count(), max_depth = ?opts.max_depth))]
pub fn bfs_spanning_tree(
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

    let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();
    visited[source - 1] = true;
    queue.push_back((source, 0));

    while let Some((current, depth)) = queue.pop_front() {
        let neighbors = provider.neighbors(current);

        if opts.max_depth.is_some_and(|max| depth >= max) {
            if neighbors.iter().any(|nb| !visited[nb.vertex - 1]) {
                set_truncation(&mut truncated, &mut truncation_reason, "max_depth");
            }
            continue;
        }

        for neighbor in neighbors {
            let next = neighbor.vertex;
            if visited[next - 1] {
                continue;
            }
            visited[next - 1] = true;
            parents.set(next, current);
            edges.push(TreeEdge {
                parent: current,
                child: next,
            });
            order.push(next);
            queue.push_back((next, depth + 1));
        }
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
        "bfs_complete"
    );
    crate::trace_time!(start, "bfs_spanning_tree");

    Ok(SpanningTree {
        kind: TraversalKind::Bfs,
        source,
        edges,
        parents,
        order,
        truncated,
        truncation_reason,
        cut_off,
    })
}
