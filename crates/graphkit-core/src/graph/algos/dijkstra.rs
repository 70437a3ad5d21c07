use crate::error::{GraphkitError, Result};
use crate::graph::algos::shared::{validate_vertex, HeapEntry};
use crate::graph::path::reconstruct_path;
use crate::graph::types::{PathResult, Predecessors, VertexId, Weight};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Distances and predecessors from a single Dijkstra run
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: VertexId,
    /// Index `v - 1`; `None` means not reached (or not finalized before an
    /// early exit)
    distances: Vec<Option<Weight>>,
    pub parents: Predecessors,
    /// Vertices finalized, in extraction order
    pub finalized: Vec<VertexId>,
}

impl ShortestPaths {
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        vertex
            .checked_sub(1)
            .and_then(|idx| self.distances.get(idx))
            .copied()
            .flatten()
    }

    /// Shortest path from the source to `target`
    pub fn path_to(&self, target: VertexId) -> Result<PathResult> {
        let distance = self.distance(target).ok_or(GraphkitError::Unreachable {
            from: self.source,
            to: target,
        })?;
        let path = reconstruct_path(&self.parents, self.source, target)?;
        Ok(PathResult {
            source: self.source,
            target,
            distance,
            path,
        })
    }
}

/// Single-source shortest paths over non-negative weights.
///
/// The frontier is a binary heap keyed by tentative distance. A vertex is
/// finalized the first time it is popped; any later entry for it is stale
/// and discarded. With a `target`, the run stops as soon as the target is
/// finalized. Distances of vertices finalized before that point are exact;
/// the rest are left as `None`.
///
/// Negative weights are a precondition violation. `Graph::new` rejects them,
/// other providers must not supply them.
#[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
pub fn dijkstra(
    provider: &dyn GraphProvider,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<ShortestPaths> {
    validate_vertex(provider, source)?;
    if let Some(target) = target {
        validate_vertex(provider, target)?;
    }
    let start = Instant::now();

    let n = provider.vertex_count();
    let mut tentative: Vec<Option<Weight>> = vec![None; n];
    let mut done = vec![false; n];
    let mut parents = Predecessors::new(n);
    let mut finalized = Vec::new();
    let mut heap = BinaryHeap::new();
    let mut stale_pops = 0usize;

    tentative[source - 1] = Some(Weight::ZERO);
    heap.push(Reverse(HeapEntry {
        vertex: source,
        priority: Weight::ZERO,
    }));

    while let Some(Reverse(HeapEntry { vertex, priority })) = heap.pop() {
        if done[vertex - 1] {
            stale_pops += 1;
            continue;
        }
        done[vertex - 1] = true;
        finalized.push(vertex);

        if target == Some(vertex) {
            break;
        }

        for neighbor in provider.neighbors(vertex) {
            let next = neighbor.vertex;
            if done[next - 1] {
                continue;
            }
            let candidate = priority + neighbor.weight;
            let improves = tentative[next - 1].is_none_or(|best| candidate < best);
            if improves {
                tentative[next - 1] = Some(candidate);
                parents.set(next, vertex);
                heap.push(Reverse(HeapEntry {
                    vertex: next,
                    priority: candidate,
                }));
            }
        }
    }

    // Only finalized distances are exact
    let distances = tentative
        .into_iter()
        .zip(&done)
        .map(|(dist, &is_done)| if is_done { dist } else { None })
        .collect();

    tracing::debug!(
        finalized = finalized.len(),
        stale_pops,
        early_exit = target.is_some(),
        "dijkstra_complete"
    );
    crate::trace_time!(start, "dijkstra");

    Ok(ShortestPaths {
        source,
        distances,
        parents,
        finalized,
    })
}

/// Shortest path between two vertices, or `Unreachable`
pub fn shortest_path(
    provider: &dyn GraphProvider,
    source: VertexId,
    target: VertexId,
) -> Result<PathResult> {
    dijkstra(provider, source, Some(target))?.path_to(target)
}
