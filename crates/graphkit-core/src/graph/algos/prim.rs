use crate::error::{GraphkitError, Result};
use crate::graph::algos::shared::{validate_vertex, HeapEntry};
use crate::graph::types::{
    MinimumSpanningTree, MstAlgorithm, Predecessors, VertexId, Weight, WeightedEdge,
};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Vertex Prim's algorithm grows from unless configured otherwise
pub const DEFAULT_PRIM_START: VertexId = 1;

/// Prim's minimum spanning tree, grown from `start`.
///
/// Each vertex outside the tree keeps the weight of its cheapest known edge
/// into the tree. The cheapest such vertex is extracted next (lower id on
/// ties), its connecting edge joins the tree and its neighbors' keys are
/// relaxed. Fails with `Disconnected` if any vertex is never reached; no
/// partial tree is returned.
#[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
pub fn prim_mst(provider: &dyn GraphProvider, start: VertexId) -> Result<MinimumSpanningTree> {
    validate_vertex(provider, start)?;
    let started = Instant::now();

    let n = provider.vertex_count();
    let mut in_tree = vec![false; n];
    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parents = Predecessors::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = Weight::ZERO;
    let mut spanned = 0usize;
    let mut heap = BinaryHeap::new();

    key[start - 1] = Some(Weight::ZERO);
    heap.push(Reverse(HeapEntry {
        vertex: start,
        priority: Weight::ZERO,
    }));

    while let Some(Reverse(HeapEntry { vertex, priority })) = heap.pop() {
        if in_tree[vertex - 1] {
            continue;
        }
        in_tree[vertex - 1] = true;
        spanned += 1;

        if let Some(parent) = parents.get(vertex) {
            edges.push(WeightedEdge::new(parent, vertex, priority));
            total_weight += priority;
        }

        for neighbor in provider.neighbors(vertex) {
            let next = neighbor.vertex;
            if in_tree[next - 1] {
                continue;
            }
            if key[next - 1].is_none_or(|current| neighbor.weight < current) {
                key[next - 1] = Some(neighbor.weight);
                parents.set(next, vertex);
                heap.push(Reverse(HeapEntry {
                    vertex: next,
                    priority: neighbor.weight,
                }));
            }
        }
    }

    crate::trace_time!(started, "prim_mst");

    if spanned < n {
        tracing::debug!(spanned, vertex_count = n, "prim_disconnected");
        return Err(GraphkitError::disconnected(MstAlgorithm::Prim.as_str()));
    }

    tracing::debug!(edges = edges.len(), total_weight = total_weight.value(), "prim_complete");

    Ok(MinimumSpanningTree {
        algorithm: MstAlgorithm::Prim,
        total_weight,
        edges,
    })
}
