use crate::error::{GraphkitError, Result};
use crate::graph::types::{MinimumSpanningTree, MstAlgorithm, Weight, WeightedEdge};
use crate::graph::union_find::DisjointSet;
use crate::graph::GraphProvider;
use std::time::Instant;

/// Kruskal's minimum spanning tree.
///
/// Edges are stable-sorted by weight, so equal weights keep input order and
/// repeated runs on the same input produce the same tree. An edge joins the
/// tree only if its endpoints are in different components. Fails with
/// `Disconnected` when fewer than `N - 1` edges can be accepted.
#[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count(), edge_count = provider.edges().len()))]
pub fn kruskal_mst(provider: &dyn GraphProvider) -> Result<MinimumSpanningTree> {
    let started = Instant::now();
    let n = provider.vertex_count();
    let needed = n.saturating_sub(1);

    let mut sorted: Vec<&WeightedEdge> = provider.edges().iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut components = DisjointSet::new(n);
    let mut edges = Vec::with_capacity(needed);
    let mut total_weight = Weight::ZERO;
    let mut examined = 0usize;

    for edge in sorted {
        if edges.len() == needed {
            break;
        }
        examined += 1;
        if components.union(edge.u, edge.v) {
            edges.push(*edge);
            total_weight += edge.weight;
        }
    }

    crate::trace_time!(started, "kruskal_mst");

    if edges.len() != needed {
        tracing::debug!(
            accepted = edges.len(),
            components = components.component_count(),
            "kruskal_disconnected"
        );
        return Err(GraphkitError::disconnected(MstAlgorithm::Kruskal.as_str()));
    }

    tracing::debug!(
        edges = edges.len(),
        examined,
        total_weight = total_weight.value(),
        "kruskal_complete"
    );

    Ok(MinimumSpanningTree {
        algorithm: MstAlgorithm::Kruskal,
        total_weight,
        edges,
    })
}
