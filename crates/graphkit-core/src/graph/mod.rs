//! Graph model and algorithms
//!
//! Provides the undirected weighted graph and the algorithms that read it:
//! - DFS and BFS spanning trees
//! - Dijkstra shortest paths
//! - Prim and Kruskal minimum spanning trees
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod input;
pub mod model;
pub mod path;
pub mod traversal;
pub mod types;
pub mod union_find;

#[cfg(test)]
pub(crate) mod test_support;

pub use algos::{
    bfs_spanning_tree, dfs_spanning_tree, dijkstra, kruskal_mst, prim_mst, shortest_path,
    ShortestPaths, DEFAULT_PRIM_START,
};
pub use input::{parse_graph, read_graph, InputOptions};
pub use model::{AdjacencyEntry, Graph};
pub use path::{path_edges, reconstruct_path};
pub use traversal::GraphProvider;
pub use types::{
    MinimumSpanningTree, MstAlgorithm, Neighbor, PathResult, Predecessors, SpanningTree,
    TraversalKind, TraversalOptions, TreeEdge, VertexId, Weight, WeightedEdge,
};
pub use union_find::DisjointSet;

/// Run the spanning tree traversal named by `kind`
pub fn spanning_tree(
    provider: &dyn GraphProvider,
    kind: TraversalKind,
    source: VertexId,
    opts: &TraversalOptions,
) -> crate::error::Result<SpanningTree> {
    match kind {
        TraversalKind::Dfs => dfs_spanning_tree(provider, source, opts),
        TraversalKind::Bfs => bfs_spanning_tree(provider, source, opts),
    }
}

/// Run the minimum spanning tree algorithm named by `algorithm`
pub fn minimum_spanning_tree(
    provider: &dyn GraphProvider,
    algorithm: MstAlgorithm,
    prim_start: VertexId,
) -> crate::error::Result<MinimumSpanningTree> {
    match algorithm {
        MstAlgorithm::Prim => prim_mst(provider, prim_start),
        MstAlgorithm::Kruskal => kruskal_mst(provider),
    }
}
