use crate::graph::model::Graph;
use crate::graph::types::{Neighbor, VertexId, WeightedEdge};

/// Trait for providing graph adjacency to the algorithms.
///
/// Implementors are read-only: algorithms borrow the provider and keep
/// all of their working state in private arrays.
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn neighbors(&self, vertex: VertexId) -> &[Neighbor];
    fn edges(&self) -> &[WeightedEdge];

    fn contains(&self, vertex: VertexId) -> bool {
        (1..=self.vertex_count()).contains(&vertex)
    }
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        Graph::neighbors(self, vertex)
    }

    fn edges(&self) -> &[WeightedEdge] {
        Graph::edges(self)
    }
}
