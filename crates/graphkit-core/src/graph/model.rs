//! Undirected weighted graph with a fixed vertex set

use serde::Serialize;

use crate::error::{GraphkitError, Result};
use crate::graph::types::{Neighbor, VertexId, Weight, WeightedEdge};

/// Adjacency listing for a single vertex
#[derive(Debug, Clone, Serialize)]
pub struct AdjacencyEntry<'a> {
    pub vertex: VertexId,
    pub neighbors: &'a [Neighbor],
}

/// An undirected graph over vertices `1..=N`.
///
/// Every edge is stored in both endpoints' adjacency lists, in input
/// order. The structure is immutable once built.
#[derive(Debug, Clone)]
pub struct Graph {
    edges: Vec<WeightedEdge>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
    /// Build a graph from a vertex count and an edge list.
    ///
    /// Fails with `InvalidVertex` if an endpoint is outside `1..=vertex_count`
    /// and with `NegativeWeight` for weights below zero. An empty vertex set or
    /// one too large to allocate is `Other`.
    #[tracing::instrument(skip(edges), fields(edges = edges.len()))]
    pub fn new(vertex_count: usize, edges: Vec<WeightedEdge>) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphkitError::Other(
                "graph must have at least one vertex".to_string(),
            ));
        }

        let mut adjacency: Vec<Vec<Neighbor>> = Vec::new();
        adjacency.try_reserve_exact(vertex_count).map_err(|e| {
            GraphkitError::Other(format!(
                "cannot allocate adjacency for {} vertices: {}",
                vertex_count, e
            ))
        })?;
        adjacency.resize_with(vertex_count, Vec::new);
        for edge in &edges {
            for endpoint in [edge.u, edge.v] {
                if !(1..=vertex_count).contains(&endpoint) {
                    return Err(GraphkitError::invalid_vertex(endpoint, vertex_count));
                }
            }
            if !edge.weight.is_finite() {
                return Err(GraphkitError::Other(format!(
                    "weight of edge {} - {} is not a finite number",
                    edge.u, edge.v
                )));
            }
            if edge.weight.is_negative() {
                return Err(GraphkitError::NegativeWeight {
                    u: edge.u,
                    v: edge.v,
                    weight: edge.weight,
                });
            }

            adjacency[edge.u - 1].push(Neighbor {
                vertex: edge.v,
                weight: edge.weight,
            });
            adjacency[edge.v - 1].push(Neighbor {
                vertex: edge.u,
                weight: edge.weight,
            });
        }

        tracing::debug!(vertex_count, edge_count = edges.len(), "graph_built");

        Ok(Self { edges, adjacency })
    }

    /// Build a graph from `(u, v, w)` triples
    pub fn from_triples(
        vertex_count: usize,
        triples: impl IntoIterator<Item = (VertexId, VertexId, f64)>,
    ) -> Result<Self> {
        let edges = triples
            .into_iter()
            .map(|(u, v, w)| WeightedEdge::new(u, v, Weight::new(w)))
            .collect();
        Self::new(vertex_count, edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in input order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Neighbors of a vertex in stored order; empty for ids outside the graph
    pub fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        vertex
            .checked_sub(1)
            .and_then(|idx| self.adjacency.get(idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        1..=self.vertex_count()
    }

    /// Per-vertex neighbor lists, vertex 1 first
    pub fn adjacency(&self) -> Vec<AdjacencyEntry<'_>> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(idx, neighbors)| AdjacencyEntry {
                vertex: idx + 1,
                neighbors,
            })
            .collect()
    }

    /// Check that a vertex id supplied by a caller is inside the graph
    pub fn validate_vertex(&self, vertex: VertexId) -> Result<VertexId> {
        if (1..=self.vertex_count()).contains(&vertex) {
            Ok(vertex)
        } else {
            Err(GraphkitError::invalid_vertex(vertex, self.vertex_count()))
        }
    }
}
