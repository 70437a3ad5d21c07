use crate::error::{GraphkitError, Result};
use crate::graph::types::{VertexId, Weight};
use crate::graph::GraphProvider;
use std::cmp::Ordering;

/// Frontier entry for Dijkstra and Prim, ordered by priority then vertex id.
///
/// Wrap in `std::cmp::Reverse` to use `BinaryHeap` as a min-heap. The
/// vertex id tie-break keeps extraction order deterministic.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub priority: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Check that a caller-supplied vertex is inside the provider's graph
pub fn validate_vertex(provider: &dyn GraphProvider, vertex: VertexId) -> Result<()> {
    if provider.contains(vertex) {
        Ok(())
    } else {
        Err(GraphkitError::invalid_vertex(vertex, provider.vertex_count()))
    }
}

/// Unvisited vertices still connected to a visited one, ascending.
///
/// Only meaningful after a depth-bounded traversal; otherwise every
/// connected vertex was visited and the result is empty.
pub fn cut_off_vertices(provider: &dyn GraphProvider, visited: &[bool]) -> Vec<VertexId> {
    let mut seen = visited.to_vec();
    let mut stack: Vec<VertexId> = (1..=visited.len()).filter(|&v| visited[v - 1]).collect();
    let mut cut_off = Vec::new();

    while let Some(vertex) = stack.pop() {
        for neighbor in provider.neighbors(vertex) {
            if !seen[neighbor.vertex - 1] {
                seen[neighbor.vertex - 1] = true;
                cut_off.push(neighbor.vertex);
                stack.push(neighbor.vertex);
            }
        }
    }

    cut_off.sort_unstable();
    cut_off
}

/// Record a truncation, keeping the first reason seen
pub fn set_truncation(truncated: &mut bool, truncation_reason: &mut Option<String>, reason: &str) {
    *truncated = true;
    if truncation_reason.is_none() {
        *truncation_reason = Some(reason.to_string());
    }
}
