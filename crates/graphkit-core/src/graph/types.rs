use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 1-based vertex identifier in `1..=N`
pub type VertexId = usize;

/// Weight of an undirected edge.
///
/// Weights are finite and non-negative once they are inside a `Graph`;
/// the ordering used by priority frontiers is `f64::total_cmp`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const DEFAULT: Weight = Weight(1.0);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order over weights, used for heap and sort keys
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Weight {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(f64::from(weight))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected weighted edge as supplied at input time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(u: VertexId, v: VertexId, weight: impl Into<Weight>) -> Self {
        Self {
            u,
            v,
            weight: weight.into(),
        }
    }

    /// Endpoints as an unordered pair, smaller id first
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

/// One entry of a vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: Weight,
}

/// A spanning tree edge, child discovered via parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub parent: VertexId,
    pub child: VertexId,
}

/// Predecessor links produced by traversal and shortest-path runs.
///
/// Index `v - 1` holds the vertex that discovered `v`, or `None` for the
/// root and for vertices that were never reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Predecessors(Vec<Option<VertexId>>);

impl Predecessors {
    pub fn new(vertex_count: usize) -> Self {
        Predecessors(vec![None; vertex_count])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, vertex: VertexId) -> Option<VertexId> {
        vertex
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .copied()
            .flatten()
    }

    pub fn set(&mut self, vertex: VertexId, parent: VertexId) {
        self.0[vertex - 1] = Some(parent);
    }
}

/// Which traversal produced a spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    Dfs,
    Bfs,
}

impl TraversalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalKind::Dfs => "dfs",
            TraversalKind::Bfs => "bfs",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for spanning tree traversals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Vertices this many tree edges away from the source are not expanded
    pub max_depth: Option<usize>,
}

/// Result of a DFS or BFS spanning tree build
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    pub kind: TraversalKind,
    pub source: VertexId,
    /// Tree edges in discovery order
    pub edges: Vec<TreeEdge>,
    #[serde(skip)]
    pub parents: Predecessors,
    /// Discovery order, source first
    pub order: Vec<VertexId>,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_reason: Option<String>,
    /// Connected to the source but left out by the depth bound, ascending
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cut_off: Vec<VertexId>,
}

impl SpanningTree {
    pub fn reached(&self, vertex: VertexId) -> bool {
        vertex == self.source || self.parents.get(vertex).is_some()
    }

    /// Vertices with no path from the source at all, ascending
    pub fn unreachable(&self) -> Vec<VertexId> {
        (1..=self.parents.len())
            .filter(|&v| !self.reached(v) && self.cut_off.binary_search(&v).is_err())
            .collect()
    }
}

/// A reconstructed shortest path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub source: VertexId,
    pub target: VertexId,
    pub distance: Weight,
    /// Vertices from source to target inclusive
    pub path: Vec<VertexId>,
}

impl PathResult {
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Which algorithm produced a minimum spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

impl MstAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            MstAlgorithm::Prim => "prim",
            MstAlgorithm::Kruskal => "kruskal",
        }
    }

    /// Name used in human-readable output
    pub fn display_name(&self) -> &'static str {
        match self {
            MstAlgorithm::Prim => "Prim's",
            MstAlgorithm::Kruskal => "Kruskal's",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A minimum spanning tree over every vertex of a connected graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimumSpanningTree {
    pub algorithm: MstAlgorithm,
    pub total_weight: Weight,
    pub edges: Vec<WeightedEdge>,
}
