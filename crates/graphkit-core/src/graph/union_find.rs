//! Disjoint set union over vertices `1..=N`
//!
//! Used by Kruskal's algorithm to reject edges that would close a cycle.
//! `find` compresses paths and `union` links by rank, so both run in
//! near-constant amortized time.

use crate::graph::types::VertexId;

#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// One singleton set per vertex in `1..=vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
            components: vertex_count,
        }
    }

    /// Representative of the set containing `vertex`
    pub fn find(&mut self, vertex: VertexId) -> VertexId {
        let mut node = vertex - 1;
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root + 1
    }

    /// Merge the sets of `a` and `b`; false if they were already joined
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let mut left = self.find(a) - 1;
        let mut right = self.find(b) - 1;
        if left == right {
            return false;
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    pub fn same_set(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn component_count(&self) -> usize {
        self.components
    }
}
