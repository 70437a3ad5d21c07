//! Deterministic graph generators shared by algorithm tests

use crate::graph::types::{Weight, WeightedEdge};
use crate::graph::Graph;

/// Small linear congruential generator; reproducible without extra crates
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// Uniform-ish value in `lo..=hi`
    pub fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }
}

/// Random graph with `n` vertices and `m` edges, integer weights in `0..=max_weight`
pub fn random_graph(seed: u64, n: usize, m: usize, max_weight: u64) -> Graph {
    let mut rng = Lcg::new(seed);
    let edges = (0..m)
        .map(|_| {
            let u = rng.range(1, n as u64) as usize;
            let v = rng.range(1, n as u64) as usize;
            let w = rng.range(0, max_weight) as f64;
            WeightedEdge::new(u, v, Weight::new(w))
        })
        .collect();
    Graph::new(n, edges).expect("generated graph is valid")
}

/// Random connected graph: a random spanning path plus `extra` random edges
pub fn random_connected_graph(seed: u64, n: usize, extra: usize, max_weight: u64) -> Graph {
    let mut rng = Lcg::new(seed);
    let mut edges = Vec::with_capacity(n - 1 + extra);
    for v in 2..=n {
        let u = rng.range(1, (v - 1) as u64) as usize;
        let w = rng.range(1, max_weight) as f64;
        edges.push(WeightedEdge::new(u, v, Weight::new(w)));
    }
    for _ in 0..extra {
        let u = rng.range(1, n as u64) as usize;
        let v = rng.range(1, n as u64) as usize;
        let w = rng.range(1, max_weight) as f64;
        edges.push(WeightedEdge::new(u, v, Weight::new(w)));
    }
    Graph::new(n, edges).expect("generated graph is valid")
}

/// The 4-cycle used throughout the docs: 1-2 (1), 2-3 (2), 3-4 (3), 4-1 (4)
pub fn four_cycle() -> Graph {
    Graph::from_triples(4, [(1, 2, 1.0), (2, 3, 2.0), (3, 4, 3.0), (4, 1, 4.0)])
        .expect("valid graph")
}

/// All-pairs distances by Floyd-Warshall, `None` for unreachable pairs
pub fn floyd_warshall(graph: &Graph) -> Vec<Vec<Option<f64>>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0.0);
    }
    for edge in graph.edges() {
        let (u, v, w) = (edge.u - 1, edge.v - 1, edge.weight.value());
        for (a, b) in [(u, v), (v, u)] {
            if dist[a][b].is_none_or(|d| w < d) {
                dist[a][b] = Some(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else { continue };
            for j in 0..n {
                let Some(kj) = dist[k][j] else { continue };
                if dist[i][j].is_none_or(|d| ik + kj < d) {
                    dist[i][j] = Some(ik + kj);
                }
            }
        }
    }
    dist
}
