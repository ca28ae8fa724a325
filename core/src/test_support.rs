//! Fixture builders shared by the unit tests.

use crate::graph::{Graph, VertexId, WeightedEdge};

/// LCG for deterministic pseudo-random fixtures.
pub struct FastRng(u64);

impl FastRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

/// Directed chain `0 -> 1 -> ... -> n-1` with unit weights.
pub fn make_chain(n: usize) -> Graph {
    Graph::from_edges(n, (1..n).map(|i| WeightedEdge::new(i - 1, i, 1.0)))
}

/// Directed cycle `0 -> 1 -> ... -> n-1 -> 0` with unit weights.
pub fn make_cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|i| WeightedEdge::new(i, (i + 1) % n, 1.0)))
}

/// Undirected star: `center` linked both ways to each of `leaves` other vertices.
pub fn make_star(center: VertexId, leaves: usize) -> Graph {
    let n = leaves + 1;
    let edges: Vec<(VertexId, VertexId, f64)> = (0..n)
        .filter(|&v| v != center)
        .map(|v| (center, v, 1.0))
        .collect();
    undirected(n, &edges)
}

/// Undirected graph: each `(u, v, w)` inserted as `(u, v)` then `(v, u)`.
pub fn undirected(n: usize, edges: &[(VertexId, VertexId, f64)]) -> Graph {
    Graph::from_edges(
        n,
        edges.iter().flat_map(|&(u, v, w)| {
            [WeightedEdge::new(u, v, w), WeightedEdge::new(v, u, w)]
        }),
    )
}

/// Random connected undirected graph: a random spanning tree plus `extra`
/// additional links. Weights are distinct when `distinct` is set.
pub fn random_connected(rng: &mut FastRng, n: usize, extra: usize, distinct: bool) -> Graph {
    let mut edges = Vec::new();
    let mut next_weight = 1.0;
    let mut weight = |rng: &mut FastRng| {
        if distinct {
            next_weight += 1.0 + rng.next(5) as f64;
            next_weight
        } else {
            (1 + rng.next(4)) as f64
        }
    };

    for v in 1..n {
        let parent = rng.next(v as u64) as usize;
        let w = weight(rng);
        edges.push((parent, v, w));
    }
    for _ in 0..extra {
        let a = rng.next(n as u64) as usize;
        let b = rng.next(n as u64) as usize;
        if a != b {
            let w = weight(rng);
            edges.push((a, b, w));
        }
    }

    // Shuffle so adjacency order does not follow the spanning tree
    let len = edges.len();
    for i in (1..len).rev() {
        let j = rng.next(i as u64 + 1) as usize;
        edges.swap(i, j);
    }
    undirected(n, &edges)
}
