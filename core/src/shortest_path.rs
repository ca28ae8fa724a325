use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use crate::mst::cheapest_outside;
use crate::tree::{SearchTree, ShortestPath, ShortestPathTree};

fn check_vertex<V>(graph: &Graph<V>, v: VertexId, what: &str)
where
    V: Clone + Eq + Hash,
{
    assert!(
        v < graph.size(),
        "{} vertex {} out of range for graph of {} vertices",
        what,
        v,
        graph.size()
    );
}

/// Single-source shortest paths by repeated minimum scan (Dijkstra, O(V²)).
///
/// Each round settles the unsettled vertex with the lowest cost (first
/// index wins ties) and relaxes its outgoing arcs by `cost[u] + weight`.
/// Vertices the source cannot reach keep infinite cost and no parent, and
/// are missing from the search order, which lists vertices as settled.
///
/// Arc weights must be non-negative; results are unspecified otherwise.
/// Panics if `source` is out of range.
pub fn shortest_paths<V>(graph: &Graph<V>, source: VertexId) -> ShortestPathTree
where
    V: Clone + Eq + Hash,
{
    check_vertex(graph, source, "source");

    let n = graph.size();
    let mut cost = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut order = Vec::with_capacity(n);

    cost[source] = 0.0;

    while let Some(u) = cheapest_outside(&cost, &settled) {
        settled[u] = true;
        order.push(u);

        for e in graph.edges(u) {
            let candidate = cost[u] + e.weight;
            if !settled[e.target] && candidate < cost[e.target] {
                cost[e.target] = candidate;
                parent[e.target] = Some(u);
            }
        }
    }

    tracing::debug!(source, reached = order.len(), total = n, "shortest paths complete");
    ShortestPathTree::new(SearchTree::new(source, parent, order), cost)
}

/// Heap entry ordered so that `BinaryHeap` pops the lowest cost first,
/// then the lowest vertex index.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    cost: f64,
    vertex: VertexId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Single-source shortest paths with a binary heap, O((V + E) log V).
///
/// Every improvement pushes a fresh heap entry; entries whose cost no
/// longer matches the vertex's current cost are skipped when popped. Costs
/// are identical to [`shortest_paths`]; parents may differ where two paths
/// tie.
///
/// Panics if `source` is out of range.
pub fn shortest_paths_heap<V>(graph: &Graph<V>, source: VertexId) -> ShortestPathTree
where
    V: Clone + Eq + Hash,
{
    check_vertex(graph, source, "source");

    let n = graph.size();
    let mut cost = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut heap = BinaryHeap::new();

    cost[source] = 0.0;
    heap.push(Candidate {
        cost: 0.0,
        vertex: source,
    });

    while let Some(Candidate { cost: c, vertex: u }) = heap.pop() {
        if settled[u] || c > cost[u] {
            continue;
        }
        settled[u] = true;
        order.push(u);

        for e in graph.edges(u) {
            let candidate = c + e.weight;
            if !settled[e.target] && candidate < cost[e.target] {
                cost[e.target] = candidate;
                parent[e.target] = Some(u);
                heap.push(Candidate {
                    cost: candidate,
                    vertex: e.target,
                });
            }
        }
    }

    tracing::debug!(source, reached = order.len(), total = n, "heap shortest paths complete");
    ShortestPathTree::new(SearchTree::new(source, parent, order), cost)
}

/// Cheapest path from `from` to `to`, with its total weight.
///
/// Errors with `Unreachable` when no path exists. Panics if either vertex
/// is out of range.
pub fn shortest_path<V>(graph: &Graph<V>, from: VertexId, to: VertexId) -> Result<ShortestPath>
where
    V: Clone + Eq + Hash,
{
    check_vertex(graph, to, "target");
    let tree = shortest_paths(graph, from);

    match tree.path_to(to) {
        Some(vertices) => Ok(ShortestPath {
            vertices,
            total_weight: tree.cost(to),
        }),
        None => Err(GraphError::Unreachable { from, to }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedEdge;
    use crate::test_support::{make_chain, random_connected, undirected, FastRng};

    fn scenario() -> Graph {
        undirected(4, &[(0, 1, 4.0), (0, 2, 1.0), (2, 3, 2.0)])
    }

    fn random_directed(rng: &mut FastRng, n: usize, arcs: usize) -> Graph {
        let mut g = Graph::from_edges(n, Vec::new());
        for _ in 0..arcs {
            let a = rng.next(n as u64) as usize;
            let b = rng.next(n as u64) as usize;
            g.add_weighted_edge(a, b, rng.next(20) as f64);
        }
        g
    }

    #[test]
    fn test_costs_scenario() {
        let spt = shortest_paths(&scenario(), 0);
        assert_eq!(spt.costs(), &[0.0, 4.0, 1.0, 3.0]);
        assert_eq!(spt.tree.search_order(), &[0, 2, 3, 1]);
        assert_eq!(spt.path_to(3), Some(vec![0, 2, 3]));
        assert_eq!(spt.tree.parent(0), None);
    }

    #[test]
    fn test_relaxation_prefers_cheaper_longer_path() {
        // Direct 0->2 costs 10, detour through 1 costs 3
        let g = Graph::from_edges(
            3,
            vec![
                WeightedEdge::new(0, 2, 10.0),
                WeightedEdge::new(0, 1, 1.0),
                WeightedEdge::new(1, 2, 2.0),
            ],
        );
        let spt = shortest_paths(&g, 0);
        assert_eq!(spt.cost(2), 3.0);
        assert_eq!(spt.tree.parent(2), Some(1));
    }

    #[test]
    fn test_unreachable_keeps_infinity() {
        let g = make_chain(4);
        let spt = shortest_paths(&g, 2);
        assert_eq!(spt.cost(3), 1.0);
        assert!(spt.cost(0).is_infinite());
        assert_eq!(spt.tree.parent(0), None);
        assert_eq!(spt.tree.search_order(), &[2, 3]);
        assert_eq!(spt.path_to(1), None);
    }

    #[test]
    fn test_zero_weight_arcs() {
        let g = undirected(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        let spt = shortest_paths(&g, 0);
        assert_eq!(spt.costs(), &[0.0, 0.0, 0.0]);
        assert_eq!(spt.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_triangle_inequality_holds() {
        let mut rng = FastRng::new(555);
        for _ in 0..20 {
            let g = random_directed(&mut rng, 25, 80);
            let spt = shortest_paths(&g, 0);
            for e in g.weighted_edges() {
                assert!(
                    spt.cost(e.to) <= spt.cost(e.from) + e.weight,
                    "arc {} violates triangle inequality",
                    e
                );
            }
        }
    }

    #[test]
    fn test_costs_match_path_weights() {
        let mut rng = FastRng::new(12);
        let g = random_connected(&mut rng, 30, 50, false);
        let spt = shortest_paths(&g, 4);
        for v in 0..g.size() {
            let path = spt.path_to(v).unwrap();
            let sum: f64 = path.windows(2).map(|p| g.weight(p[0], p[1]).unwrap()).sum();
            assert_eq!(sum, spt.cost(v));
        }
    }

    #[test]
    fn test_heap_matches_scan() {
        let mut rng = FastRng::new(2718);
        for _ in 0..30 {
            let g = random_directed(&mut rng, 40, 150);
            let source = rng.next(40) as usize;
            let scan = shortest_paths(&g, source);
            let heap = shortest_paths_heap(&g, source);
            assert_eq!(scan.costs(), heap.costs());
            assert_eq!(scan.tree.vertices_found(), heap.tree.vertices_found());
        }
    }

    #[test]
    fn test_heap_skips_stale_entries() {
        // 2 is pushed at cost 10, then improved to 3; the stale entry must not
        // resettle it
        let g = Graph::from_edges(
            4,
            vec![
                WeightedEdge::new(0, 2, 10.0),
                WeightedEdge::new(0, 1, 1.0),
                WeightedEdge::new(1, 2, 2.0),
                WeightedEdge::new(2, 3, 1.0),
            ],
        );
        let spt = shortest_paths_heap(&g, 0);
        assert_eq!(spt.costs(), &[0.0, 1.0, 3.0, 4.0]);
        assert_eq!(spt.tree.search_order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_shortest_path_between_vertices() {
        let path = shortest_path(&scenario(), 1, 3).unwrap();
        assert_eq!(path.vertices, vec![1, 0, 2, 3]);
        assert_eq!(path.total_weight, 7.0);
    }

    #[test]
    fn test_shortest_path_self() {
        let path = shortest_path(&scenario(), 2, 2).unwrap();
        assert_eq!(path.vertices, vec![2]);
        assert_eq!(path.total_weight, 0.0);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let g = Graph::from_edges(2, Vec::new());
        assert_eq!(
            shortest_path(&g, 0, 1).unwrap_err(),
            GraphError::Unreachable { from: 0, to: 1 }
        );
    }

    #[test]
    #[should_panic(expected = "target vertex 9 out of range")]
    fn test_shortest_path_target_out_of_range() {
        let _ = shortest_path(&scenario(), 0, 9);
    }

    #[test]
    #[should_panic(expected = "source vertex 4 out of range")]
    fn test_source_out_of_range() {
        shortest_paths(&scenario(), 4);
    }
}
