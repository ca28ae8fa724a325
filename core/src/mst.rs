use std::collections::VecDeque;
use std::hash::Hash;

use crate::disjoint_set::DisjointSet;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, WeightedEdge};
use crate::tree::{SearchTree, SpanningTree};

/// Kruskal's minimum spanning tree over an arc list.
///
/// Arcs are taken in ascending weight order. The sort is stable, so among
/// equal weights the arc listed first wins. An arc is accepted when its
/// endpoints lie in different components. The run stops as soon as
/// `vertex_count - 1` arcs are accepted.
///
/// Opposing arc pairs of an undirected graph are fine as input: the second
/// arc of each pair always closes a cycle and is rejected.
///
/// The resulting tree is rooted at vertex 0; its search order is the
/// breadth-first order over the accepted arcs.
///
/// Errors with `NotConnected` when the list runs out before the tree spans
/// every vertex, and `EmptyGraph` when `vertex_count` is 0. Panics if an
/// arc endpoint is `>= vertex_count`.
pub fn kruskal(edges: &[WeightedEdge], vertex_count: usize) -> Result<SpanningTree> {
    if vertex_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    for e in edges {
        assert!(
            e.from < vertex_count && e.to < vertex_count,
            "edge {} out of range for graph of {} vertices",
            e,
            vertex_count
        );
    }

    let mut sorted: Vec<&WeightedEdge> = edges.iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let target = vertex_count - 1;
    let mut sets = DisjointSet::new(vertex_count);
    let mut chosen: Vec<WeightedEdge> = Vec::with_capacity(target);
    let mut total_weight = 0.0;

    for &edge in &sorted {
        if chosen.len() == target {
            break;
        }
        if sets.union(edge.from, edge.to) {
            tracing::trace!(%edge, "kruskal: accept");
            chosen.push(*edge);
            total_weight += edge.weight;
        } else {
            tracing::trace!(%edge, "kruskal: reject, closes a cycle");
        }
    }

    if chosen.len() < target {
        let root = sets.find(0);
        let reached = (0..vertex_count).filter(|&v| sets.find(v) == root).count();
        tracing::debug!(reached, total = vertex_count, "kruskal: graph not connected");
        return Err(GraphError::NotConnected {
            reached,
            total: vertex_count,
        });
    }

    tracing::debug!(
        vertices = vertex_count,
        candidates = edges.len(),
        total_weight,
        "kruskal complete"
    );

    Ok(SpanningTree {
        tree: root_tree(vertex_count, &chosen),
        total_weight,
        edges: chosen,
    })
}

/// Kruskal's algorithm over every arc stored in `graph`.
pub fn kruskal_graph<V>(graph: &Graph<V>) -> Result<SpanningTree>
where
    V: Clone + Eq + Hash,
{
    kruskal(&graph.weighted_edges(), graph.size())
}

/// Orient an undirected edge set as a tree rooted at vertex 0.
fn root_tree(vertex_count: usize, edges: &[WeightedEdge]) -> SearchTree {
    let mut adjacency: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
    for e in edges {
        adjacency[e.from].push(e.to);
        adjacency[e.to].push(e.from);
    }

    let mut parent: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    let mut order = Vec::with_capacity(vertex_count);
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited[0] = true;
    queue.push_back(0);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &adjacency[u] {
            if !visited[v] {
                visited[v] = true;
                parent[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    SearchTree::new(0, parent, order)
}

/// Prim-style minimum spanning tree grown from `start`.
///
/// Each round scans all vertices not yet in the tree for the lowest
/// attachment cost (first index wins ties), adds it, then lowers the cost
/// of its unvisited neighbors to the weight of the connecting arc. O(V²)
/// plus O(E) relaxation.
///
/// Errors with `NotConnected` when the remaining vertices all have
/// infinite cost. Panics if `start` is out of range.
pub fn prim<V>(graph: &Graph<V>, start: VertexId) -> Result<SpanningTree>
where
    V: Clone + Eq + Hash,
{
    let n = graph.size();
    assert!(
        start < n,
        "start vertex {} out of range for graph of {} vertices",
        start,
        n
    );

    let mut cost = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;

    cost[start] = 0.0;

    while order.len() < n {
        let Some(u) = cheapest_outside(&cost, &in_tree) else {
            tracing::debug!(reached = order.len(), total = n, "prim: graph not connected");
            return Err(GraphError::NotConnected {
                reached: order.len(),
                total: n,
            });
        };

        in_tree[u] = true;
        order.push(u);
        total_weight += cost[u];
        if let Some(p) = parent[u] {
            edges.push(WeightedEdge::new(p, u, cost[u]));
        }

        for e in graph.edges(u) {
            if !in_tree[e.target] && e.weight < cost[e.target] {
                cost[e.target] = e.weight;
                parent[e.target] = Some(u);
            }
        }
    }

    tracing::debug!(start, vertices = n, total_weight, "prim complete");

    Ok(SpanningTree {
        tree: SearchTree::new(start, parent, order),
        total_weight,
        edges,
    })
}

/// Prim's tree rooted at vertex 0.
pub fn minimum_spanning_tree<V>(graph: &Graph<V>) -> Result<SpanningTree>
where
    V: Clone + Eq + Hash,
{
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    prim(graph, 0)
}

/// Index of the lowest finite cost among vertices not yet settled.
pub(crate) fn cheapest_outside(cost: &[f64], settled: &[bool]) -> Option<VertexId> {
    let mut best = None;
    let mut best_cost = f64::INFINITY;
    for (v, &c) in cost.iter().enumerate() {
        if !settled[v] && c < best_cost {
            best_cost = c;
            best = Some(v);
        }
    }
    best
}
