use std::collections::VecDeque;
use std::hash::Hash;

use crate::graph::{Graph, VertexId};
use crate::tree::SearchTree;

fn check_start<V>(graph: &Graph<V>, start: VertexId)
where
    V: Clone + Eq + Hash,
{
    assert!(
        start < graph.size(),
        "start vertex {} out of range for graph of {} vertices",
        start,
        graph.size()
    );
}

/// Depth-first search from `start`.
///
/// Visits outgoing arcs in adjacency order and descends into the first
/// unvisited target before looking at the next arc, so the search order is
/// the one a recursive DFS would produce. Uses an explicit stack of
/// `(vertex, next arc)` frames: path-shaped graphs of any length are safe.
///
/// Vertices unreachable from `start` keep no parent and are absent from
/// the search order. Panics if `start` is out of range.
pub fn dfs<V>(graph: &Graph<V>, start: VertexId) -> SearchTree
where
    V: Clone + Eq + Hash,
{
    check_start(graph, start);

    let n = graph.size();
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

    visited[start] = true;
    order.push(start);

    while let Some(frame) = stack.last_mut() {
        let (u, cursor) = *frame;
        match graph.edges(u).get(cursor) {
            Some(edge) => {
                frame.1 += 1;
                let v = edge.target;
                if !visited[v] {
                    visited[v] = true;
                    parent[v] = Some(u);
                    order.push(v);
                    stack.push((v, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!(start, found = order.len(), total = n, "dfs complete");
    SearchTree::new(start, parent, order)
}

/// Breadth-first search from `start`.
///
/// Vertices are marked visited when enqueued, so none is enqueued twice and
/// each receives its parent from the first vertex that discovers it. The
/// search order is the dequeue order, which is non-decreasing in hop count.
///
/// Panics if `start` is out of range.
pub fn bfs<V>(graph: &Graph<V>, start: VertexId) -> SearchTree
where
    V: Clone + Eq + Hash,
{
    check_start(graph, start);

    let n = graph.size();
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for v in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                parent[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    tracing::debug!(start, found = order.len(), total = n, "bfs complete");
    SearchTree::new(start, parent, order)
}
