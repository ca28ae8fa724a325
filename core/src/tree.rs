use crate::error::{GraphError, Result};
use crate::graph::{VertexId, WeightedEdge};

/// Parent-pointer tree produced by a traversal, spanning tree or
/// shortest-path run.
///
/// `parent[v]` is `None` for the root and for every vertex the run never
/// reached. `search_order` lists reached vertices in discovery order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchTree {
    root: VertexId,
    parent: Vec<Option<VertexId>>,
    search_order: Vec<VertexId>,
}

impl SearchTree {
    pub(crate) fn new(
        root: VertexId,
        parent: Vec<Option<VertexId>>,
        search_order: Vec<VertexId>,
    ) -> Self {
        Self {
            root,
            parent,
            search_order,
        }
    }

    pub fn root(&self) -> VertexId {
        self.root
    }

    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parent[v]
    }

    pub fn parents(&self) -> &[Option<VertexId>] {
        &self.parent
    }

    pub fn search_order(&self) -> &[VertexId] {
        &self.search_order
    }

    pub fn vertices_found(&self) -> usize {
        self.search_order.len()
    }

    /// Number of vertices in the graph the tree was built over.
    pub fn vertex_count(&self) -> usize {
        self.parent.len()
    }

    /// True when the run reached every vertex.
    pub fn is_spanning(&self) -> bool {
        self.search_order.len() == self.parent.len()
    }

    pub fn ensure_spanning(&self) -> Result<()> {
        if self.is_spanning() {
            Ok(())
        } else {
            Err(GraphError::NotConnected {
                reached: self.search_order.len(),
                total: self.parent.len(),
            })
        }
    }

    /// Whether `v` is the root or was attached to the tree.
    pub fn contains(&self, v: VertexId) -> bool {
        v == self.root || self.parent.get(v).copied().flatten().is_some()
    }

    /// Walk parent pointers from `v` up to the root: `[v, parent(v), ..., root]`.
    /// Returns None when `v` is not in the tree.
    pub fn path(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if !self.contains(v) {
            return None;
        }

        let mut path = vec![v];
        let mut current = v;
        while let Some(p) = self.parent[current] {
            // Parent chains are acyclic, so a chain never outgrows the vertex count.
            debug_assert!(path.len() <= self.parent.len());
            path.push(p);
            current = p;
        }
        Some(path)
    }

    /// Same as [`path`](Self::path) but ordered root first.
    pub fn path_from_root(&self, v: VertexId) -> Option<Vec<VertexId>> {
        self.path(v).map(|mut p| {
            p.reverse();
            p
        })
    }

    /// Root-first path rendered through a label table indexed like the graph.
    pub fn path_labels<'a, V>(&self, v: VertexId, labels: &'a [V]) -> Option<Vec<&'a V>> {
        self.path_from_root(v)
            .map(|p| p.into_iter().map(|i| &labels[i]).collect())
    }

    /// `(parent, child)` for every vertex attached to the tree, in index order.
    pub fn tree_edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, p)| p.map(|p| (p, child)))
    }
}

/// Minimum spanning tree: the tree, its total weight and the chosen arcs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpanningTree {
    pub tree: SearchTree,
    pub total_weight: f64,
    /// Chosen arcs in the order the builder accepted them.
    pub edges: Vec<WeightedEdge>,
}

/// Single-source shortest paths: the tree plus each vertex's distance
/// from the source (`f64::INFINITY` when unreachable).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShortestPathTree {
    pub tree: SearchTree,
    cost: Vec<f64>,
}

impl ShortestPathTree {
    pub(crate) fn new(tree: SearchTree, cost: Vec<f64>) -> Self {
        Self { tree, cost }
    }

    pub fn source(&self) -> VertexId {
        self.tree.root()
    }

    pub fn cost(&self, v: VertexId) -> f64 {
        self.cost[v]
    }

    pub fn costs(&self) -> &[f64] {
        &self.cost
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.cost[v].is_finite()
    }

    /// Source-first vertex sequence to `v`, or None if unreachable.
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(v) {
            return None;
        }
        self.tree.path_from_root(v)
    }
}

/// One source-to-target shortest path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShortestPath {
    pub vertices: Vec<VertexId>,
    pub total_weight: f64,
}
