use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{GraphError, Result};

/// Internal vertex identifier: the 0-based position in insertion order.
pub type VertexId = usize;

/// Weight stored for arcs inserted without an explicit weight.
pub const UNIT_WEIGHT: f64 = 1.0;

/// A directed arc in an adjacency list. The source is implied by the list
/// that holds it.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub target: VertexId,
    pub weight: f64,
}

/// A fully specified weighted arc `(from, to, weight)`.
///
/// Identity is the endpoint pair: two arcs with the same endpoints compare
/// equal regardless of weight.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightedEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// The same arc traversed the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for WeightedEdge {}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.to, self.weight)
    }
}

/// In-memory weighted graph: vertex labels in insertion order plus one
/// outgoing adjacency list per vertex.
///
/// Undirected graphs are stored as pairs of opposing arcs. Labels are
/// indexed by a hash map so `index_of` does not scan.
#[derive(Debug, Clone)]
pub struct Graph<V = usize> {
    vertices: Vec<V>,
    index: HashMap<V, VertexId>,
    adjacency: Vec<Vec<Edge>>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
        }
    }

    /// Build a graph from labels and weighted arcs. Duplicate labels and
    /// duplicate arcs are skipped.
    ///
    /// Panics if an arc refers to an index outside the label list.
    pub fn from_vertices<L, E>(labels: L, edges: E) -> Self
    where
        L: IntoIterator<Item = V>,
        E: IntoIterator<Item = WeightedEdge>,
    {
        let mut graph = Self::new();
        for label in labels {
            graph.add_vertex(label);
        }
        graph.load_edges(edges);
        graph
    }

    /// Append a vertex. Returns false (and changes nothing) if an equal
    /// label is already present.
    pub fn add_vertex(&mut self, label: V) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }
        let id = self.vertices.len();
        self.index.insert(label.clone(), id);
        self.vertices.push(label);
        self.adjacency.push(Vec::new());
        true
    }

    /// Add an unweighted arc, stored with [`UNIT_WEIGHT`].
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        self.add_weighted_edge(from, to, UNIT_WEIGHT)
    }

    /// Add a weighted arc. Returns false without mutation if `(from, to)`
    /// already exists, whatever its weight.
    ///
    /// Panics if either endpoint is out of range.
    pub fn add_weighted_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> bool {
        self.check_vertex(from);
        self.check_vertex(to);

        let list = &mut self.adjacency[from];
        if list.iter().any(|e| e.target == to) {
            return false;
        }
        list.push(Edge { target: to, weight });
        true
    }

    /// Bulk insert arcs in iteration order. Returns how many were new.
    pub fn load_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        let mut added = 0;
        for e in edges {
            if self.add_weighted_edge(e.from, e.to, e.weight) {
                added += 1;
            }
        }
        tracing::debug!(
            vertices = self.size(),
            added,
            edges = self.edge_count(),
            "loaded edges"
        );
        added
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Label of the vertex at `id`.
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id)
    }

    /// Index of the vertex with the given label.
    pub fn index_of(&self, label: &V) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Outgoing arcs of `id`, in insertion order.
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        &self.adjacency[id]
    }

    /// Destination indices of the outgoing arcs of `id`.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency[id].iter().map(|e| e.target)
    }

    /// Outgoing arc count of `id`.
    pub fn degree(&self, id: VertexId) -> usize {
        self.adjacency[id].len()
    }

    /// Weight of arc `(from, to)`.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Result<f64> {
        self.adjacency
            .get(from)
            .and_then(|list| list.iter().find(|e| e.target == to))
            .map(|e| e.weight)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    /// Every stored arc, grouped by source in index order.
    pub fn weighted_edges(&self) -> Vec<WeightedEdge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, list)| {
                list.iter()
                    .map(move |e| WeightedEdge::new(from, e.target, e.weight))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|v| v.len()).sum()
    }

    /// True when a depth-first search from vertex 0 reaches every vertex.
    /// An empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        self.is_empty() || crate::traversal::dfs(self, 0).is_spanning()
    }

    /// Drop every vertex and arc.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.adjacency.clear();
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let labels = self.vertices.len() * size_of::<V>();
        let index = self.index.len() * (size_of::<V>() + size_of::<VertexId>() + 8);
        let lists = self.adjacency.len() * size_of::<Vec<Edge>>();
        let edges = self.edge_count() * size_of::<Edge>();

        labels + index + lists + edges
    }

    fn check_vertex(&self, id: VertexId) {
        assert!(
            id < self.size(),
            "vertex index {} out of range for graph of {} vertices",
            id,
            self.size()
        );
    }
}

impl Graph<usize> {
    /// Graph over vertices labelled `0..vertex_count`.
    ///
    /// Panics if an arc refers to an index `>= vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        Self::from_vertices(0..vertex_count, edges)
    }
}

impl<V> Default for Graph<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
