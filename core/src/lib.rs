//! graph-explorer-core: weighted graph algorithms.
//!
//! A pure Rust library that stores a graph as index-addressed adjacency
//! lists and provides depth-first and breadth-first search trees,
//! minimum spanning trees (Kruskal over an arc list, Prim over the
//! adjacency lists) and single-source shortest paths.
//!
//! Every algorithm is synchronous and reads the graph through a shared
//! reference, so the graph cannot change while a run is in flight.
//! Results are plain values that carry vertex indices only; label lookups
//! take the label table as an explicit argument.

mod disjoint_set;
mod error;
mod graph;
mod mst;
mod shortest_path;
mod traversal;
mod tree;

#[cfg(test)]
mod test_support;

pub use disjoint_set::DisjointSet;
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, VertexId, WeightedEdge, UNIT_WEIGHT};
pub use mst::{kruskal, kruskal_graph, minimum_spanning_tree, prim};
pub use shortest_path::{shortest_path, shortest_paths, shortest_paths_heap};
pub use traversal::{bfs, dfs};
pub use tree::{SearchTree, ShortestPath, ShortestPathTree, SpanningTree};
