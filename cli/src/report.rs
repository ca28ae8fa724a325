//! Command results and their text / JSON renderings.

use std::fmt;

use graph_explorer_core::{SearchTree, ShortestPath, SpanningTree, VertexId, WeightedEdge};
use serde::Serialize;

use crate::config::{MstAlgorithm, OutputFormat, TraversalOrder};

#[derive(Debug, Serialize)]
#[serde(tag = "report", rename_all = "lowercase")]
pub enum Report {
    Summary(SummaryReport),
    Traversal(TraversalReport),
    Mst(MstReport),
    Path(PathReport),
    Paths(PathsReport),
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Summary(r) => fmt::Display::fmt(r, f),
            Report::Traversal(r) => fmt::Display::fmt(r, f),
            Report::Mst(r) => fmt::Display::fmt(r, f),
            Report::Path(r) => fmt::Display::fmt(r, f),
            Report::Paths(r) => fmt::Display::fmt(r, f),
        }
    }
}

fn write_arcs(f: &mut fmt::Formatter<'_>, arcs: &[WeightedEdge]) -> fmt::Result {
    for (i, arc) in arcs.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", arc)?;
    }
    Ok(())
}

fn join(vertices: &[impl fmt::Display], sep: &str) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// One adjacency list, as listed by the summary.
#[derive(Debug, Serialize)]
pub struct AdjacencyEntry {
    pub vertex: VertexId,
    pub label: String,
    pub arcs: Vec<WeightedEdge>,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub vertex_count: usize,
    pub adjacency: Vec<AdjacencyEntry>,
    pub connected: bool,
    /// Kruskal's tree; absent for disconnected, empty or directed graphs.
    pub mst: Option<SpanningTree>,
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The number of vertices is {}", self.vertex_count)?;
        writeln!(f)?;
        for entry in &self.adjacency {
            write!(f, "{} ({}): ", entry.label, entry.vertex)?;
            write_arcs(f, &entry.arcs)?;
            writeln!(f)?;
        }
        writeln!(f)?;
        if self.connected {
            writeln!(f, "The graph is connected")?;
        } else {
            writeln!(f, "The graph is not connected")?;
        }
        if let Some(mst) = &self.mst {
            writeln!(f)?;
            writeln!(f, "MST total weight: {}", mst.total_weight)?;
            write!(f, "MST edges: ")?;
            write_arcs(f, &mst.edges)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub order: TraversalOrder,
    pub tree: SearchTree,
}

impl fmt::Display for TraversalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.order {
            TraversalOrder::Dfs => "DFS",
            TraversalOrder::Bfs => "BFS",
        };
        writeln!(f, "{} from {}", name, self.tree.root())?;
        writeln!(f, "Search order: {}", join(self.tree.search_order(), " "))?;
        let edges: Vec<String> = self
            .tree
            .tree_edges()
            .map(|(p, c)| format!("({}, {})", p, c))
            .collect();
        writeln!(f, "Tree edges: {}", edges.join(" "))?;
        let verdict = if self.tree.is_spanning() {
            "the graph is connected"
        } else {
            "the graph is not connected"
        };
        writeln!(
            f,
            "Found {} of {} vertices: {}",
            self.tree.vertices_found(),
            self.tree.vertex_count(),
            verdict
        )
    }
}

#[derive(Debug, Serialize)]
pub struct MstReport {
    pub algorithm: MstAlgorithm,
    pub mst: SpanningTree,
}

impl fmt::Display for MstReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Root is: {}", self.mst.tree.root())?;
        write!(f, "MST edges: ")?;
        write_arcs(f, &self.mst.edges)?;
        writeln!(f)?;
        writeln!(f, "Total weight: {}", self.mst.total_weight)
    }
}

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub from: VertexId,
    pub to: VertexId,
    pub path: ShortestPath,
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The shortest path from ({}) to ({}) is: {}",
            self.from,
            self.to,
            join(self.path.vertices.as_slice(), ", ")
        )?;
        writeln!(f, "Shortest path total weight: {}", self.path.total_weight)
    }
}

/// A single-source path to one target. `path` holds labels, root first,
/// and is absent when the target is unreachable.
#[derive(Debug, Serialize)]
pub struct PathEntry {
    pub target: String,
    pub path: Option<Vec<String>>,
    pub cost: f64,
}

#[derive(Debug, Serialize)]
pub struct PathsReport {
    pub source: String,
    pub paths: Vec<PathEntry>,
}

impl fmt::Display for PathsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All shortest paths from {} with costs are:", self.source)?;
        for entry in &self.paths {
            match &entry.path {
                Some(path) => writeln!(
                    f,
                    "A path from {} to {}: {} (cost: {})",
                    self.source,
                    entry.target,
                    path.join(" "),
                    entry.cost
                )?,
                None => writeln!(
                    f,
                    "No path from {} to {} (cost: inf)",
                    self.source, entry.target
                )?,
            }
        }
        Ok(())
    }
}
