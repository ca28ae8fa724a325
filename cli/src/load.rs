//! Edge-list file loading.
//!
//! Format: line 1 holds the vertex count; every later non-blank line holds
//! one or more `u,v,weight` triples separated by `|`.
//!
//! ```text
//! 4
//! 0,1,4 | 0,2,1
//! 2,3,2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use graph_explorer_core::{Graph, WeightedEdge};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing vertex count on line 1")]
    MissingCount,

    #[error("line {line}: invalid vertex count '{value}'")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: expected 'u,v,weight' but found '{triple}'")]
    MalformedTriple { line: usize, triple: String },

    #[error("line {line}: invalid vertex index '{value}'")]
    InvalidIndex { line: usize, value: String },

    #[error("line {line}: vertex {index} out of range for {count} vertices")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },

    #[error("line {line}: invalid weight '{value}'")]
    InvalidWeight { line: usize, value: String },
}

/// Parsed, validated contents of an edge-list file: every index is below
/// `vertex_count`.
#[derive(Debug, Clone)]
pub struct EdgeList {
    pub vertex_count: usize,
    /// Triples in file order, one per `u,v,weight` entry.
    pub triples: Vec<WeightedEdge>,
}

impl EdgeList {
    /// Build the graph. Undirected input inserts `(u, v)` then `(v, u)`
    /// for each triple; directed input inserts `(u, v)` only.
    pub fn to_graph(&self, directed: bool) -> Graph {
        let arcs = self.triples.iter().flat_map(|t| {
            let reverse = (!directed).then(|| t.reversed());
            std::iter::once(*t).chain(reverse)
        });
        let graph = Graph::from_edges(self.vertex_count, arcs);
        tracing::debug!(
            vertices = graph.size(),
            arcs = graph.edge_count(),
            directed,
            "graph built"
        );
        graph
    }
}

pub fn load_file(path: &Path) -> Result<EdgeList, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let list = parse(&text)?;
    tracing::info!(
        path = %path.display(),
        vertices = list.vertex_count,
        triples = list.triples.len(),
        "loaded edge list"
    );
    Ok(list)
}

pub fn parse(text: &str) -> Result<EdgeList, LoadError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (line, first) = lines.next().ok_or(LoadError::MissingCount)?;
    let first = first.trim();
    if first.is_empty() {
        return Err(LoadError::MissingCount);
    }
    let vertex_count: usize = first.parse().map_err(|_| LoadError::InvalidCount {
        line,
        value: first.to_string(),
    })?;

    let mut triples = Vec::new();
    for (line, text) in lines {
        for token in text.split('|').map(str::trim).filter(|t| !t.is_empty()) {
            triples.push(parse_triple(token, line, vertex_count)?);
        }
    }

    Ok(EdgeList {
        vertex_count,
        triples,
    })
}

fn parse_triple(token: &str, line: usize, count: usize) -> Result<WeightedEdge, LoadError> {
    let fields: Vec<&str> = token.split(',').map(str::trim).collect();
    let [u, v, w] = fields.as_slice() else {
        return Err(LoadError::MalformedTriple {
            line,
            triple: token.to_string(),
        });
    };

    let from = parse_index(u, line, count)?;
    let to = parse_index(v, line, count)?;
    let weight: f64 = w
        .parse()
        .ok()
        .filter(|x: &f64| x.is_finite())
        .ok_or_else(|| LoadError::InvalidWeight {
            line,
            value: w.to_string(),
        })?;

    if weight < 0.0 {
        tracing::warn!(line, from, to, weight, "negative weight: shortest paths are undefined");
    }

    Ok(WeightedEdge::new(from, to, weight))
}

fn parse_index(value: &str, line: usize, count: usize) -> Result<usize, LoadError> {
    let index: usize = value.parse().map_err(|_| LoadError::InvalidIndex {
        line,
        value: value.to_string(),
    })?;
    if index >= count {
        return Err(LoadError::IndexOutOfRange { line, index, count });
    }
    Ok(index)
}
