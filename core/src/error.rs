use thiserror::Error;

use crate::graph::VertexId;

/// Recoverable conditions reported by the graph algorithms.
///
/// Out-of-range vertex indices are not represented here: they are caller
/// bugs and panic at the call site.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A spanning computation could not reach every vertex.
    #[error("graph not connected: reached {reached} of {total} vertices")]
    NotConnected { reached: usize, total: usize },

    #[error("edge ({from}, {to}) does not exist")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("vertex {to} is unreachable from vertex {from}")]
    Unreachable { from: VertexId, to: VertexId },

    #[error("graph has no vertices")]
    EmptyGraph,
}

pub type Result<T> = std::result::Result<T, GraphError>;
