//! Error types for graph construction and path queries.
//!
//! A path that does not exist is *not* an error: it is reported as an empty
//! [`Route`](crate::algo::Route) with
//! [`Distance::UNREACHABLE`](crate::weight::Distance::UNREACHABLE).

use thiserror::Error;

use crate::node::VertexId;

/// Raised while assembling a [`Substrate`](crate::repr::Substrate) from a topology description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("vertex {0} is declared more than once")]
    DuplicateVertex(VertexId),

    #[error("edge {from} -> {to} references an unknown vertex")]
    DanglingEdge { from: VertexId, to: VertexId },

    #[error("topology exceeds the maximum number of vertices")]
    TooManyVertices,

    #[error("topology exceeds the maximum number of edges")]
    TooManyEdges,
}

/// Raised by a shortest path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("negative weight cycle reachable from vertex {origin}")]
    NegativeCycle { origin: VertexId },

    #[error("edge {from} -> {to} has negative weight; use Bellman-Ford instead")]
    NegativeWeight { from: VertexId, to: VertexId },
}

/// Shorthand for results of path queries
pub type Result<T, E = PathError> = std::result::Result<T, E>;
