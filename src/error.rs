//! Typed errors for graph construction and community detection

use thiserror::Error;

use crate::graph::VertexId;

/// Result alias for graph-level operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by the graph model and the community detector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge referenced a vertex that was never added.
    #[error("vertex {0} has not been added to the graph")]
    UnknownVertex(VertexId),

    /// An edge would connect a vertex to itself.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),

    /// The minimum community size must be at least one vertex.
    #[error("minimum community size must be at least 1, got {0}")]
    InvalidMinVertices(usize),
}
