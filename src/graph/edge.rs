//! Undirected edge keys

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// Logical undirected edge, stored as a canonical `(low, high)` pair.
///
/// `Edge::new(a, b) == Edge::new(b, a)`, and both hash the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Create the canonical edge between two vertices
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Smaller endpoint
    pub fn low(&self) -> VertexId {
        self.low
    }

    /// Larger endpoint
    pub fn high(&self) -> VertexId {
        self.high
    }

    /// Both endpoints, smaller first
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    /// Check whether `vertex` is one of the endpoints
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.low == vertex || self.high == vertex
    }

    /// The endpoint opposite to `vertex`, if `vertex` is on this edge
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.low {
            Some(self.high)
        } else if vertex == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((a, b): (VertexId, VertexId)) -> Self {
        Edge::new(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <--> {}", self.low, self.high)
    }
}
