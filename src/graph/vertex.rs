//! Vertex identifiers and per-root bookkeeping

use serde::{Deserialize, Serialize};

/// External identifier of a user in the network.
pub type VertexId = u64;

/// Scratch record for one vertex during a single root's credit pass.
///
/// A fresh array of these is allocated for every root, so values never
/// leak from one pass into the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Identifier of the vertex
    pub id: VertexId,

    /// Number of shortest paths reaching this vertex from the root.
    ///
    /// Path counts grow exponentially with depth, so they are kept as `f64`.
    pub level: f64,

    /// Girvan-Newman credit accumulated at this vertex
    pub credit: f64,
}

impl Vertex {
    /// Create a record with zero level and credit
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            level: 0.0,
            credit: 0.0,
        }
    }

    /// Whether the vertex was reached during the pass
    pub fn is_reached(&self) -> bool {
        self.level > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_is_unreached() {
        let v = Vertex::new(42);
        assert_eq!(v.id, 42);
        assert_eq!(v.level, 0.0);
        assert_eq!(v.credit, 0.0);
        assert!(!v.is_reached());
    }
}
