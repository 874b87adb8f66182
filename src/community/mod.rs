//! Community detection module

pub mod detection;
pub mod metrics;

pub use detection::CommunityDetector;

use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// Summary of one detected community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    /// Position in the detector's acceptance order
    pub id: u32,

    /// Members of this community, ascending
    pub members: Vec<VertexId>,

    /// Number of members
    pub size: usize,

    /// Logical edges inside the community
    pub edge_count: usize,

    /// Density: actual edges / potential edges
    pub density: f32,

    /// Highest-degree members, most connected first
    pub central_nodes: Vec<VertexId>,
}
