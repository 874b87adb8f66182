//! Community statistics and metrics

use itertools::Itertools;

use crate::community::Community;
use crate::graph::{Graph, VertexId};

/// Number of central nodes reported per community
pub const CENTRAL_NODE_COUNT: usize = 5;

/// Build the summary of a community graph
pub fn summarize(id: u32, graph: &Graph) -> Community {
    let members: Vec<VertexId> = graph.vertices().sorted_unstable().collect();

    Community {
        id,
        size: members.len(),
        members,
        edge_count: graph.edge_count(),
        density: calculate_density(graph),
        central_nodes: central_nodes(graph, CENTRAL_NODE_COUNT),
    }
}

/// Calculate density (actual edges / potential edges) of an undirected graph
pub fn calculate_density(graph: &Graph) -> f32 {
    let n = graph.vertex_count();
    if n <= 1 {
        return 1.0; // By convention, singleton communities have density 1
    }

    let potential_edges = n * (n - 1) / 2;
    graph.edge_count() as f32 / potential_edges as f32
}

/// Up to `top_n` vertices by degree, highest first; ties go to the lower id
pub fn central_nodes(graph: &Graph, top_n: usize) -> Vec<VertexId> {
    graph
        .vertices()
        .map(|v| (v, graph.degree(v).unwrap_or(0)))
        .sorted_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
        .take(top_n)
        .map(|(v, _)| v)
        .collect()
}
