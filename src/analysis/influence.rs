//! Influential user detection

use crate::graph::{Graph, VertexId};

/// Users with at least `floor(vertex_count * ratio)` friends, ascending by id
pub fn influential_users(graph: &Graph, ratio: f64) -> Vec<VertexId> {
    let threshold = (graph.vertex_count() as f64 * ratio).floor() as usize;
    log::info!(
        "Finding users with at least {} friends ({:.1}% of {})",
        threshold,
        ratio * 100.0,
        graph.vertex_count()
    );

    let mut users: Vec<VertexId> = graph
        .vertices()
        .filter(|&v| graph.degree(v).unwrap_or(0) >= threshold)
        .collect();
    users.sort_unstable();
    users
}
