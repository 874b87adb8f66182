//! Graph construction module

use crate::graph::{Graph, VertexId};
use std::collections::HashMap;

/// Builder for incrementally constructing an undirected Graph
pub struct GraphBuilder {
    /// Mapping from vertex ids to dense indices
    id_to_index: HashMap<VertexId, u32>,

    /// Vertex ids in first-seen order
    vertex_ids: Vec<VertexId>,

    /// Adjacency lists for each vertex (may contain duplicates until `build`)
    adjacency_lists: Vec<Vec<u32>>,

    /// Number of self-loops dropped
    self_loops: usize,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            vertex_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            self_loops: 0,
        }
    }

    /// Get or create the index for the given vertex id
    pub fn get_or_create_vertex(&mut self, id: VertexId) -> u32 {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.vertex_ids.len() as u32;
        self.id_to_index.insert(id, idx);
        self.vertex_ids.push(id);
        self.adjacency_lists.push(Vec::new());

        idx
    }

    /// Add an undirected edge. Both endpoints are created on demand.
    ///
    /// Returns `false` for a self-loop, which is recorded but not stored.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        let a_idx = self.get_or_create_vertex(a);
        if a == b {
            self.self_loops += 1;
            return false;
        }
        let b_idx = self.get_or_create_vertex(b);

        self.adjacency_lists[a_idx as usize].push(b_idx);
        self.adjacency_lists[b_idx as usize].push(a_idx);
        true
    }

    /// Number of vertices seen so far
    pub fn vertex_count(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Number of self-loops skipped so far
    pub fn self_loops(&self) -> usize {
        self.self_loops
    }

    /// Build the graph
    pub fn build(mut self) -> Graph {
        for list in &mut self.adjacency_lists {
            // Sorted and duplicate-free for binary search
            list.sort_unstable();
            list.dedup();
        }

        Graph::from_parts(self.vertex_ids, self.adjacency_lists)
    }
}
