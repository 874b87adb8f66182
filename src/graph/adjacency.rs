//! Adjacency-list graph with dense vertex indices

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, VertexId};

/// Undirected social graph stored as an arena of dense vertex indices.
///
/// Every logical edge `(u, v)` is kept as two directed adjacency entries,
/// `u -> v` and `v -> u`. Neighbor lists are sorted, which keeps every
/// traversal deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Dense index -> external vertex id, in insertion order
    ids: Vec<VertexId>,

    /// External vertex id -> dense index
    index: HashMap<VertexId, u32>,

    /// Sorted neighbor indices for each vertex
    adjacency: Vec<Vec<u32>>,

    /// Number of directed adjacency entries
    directed_edges: usize,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `vertex_count` vertices
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            ids: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            directed_edges: 0,
        }
    }

    /// Build a graph from undirected edge pairs. Self-loops are skipped.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut builder = crate::graph::GraphBuilder::with_capacity(0);
        for (a, b) in edges {
            builder.add_edge(a, b);
        }
        builder.build()
    }

    /// Assemble a graph from already-sorted, symmetric adjacency lists
    pub(crate) fn from_parts(ids: Vec<VertexId>, adjacency: Vec<Vec<u32>>) -> Self {
        let index = ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx as u32))
            .collect();
        let directed_edges = adjacency.iter().map(Vec::len).sum();

        Self {
            ids,
            index,
            adjacency,
            directed_edges,
        }
    }

    /// Add a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.ensure_vertex(id);
        true
    }

    /// Get the index of `id`, adding the vertex if needed
    pub(crate) fn ensure_vertex(&mut self, id: VertexId) -> u32 {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }

        let idx = self.ids.len() as u32;
        self.ids.push(id);
        self.index.insert(id, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add a single directed adjacency entry `from -> to`.
    ///
    /// Call it once per direction to form a logical edge, or use
    /// [`Graph::add_undirected_edge`]. Both endpoints must already exist.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let (from_idx, to_idx) = self.checked_pair(from, to)?;
        self.insert_directed(from_idx, to_idx);
        Ok(())
    }

    /// Add the logical edge `a <-> b` as two directed entries
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        let (a_idx, b_idx) = self.checked_pair(a, b)?;
        self.link(a_idx, b_idx);
        Ok(())
    }

    fn checked_pair(&self, from: VertexId, to: VertexId) -> Result<(u32, u32)> {
        let from_idx = self
            .index_of(from)
            .ok_or(GraphError::UnknownVertex(from))?;
        let to_idx = self.index_of(to).ok_or(GraphError::UnknownVertex(to))?;
        if from_idx == to_idx {
            return Err(GraphError::SelfLoop(from));
        }
        Ok((from_idx, to_idx))
    }

    /// Insert both directions between two known indices
    pub(crate) fn link(&mut self, a: u32, b: u32) {
        self.insert_directed(a, b);
        self.insert_directed(b, a);
    }

    /// Insert `from -> to`; repeated entries are ignored
    pub(crate) fn insert_directed(&mut self, from: u32, to: u32) -> bool {
        let list = &mut self.adjacency[from as usize];
        match list.binary_search(&to) {
            Ok(_) => false,
            Err(pos) => {
                list.insert(pos, to);
                self.directed_edges += 1;
                true
            }
        }
    }

    fn remove_directed(&mut self, from: u32, to: u32) -> bool {
        let list = &mut self.adjacency[from as usize];
        match list.binary_search(&to) {
            Ok(pos) => {
                list.remove(pos);
                self.directed_edges -= 1;
                true
            }
            Err(_) => false,
        }
    }

    /// Remove the logical edge `a <-> b` in both directions.
    ///
    /// Returns `true` if any adjacency entry was removed.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        let (Some(a_idx), Some(b_idx)) = (self.index_of(a), self.index_of(b)) else {
            return false;
        };
        let forward = self.remove_directed(a_idx, b_idx);
        let backward = self.remove_directed(b_idx, a_idx);
        forward || backward
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of logical (undirected) edges
    pub fn edge_count(&self) -> usize {
        self.directed_edges / 2
    }

    /// Number of directed adjacency entries
    pub fn directed_edge_count(&self) -> usize {
        self.directed_edges
    }

    /// Check whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check whether `id` is a vertex of the graph
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Vertex ids in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Neighbors of `id` in ascending index order, or `None` for an unknown vertex
    pub fn neighbors(&self, id: VertexId) -> Option<impl Iterator<Item = VertexId> + '_> {
        let idx = self.index_of(id)?;
        Some(
            self.adjacency[idx as usize]
                .iter()
                .map(move |&n| self.ids[n as usize]),
        )
    }

    /// Out-degree of `id`
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.index_of(id)
            .map(|idx| self.adjacency[idx as usize].len())
    }

    /// Check if there's a directed entry `from -> to`
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(f), Some(t)) => self.adjacency[f as usize].binary_search(&t).is_ok(),
            _ => false,
        }
    }

    /// All logical edges, sorted
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = BTreeSet::new();
        for (from, list) in self.adjacency.iter().enumerate() {
            for &to in list {
                edges.insert(Edge::new(self.ids[from], self.ids[to as usize]));
            }
        }
        edges.into_iter().collect()
    }

    /// Shortest path from `start` to `goal`, both ends included.
    ///
    /// Returns `None` when either vertex is unknown or no path exists.
    pub fn shortest_path(&self, start: VertexId, goal: VertexId) -> Option<Vec<VertexId>> {
        let start_idx = self.index_of(start)?;
        let goal_idx = self.index_of(goal)?;

        let mut parent = vec![u32::MAX; self.vertex_count()];
        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::new();
        visited[start_idx as usize] = true;
        queue.push_back(start_idx);

        while let Some(current) = queue.pop_front() {
            if current == goal_idx {
                let mut path = vec![self.ids[current as usize]];
                let mut node = current;
                while node != start_idx {
                    node = parent[node as usize];
                    path.push(self.ids[node as usize]);
                }
                path.reverse();
                return Some(path);
            }

            for &next in &self.adjacency[current as usize] {
                if !visited[next as usize] {
                    visited[next as usize] = true;
                    parent[next as usize] = current;
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Number of edges on a shortest path, or `None` if unreachable
    pub fn distance(&self, start: VertexId, goal: VertexId) -> Option<usize> {
        self.shortest_path(start, goal).map(|path| path.len() - 1)
    }

    pub(crate) fn index_of(&self, id: VertexId) -> Option<u32> {
        self.index.get(&id).copied()
    }

    pub(crate) fn id_at(&self, idx: u32) -> VertexId {
        self.ids[idx as usize]
    }

    pub(crate) fn neighbor_indices(&self, idx: u32) -> &[u32] {
        &self.adjacency[idx as usize]
    }
}
