//! Shortest-path DAGs and Girvan-Newman credit propagation
//!
//! For a root `r`, the BFS-DAG holds every edge `u -> v` with
//! `dist(r, v) == dist(r, u) + 1`. A vertex reached at the same distance
//! from several parents keeps one DAG edge per parent, so path ties are
//! all represented. Edges between two vertices at equal distance lie on no
//! shortest path and are left out.
//!
//! Credit then flows from the leaves up: every vertex is worth `1.0` plus
//! whatever its children pass up, and it splits that credit evenly across
//! the DAG edges to its parents.

use std::collections::VecDeque;

use crate::graph::{Graph, Vertex, VertexId};

const UNREACHED: u32 = u32::MAX;

/// Shortest-path DAG of a graph, rooted at one vertex.
///
/// Parent and child lists are indexed by the source graph's dense vertex
/// indices and owned by the DAG; the source graph is only read.
#[derive(Debug, Clone, PartialEq)]
pub struct BfsDag<'g> {
    graph: &'g Graph,
    root: u32,

    /// Reached vertices in BFS discovery order, root first
    order: Vec<u32>,

    /// BFS distance from the root, `UNREACHED` if not reachable
    distance: Vec<u32>,

    parents: Vec<Vec<u32>>,
    children: Vec<Vec<u32>>,
}

impl Graph {
    /// Build the shortest-path DAG rooted at `root`, or `None` for an unknown vertex
    pub fn bfs_dag(&self, root: VertexId) -> Option<BfsDag<'_>> {
        let root = self.index_of(root)?;
        Some(BfsDag::build(self, root))
    }
}

impl<'g> BfsDag<'g> {
    pub(crate) fn build(graph: &'g Graph, root: u32) -> Self {
        let n = graph.vertex_count();
        let mut distance = vec![UNREACHED; n];
        let mut parents = vec![Vec::new(); n];
        let mut children = vec![Vec::new(); n];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        distance[root as usize] = 0;
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            order.push(u);
            let next_level = distance[u as usize] + 1;

            for &v in graph.neighbor_indices(u) {
                if distance[v as usize] == UNREACHED {
                    distance[v as usize] = next_level;
                    queue.push_back(v);
                }
                if distance[v as usize] == next_level {
                    parents[v as usize].push(u);
                    children[u as usize].push(v);
                }
            }
        }

        Self {
            graph,
            root,
            order,
            distance,
            parents,
            children,
        }
    }

    /// Root vertex id
    pub fn root(&self) -> VertexId {
        self.graph.id_at(self.root)
    }

    /// Reached vertices in BFS discovery order, root first
    pub fn order(&self) -> impl DoubleEndedIterator<Item = VertexId> + '_ {
        self.order.iter().map(|&idx| self.graph.id_at(idx))
    }

    /// Number of vertices reachable from the root, the root included
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// BFS distance of `id` from the root
    pub fn distance(&self, id: VertexId) -> Option<u32> {
        let idx = self.graph.index_of(id)?;
        match self.distance[idx as usize] {
            UNREACHED => None,
            d => Some(d),
        }
    }

    /// DAG parents of `id`
    pub fn parents(&self, id: VertexId) -> Vec<VertexId> {
        self.lookup(id, &self.parents)
    }

    /// DAG children of `id`
    pub fn children(&self, id: VertexId) -> Vec<VertexId> {
        self.lookup(id, &self.children)
    }

    fn lookup(&self, id: VertexId, lists: &[Vec<u32>]) -> Vec<VertexId> {
        self.graph
            .index_of(id)
            .map(|idx| {
                lists[idx as usize]
                    .iter()
                    .map(|&n| self.graph.id_at(n))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Directed DAG edges as `(parent, child)`, grouped by child in BFS order
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.order.iter().flat_map(move |&child| {
            self.parents[child as usize]
                .iter()
                .map(move |&parent| (self.graph.id_at(parent), self.graph.id_at(child)))
        })
    }

    /// Number of directed DAG edges
    pub fn edge_count(&self) -> usize {
        self.parents.iter().map(Vec::len).sum()
    }

    /// Materialize the DAG as an independent directed graph
    pub fn to_graph(&self) -> Graph {
        let mut dag = Graph::with_capacity(self.order.len());
        for &idx in &self.order {
            dag.ensure_vertex(self.graph.id_at(idx));
        }
        for (parent, child) in self.edges() {
            let p = dag.ensure_vertex(parent);
            let c = dag.ensure_vertex(child);
            dag.insert_directed(p, c);
        }
        dag
    }

    /// Run credit propagation over this DAG
    pub fn propagate_credit(&self) -> DagCredit<'_> {
        let n = self.graph.vertex_count();
        let mut vertices: Vec<Vertex> = (0..n as u32)
            .map(|idx| Vertex::new(self.graph.id_at(idx)))
            .collect();

        // Levels count shortest paths: each child adds its parents' levels
        vertices[self.root as usize].level = 1.0;
        for &u in &self.order {
            let level = vertices[u as usize].level;
            for &c in &self.children[u as usize] {
                vertices[c as usize].level += level;
            }
        }

        // Credit on the edge from any parent into `v`
        let mut edge_credit = vec![0.0f64; n];
        for &v in self.order.iter().rev() {
            let from_below: f64 = self.children[v as usize]
                .iter()
                .map(|&c| edge_credit[c as usize])
                .sum();
            let credit = 1.0 + from_below;
            vertices[v as usize].credit = credit;

            let parent_count = self.parents[v as usize].len();
            if parent_count > 0 {
                edge_credit[v as usize] = credit / parent_count as f64;
            }
        }

        DagCredit {
            dag: self,
            vertices,
            edge_credit,
        }
    }
}

/// Result of one root's credit propagation
#[derive(Debug, Clone)]
pub struct DagCredit<'a> {
    dag: &'a BfsDag<'a>,
    vertices: Vec<Vertex>,

    /// Credit carried by each DAG edge into a vertex, indexed by the child
    edge_credit: Vec<f64>,
}

impl<'a> DagCredit<'a> {
    /// Level and credit of `id`, if it was reached from the root
    pub fn vertex(&self, id: VertexId) -> Option<Vertex> {
        let idx = self.dag.graph.index_of(id)?;
        let vertex = self.vertices[idx as usize];
        vertex.is_reached().then_some(vertex)
    }

    /// Credit on the DAG edge `parent -> child`
    pub fn edge_credit(&self, parent: VertexId, child: VertexId) -> Option<f64> {
        let graph = self.dag.graph;
        let p = graph.index_of(parent)?;
        let c = graph.index_of(child)?;
        self.dag.parents[c as usize]
            .contains(&p)
            .then(|| self.edge_credit[c as usize])
    }

    /// Every DAG edge with its credit, as `(parent, child, credit)`
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, f64)> + '_ {
        let graph = self.dag.graph;
        self.dag.order.iter().flat_map(move |&child| {
            let credit = self.edge_credit[child as usize];
            self.dag.parents[child as usize]
                .iter()
                .map(move |&parent| (graph.id_at(parent), graph.id_at(child), credit))
        })
    }

    /// Vertices with no DAG children
    pub fn leaves(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.dag
            .order
            .iter()
            .filter(|&&idx| self.dag.children[idx as usize].is_empty())
            .map(|&idx| self.vertices[idx as usize])
    }

    /// Total credit leaving the root through its DAG edges
    pub fn root_outflow(&self) -> f64 {
        self.dag.children[self.dag.root as usize]
            .iter()
            .map(|&c| self.edge_credit[c as usize])
            .sum()
    }
}
