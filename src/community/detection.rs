//! Girvan-Newman community detection
//!
//! Fragments wait in a FIFO work queue. Each pass over a fragment removes
//! its maximum-betweenness edges, then rebuilds candidate communities
//! around the endpoints of the removed edges. Fragments with fewer than
//! `2 * min_vertices` vertices cannot split into two communities of
//! `min_vertices` and are accepted as they are.

use std::collections::{BTreeSet, HashSet, VecDeque};

use itertools::Itertools;
use log;

use crate::community::{metrics, Community};
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, VertexId};

/// Splits a graph into communities by repeated edge-betweenness removal
#[derive(Debug, Clone)]
pub struct CommunityDetector {
    min_vertices: usize,

    /// Accepted communities, in acceptance order
    communities: Vec<Graph>,

    /// Number of betweenness computations performed
    passes: usize,
}

impl CommunityDetector {
    /// Detect the communities of `graph`, each ideally holding at least
    /// `min_vertices` users.
    pub fn new(graph: Graph, min_vertices: usize) -> Result<Self> {
        if min_vertices == 0 {
            return Err(GraphError::InvalidMinVertices(min_vertices));
        }

        let mut detector = Self {
            min_vertices,
            communities: Vec::new(),
            passes: 0,
        };
        detector.detect(graph);

        Ok(detector)
    }

    /// Final community graphs
    pub fn communities(&self) -> &[Graph] {
        &self.communities
    }

    /// Take ownership of the community graphs
    pub fn into_communities(self) -> Vec<Graph> {
        self.communities
    }

    /// Number of communities
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    pub fn min_vertices(&self) -> usize {
        self.min_vertices
    }

    /// Number of betweenness computations that were needed
    pub fn betweenness_passes(&self) -> usize {
        self.passes
    }

    /// Summaries of every community, largest first
    pub fn summaries(&self) -> Vec<Community> {
        let mut summaries: Vec<Community> = self
            .communities
            .iter()
            .enumerate()
            .map(|(id, graph)| metrics::summarize(id as u32, graph))
            .collect();

        summaries.sort_by(|a, b| b.size.cmp(&a.size));
        summaries
    }

    fn split_threshold(&self) -> usize {
        self.min_vertices * 2
    }

    fn detect(&mut self, graph: Graph) {
        log::info!(
            "Detecting communities in graph with {} vertices and {} edges (min size {})",
            graph.vertex_count(),
            graph.edge_count(),
            self.min_vertices
        );

        let mut pending = VecDeque::new();
        pending.push_back(graph);

        while let Some(mut fragment) = pending.pop_front() {
            if fragment.vertex_count() < self.split_threshold() {
                self.accept(fragment);
                continue;
            }

            let Some(max) = fragment.max_betweenness() else {
                // No edges left to cut
                self.accept(fragment);
                continue;
            };
            self.passes += 1;

            log::debug!(
                "Pass {}: removing {} edge(s) with betweenness {:.4}: {}",
                self.passes,
                max.edges.len(),
                max.score,
                max.edges.iter().join(", ")
            );

            for edge in &max.edges {
                fragment.remove_edge(edge.low(), edge.high());
            }

            for candidate in self.split_candidates(fragment, &max.edges) {
                if candidate.vertex_count() >= self.split_threshold() {
                    pending.push_back(candidate);
                } else {
                    self.accept(candidate);
                }
            }
        }

        log::info!(
            "Found {} communities after {} betweenness passes",
            self.communities.len(),
            self.passes
        );
    }

    fn accept(&mut self, community: Graph) {
        log::debug!(
            "Accepted community of {} vertices and {} edges",
            community.vertex_count(),
            community.edge_count()
        );
        self.communities.push(community);
    }

    /// Candidate subgraphs around the endpoints of the removed edges.
    ///
    /// Falls back to the edge-reduced fragment alone when any candidate is
    /// smaller than `min_vertices`.
    fn split_candidates(&self, fragment: Graph, removed: &[Edge]) -> Vec<Graph> {
        let roots: BTreeSet<VertexId> = removed
            .iter()
            .flat_map(|edge| [edge.low(), edge.high()])
            .collect();

        let mut seen: HashSet<Vec<VertexId>> = HashSet::new();
        let candidates: Vec<Graph> = roots
            .into_iter()
            .map(|root| two_hop_neighborhood(&fragment, root))
            .filter(|candidate| seen.insert(candidate.vertices().sorted_unstable().collect()))
            .collect();

        if candidates
            .iter()
            .any(|candidate| candidate.vertex_count() < self.min_vertices)
        {
            log::debug!(
                "Split left a candidate below {} vertices; keeping the reduced fragment",
                self.min_vertices
            );
            return vec![fragment];
        }

        candidates
    }
}

/// The root, its neighbors and their neighbors, joined by the edges walked
/// to reach them.
fn two_hop_neighborhood(graph: &Graph, root: VertexId) -> Graph {
    let mut subgraph = Graph::new();
    let root_idx = subgraph.ensure_vertex(root);

    let direct: Vec<VertexId> = graph
        .neighbors(root)
        .map(|neighbors| neighbors.collect())
        .unwrap_or_default();

    for &neighbor in &direct {
        let idx = subgraph.ensure_vertex(neighbor);
        subgraph.link(root_idx, idx);
    }

    for &neighbor in &direct {
        let idx = subgraph.ensure_vertex(neighbor);
        for second in graph.neighbors(neighbor).into_iter().flatten() {
            let second_idx = subgraph.ensure_vertex(second);
            subgraph.link(idx, second_idx);
        }
    }

    subgraph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold_is_rejected() {
        let g = Graph::from_edges([(1, 2)]);
        let err = CommunityDetector::new(g, 0).unwrap_err();
        assert_eq!(err, GraphError::InvalidMinVertices(0));
    }

    #[test]
    fn two_hop_neighborhood_walks_two_levels() {
        // 1 - 2 - 3 - 4 - 5
        let g = Graph::from_edges([(1, 2), (2, 3), (3, 4), (4, 5)]);
        let sub = two_hop_neighborhood(&g, 2);

        let vertices: BTreeSet<_> = sub.vertices().collect();
        assert_eq!(vertices, BTreeSet::from([1, 2, 3, 4]));
        assert_eq!(sub.edge_count(), 3);
        assert!(sub.has_edge(4, 3));
        assert!(!sub.contains_vertex(5));
    }

    #[test]
    fn two_hop_neighborhood_skips_edges_between_outer_vertices() {
        // 2 and 3 both sit two hops from 0 and share an edge
        let g = Graph::from_edges([(0, 1), (1, 2), (1, 3), (2, 3)]);
        let sub = two_hop_neighborhood(&g, 0);
        assert_eq!(sub.vertex_count(), 4);
        assert!(!sub.has_edge(2, 3));
        assert_eq!(sub.edge_count(), 3);
    }

    #[test]
    fn isolated_root_gives_single_vertex() {
        let mut g = Graph::new();
        g.add_vertex(7);
        let sub = two_hop_neighborhood(&g, 7);
        assert_eq!(sub.vertex_count(), 1);
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn star_collapses_to_edgeless_fragment() {
        // Every spoke ties; once they are gone nothing can split further
        let g = Graph::from_edges((1..=6).map(|leaf| (0, leaf)));
        let detector = CommunityDetector::new(g, 3).unwrap();

        assert_eq!(detector.len(), 1);
        assert_eq!(detector.betweenness_passes(), 1);
        assert_eq!(detector.communities()[0].vertex_count(), 7);
        assert_eq!(detector.communities()[0].edge_count(), 0);
    }

    #[test]
    fn summaries_are_sorted_by_size() {
        let g = Graph::from_edges([
            (1, 2),
            (2, 3),
            (1, 3),
            (2, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (4, 6),
        ]);
        let detector = CommunityDetector::new(g, 3).unwrap();
        let summaries = detector.summaries();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].members, vec![4, 5, 6, 7]);
        assert_eq!(summaries[0].id, 1);
        assert_eq!(summaries[1].members, vec![1, 2, 3]);
        assert_eq!(summaries[1].density, 1.0);
    }
}
