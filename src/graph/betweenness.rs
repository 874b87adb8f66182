//! Edge betweenness aggregation

use std::collections::BTreeMap;

use log;
use rayon::prelude::*;

use crate::graph::{BfsDag, Edge, Graph};

/// Below this many vertices roots are processed sequentially
pub const PARALLEL_ROOT_THRESHOLD: usize = 64;

/// Relative tolerance used when comparing scores against the maximum
pub const TIE_TOLERANCE: f64 = 1e-9;

/// The highest betweenness score and every edge that attains it
#[derive(Debug, Clone, PartialEq)]
pub struct MaxBetweenness {
    pub score: f64,

    /// All tied edges, sorted
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Betweenness score of every logical edge.
    ///
    /// Each root contributes the credit of its DAG edges; since every
    /// vertex pair is counted once from each end, the sums are halved.
    pub fn edge_betweenness(&self) -> BTreeMap<Edge, f64> {
        self.edge_betweenness_with(self.vertex_count() >= PARALLEL_ROOT_THRESHOLD)
    }

    fn edge_betweenness_with(&self, parallel: bool) -> BTreeMap<Edge, f64> {
        let roots = 0..self.vertex_count() as u32;

        // Collected in root order so both paths fold identically
        let per_root: Vec<Vec<(Edge, f64)>> = if parallel {
            roots
                .into_par_iter()
                .map(|root| self.root_contribution(root))
                .collect()
        } else {
            roots.map(|root| self.root_contribution(root)).collect()
        };

        let mut scores: BTreeMap<Edge, f64> =
            self.edges().into_iter().map(|edge| (edge, 0.0)).collect();

        for contribution in per_root {
            for (edge, credit) in contribution {
                *scores.entry(edge).or_insert(0.0) += credit;
            }
        }

        for score in scores.values_mut() {
            *score /= 2.0;
        }

        scores
    }

    fn root_contribution(&self, root: u32) -> Vec<(Edge, f64)> {
        let dag = BfsDag::build(self, root);
        let credit = dag.propagate_credit();
        credit
            .edges()
            .map(|(parent, child, value)| (Edge::new(parent, child), value))
            .collect()
    }

    /// Highest betweenness score with all edges tied at it, or `None` without edges
    pub fn max_betweenness(&self) -> Option<MaxBetweenness> {
        let scores = self.edge_betweenness();
        let max = max_edges(&scores);

        if let Some(ref max) = max {
            log::debug!(
                "Max betweenness {:.4} over {} edge(s) of {}",
                max.score,
                max.edges.len(),
                scores.len()
            );
        }

        max
    }

    /// Every edge attaining the maximum betweenness score
    pub fn max_betweenness_edges(&self) -> Vec<Edge> {
        self.max_betweenness()
            .map(|max| max.edges)
            .unwrap_or_default()
    }
}

/// Select the maximum score and every edge within tolerance of it
pub fn max_edges(scores: &BTreeMap<Edge, f64>) -> Option<MaxBetweenness> {
    let score = scores.values().copied().fold(f64::NEG_INFINITY, f64::max);
    if !score.is_finite() {
        return None;
    }

    let tolerance = TIE_TOLERANCE * score.abs().max(1.0);
    let edges = scores
        .iter()
        .filter(|(_, &s)| score - s <= tolerance)
        .map(|(&edge, _)| edge)
        .collect();

    Some(MaxBetweenness { score, edges })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle 1-2-3 bridged by 2-4 to the cluster 4-5-6-7.
    fn bridged_clusters() -> Graph {
        Graph::from_edges([
            (1, 2),
            (2, 3),
            (1, 3),
            (2, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (4, 6),
        ])
    }

    /// Triangles 1-2-3 and 4-5-6 joined by the bridges 1-4 and 3-6.
    fn twin_bridges() -> Graph {
        Graph::from_edges([
            (1, 2),
            (2, 3),
            (1, 3),
            (4, 5),
            (5, 6),
            (4, 6),
            (1, 4),
            (3, 6),
        ])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn path_graph_scores() {
        let g = Graph::from_edges([(1, 2), (2, 3)]);
        let scores = g.edge_betweenness();
        assert_eq!(scores.len(), 2);
        assert_close(scores[&Edge::new(1, 2)], 2.0);
        assert_close(scores[&Edge::new(3, 2)], 2.0);
    }

    #[test]
    fn bridge_is_the_unique_maximum() {
        let g = bridged_clusters();
        let scores = g.edge_betweenness();
        assert_eq!(scores.len(), 9);
        assert_close(scores[&Edge::new(2, 4)], 12.0);
        assert_close(scores[&Edge::new(1, 2)], 5.0);

        let max = g.max_betweenness().unwrap();
        assert_close(max.score, 12.0);
        assert_eq!(max.edges, vec![Edge::new(4, 2)]);
    }

    #[test]
    fn scores_do_not_depend_on_direction() {
        let g = bridged_clusters();
        let scores = g.edge_betweenness();
        for edge in g.edges() {
            let (a, b) = edge.endpoints();
            assert_eq!(scores.get(&Edge::new(a, b)), scores.get(&Edge::new(b, a)));
        }
    }

    #[test]
    fn tied_bridges_are_returned_together() {
        let g = twin_bridges();
        let max = g.max_betweenness().unwrap();
        assert_close(max.score, 4.5);
        assert_eq!(max.edges, vec![Edge::new(1, 4), Edge::new(3, 6)]);

        let scores = g.edge_betweenness();
        assert_close(scores[&Edge::new(1, 2)], 2.5);
        assert_close(scores[&Edge::new(1, 3)], 2.0);
    }

    #[test]
    fn even_cycle_ties_on_every_edge() {
        let g = Graph::from_edges((0..6u64).map(|i| (i, (i + 1) % 6)));
        assert_eq!(g.max_betweenness_edges().len(), 6);
    }

    #[test]
    fn edgeless_graph_has_no_maximum() {
        let mut g = Graph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        assert!(g.edge_betweenness().is_empty());
        assert!(g.max_betweenness().is_none());
        assert!(g.max_betweenness_edges().is_empty());
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let mut edges: Vec<(u64, u64)> = (0..120u64).map(|i| (i, (i + 1) % 120)).collect();
        edges.extend((0..120u64).step_by(7).map(|i| (i, (i * 13 + 5) % 120)));
        let g = Graph::from_edges(edges);

        let sequential = g.edge_betweenness_with(false);
        let parallel = g.edge_betweenness_with(true);
        assert_eq!(sequential, parallel);
    }
}
