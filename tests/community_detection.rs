use std::collections::BTreeSet;
use std::io::Cursor;

use girvan_newman_analyzer::data::parse_edge_list;
use girvan_newman_analyzer::{CommunityDetector, Edge, Graph, VertexId};

/// Triangle 1-2-3 bridged by 2-4 to the cluster 4-5-6-7.
const BRIDGED_CLUSTERS: &str = "\
1 2
2 3
3 1
2 4
4 5
5 6
6 7
7 4
4 6
";

fn load(text: &str) -> Graph {
    parse_edge_list(Cursor::new(text)).unwrap()
}

fn vertex_sets(detector: &CommunityDetector) -> BTreeSet<BTreeSet<VertexId>> {
    detector
        .communities()
        .iter()
        .map(|g| g.vertices().collect())
        .collect()
}

/// Accepted communities are small, the untouched input, or an edgeless
/// remainder that no further pass can cut.
fn assert_threshold_property(detector: &CommunityDetector, input: &Graph) {
    for community in detector.communities() {
        assert!(
            community.vertex_count() < 2 * detector.min_vertices()
                || community == input
                || community.edge_count() == 0,
            "community of {} vertices should have been split",
            community.vertex_count()
        );
    }
}

#[test]
fn loads_the_scenario_graph() {
    let graph = load(BRIDGED_CLUSTERS);
    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), 9);
}

#[test]
fn bridge_splits_the_graph_into_two_communities() {
    let graph = load(BRIDGED_CLUSTERS);
    assert_eq!(graph.max_betweenness_edges(), vec![Edge::new(2, 4)]);

    let detector = CommunityDetector::new(graph.clone(), 3).unwrap();
    assert_eq!(detector.len(), 2);
    assert_eq!(detector.betweenness_passes(), 1);

    let expected: BTreeSet<BTreeSet<VertexId>> = [
        BTreeSet::from([1, 2, 3]),
        BTreeSet::from([4, 5, 6, 7]),
    ]
    .into_iter()
    .collect();
    assert_eq!(vertex_sets(&detector), expected);
    assert_threshold_property(&detector, &graph);

    for community in detector.communities() {
        assert!(!community.has_edge(2, 4));
    }
}

#[test]
fn small_graph_is_a_single_community() {
    let graph = Graph::from_edges([(1, 2), (2, 3), (3, 4), (4, 5)]);
    let detector = CommunityDetector::new(graph.clone(), 3).unwrap();

    assert_eq!(detector.len(), 1);
    assert_eq!(detector.betweenness_passes(), 0);
    assert_eq!(detector.communities()[0], graph);
    assert_threshold_property(&detector, &graph);
}

#[test]
fn tied_bridges_are_removed_in_the_same_pass() {
    // Triangles 1-2-3 and 4-5-6 joined by 1-4 and 3-6
    let graph = Graph::from_edges([
        (1, 2),
        (2, 3),
        (1, 3),
        (4, 5),
        (5, 6),
        (4, 6),
        (1, 4),
        (3, 6),
    ]);
    assert_eq!(
        graph.max_betweenness_edges(),
        vec![Edge::new(1, 4), Edge::new(3, 6)]
    );

    let detector = CommunityDetector::new(graph.clone(), 3).unwrap();
    assert_eq!(detector.betweenness_passes(), 1);
    assert_eq!(detector.len(), 2);

    let expected: BTreeSet<BTreeSet<VertexId>> =
        [BTreeSet::from([1, 2, 3]), BTreeSet::from([4, 5, 6])]
            .into_iter()
            .collect();
    assert_eq!(vertex_sets(&detector), expected);

    for community in detector.communities() {
        assert!(!community.has_edge(1, 4));
        assert!(!community.has_edge(3, 6));
    }
}

#[test]
fn even_cycle_loses_every_edge_in_one_pass() {
    let graph = Graph::from_edges((0..8u64).map(|i| (i, (i + 1) % 8)));
    assert_eq!(graph.max_betweenness_edges().len(), 8);

    let detector = CommunityDetector::new(graph.clone(), 3).unwrap();
    assert_eq!(detector.betweenness_passes(), 1);
    assert_eq!(detector.len(), 1);
    assert_threshold_property(&detector, &graph);

    let remainder = &detector.communities()[0];
    assert_eq!(remainder.vertex_count(), 8);
    assert_eq!(remainder.edge_count(), 0);
    for edge in graph.edges() {
        assert!(!remainder.has_edge(edge.low(), edge.high()));
    }
}

#[test]
fn deep_diamond_chain_is_detected_without_overflow() {
    // 65 diamonds: the far hub is reached by 2^65 shortest paths
    let graph = Graph::from_edges((0..65u64).flat_map(|i| {
        let hub = 3 * i;
        [
            (hub, hub + 1),
            (hub, hub + 2),
            (hub + 1, hub + 3),
            (hub + 2, hub + 3),
        ]
    }));
    assert_eq!(graph.vertex_count(), 196);

    let detector = CommunityDetector::new(graph.clone(), 3).unwrap();
    assert!(!detector.is_empty());
    assert!(detector.betweenness_passes() >= 1);
    assert_threshold_property(&detector, &graph);
}

#[test]
fn chained_cliques_separate_at_every_bridge() {
    // Three 4-cliques chained by single bridges: 1-4 .. 5-8 .. 9-12
    let mut edges = Vec::new();
    for base in [1u64, 5, 9] {
        for a in base..base + 4 {
            for b in a + 1..base + 4 {
                edges.push((a, b));
            }
        }
    }
    edges.push((4, 5));
    edges.push((8, 9));
    let graph = Graph::from_edges(edges);

    let max = graph.max_betweenness().unwrap();
    assert_eq!(max.edges, vec![Edge::new(4, 5), Edge::new(8, 9)]);
    assert!((max.score - 32.0).abs() < 1e-9);

    let detector = CommunityDetector::new(graph.clone(), 3).unwrap();
    assert_eq!(detector.betweenness_passes(), 1);
    assert_threshold_property(&detector, &graph);

    let expected: BTreeSet<BTreeSet<VertexId>> = [
        BTreeSet::from([1, 2, 3, 4]),
        BTreeSet::from([5, 6, 7, 8]),
        BTreeSet::from([9, 10, 11, 12]),
    ]
    .into_iter()
    .collect();
    assert_eq!(vertex_sets(&detector), expected);

    for community in detector.communities() {
        assert_eq!(community.edge_count(), 6);
    }
}

#[test]
fn unknown_source_vertex_is_rejected() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    assert!(graph.add_edge(5, 1).is_err());
    assert!(graph.add_undirected_edge(1, 5).is_err());
    assert_eq!(graph.directed_edge_count(), 0);
}
