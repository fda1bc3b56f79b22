//! End-to-end scenarios through the public API.
//!
//! Each test builds one of a small set of reference graphs and checks exact
//! algorithm output, including traversal order and rendering bytes.

use digraphs::{
    graph::algorithms::condensation, DirectedGraph, Error, GraphAlgorithms, GraphConfig, NodeId,
    ShortestPathAlgorithms, WeightedDirectedGraph,
};

fn ids(indices: &[usize]) -> Vec<NodeId> {
    indices.iter().copied().map(NodeId::new).collect()
}

fn n(index: usize) -> NodeId {
    NodeId::new(index)
}

/// 0 -> 1
fn create_g21() -> DirectedGraph {
    DirectedGraph::from_edges(2, [(0, 1)])
}

/// 0 <-> 1
fn create_g22() -> DirectedGraph {
    DirectedGraph::from_edges(2, [(0, 1), (1, 0)])
}

/// Chain 0 -> 1 -> ... -> 5
fn create_g65() -> DirectedGraph {
    DirectedGraph::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)])
}

/// Acyclic, six vertices and eight edges
fn create_g68_acyclic() -> DirectedGraph {
    DirectedGraph::from_edges(
        6,
        [(0, 1), (0, 3), (1, 2), (1, 5), (1, 4), (2, 5), (3, 4), (4, 5)],
    )
}

/// Same as the acyclic graph with (1,5) turned into (5,1)
fn create_g68_cyclic() -> DirectedGraph {
    DirectedGraph::from_edges(
        6,
        [(0, 1), (0, 3), (1, 2), (5, 1), (1, 4), (2, 5), (3, 4), (4, 5)],
    )
}

fn create_weighted_g4() -> WeightedDirectedGraph {
    WeightedDirectedGraph::from_weighted_edges(
        4,
        [(0, 1, 2.0), (1, 2, 1.0), (2, 3, 3.0), (0, 3, 7.0), (0, 2, 1.0)],
    )
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ------------------------------------------------------------------------------------------------
// Construction and rendering
// ------------------------------------------------------------------------------------------------

#[test]
fn test_render_empty() {
    assert_eq!(DirectedGraph::new().to_string(), "");
}

#[test]
fn test_render_single_vertex() {
    let graph = DirectedGraph::from_edges(1, Vec::<(usize, usize)>::new());
    assert_eq!(graph.to_string(), "0 -->");
}

#[test]
fn test_render_two_vertices() {
    assert_eq!(create_g21().to_string(), "0 --> 1\n1 -->");
    assert_eq!(create_g22().to_string(), "0 --> 1\n1 --> 0");
}

#[test]
fn test_render_multiple_destinations() {
    let graph = DirectedGraph::from_edges(3, [(0, 1), (0, 2)]);
    assert_eq!(graph.to_string(), "0 --> 1 -  2\n1 -->\n2 -->");
}

#[test]
fn test_render_weighted() {
    let graph = WeightedDirectedGraph::from_weighted_edges(2, [(0, 1, 23.4)]);
    assert_eq!(graph.to_string(), "0 --> 1(23.4)\n1 -->");
    assert_eq!(graph.read_weight(n(0), n(1)), 23.4);
}

// ------------------------------------------------------------------------------------------------
// Mutation
// ------------------------------------------------------------------------------------------------

#[test]
fn test_add_vertex() {
    let mut graph = create_g21();
    assert_eq!(graph.add_vertex(), n(2));
    assert_eq!(graph.to_string(), "0 --> 1\n1 -->\n2 -->");
}

#[test]
fn test_add_edge() {
    let mut graph = create_g21();
    graph.add_edge(n(1), n(0));
    assert_eq!(graph.to_string(), create_g22().to_string());
}

#[test]
fn test_remove_edge() {
    let mut graph = create_g22();
    graph.remove_edge(n(1), n(0));
    assert_eq!(graph.to_string(), create_g21().to_string());
}

#[test]
fn test_remove_source_vertex() {
    let mut graph = create_g22();
    graph.remove_vertex(n(1));
    assert_eq!(graph.to_string(), "0 -->");
}

#[test]
fn test_remove_sink_vertex() {
    let mut graph = create_g22();
    graph.remove_vertex(n(0));
    assert_eq!(graph.to_string(), "0 -->");
}

#[test]
fn test_remove_vertex_renumbers_destinations() {
    let mut graph = create_g65();
    graph.remove_vertex(n(2));
    assert_eq!(graph.to_string(), "0 --> 1\n1 -->\n2 --> 3\n3 --> 4\n4 -->");
    assert!(graph.check_invariants());
}

#[test]
fn test_degrees() {
    let graph = create_g22();
    assert_eq!(graph.in_degree(n(0)), 1);
    assert_eq!(graph.out_degree(n(0)), 1);

    let graph = create_g68_acyclic();
    assert_eq!(graph.out_degree(n(1)), 3);
    assert_eq!(graph.in_degree(n(5)), 3);
    assert_eq!(graph.entry_nodes().collect::<Vec<_>>(), ids(&[0]));
    assert_eq!(graph.exit_nodes().collect::<Vec<_>>(), ids(&[5]));
}

#[test]
fn test_unchecked_config_builds_same_graph() {
    let checked = create_g68_acyclic();
    let unchecked = DirectedGraph::with_config(
        6,
        [(0, 1), (0, 3), (1, 2), (1, 5), (1, 4), (2, 5), (3, 4), (4, 5)],
        GraphConfig::unchecked(),
    );
    assert_eq!(checked.to_string(), unchecked.to_string());
    assert!(!unchecked.config().verify_invariants);
}

// ------------------------------------------------------------------------------------------------
// Unweighted algorithms
// ------------------------------------------------------------------------------------------------

#[test]
fn test_dfs_g21() {
    assert_eq!(create_g21().depth_first_search_all(), ids(&[1, 0]));
}

#[test]
fn test_dfs_g68() {
    assert_eq!(
        create_g68_acyclic().depth_first_search_all(),
        ids(&[5, 2, 4, 1, 3, 0])
    );
}

#[test]
fn test_dfs_g65() {
    assert_eq!(create_g65().depth_first_search_all(), ids(&[5, 4, 3, 2, 1, 0]));
}

#[test]
fn test_topological_sort_g68() {
    init_logging();
    assert_eq!(
        create_g68_acyclic().topological_sort_dfs(),
        Ok(ids(&[5, 2, 4, 1, 3, 0]))
    );
}

#[test]
fn test_topological_sort_g68_cyclic() {
    init_logging();
    assert!(matches!(
        create_g68_cyclic().topological_sort_dfs(),
        Err(Error::CycleDetected { .. })
    ));
}

#[test]
fn test_reversed_g21() {
    assert_eq!(create_g21().reversed().to_string(), "0 -->\n1 --> 0");
}

#[test]
fn test_kosaraju_g21() {
    assert_eq!(create_g21().kosaraju(), vec![ids(&[1]), ids(&[0])]);
}

#[test]
fn test_kosaraju_g68_cyclic() {
    assert_eq!(
        create_g68_cyclic().kosaraju(),
        vec![ids(&[5, 2, 4, 1]), ids(&[3]), ids(&[0])]
    );
}

#[test]
fn test_condensation_g68_cyclic() {
    let graph = create_g68_cyclic();
    let components = graph.kosaraju();
    let (component_of, edges) = condensation(&graph, &components);

    assert_eq!(component_of, vec![2, 0, 0, 1, 0, 0]);
    assert_eq!(edges, vec![(2, 0), (2, 1), (1, 0)]);
}

#[test]
fn test_bfs_g68() {
    let paths = create_g68_acyclic().breadth_first_search(n(0));
    assert_eq!(paths.distances, vec![0, 1, 2, 1, 2, 2]);
    assert_eq!(paths.path_to(n(5)), Some(ids(&[0, 1, 5])));
}

#[test]
fn test_unweighted_algorithms_on_weighted_graph() {
    let graph = create_weighted_g4();
    assert_eq!(graph.depth_first_search_all(), ids(&[3, 2, 1, 0]));
    assert_eq!(graph.breadth_first_search(n(0)).distances, vec![0, 1, 1, 1]);
    assert_eq!(graph.kosaraju().len(), 4);
}

// ------------------------------------------------------------------------------------------------
// Weighted algorithms
// ------------------------------------------------------------------------------------------------

#[test]
fn test_dijkstra_g4() {
    let paths = create_weighted_g4().dijkstra(n(0));
    assert_eq!(paths.predecessors, vec![None, Some(n(0)), Some(n(0)), Some(n(2))]);
    assert_eq!(paths.distances, vec![0.0, 2.0, 1.0, 4.0]);
}

#[test]
fn test_bellman_ford_g4() {
    let paths = create_weighted_g4().bellman_ford(n(0)).unwrap();
    assert_eq!(paths.predecessors, vec![None, Some(n(0)), Some(n(0)), Some(n(2))]);
    assert_eq!(paths.distances, vec![0.0, 2.0, 1.0, 4.0]);
}

#[test]
fn test_bellman_ford_negative_edge() {
    let graph = WeightedDirectedGraph::from_weighted_edges(
        4,
        [(0, 1, 2.0), (1, 2, 1.0), (2, 3, 3.0), (0, 3, 7.0), (2, 0, -1.0)],
    );
    let (predecessors, distances) = graph.bellman_ford(n(0)).unwrap().into_parts();
    assert_eq!(predecessors, vec![None, Some(n(0)), Some(n(1)), Some(n(2))]);
    assert_eq!(distances, vec![0.0, 2.0, 3.0, 6.0]);
}

#[test]
fn test_bellman_ford_negative_cycle_replacing_last_leg() {
    init_logging();
    let graph = WeightedDirectedGraph::from_weighted_edges(
        4,
        [(0, 1, 2.0), (1, 2, 1.0), (2, 0, -18.0), (0, 3, 7.0), (0, 2, 1.0)],
    );
    assert_eq!(
        graph.bellman_ford(n(0)),
        Err(Error::NegativeCycle { passes: 4 })
    );
}

#[test]
fn test_bellman_ford_negative_cycle_through_all_three() {
    let graph = WeightedDirectedGraph::from_weighted_edges(
        4,
        [(0, 1, 2.0), (1, 2, 1.0), (2, 3, 3.0), (0, 3, 7.0), (2, 0, -18.0)],
    );
    assert!(matches!(
        graph.bellman_ford(n(0)),
        Err(Error::NegativeCycle { .. })
    ));
}

#[test]
fn test_weighted_round_trip() {
    let mut graph = create_weighted_g4();
    let before = graph.to_string();

    graph.add_weighted_edge(n(3), n(1), 0.25);
    assert_ne!(graph.to_string(), before);
    graph.remove_edge(n(3), n(1));
    assert_eq!(graph.to_string(), before);
}

#[test]
fn test_error_messages() {
    let cycle = Error::CycleDetected { vertex: n(3) };
    assert!(cycle.to_string().contains("n3"));

    let negative = Error::NegativeCycle { passes: 4 };
    assert!(negative.to_string().contains('4'));
}
