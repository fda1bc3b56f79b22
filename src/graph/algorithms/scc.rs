//! Strongly connected components using Kosaraju's algorithm.
//!
//! A strongly connected component is a maximal set of vertices in which every
//! vertex can reach every other. Components partition the vertex set.
//!
//! # Use Cases
//!
//! - **Cycle grouping**: every directed cycle lies inside one component
//! - **Dependency analysis**: collapsing components yields an acyclic graph
//!   (see [`condensation`])

use std::collections::HashSet;

use crate::graph::{
    algorithms::traversal::{depth_first_search_all, depth_first_search_from},
    directed::DirectedGraph,
    node::NodeId,
    traits::Successors,
};

/// Computes the strongly connected components of a directed graph.
///
/// Uses Kosaraju's two-pass method:
///
/// 1. Build the reversal of the graph and compute its full depth-first finish
///    order
/// 2. Consume that order from its end; each vertex not yet visited seeds a
///    depth-first traversal of the **original** graph, sharing one visited
///    marking across seeds
///
/// Each seed's finish-order output is one component, and components are
/// listed in seeding order. Both the component order and the vertex order
/// inside each component follow adjacency order, so the result is
/// deterministic.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the reversed graph
///
/// # Examples
///
/// ```rust
/// use digraphs::{DirectedGraph, GraphAlgorithms, NodeId};
///
/// // 0 <-> 1, 2 alone
/// let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 0), (1, 2)]);
/// let components = graph.kosaraju();
///
/// assert_eq!(components.len(), 2);
/// assert!(components.contains(&vec![NodeId::new(2)]));
/// ```
pub fn kosaraju<G: Successors>(graph: &G) -> Vec<Vec<NodeId>> {
    let node_count = graph.node_count();
    log::trace!("kosaraju over {node_count} vertices");

    let reversed = DirectedGraph::reversal_of(graph);
    let mut pending = depth_first_search_all(&reversed);

    let mut visited = vec![false; node_count];
    let mut components = Vec::new();
    while let Some(seed) = pending.pop() {
        if !visited[seed.index()] {
            components.push(depth_first_search_from(graph, seed, &mut visited));
        }
    }
    components
}

/// Collapses each component into a single vertex.
///
/// Returns a mapping from every original vertex to the index of its component
/// in `components`, together with the distinct edges between different
/// components in the order they are first found (source-index order, then
/// adjacency order). The component graph is always acyclic.
///
/// # Panics
///
/// Panics if a vertex in `components` is out of range for `graph`.
///
/// # Examples
///
/// ```rust
/// use digraphs::{graph::algorithms::condensation, DirectedGraph, GraphAlgorithms};
///
/// let graph = DirectedGraph::from_edges(4, [(0, 1), (1, 0), (0, 2), (2, 3)]);
/// let components = graph.kosaraju();
/// let (component_of, edges) = condensation(&graph, &components);
///
/// assert_eq!(component_of[0], component_of[1]);
/// assert_eq!(edges.len(), 2);
/// ```
pub fn condensation<G: Successors>(
    graph: &G,
    components: &[Vec<NodeId>],
) -> (Vec<usize>, Vec<(usize, usize)>) {
    let mut component_of = vec![0; graph.node_count()];
    for (index, component) in components.iter().enumerate() {
        for &node in component {
            component_of[node.index()] = index;
        }
    }

    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    for source in graph.node_ids() {
        let from = component_of[source.index()];
        for target in graph.successors(source) {
            let to = component_of[target.index()];
            if from != to && seen.insert((from, to)) {
                edges.push((from, to));
            }
        }
    }

    (component_of, edges)
}
