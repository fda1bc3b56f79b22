//! Depth-first and breadth-first traversal.
//!
//! Depth-first search here produces **finish order** (postorder): a vertex is
//! emitted once every vertex reachable from it through unvisited vertices has
//! been emitted. Successors are explored in the order the graph yields them,
//! so the result is deterministic for a given adjacency order.
//!
//! The traversal is iterative. Each stack frame holds a vertex together with
//! the remaining part of its successor iterator, which reproduces the visiting
//! order of the textbook recursive formulation without growing the call stack.

use std::collections::VecDeque;

use crate::graph::{
    algorithms::paths::{ShortestPaths, UNREACHABLE},
    node::NodeId,
    traits::Successors,
};

/// Runs a depth-first traversal over the whole graph, seeding from every
/// unvisited vertex in index order.
///
/// Returns each vertex exactly once, in finish order.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use digraphs::{graph::algorithms::depth_first_search_all, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2)]);
/// let order = depth_first_search_all(&graph);
/// assert_eq!(order, vec![NodeId::new(2), NodeId::new(1), NodeId::new(0)]);
/// ```
pub fn depth_first_search_all<G: Successors>(graph: &G) -> Vec<NodeId> {
    let node_count = graph.node_count();
    log::trace!("depth-first search over {node_count} vertices");

    let mut visited = vec![false; node_count];
    let mut order = Vec::with_capacity(node_count);
    for start in graph.node_ids() {
        if !visited[start.index()] {
            visit_postorder(graph, start, &mut visited, &mut order);
        }
    }
    order
}

/// Runs a depth-first traversal from `start`, sharing the `visited` marking
/// with the caller.
///
/// Vertices already marked are treated as explored and skipped; everything
/// reached by this call is marked. The returned sequence holds only the
/// vertices finished by this call, in finish order. If `start` is already
/// marked the result is empty.
///
/// # Panics
///
/// Panics if `start` is not a valid vertex or if `visited` does not hold
/// exactly one entry per vertex.
pub fn depth_first_search_from<G: Successors>(
    graph: &G,
    start: NodeId,
    visited: &mut [bool],
) -> Vec<NodeId> {
    assert!(
        graph.contains_node(start),
        "start vertex {start} does not exist in graph with {} vertices",
        graph.node_count()
    );
    assert_eq!(
        visited.len(),
        graph.node_count(),
        "visited marking must have one entry per vertex"
    );

    let mut order = Vec::new();
    if !visited[start.index()] {
        visit_postorder(graph, start, visited, &mut order);
    }
    order
}

fn visit_postorder<G: Successors>(
    graph: &G,
    start: NodeId,
    visited: &mut [bool],
    order: &mut Vec<NodeId>,
) {
    visited[start.index()] = true;
    let mut stack = vec![(start, graph.successors(start))];

    while let Some((node, successors)) = stack.last_mut() {
        match successors.find(|next| !visited[next.index()]) {
            Some(next) => {
                visited[next.index()] = true;
                stack.push((next, graph.successors(next)));
            }
            None => {
                order.push(*node);
                stack.pop();
            }
        }
    }
}

/// Computes unweighted shortest paths from `start` by breadth-first search.
///
/// Every edge counts as one step regardless of any weight the graph carries.
/// Unreachable vertices get no predecessor and a distance of
/// [`UNREACHABLE`].
///
/// # Panics
///
/// Panics if `start` is not a valid vertex.
///
/// # Examples
///
/// ```rust
/// use digraphs::{DirectedGraph, GraphAlgorithms, NodeId};
///
/// let graph = DirectedGraph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
/// let paths = graph.breadth_first_search(NodeId::new(0));
///
/// assert_eq!(paths.distance(NodeId::new(2)), 1);
/// assert!(!paths.is_reachable(NodeId::new(3)));
/// ```
pub fn breadth_first_search<G: Successors>(graph: &G, start: NodeId) -> ShortestPaths<usize> {
    let node_count = graph.node_count();
    assert!(
        graph.contains_node(start),
        "start vertex {start} does not exist in graph with {node_count} vertices"
    );
    log::trace!("breadth-first search from {start} over {node_count} vertices");

    let mut paths = ShortestPaths::new(start, node_count, UNREACHABLE, 0);
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        let next_distance = paths.distances[node.index()] + 1;
        for next in graph.successors(node) {
            if paths.distances[next.index()] == UNREACHABLE {
                paths.distances[next.index()] = next_distance;
                paths.predecessors[next.index()] = Some(node);
                queue.push_back(next);
            }
        }
    }

    paths
}
