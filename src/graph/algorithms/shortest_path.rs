//! Weighted single-source shortest paths.
//!
//! Both algorithms start from every distance at [`f64::INFINITY`] except the
//! source at `0.0`, and share the same relaxation step. Edges are visited in
//! a fixed order (vertex-index order, then adjacency order), so results and
//! tie breaks are deterministic.

use crate::{
    graph::{algorithms::paths::ShortestPaths, node::NodeId, traits::WeightedSuccessors},
    Error, Result,
};

/// Relaxes the edge `(source, target)`: if going through `source` is strictly
/// shorter, records the new distance and predecessor and returns `true`.
fn relax<G: WeightedSuccessors>(
    graph: &G,
    paths: &mut ShortestPaths<f64>,
    source: NodeId,
    target: NodeId,
) -> bool {
    let candidate = paths.distances[source.index()] + graph.weight(source, target);
    if candidate < paths.distances[target.index()] {
        paths.distances[target.index()] = candidate;
        paths.predecessors[target.index()] = Some(source);
        true
    } else {
        false
    }
}

/// Dijkstra's algorithm with linear-scan selection.
///
/// Keeps every unsettled vertex in a working set ordered by index. Each round
/// scans the set for the smallest tentative distance (the first one found wins
/// a tie), removes it and relaxes its outgoing edges. The loop ends when the
/// working set is empty.
///
/// Negative edge weights are not checked for; with any present the result is
/// unspecified. Use [`bellman_ford`] for such graphs.
///
/// # Complexity
///
/// - Time: O(V² + E)
/// - Space: O(V)
///
/// # Panics
///
/// Panics if `start` is not a valid vertex.
pub fn dijkstra<G: WeightedSuccessors>(graph: &G, start: NodeId) -> ShortestPaths<f64> {
    let node_count = graph.node_count();
    assert!(
        graph.contains_node(start),
        "start vertex {start} does not exist in graph with {node_count} vertices"
    );
    log::trace!("dijkstra from {start} over {node_count} vertices");

    let mut paths = ShortestPaths::new(start, node_count, f64::INFINITY, 0.0);
    let mut unsettled: Vec<NodeId> = graph.node_ids().collect();

    while !unsettled.is_empty() {
        let mut closest = 0;
        for (position, node) in unsettled.iter().enumerate().skip(1) {
            if paths.distances[node.index()] < paths.distances[unsettled[closest].index()] {
                closest = position;
            }
        }

        let node = unsettled.remove(closest);
        for next in graph.successors(node) {
            relax(graph, &mut paths, node, next);
        }
    }

    paths
}

/// Bellman-Ford shortest paths with negative-cycle detection.
///
/// Makes up to one pass per vertex over every edge, relaxing each. The first
/// pass that changes nothing ends the search successfully. Because a pass
/// count equal to the vertex count is allowed, a graph without a negative
/// cycle always reaches a stable pass within the budget.
///
/// # Complexity
///
/// - Time: O(V · E)
/// - Space: O(V)
///
/// # Errors
///
/// Returns [`Error::NegativeCycle`] if none of the passes was stable, which
/// happens exactly when a cycle of negative total weight is reachable from
/// `start`.
///
/// # Panics
///
/// Panics if `start` is not a valid vertex.
///
/// # Examples
///
/// ```rust
/// use digraphs::{Error, NodeId, ShortestPathAlgorithms, WeightedDirectedGraph};
///
/// let graph = WeightedDirectedGraph::from_weighted_edges(3, [(0, 1, 1.0), (1, 2, -2.0), (2, 1, 1.0)]);
/// assert!(matches!(
///     graph.bellman_ford(NodeId::new(0)),
///     Err(Error::NegativeCycle { .. })
/// ));
/// ```
pub fn bellman_ford<G: WeightedSuccessors>(graph: &G, start: NodeId) -> Result<ShortestPaths<f64>> {
    let node_count = graph.node_count();
    assert!(
        graph.contains_node(start),
        "start vertex {start} does not exist in graph with {node_count} vertices"
    );
    log::trace!("bellman-ford from {start} over {node_count} vertices");

    let mut paths = ShortestPaths::new(start, node_count, f64::INFINITY, 0.0);
    for pass in 1..=node_count {
        let mut changed = false;
        for source in graph.node_ids() {
            for target in graph.successors(source) {
                changed |= relax(graph, &mut paths, source, target);
            }
        }

        if !changed {
            log::trace!("bellman-ford stable after {pass} passes");
            return Ok(paths);
        }
    }

    log::warn!("bellman-ford from {start} found a negative cycle after {node_count} passes");
    Err(Error::NegativeCycle { passes: node_count })
}
