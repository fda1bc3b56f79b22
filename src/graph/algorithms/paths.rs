//! Single-source path results.

use crate::graph::node::NodeId;

/// Distance assigned by breadth-first search to vertices it cannot reach.
pub const UNREACHABLE: usize = usize::MAX;

/// Predecessor and distance arrays produced by a single-source search.
///
/// Both arrays are indexed by vertex. The source has no predecessor and a
/// distance of zero; unreachable vertices have no predecessor and the
/// search's "infinite" distance ([`UNREACHABLE`] for breadth-first search,
/// [`f64::INFINITY`] for the weighted searches).
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<D> {
    /// Vertex the search started from
    pub source: NodeId,
    /// Previous vertex on a shortest path, per vertex
    pub predecessors: Vec<Option<NodeId>>,
    /// Shortest distance from the source, per vertex
    pub distances: Vec<D>,
}

impl<D: Copy> ShortestPaths<D> {
    pub(crate) fn new(source: NodeId, node_count: usize, infinite: D, zero: D) -> Self {
        let mut distances = vec![infinite; node_count];
        distances[source.index()] = zero;
        ShortestPaths {
            source,
            predecessors: vec![None; node_count],
            distances,
        }
    }

    /// Returns the shortest distance from the source to `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> D {
        self.distances[node.index()]
    }

    /// Returns the vertex preceding `node` on a shortest path.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors[node.index()]
    }

    /// Returns `true` if `node` is the source or has a predecessor.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        node == self.source || self.predecessors[node.index()].is_some()
    }

    /// Reconstructs the path from the source to `target`, source first.
    ///
    /// Returns `None` if `target` is unreachable. The walk stops after at most
    /// one step per vertex, so a malformed predecessor array cannot loop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraphs::{DirectedGraph, GraphAlgorithms, NodeId};
    ///
    /// let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2)]);
    /// let paths = graph.breadth_first_search(NodeId::new(0));
    ///
    /// let path = paths.path_to(NodeId::new(2)).unwrap();
    /// assert_eq!(path, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
    /// ```
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            if path.len() > self.predecessors.len() {
                return None;
            }
            current = self.predecessors[current.index()]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Splits the result into its predecessor and distance arrays.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Option<NodeId>>, Vec<D>) {
        (self.predecessors, self.distances)
    }
}
