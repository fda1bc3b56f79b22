//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these
//! traits rather than a concrete type, so the unweighted and weighted graphs
//! share one traversal surface without either inheriting from the other.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Vertex count and vertex iteration
//! - [`Successors`] - Forward adjacency in insertion order
//! - [`Predecessors`] - Backward adjacency
//! - [`WeightedSuccessors`] - Forward adjacency plus a weight per edge
//! - [`GraphAlgorithms`] - Traversal, ordering and component algorithms for
//!   every [`Successors`] graph
//! - [`ShortestPathAlgorithms`] - Weighted single-source shortest paths for
//!   every [`WeightedSuccessors`] graph
//!
//! # Ordering
//!
//! Adjacency order is part of the contract: depth-first finish orders,
//! component discovery order and shortest-path tie breaks all follow the order
//! in which [`Successors::successors`] yields neighbors.

use crate::{
    graph::{algorithms, NodeId, ShortestPaths},
    Result,
};

/// Base trait providing core graph properties.
///
/// Vertices of a graph implementing `GraphBase` are exactly the dense indices
/// `0..node_count()`.
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }

    /// Returns `true` if `node` is a valid vertex index for this graph.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use digraphs::{DirectedGraph, NodeId, Successors};
///
/// let graph = DirectedGraph::from_edges(3, [(0, 2), (0, 1)]);
///
/// let successors: Vec<NodeId> = Successors::successors(&graph, NodeId::new(0)).collect();
/// assert_eq!(successors, vec![NodeId::new(2), NodeId::new(1)]);
/// ```
pub trait Successors: GraphBase {
    /// Returns the destinations of the edges leaving `node`, in adjacency
    /// insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid vertex in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns the sources of the edges entering `node`, in ascending index order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid vertex in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs whose edges each carry a floating-point weight.
pub trait WeightedSuccessors: Successors {
    /// Returns the weight of the edge `(source, target)`.
    ///
    /// # Panics
    ///
    /// Panics if the edge does not exist.
    fn weight(&self, source: NodeId, target: NodeId) -> f64;
}

/// Unweighted traversal and ordering algorithms, available on every graph
/// that implements [`Successors`].
///
/// Every method is a pure function of the current graph state. See
/// [`crate::graph::algorithms`] for the free-function forms and complexity notes.
///
/// # Examples
///
/// ```rust
/// use digraphs::{DirectedGraph, GraphAlgorithms, NodeId};
///
/// let graph = DirectedGraph::from_edges(2, [(0, 1)]);
/// assert_eq!(graph.depth_first_search_all(), vec![NodeId::new(1), NodeId::new(0)]);
/// ```
pub trait GraphAlgorithms: Successors + Sized {
    /// Full depth-first forest traversal in vertex-index order, returning every
    /// vertex once in finish (post-)order.
    fn depth_first_search_all(&self) -> Vec<NodeId> {
        algorithms::depth_first_search_all(self)
    }

    /// Depth-first traversal from `start` that skips vertices already marked in
    /// `visited` and marks everything it reaches. Returns the finish order
    /// produced by this call only.
    ///
    /// # Panics
    ///
    /// Panics if `start` is invalid or `visited` does not have one entry per vertex.
    fn depth_first_search_from(&self, start: NodeId, visited: &mut [bool]) -> Vec<NodeId> {
        algorithms::depth_first_search_from(self, start, visited)
    }

    /// Depth-first topological sort returning vertices in **finish order**.
    ///
    /// Dependency order is obtained by consuming the result from its end.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CycleDetected`] if the graph contains a directed cycle.
    fn topological_sort_dfs(&self) -> Result<Vec<NodeId>> {
        algorithms::topological_sort_dfs(self)
    }

    /// Strongly connected components by Kosaraju's two-pass method.
    fn kosaraju(&self) -> Vec<Vec<NodeId>> {
        algorithms::kosaraju(self)
    }

    /// Breadth-first shortest paths from `start`, counting edges.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid vertex.
    fn breadth_first_search(&self, start: NodeId) -> ShortestPaths<usize> {
        algorithms::breadth_first_search(self, start)
    }
}

impl<G: Successors> GraphAlgorithms for G {}

/// Single-source shortest paths over edge weights, available on every graph
/// that implements [`WeightedSuccessors`].
pub trait ShortestPathAlgorithms: WeightedSuccessors + Sized {
    /// Dijkstra's algorithm with a linear-scan minimum selection.
    ///
    /// The result is unspecified if any edge weight is negative.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid vertex.
    fn dijkstra(&self, start: NodeId) -> ShortestPaths<f64> {
        algorithms::dijkstra(self, start)
    }

    /// Bellman-Ford relaxation with negative-cycle detection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NegativeCycle`] if no relaxation pass became stable.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid vertex.
    fn bellman_ford(&self, start: NodeId) -> Result<ShortestPaths<f64>> {
        algorithms::bellman_ford(self, start)
    }
}

impl<G: WeightedSuccessors> ShortestPathAlgorithms for G {}
