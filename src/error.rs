use thiserror::Error;

use crate::graph::NodeId;

/// The error type for graph algorithms that can legitimately fail on valid input.
///
/// Only algorithm-level outcomes are reported through this type. Caller misuse
/// (an invalid vertex index, adding an edge that already exists, removing one
/// that does not) is a contract violation and panics instead; see the
/// `# Panics` section of each graph method.
///
/// # Error Categories
///
/// - [`Error::CycleDetected`] - The graph has no topological order
/// - [`Error::NegativeCycle`] - Shortest distances are unbounded below
///
/// Neither variant carries a partial result.
///
/// # Examples
///
/// ```rust
/// use digraphs::{DirectedGraph, Error, GraphAlgorithms};
///
/// let graph = DirectedGraph::from_edges(2, [(0, 1), (1, 0)]);
///
/// match graph.topological_sort_dfs() {
///     Ok(order) => println!("finish order: {order:?}"),
///     Err(Error::CycleDetected { vertex }) => println!("cycle through {vertex}"),
///     Err(e) => println!("unexpected: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A depth-first topological sort followed an edge into a vertex that was
    /// still in progress, which means the graph contains a directed cycle.
    ///
    /// # Fields
    ///
    /// * `vertex` - The in-progress vertex the back edge pointed to
    #[error("vertex {vertex} is already being visited: cycle detected, no topological order exists")]
    CycleDetected {
        /// The vertex reached twice on the current depth-first path
        vertex: NodeId,
    },

    /// Bellman-Ford performed every allowed relaxation pass without reaching a
    /// stable one, so a cycle with negative total weight is reachable from the
    /// source.
    ///
    /// # Fields
    ///
    /// * `passes` - The number of relaxation passes attempted
    #[error("no stable relaxation pass after {passes} passes: negative-weight cycle detected")]
    NegativeCycle {
        /// How many full passes over the edge set were performed
        passes: usize,
    },
}
