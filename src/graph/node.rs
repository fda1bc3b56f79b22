//! Vertex identifier for dense, index-addressed graphs.
//!
//! Vertices carry no identity beyond their position in `[0, vertex_count)`.
//! [`NodeId`] wraps that position so vertex indices cannot be confused with
//! distances, degrees or other plain integers flowing through the algorithms.

use std::fmt;

/// A strongly-typed vertex index.
///
/// Indices are dense: a graph with `n` vertices uses exactly `0..n`. Removing
/// a vertex shifts every higher index down by one, so a `NodeId` is only
/// meaningful for the graph state it was obtained from.
///
/// # Examples
///
/// ```rust
/// use digraphs::{DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
///
/// assert_eq!(a, NodeId::new(0));
/// assert_eq!(b.index(), 1);
/// assert!(a < b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw vertex index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw vertex index, suitable for indexing per-vertex arrays.
    ///
    /// ```rust
    /// use digraphs::NodeId;
    ///
    /// let distances = [0, 3, 7];
    /// assert_eq!(distances[NodeId::new(2).index()], 7);
    /// ```
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the identifier this vertex takes after `removed` is deleted
    /// from the graph, or `None` if this is the removed vertex itself.
    #[must_use]
    pub(crate) fn shifted_after_removal(self, removed: NodeId) -> Option<NodeId> {
        match self.0.cmp(&removed.0) {
            std::cmp::Ordering::Less => Some(self),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(NodeId(self.0 - 1)),
        }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
