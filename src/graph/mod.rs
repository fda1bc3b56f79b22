//! Directed graphs over dense vertex indices.
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`], [`DirectedGraph`] and [`WeightedDirectedGraph`]
//! - **Traits**: [`GraphBase`], [`Successors`], [`Predecessors`] and
//!   [`WeightedSuccessors`] describe what a graph can answer;
//!   [`GraphAlgorithms`] and [`ShortestPathAlgorithms`] turn those answers into
//!   algorithm methods for every implementor
//! - **Algorithms**: [`algorithms`] holds the free-function forms
//!
//! # Design Principles
//!
//! ## Composition Over Inheritance
//!
//! [`WeightedDirectedGraph`] holds a [`DirectedGraph`] plus a weight map and
//! delegates structural work to it. Both types implement the same capability
//! traits, so any unweighted algorithm runs on either.
//!
//! ## Observable Adjacency Order
//!
//! Each vertex's outgoing edges are kept in insertion order. Depth-first
//! results, component discovery and shortest-path tie breaks all depend on it,
//! and every mutation preserves it.
//!
//! ## Contract Violations Panic
//!
//! Invalid vertex indices, duplicate edges and removal of a missing edge are
//! caller bugs and panic. Inputs that are valid but have no answer, such as a
//! cyclic graph passed to a topological sort, produce a [`crate::Error`].
//!
//! # Usage Examples
//!
//! ## Building and Traversing
//!
//! ```rust
//! use digraphs::{DirectedGraph, GraphAlgorithms, NodeId};
//!
//! let mut graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2)]);
//! let d = graph.add_vertex();
//! graph.add_edge(NodeId::new(2), d);
//!
//! let order = graph.depth_first_search_all();
//! assert_eq!(order.first(), Some(&d));
//! ```
//!
//! ## Weighted Shortest Paths
//!
//! ```rust
//! use digraphs::{NodeId, ShortestPathAlgorithms, WeightedDirectedGraph};
//!
//! let graph = WeightedDirectedGraph::from_weighted_edges(3, [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0)]);
//! let paths = graph.bellman_ford(NodeId::new(0))?;
//!
//! assert_eq!(paths.distance(NodeId::new(1)), 2.0);
//! assert_eq!(paths.path_to(NodeId::new(1)), Some(vec![NodeId::new(0), NodeId::new(2), NodeId::new(1)]));
//! # Ok::<(), digraphs::Error>(())
//! ```

pub mod algorithms;
mod directed;
mod node;
mod traits;
mod weighted;

pub use algorithms::{ShortestPaths, UNREACHABLE};
pub use directed::DirectedGraph;
pub use node::NodeId;
pub use traits::{
    GraphAlgorithms, GraphBase, Predecessors, ShortestPathAlgorithms, Successors,
    WeightedSuccessors,
};
pub use weighted::{WeightedDirectedGraph, DEFAULT_WEIGHT};
