//! # digraphs Prelude
//!
//! Glob-import this module to get the graph types, the algorithm traits and
//! the error type in one line.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The error type for algorithms that can fail on valid input
pub use crate::Error;

/// The result type used throughout digraphs
pub use crate::Result;

/// Invariant verification settings
pub use crate::GraphConfig;

// ================================================================================================
// Graphs
// ================================================================================================

/// Strongly-typed vertex index
pub use crate::NodeId;

/// Unweighted adjacency-list digraph
pub use crate::DirectedGraph;

/// Digraph with one `f64` weight per edge
pub use crate::WeightedDirectedGraph;

/// Predecessor and distance arrays from a single-source search
pub use crate::ShortestPaths;

// ================================================================================================
// Capability Traits
// ================================================================================================

pub use crate::{
    GraphAlgorithms, GraphBase, Predecessors, ShortestPathAlgorithms, Successors,
    WeightedSuccessors,
};
