// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # digraphs
//!
//! A directed-graph data type over dense vertex indices, with a fixed set of
//! classical algorithms: depth-first finish ordering, topological sorting with
//! cycle detection, Kosaraju's strongly connected components, breadth-first
//! shortest paths, and weighted shortest paths by Dijkstra and Bellman-Ford.
//!
//! ## Features
//!
//! - **Deterministic results** - Adjacency order is preserved, so traversal
//!   orders and tie breaks are reproducible
//! - **Weighted and unweighted graphs** - One set of traversal algorithms for both
//! - **Trait-based algorithms** - Run every algorithm on your own graph type by
//!   implementing [`Successors`] (and [`WeightedSuccessors`] for shortest paths)
//! - **Self-checking** - Structural invariants are re-verified after each
//!   mutation unless turned off through [`GraphConfig`]
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use digraphs::prelude::*;
//!
//! let graph = DirectedGraph::from_edges(
//!     6,
//!     [(0, 1), (0, 3), (1, 2), (1, 5), (1, 4), (2, 5), (3, 4), (4, 5)],
//! );
//!
//! let order: Vec<usize> = graph.topological_sort_dfs()?.into_iter().map(NodeId::index).collect();
//! assert_eq!(order, vec![5, 2, 4, 1, 3, 0]);
//! # Ok::<(), digraphs::Error>(())
//! ```
//!
//! ### Rendering
//!
//! Both graph types implement [`std::fmt::Display`] with one line per vertex:
//!
//! ```rust
//! use digraphs::WeightedDirectedGraph;
//!
//! let graph = WeightedDirectedGraph::from_weighted_edges(2, [(0, 1, 23.4)]);
//! assert_eq!(graph.to_string(), "0 --> 1(23.4)\n1 -->");
//! ```
//!
//! ## Error Handling
//!
//! Algorithms that can fail on valid input return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use digraphs::{Error, NodeId, ShortestPathAlgorithms, WeightedDirectedGraph};
//!
//! let graph = WeightedDirectedGraph::from_weighted_edges(2, [(0, 1, 1.0), (1, 0, -3.0)]);
//!
//! match graph.bellman_ford(NodeId::new(0)) {
//!     Ok(paths) => println!("distances: {:?}", paths.distances),
//!     Err(Error::NegativeCycle { passes }) => println!("no stable pass in {passes}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```
//!
//! Misuse such as an out-of-range vertex or a duplicate edge panics.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug` for structural
//! mutations, `trace` for algorithm entry, `warn` when an algorithm reports a
//! cycle. Install any `log` backend to see them.

mod config;
mod error;
pub mod graph;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use digraphs::prelude::*;
///
/// let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
/// assert_eq!(graph.kosaraju().len(), 1);
/// ```
pub mod prelude;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub use config::GraphConfig;
pub use error::Error;
pub use graph::{
    DirectedGraph, GraphAlgorithms, GraphBase, NodeId, Predecessors, ShortestPathAlgorithms,
    ShortestPaths, Successors, WeightedDirectedGraph, WeightedSuccessors,
};
