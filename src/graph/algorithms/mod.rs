//! Graph algorithms over the capability traits.
//!
//! Every algorithm is a free function generic over [`Successors`] or
//! [`WeightedSuccessors`], so it runs on [`DirectedGraph`],
//! [`WeightedDirectedGraph`] and any user type implementing the traits. The
//! same functions are available as methods through
//! [`GraphAlgorithms`] and [`ShortestPathAlgorithms`].
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`depth_first_search_all`] - Whole-graph depth-first finish order
//! - [`depth_first_search_from`] - Single-seed depth-first finish order with a shared visited marking
//! - [`breadth_first_search`] - Unweighted shortest paths by edge count
//!
//! ## Ordering
//!
//! - [`topological_sort_dfs`] - Finish-order topological sort with cycle detection
//!
//! ## Strongly Connected Components
//!
//! - [`kosaraju`] - Kosaraju's two-pass algorithm
//! - [`condensation`] - Component mapping and inter-component edges
//!
//! ## Weighted Shortest Paths
//!
//! - [`dijkstra`] - Linear-scan Dijkstra, non-negative weights only
//! - [`bellman_ford`] - Edge relaxation with negative-cycle detection
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal, hop counts |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | Kosaraju | O(V + E) | Cycle grouping |
//! | Dijkstra | O(V² + E) | Non-negative weights |
//! | Bellman-Ford | O(V · E) | Negative weights, cycle detection |
//!
//! # Finish Order
//!
//! Depth-first results, including [`topological_sort_dfs`], are in finish
//! order: a vertex appears after everything it reaches. To process vertices in
//! dependency order, pop from the end of the returned vector.
//!
//! [`Successors`]: crate::Successors
//! [`WeightedSuccessors`]: crate::WeightedSuccessors
//! [`DirectedGraph`]: crate::DirectedGraph
//! [`WeightedDirectedGraph`]: crate::WeightedDirectedGraph
//! [`GraphAlgorithms`]: crate::GraphAlgorithms
//! [`ShortestPathAlgorithms`]: crate::ShortestPathAlgorithms

mod paths;
mod scc;
mod shortest_path;
mod topological;
mod traversal;

pub use paths::{ShortestPaths, UNREACHABLE};
pub use scc::{condensation, kosaraju};
pub use shortest_path::{bellman_ford, dijkstra};
pub use topological::topological_sort_dfs;
pub use traversal::{breadth_first_search, depth_first_search_all, depth_first_search_from};
