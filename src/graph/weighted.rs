//! Weighted directed graph.
//!
//! [`WeightedDirectedGraph`] wraps a [`DirectedGraph`] and pairs every edge with
//! an `f64` weight. Structure and adjacency order live in the inner graph; this
//! type keeps the weight map in lockstep with it and adds the shortest-path
//! algorithms through [`ShortestPathAlgorithms`](crate::ShortestPathAlgorithms).

use std::{collections::HashMap, fmt};

use crate::{
    config::GraphConfig,
    graph::{
        directed::DirectedGraph,
        node::NodeId,
        traits::{GraphBase, Predecessors, Successors, WeightedSuccessors},
    },
};

/// Weight given to an edge added without an explicit one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A directed graph with one floating-point weight per edge.
///
/// In addition to the [`DirectedGraph`] invariants, the set of edges and the
/// set of keys in the weight map are always identical.
///
/// # Examples
///
/// ```rust
/// use digraphs::{NodeId, ShortestPathAlgorithms, WeightedDirectedGraph};
///
/// let graph = WeightedDirectedGraph::from_weighted_edges(
///     4,
///     [(0, 1, 2.0), (1, 2, 1.0), (2, 3, 3.0), (0, 3, 7.0), (0, 2, 1.0)],
/// );
///
/// let paths = graph.dijkstra(NodeId::new(0));
/// assert_eq!(paths.distances, vec![0.0, 2.0, 1.0, 4.0]);
/// assert_eq!(graph.to_string(), "0 --> 1(2.0) -  3(7.0) -  2(1.0)\n1 --> 2(1.0)\n2 --> 3(3.0)\n3 -->");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightedDirectedGraph {
    /// Vertex and edge structure
    graph: DirectedGraph,
    /// Weight per `(source, target)` edge
    weights: HashMap<(NodeId, NodeId), f64>,
}

impl WeightedDirectedGraph {
    /// Creates a new weighted graph with no vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `vertex_count` vertices and the given
    /// `(source, target, weight)` edges, appended in input order.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is not below `vertex_count` or if an ordered pair
    /// appears more than once.
    #[must_use]
    pub fn from_weighted_edges<I, N>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
        N: Into<NodeId>,
    {
        Self::with_config(vertex_count, edges, GraphConfig::default())
    }

    /// Creates a graph like [`from_weighted_edges`](Self::from_weighted_edges)
    /// with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Same conditions as [`from_weighted_edges`](Self::from_weighted_edges).
    #[must_use]
    pub fn with_config<I, N>(vertex_count: usize, edges: I, config: GraphConfig) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
        N: Into<NodeId>,
    {
        let mut weights = HashMap::new();
        let mut pairs = Vec::new();
        for (source, target, weight) in edges {
            let (source, target) = (source.into(), target.into());
            pairs.push((source, target));
            weights.insert((source, target), weight);
        }

        let graph = WeightedDirectedGraph {
            graph: DirectedGraph::with_config(vertex_count, pairs, config),
            weights,
        };
        graph.verify();
        graph
    }

    /// Returns the configuration this graph checks itself against.
    #[must_use]
    pub fn config(&self) -> GraphConfig {
        self.graph.config()
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: GraphConfig) {
        self.graph.set_config(config);
    }

    /// Borrows the unweighted structure.
    #[must_use]
    pub fn as_unweighted(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Drops the weights and returns the unweighted structure.
    #[must_use]
    pub fn into_unweighted(self) -> DirectedGraph {
        self.graph
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Appends a vertex with no edges and returns its index.
    pub fn add_vertex(&mut self) -> NodeId {
        self.graph.add_vertex()
    }

    /// Removes `vertex`, every edge touching it, and their weights. Higher
    /// vertices are renumbered down by one, weight keys included.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex.
    pub fn remove_vertex(&mut self, vertex: NodeId) {
        self.graph.remove_vertex(vertex);
        self.weights = self
            .weights
            .drain()
            .filter_map(|((source, target), weight)| {
                let source = source.shifted_after_removal(vertex)?;
                let target = target.shifted_after_removal(vertex)?;
                Some(((source, target), weight))
            })
            .collect();
        self.verify();
    }

    /// Adds the edge `(source, target)` with [`DEFAULT_WEIGHT`].
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is invalid or the edge already exists.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        self.add_weighted_edge(source, target, DEFAULT_WEIGHT);
    }

    /// Adds the edge `(source, target)` with the given weight.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is invalid or the edge already exists.
    pub fn add_weighted_edge(&mut self, source: NodeId, target: NodeId, weight: f64) {
        self.graph.add_edge(source, target);
        self.weights.insert((source, target), weight);
        log::debug!("weighted edge {source} -> {target} with {weight}");
        self.verify();
    }

    /// Removes the edge `(source, target)` and its weight.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is invalid or the edge does not exist.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) {
        self.graph.remove_edge(source, target);
        self.weights.remove(&(source, target));
        self.verify();
    }

    /// Returns the weight of the edge `(source, target)`.
    ///
    /// # Panics
    ///
    /// Panics if the edge does not exist.
    #[must_use]
    pub fn read_weight(&self, source: NodeId, target: NodeId) -> f64 {
        match self.weights.get(&(source, target)) {
            Some(&weight) => weight,
            None => panic!("cannot read weight of {source} -> {target}: edge does not exist"),
        }
    }

    /// Overwrites the weight of the existing edge `(source, target)`.
    ///
    /// # Panics
    ///
    /// Panics if the edge does not exist.
    pub fn set_weight(&mut self, source: NodeId, target: NodeId, weight: f64) {
        match self.weights.get_mut(&(source, target)) {
            Some(slot) => *slot = weight,
            None => panic!("cannot set weight of {source} -> {target}: edge does not exist"),
        }
        log::debug!("reweighted edge {source} -> {target} to {weight}");
    }

    /// Returns `true` if `vertex` is a valid index in this graph.
    #[must_use]
    pub fn vertex_exists(&self, vertex: NodeId) -> bool {
        self.graph.vertex_exists(vertex)
    }

    /// Returns `true` if the edge `(source, target)` exists.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a valid vertex.
    #[must_use]
    pub fn edge_exists(&self, source: NodeId, target: NodeId) -> bool {
        self.graph.edge_exists(source, target)
    }

    /// Returns how many edges end at `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex.
    #[must_use]
    pub fn in_degree(&self, vertex: NodeId) -> usize {
        self.graph.in_degree(vertex)
    }

    /// Returns how many edges start at `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex.
    #[must_use]
    pub fn out_degree(&self, vertex: NodeId) -> usize {
        self.graph.out_degree(vertex)
    }

    /// Returns every edge with its weight, in the same order as
    /// [`DirectedGraph::edges`].
    pub fn weighted_edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.graph
            .edges()
            .map(|(source, target)| (source, target, self.read_weight(source, target)))
    }

    /// Returns a new graph with every edge reversed, keeping each edge's weight.
    #[must_use]
    pub fn reversed(&self) -> WeightedDirectedGraph {
        let weights = self
            .weights
            .iter()
            .map(|(&(source, target), &weight)| ((target, source), weight))
            .collect();
        WeightedDirectedGraph {
            graph: self.graph.reversed(),
            weights,
        }
    }

    /// Checks every structural invariant, including the edge/weight
    /// correspondence, and returns `true` if all hold.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        self.graph.check_invariants()
            && self.weights.len() == self.graph.edge_count()
            && self
                .graph
                .edges()
                .all(|edge| self.weights.contains_key(&edge))
    }

    fn verify(&self) {
        if self.config().verify_invariants {
            assert!(
                self.check_invariants(),
                "weighted graph invariants violated: {self:?}"
            );
        }
    }
}

impl fmt::Display for WeightedDirectedGraph {
    /// Like the unweighted rendering, with each destination followed by `(weight)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph.render_with(f, |f, source, target| {
            write!(f, " {}({:?})", target.index(), self.read_weight(source, target))
        })
    }
}

impl GraphBase for WeightedDirectedGraph {
    fn node_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

impl Successors for WeightedDirectedGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}

impl Predecessors for WeightedDirectedGraph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.predecessors(node)
    }
}

impl WeightedSuccessors for WeightedDirectedGraph {
    fn weight(&self, source: NodeId, target: NodeId) -> f64 {
        self.read_weight(source, target)
    }
}
