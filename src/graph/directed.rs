//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], an adjacency-list digraph over dense
//! vertex indices. Each vertex owns one adjacency sequence holding the
//! destinations of its outgoing edges in insertion order; that order is
//! observable through every depth-first algorithm and is preserved exactly by
//! all mutations.

use std::fmt;

use crate::{
    config::GraphConfig,
    graph::{
        node::NodeId,
        traits::{GraphBase, Predecessors, Successors},
    },
};

/// A directed graph without parallel edges.
///
/// `DirectedGraph` stores one adjacency sequence per vertex. It supports:
///
/// - Appending and removing vertices (removal renumbers higher vertices down by one)
/// - Adding and removing edges, at most one per ordered pair
/// - Existence and degree queries
/// - All unweighted algorithms through [`GraphAlgorithms`](crate::GraphAlgorithms)
///
/// # Invariants
///
/// After every public mutation:
///
/// 1. There is exactly one adjacency sequence per vertex
/// 2. Every destination is a valid vertex index
/// 3. No destination repeats within one adjacency sequence
///
/// Violating a precondition (invalid index, duplicate edge, missing edge) is a
/// caller bug and panics. When [`GraphConfig::verify_invariants`] is set, the
/// full invariant scan also runs after each mutation.
///
/// # Examples
///
/// ```rust
/// use digraphs::{DirectedGraph, GraphAlgorithms, NodeId};
///
/// let mut graph = DirectedGraph::from_edges(2, [(0, 1)]);
/// assert_eq!(graph.to_string(), "0 --> 1\n1 -->");
///
/// graph.add_edge(NodeId::new(1), NodeId::new(0));
/// assert_eq!(graph.to_string(), "0 --> 1\n1 --> 0");
/// assert_eq!(graph.kosaraju().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectedGraph {
    /// Outgoing destinations per vertex, in insertion order
    adjacency: Vec<Vec<NodeId>>,
    /// Invariant verification settings
    config: GraphConfig,
}

impl DirectedGraph {
    /// Creates a new graph with no vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `vertex_count` vertices and the given edges.
    ///
    /// Edges are appended to their source's adjacency sequence in input order.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is not below `vertex_count` or if an ordered pair
    /// appears more than once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraphs::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges(3, [(0, 1), (0, 2)]);
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    #[must_use]
    pub fn from_edges<I, N>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
        N: Into<NodeId>,
    {
        Self::with_config(vertex_count, edges, GraphConfig::default())
    }

    /// Creates a graph like [`from_edges`](Self::from_edges) with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Same conditions as [`from_edges`](Self::from_edges).
    #[must_use]
    pub fn with_config<I, N>(vertex_count: usize, edges: I, config: GraphConfig) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
        N: Into<NodeId>,
    {
        let mut graph = DirectedGraph {
            adjacency: vec![Vec::new(); vertex_count],
            config,
        };
        for (source, target) in edges {
            graph.insert_edge(source.into(), target.into());
        }
        graph.verify();

        log::debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        graph
    }

    /// Returns the configuration this graph checks itself against.
    #[must_use]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Appends a vertex with no edges and returns its index, which equals the
    /// previous vertex count.
    pub fn add_vertex(&mut self) -> NodeId {
        let id = NodeId::new(self.adjacency.len());
        self.adjacency.push(Vec::new());
        log::debug!("added vertex {id}");
        self.verify();
        id
    }

    /// Removes `vertex` together with every edge touching it.
    ///
    /// The index space stays dense: every vertex above `vertex` moves down by
    /// one, and every adjacency entry naming such a vertex is rewritten to its
    /// new index.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraphs::{DirectedGraph, NodeId};
    ///
    /// let mut graph = DirectedGraph::from_edges(3, [(0, 2), (2, 1)]);
    /// graph.remove_vertex(NodeId::new(1));
    ///
    /// // Old vertex 2 is now vertex 1
    /// assert_eq!(graph.to_string(), "0 --> 1\n1 -->");
    /// ```
    pub fn remove_vertex(&mut self, vertex: NodeId) {
        assert!(
            self.vertex_exists(vertex),
            "cannot remove vertex {vertex}: graph has {} vertices",
            self.vertex_count()
        );

        self.adjacency.remove(vertex.index());
        for targets in &mut self.adjacency {
            *targets = targets
                .iter()
                .filter_map(|target| target.shifted_after_removal(vertex))
                .collect();
        }

        log::debug!(
            "removed vertex {vertex}, {} vertices remain",
            self.vertex_count()
        );
        self.verify();
    }

    /// Adds the edge `(source, target)` at the end of `source`'s adjacency sequence.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is invalid or the edge already exists.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        self.insert_edge(source, target);
        log::debug!("added edge {source} -> {target}");
        self.verify();
    }

    /// Removes the edge `(source, target)`, preserving the order of the
    /// remaining destinations.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is invalid or the edge does not exist.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) {
        self.assert_endpoints(source, target);
        let targets = &mut self.adjacency[source.index()];
        let position = targets.iter().position(|&t| t == target);
        match position {
            Some(position) => {
                targets.remove(position);
            }
            None => panic!("cannot remove edge {source} -> {target}: edge does not exist"),
        }
        log::debug!("removed edge {source} -> {target}");
        self.verify();
    }

    /// Returns `true` if `vertex` is a valid index in this graph.
    #[must_use]
    pub fn vertex_exists(&self, vertex: NodeId) -> bool {
        vertex.index() < self.adjacency.len()
    }

    /// Returns `true` if the edge `(source, target)` exists.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a valid vertex.
    #[must_use]
    pub fn edge_exists(&self, source: NodeId, target: NodeId) -> bool {
        self.assert_endpoints(source, target);
        self.adjacency[source.index()].contains(&target)
    }

    /// Returns how many edges end at `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex.
    #[must_use]
    pub fn in_degree(&self, vertex: NodeId) -> usize {
        self.assert_vertex(vertex);
        self.predecessors(vertex).count()
    }

    /// Returns how many edges start at `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex.
    #[must_use]
    pub fn out_degree(&self, vertex: NodeId) -> usize {
        self.assert_vertex(vertex);
        self.adjacency[vertex.index()].len()
    }

    /// Returns the adjacency sequence of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex.
    #[must_use]
    pub fn adjacency(&self, vertex: NodeId) -> &[NodeId] {
        &self.adjacency[vertex.index()]
    }

    /// Returns an iterator over the destinations of `vertex`'s outgoing edges,
    /// in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex.
    pub fn successors(&self, vertex: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency[vertex.index()].iter().copied()
    }

    /// Returns an iterator over the sources of `vertex`'s incoming edges, in
    /// ascending index order.
    pub fn predecessors(&self, vertex: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.vertex_ids()
            .filter(move |&source| self.adjacency[source.index()].contains(&vertex))
    }

    /// Returns an iterator over all vertex identifiers in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.adjacency.len()).map(NodeId::new)
    }

    /// Returns every edge as `(source, target)`, ordered by source index and then
    /// by adjacency insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, targets)| targets.iter().map(move |&t| (NodeId::new(source), t)))
    }

    /// Returns vertices without incoming edges.
    pub fn entry_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vertex_ids()
            .filter(move |&vertex| self.predecessors(vertex).next().is_none())
    }

    /// Returns vertices without outgoing edges.
    pub fn exit_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vertex_ids()
            .filter(move |&vertex| self.adjacency[vertex.index()].is_empty())
    }

    /// Returns a new graph with the same vertices and every edge `(s, d)`
    /// replaced by `(d, s)`.
    ///
    /// Reversed edges are inserted by scanning sources in index order and
    /// each source's adjacency sequence in order, which fixes the adjacency
    /// order of the result.
    ///
    /// ```rust
    /// use digraphs::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges(2, [(0, 1)]);
    /// assert_eq!(graph.reversed().to_string(), "0 -->\n1 --> 0");
    /// ```
    #[must_use]
    pub fn reversed(&self) -> DirectedGraph {
        let mut reversed = DirectedGraph::reversal_of(self);
        reversed.config = self.config;
        reversed
    }

    /// Builds the reversal of any forward-traversable graph.
    pub(crate) fn reversal_of<G: Successors>(graph: &G) -> DirectedGraph {
        let mut adjacency = vec![Vec::new(); graph.node_count()];
        for source in graph.node_ids() {
            for target in graph.successors(source) {
                adjacency[target.index()].push(source);
            }
        }
        DirectedGraph {
            adjacency,
            config: GraphConfig::unchecked(),
        }
    }

    /// Checks every structural invariant and returns `true` if all hold.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        let vertex_count = self.adjacency.len();
        let mut seen = vec![false; vertex_count];

        for targets in &self.adjacency {
            for &target in targets {
                if target.index() >= vertex_count || seen[target.index()] {
                    return false;
                }
                seen[target.index()] = true;
            }
            for &target in targets {
                seen[target.index()] = false;
            }
        }
        true
    }

    /// Renders the adjacency lists with a caller-supplied destination format.
    pub(crate) fn render_with<F>(&self, f: &mut fmt::Formatter<'_>, mut destination: F) -> fmt::Result
    where
        F: FnMut(&mut fmt::Formatter<'_>, NodeId, NodeId) -> fmt::Result,
    {
        for (index, targets) in self.adjacency.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{index} -->")?;
            for (position, &target) in targets.iter().enumerate() {
                destination(f, NodeId::new(index), target)?;
                if position + 1 < targets.len() {
                    write!(f, " - ")?;
                }
            }
        }
        Ok(())
    }

    fn insert_edge(&mut self, source: NodeId, target: NodeId) {
        self.assert_endpoints(source, target);
        let targets = &mut self.adjacency[source.index()];
        assert!(
            !targets.contains(&target),
            "edge {source} -> {target} already exists"
        );
        targets.push(target);
    }

    fn assert_vertex(&self, vertex: NodeId) {
        assert!(
            self.vertex_exists(vertex),
            "vertex {vertex} does not exist in graph with {} vertices",
            self.vertex_count()
        );
    }

    fn assert_endpoints(&self, source: NodeId, target: NodeId) {
        assert!(
            self.vertex_exists(source),
            "source vertex {source} does not exist in graph with {} vertices",
            self.vertex_count()
        );
        assert!(
            self.vertex_exists(target),
            "target vertex {target} does not exist in graph with {} vertices",
            self.vertex_count()
        );
    }

    fn verify(&self) {
        if self.config.verify_invariants {
            assert!(self.check_invariants(), "graph invariants violated: {self:?}");
        }
    }
}

impl fmt::Display for DirectedGraph {
    /// One line per vertex, `i -->` followed by its destinations; no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_with(f, |f, _, target| write!(f, " {}", target.index()))
    }
}

impl GraphBase for DirectedGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl Successors for DirectedGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.adjacency[node.index()].iter().copied()
    }
}

impl Predecessors for DirectedGraph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        (0..self.adjacency.len())
            .map(NodeId::new)
            .filter(move |&source| self.adjacency[source.index()].contains(&node))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::GraphConfig,
        graph::{
            directed::DirectedGraph,
            node::NodeId,
            traits::{GraphBase, Predecessors, Successors},
        },
    };

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    /// 0 -> 1 and 1 -> 0
    fn create_two_cycle_graph() -> DirectedGraph {
        DirectedGraph::from_edges(2, [(0, 1), (1, 0)])
    }

    /// Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    fn create_diamond_graph() -> DirectedGraph {
        DirectedGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)])
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.to_string(), "");
    }

    #[test]
    fn test_rendering() {
        assert_eq!(DirectedGraph::from_edges(1, Vec::<(usize, usize)>::new()).to_string(), "0 -->");
        assert_eq!(DirectedGraph::from_edges(2, [(0, 1)]).to_string(), "0 --> 1\n1 -->");
        assert_eq!(create_two_cycle_graph().to_string(), "0 --> 1\n1 --> 0");
    }

    #[test]
    fn test_rendering_multiple_destinations() {
        let graph = DirectedGraph::from_edges(3, [(0, 2), (0, 1)]);
        assert_eq!(graph.to_string(), "0 --> 2 -  1\n1 -->\n2 -->");
    }

    #[test]
    fn test_add_vertex() {
        let mut graph = DirectedGraph::from_edges(2, [(0, 1)]);
        let id = graph.add_vertex();

        assert_eq!(id, n(2));
        assert_eq!(graph.to_string(), "0 --> 1\n1 -->\n2 -->");
    }

    #[test]
    fn test_add_edge() {
        let mut graph = DirectedGraph::from_edges(2, [(0, 1)]);
        graph.add_edge(n(1), n(0));
        assert_eq!(graph, create_two_cycle_graph());
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_add_duplicate_edge_panics() {
        let mut graph = create_two_cycle_graph();
        graph.add_edge(n(0), n(1));
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_construction_with_duplicate_edge_panics() {
        let _ = DirectedGraph::from_edges(2, [(0, 1), (0, 1)]);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_construction_with_out_of_range_endpoint_panics() {
        let _ = DirectedGraph::from_edges(2, [(0, 2)]);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = create_two_cycle_graph();
        graph.remove_edge(n(1), n(0));
        assert_eq!(graph.to_string(), "0 --> 1\n1 -->");
    }

    #[test]
    fn test_remove_edge_keeps_order() {
        let mut graph = DirectedGraph::from_edges(4, [(0, 3), (0, 1), (0, 2)]);
        graph.remove_edge(n(0), n(1));
        assert_eq!(graph.adjacency(n(0)), &[n(3), n(2)]);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_remove_missing_edge_panics() {
        let mut graph = DirectedGraph::from_edges(2, [(0, 1)]);
        graph.remove_edge(n(1), n(0));
    }

    #[test]
    fn test_remove_vertex_source_and_sink() {
        let mut graph = create_two_cycle_graph();
        graph.remove_vertex(n(1));
        assert_eq!(graph.to_string(), "0 -->");

        let mut graph = create_two_cycle_graph();
        graph.remove_vertex(n(0));
        assert_eq!(graph.to_string(), "0 -->");
    }

    #[test]
    fn test_remove_vertex_renumbers_references() {
        // 0 -> 3, 3 -> 2, 1 -> 0, 2 -> 1
        let mut graph = DirectedGraph::from_edges(4, [(0, 3), (3, 2), (1, 0), (2, 1)]);
        graph.remove_vertex(n(1));

        // Old 2 and 3 become 1 and 2; edges touching old 1 are gone
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.to_string(), "0 --> 2\n1 -->\n2 --> 1");
        assert!(graph.check_invariants());
    }

    #[test]
    #[should_panic(expected = "cannot remove vertex")]
    fn test_remove_invalid_vertex_panics() {
        let mut graph = create_two_cycle_graph();
        graph.remove_vertex(n(2));
    }

    #[test]
    fn test_vertex_exists() {
        let graph = create_two_cycle_graph();
        assert!(graph.vertex_exists(n(0)));
        assert!(graph.vertex_exists(n(1)));
        assert!(!graph.vertex_exists(n(2)));
    }

    #[test]
    fn test_edge_exists() {
        let graph = DirectedGraph::from_edges(2, [(0, 1)]);
        assert!(graph.edge_exists(n(0), n(1)));
        assert!(!graph.edge_exists(n(1), n(0)));
    }

    #[test]
    #[should_panic(expected = "target vertex")]
    fn test_edge_exists_invalid_target_panics() {
        let graph = create_two_cycle_graph();
        let _ = graph.edge_exists(n(0), n(7));
    }

    #[test]
    fn test_degrees() {
        let graph = create_two_cycle_graph();
        assert_eq!(graph.in_degree(n(0)), 1);
        assert_eq!(graph.out_degree(n(0)), 1);

        let diamond = create_diamond_graph();
        assert_eq!(diamond.out_degree(n(0)), 2);
        assert_eq!(diamond.in_degree(n(0)), 0);
        assert_eq!(diamond.in_degree(n(3)), 2);
        assert_eq!(diamond.out_degree(n(3)), 0);
    }

    #[test]
    fn test_entry_and_exit_nodes() {
        let graph = create_diamond_graph();
        assert_eq!(graph.entry_nodes().collect::<Vec<_>>(), vec![n(0)]);
        assert_eq!(graph.exit_nodes().collect::<Vec<_>>(), vec![n(3)]);

        assert_eq!(create_two_cycle_graph().entry_nodes().count(), 0);
    }

    #[test]
    fn test_edges_order() {
        let graph = DirectedGraph::from_edges(3, [(1, 0), (0, 2), (0, 1)]);
        let edges: Vec<(NodeId, NodeId)> = graph.edges().collect();
        assert_eq!(edges, vec![(n(0), n(2)), (n(0), n(1)), (n(1), n(0))]);
    }

    #[test]
    fn test_reversed() {
        let graph = DirectedGraph::from_edges(2, [(0, 1)]);
        assert_eq!(graph.reversed().to_string(), "0 -->\n1 --> 0");

        let diamond = create_diamond_graph();
        let reversed = diamond.reversed();
        assert_eq!(reversed.vertex_count(), 4);
        assert_eq!(reversed.edge_count(), 4);
        assert_eq!(reversed.adjacency(n(3)), &[n(1), n(2)]);
        assert_eq!(reversed.reversed(), diamond);
    }

    #[test]
    fn test_check_invariants() {
        assert!(create_diamond_graph().check_invariants());
        assert!(DirectedGraph::new().check_invariants());
    }

    #[test]
    fn test_unchecked_config() {
        let mut graph = DirectedGraph::with_config(3, [(0, 1)], GraphConfig::unchecked());
        assert_eq!(graph.config(), GraphConfig::unchecked());

        graph.add_edge(n(1), n(2));
        graph.set_config(GraphConfig::default());
        assert!(graph.config().verify_invariants);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_trait_views() {
        let graph = create_diamond_graph();

        assert_eq!(GraphBase::node_count(&graph), 4);
        let succ: Vec<NodeId> = Successors::successors(&graph, n(0)).collect();
        assert_eq!(succ, vec![n(1), n(2)]);
        let pred: Vec<NodeId> = Predecessors::predecessors(&graph, n(3)).collect();
        assert_eq!(pred, vec![n(1), n(2)]);
    }

    #[test]
    fn test_large_chain() {
        let edges: Vec<(usize, usize)> = (0..999).map(|i| (i, i + 1)).collect();
        let graph = DirectedGraph::with_config(1000, edges, GraphConfig::unchecked());

        assert_eq!(graph.vertex_count(), 1000);
        assert_eq!(graph.edge_count(), 999);
        assert_eq!(graph.out_degree(n(999)), 0);
        assert_eq!(graph.in_degree(n(0)), 0);
    }
}
