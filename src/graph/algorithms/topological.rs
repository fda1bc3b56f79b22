//! Depth-first topological sorting with cycle detection.

use crate::{
    graph::{node::NodeId, traits::Successors},
    Error, Result,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    NotVisited,
    InProgress,
    Finished,
}

/// Topologically sorts the graph by three-color depth-first search.
///
/// On success the vertices come back in **finish order**, which is the
/// reverse of dependency order: for every edge `(u, v)`, `v` appears before
/// `u`. Consume the result from its end to visit each vertex before its
/// successors. For an acyclic graph the result equals
/// [`depth_first_search_all`](super::depth_first_search_all).
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] as soon as an edge leads to a vertex that
/// is still in progress. No partial order is returned.
///
/// # Examples
///
/// ```rust
/// use digraphs::{DirectedGraph, GraphAlgorithms, NodeId};
///
/// let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2)]);
/// let mut order = graph.topological_sort_dfs()?;
///
/// assert_eq!(order.pop(), Some(NodeId::new(0)));
/// assert_eq!(order.pop(), Some(NodeId::new(1)));
/// assert_eq!(order.pop(), Some(NodeId::new(2)));
/// # Ok::<(), digraphs::Error>(())
/// ```
pub fn topological_sort_dfs<G: Successors>(graph: &G) -> Result<Vec<NodeId>> {
    let node_count = graph.node_count();
    log::trace!("topological sort over {node_count} vertices");

    let mut colors = vec![Color::NotVisited; node_count];
    let mut order = Vec::with_capacity(node_count);

    for root in graph.node_ids() {
        if colors[root.index()] != Color::NotVisited {
            continue;
        }

        colors[root.index()] = Color::InProgress;
        let mut stack = vec![(root, graph.successors(root))];

        while let Some((node, successors)) = stack.last_mut() {
            let mut descend = None;
            for next in successors.by_ref() {
                match colors[next.index()] {
                    Color::NotVisited => {
                        descend = Some(next);
                        break;
                    }
                    Color::InProgress => {
                        log::warn!("topological sort found a cycle through {next}");
                        return Err(Error::CycleDetected { vertex: next });
                    }
                    Color::Finished => {}
                }
            }

            match descend {
                Some(next) => {
                    colors[next.index()] = Color::InProgress;
                    stack.push((next, graph.successors(next)));
                }
                None => {
                    colors[node.index()] = Color::Finished;
                    order.push(*node);
                    stack.pop();
                }
            }
        }
    }

    Ok(order)
}
