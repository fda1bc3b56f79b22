//! Graph configuration.
//!
//! Every graph carries a [`GraphConfig`] that decides how much self-checking
//! happens after structural mutations. Cheap precondition checks (vertex index
//! validity, presence or absence of an edge) are not configurable and always run.

/// Configuration for invariant verification on graph mutation.
///
/// With `verify_invariants` enabled, each public mutation re-validates the whole
/// structure afterwards: one adjacency sequence per vertex, every destination in
/// range, no repeated destination within a sequence, and for weighted graphs an
/// exact match between edges and weight entries. That scan is `O(V + E)` per
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Re-check all structural invariants after every mutation and panic on violation
    pub verify_invariants: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            verify_invariants: true,
        }
    }
}

impl GraphConfig {
    /// Creates a configuration that skips the post-mutation invariant scan.
    ///
    /// Intended for large graphs built from trusted input, where the `O(V + E)`
    /// scan per mutation would dominate construction time.
    #[must_use]
    pub fn unchecked() -> Self {
        Self {
            verify_invariants: false,
        }
    }
}
