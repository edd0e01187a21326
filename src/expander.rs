//! Neighbour expansion.

/// Produces the nodes one arc away from `node` in the expander's direction.
///
/// A forward expander yields heads of outgoing arcs; a backward expander
/// yields tails of incoming arcs. The two used by a bidirectional search must
/// be exact inverses over the same graph.
pub trait NodeExpander<N> {
    fn expand(&self, node: &N) -> Vec<N>;
}

impl<N, F> NodeExpander<N> for F
where
    F: Fn(&N) -> Vec<N>,
{
    fn expand(&self, node: &N) -> Vec<N> {
        self(node)
    }
}
