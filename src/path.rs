//! Path reconstruction from parent maps.

use std::collections::HashMap;
use std::hash::Hash;

/// Nodes from `from` back to the origin of `parents`, in walking order
/// (`from` first, origin last).
pub(crate) fn walk_to_origin<N>(from: &N, parents: &HashMap<N, Option<N>>) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut out = vec![from.clone()];
    let mut cur = parents.get(from).and_then(Option::as_ref);
    while let Some(node) = cur {
        out.push(node.clone());
        cur = parents.get(node).and_then(Option::as_ref);
    }
    out
}

/// Source-to-`target` path recorded by a single-directional search.
pub(crate) fn trace_forward<N>(target: &N, parents: &HashMap<N, Option<N>>) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = walk_to_origin(target, parents);
    path.reverse();
    path
}

/// Joins the forward half ending at `touch_f` with the backward half
/// starting at `touch_b`.
pub(crate) fn join_at_touch<N>(
    touch_f: &N,
    touch_b: &N,
    parents_f: &HashMap<N, Option<N>>,
    parents_b: &HashMap<N, Option<N>>,
) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = trace_forward(touch_f, parents_f);
    path.extend(walk_to_origin(touch_b, parents_b));
    path
}
