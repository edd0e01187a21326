//! State owned by one search direction for the lifetime of one call.

use crate::frontier::{Frontier, FrontierStats};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub(crate) struct SearchState<'c, N, W, C> {
    frontier: Frontier<'c, N, W, C>,
    distances: HashMap<N, W>,
    /// `origin -> None`; every other discovered node maps to its predecessor.
    parents: HashMap<N, Option<N>>,
    settled: HashSet<N>,
    cmp: &'c C,
    skip_settled: bool,
    stale_pops: u64,
    relaxations: u64,
}

impl<'c, N, W, C> SearchState<'c, N, W, C>
where
    N: Eq + Hash + Clone,
    W: Clone,
    C: Fn(&W, &W) -> Ordering,
{
    pub(crate) fn seeded(origin: N, zero: W, cmp: &'c C, cap: usize, skip_settled: bool) -> Self {
        let mut state = Self {
            frontier: Frontier::new(cmp, cap),
            distances: HashMap::new(),
            parents: HashMap::new(),
            settled: HashSet::new(),
            cmp,
            skip_settled,
            stale_pops: 0,
            relaxations: 0,
        };
        state.frontier.push(origin.clone(), zero.clone());
        state.distances.insert(origin.clone(), zero);
        state.parents.insert(origin, None);
        state
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.frontier.is_empty()
    }

    /// Next extraction from the frontier. Entries for already settled nodes
    /// are counted as stale; with `skip_settled` they are discarded here,
    /// otherwise they are handed back and reprocessed as a no-op.
    pub(crate) fn pop(&mut self) -> Option<N> {
        while let Some(entry) = self.frontier.pop() {
            if self.settled.contains(&entry.node) {
                self.stale_pops += 1;
                if self.skip_settled {
                    continue;
                }
            }
            return Some(entry.node);
        }
        None
    }

    pub(crate) fn settle(&mut self, node: N) {
        self.settled.insert(node);
    }

    pub(crate) fn is_settled(&self, node: &N) -> bool {
        self.settled.contains(node)
    }

    pub(crate) fn distance(&self, node: &N) -> Option<&W> {
        self.distances.get(node)
    }

    /// Records `tentative` for `node` via `parent` if it is strictly better
    /// than what is known. Returns whether anything changed.
    pub(crate) fn relax(&mut self, parent: &N, node: N, tentative: W) -> bool {
        let improves = match self.distances.get(&node) {
            None => true,
            Some(known) => (self.cmp)(&tentative, known) == Ordering::Less,
        };
        if !improves {
            return false;
        }
        self.relaxations += 1;
        self.distances.insert(node.clone(), tentative.clone());
        self.parents.insert(node.clone(), Some(parent.clone()));
        self.frontier.push(node, tentative);
        true
    }

    pub(crate) fn parents(&self) -> &HashMap<N, Option<N>> {
        &self.parents
    }

    pub(crate) fn frontier_stats(&self) -> FrontierStats {
        self.frontier.stats()
    }

    pub(crate) fn settled_count(&self) -> usize {
        self.settled.len()
    }

    pub(crate) fn stale_pops(&self) -> u64 {
        self.stale_pops
    }

    pub(crate) fn relaxations(&self) -> u64 {
        self.relaxations
    }
}
