//! Min-priority frontier with lazy decrease-key.
//!
//! A distance improvement pushes a fresh entry instead of updating the old
//! one in place, so several entries for one node may coexist. Each entry's
//! distance is the snapshot taken at insertion time; consumers filter
//! superseded entries through their settled set.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Heap instrumentation, reported per search direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierStats {
    pub pushes: u64,
    pub pops: u64,
    pub max_size: u64,
}

#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry<N, W> {
    pub(crate) node: N,
    pub(crate) distance: W,
}

/// Binary min-heap ordered by `cmp` over entry distances.
pub(crate) struct Frontier<'c, N, W, C> {
    data: Vec<FrontierEntry<N, W>>,
    cmp: &'c C,
    stats: FrontierStats,
}

impl<'c, N, W, C> Frontier<'c, N, W, C>
where
    C: Fn(&W, &W) -> Ordering,
{
    pub(crate) fn new(cmp: &'c C, cap: usize) -> Self {
        Self { data: Vec::with_capacity(cap), cmp, stats: FrontierStats::default() }
    }

    pub(crate) fn push(&mut self, node: N, distance: W) {
        self.data.push(FrontierEntry { node, distance });
        self.stats.pushes += 1;
        self.stats.max_size = self.stats.max_size.max(self.data.len() as u64);
        self.sift_up(self.data.len() - 1);
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry<N, W>> {
        let len = self.data.len();
        if len == 0 {
            return None;
        }
        self.data.swap(0, len - 1);
        let out = self.data.pop();
        self.stats.pops += 1;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        out
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn stats(&self) -> FrontierStats {
        self.stats
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.data[a].distance, &self.data[b].distance) == Ordering::Less
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.less(idx, parent) {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let n = self.data.len();
        loop {
            let left = idx * 2 + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < n && self.less(right, left) {
                best = right;
            }
            if self.less(best, idx) {
                self.data.swap(idx, best);
                idx = best;
            } else {
                break;
            }
        }
    }
}
