//! Per-call search instrumentation.

use crate::frontier::FrontierStats;
use crate::state::SearchState;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub forward: FrontierStats,
    /// `None` for single-directional searches.
    pub backward: Option<FrontierStats>,
    /// Strict distance improvements, summed over directions.
    pub relaxations: u64,
    /// Settled nodes, summed over directions.
    pub settled: usize,
    /// Extractions of nodes that were already settled.
    pub stale_pops: u64,
    /// Times the meeting bound `mu` was lowered.
    pub meeting_updates: u64,
}

impl SearchStats {
    pub(crate) fn collect<N, W, C>(
        forward: &SearchState<'_, N, W, C>,
        backward: Option<&SearchState<'_, N, W, C>>,
        meeting_updates: u64,
    ) -> Self
    where
        N: Eq + Hash + Clone,
        W: Clone,
        C: Fn(&W, &W) -> Ordering,
    {
        let mut stats = Self {
            forward: forward.frontier_stats(),
            backward: None,
            relaxations: forward.relaxations(),
            settled: forward.settled_count(),
            stale_pops: forward.stale_pops(),
            meeting_updates,
        };
        if let Some(b) = backward {
            stats.backward = Some(b.frontier_stats());
            stats.relaxations += b.relaxations();
            stats.settled += b.settled_count();
            stats.stale_pops += b.stale_pops();
        }
        stats
    }
}

/// A found path together with the work it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<N> {
    /// Source first, target last; a single node when they coincide.
    pub path: Vec<N>,
    pub stats: SearchStats,
}
