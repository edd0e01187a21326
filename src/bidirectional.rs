//! Bidirectional Dijkstra search.
//!
//! Two searches run in lockstep, one pop each per round: forward from the
//! source over the forward expander, backward from the target over the
//! backward expander. Whenever a relaxation reaches a node already settled by
//! the opposite side, the joined path cost is a candidate for `mu`, the best
//! known source-target bound. The search stops once the two current
//! extractions sum to strictly more than `mu`: any path not yet joined must
//! cost at least that sum.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::expander::NodeExpander;
use crate::path;
use crate::state::SearchState;
use crate::stats::{SearchOutcome, SearchStats};
use crate::weight::WeightFunction;
use std::cmp::Ordering;
use std::hash::Hash;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct BidirectionalDijkstra {
    config: SearchConfig,
}

/// Running upper bound `mu` and the arc `(forward touch, backward touch)`
/// that realises it.
struct Meeting<N, W> {
    mu: W,
    touch: Option<(N, N)>,
    updates: u64,
}

impl<N: Clone, W> Meeting<N, W> {
    fn new(infinity: W) -> Self {
        Self { mu: infinity, touch: None, updates: 0 }
    }

    fn offer<C>(&mut self, bound: W, touch_f: &N, touch_b: &N, cmp: &C)
    where
        C: Fn(&W, &W) -> Ordering,
    {
        if cmp(&bound, &self.mu) == Ordering::Less {
            self.mu = bound;
            self.touch = Some((touch_f.clone(), touch_b.clone()));
            self.updates += 1;
            trace!(updates = self.updates, "meeting bound lowered");
        }
    }
}

impl BidirectionalDijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shortest `source -> target` path under `cmp`, or
    /// [`SearchError::Unreachable`].
    ///
    /// `forward` and `backward` must describe the same arcs in opposite
    /// directions; weights must be non-negative under `cmp`.
    pub fn find_shortest_path<N, E, B, F, C>(
        &self,
        source: &N,
        target: &N,
        forward: &E,
        backward: &B,
        weights: &F,
        cmp: C,
    ) -> Result<Vec<N>>
    where
        N: Eq + Hash + Clone,
        E: NodeExpander<N>,
        B: NodeExpander<N>,
        F: WeightFunction<N>,
        C: Fn(&F::Weight, &F::Weight) -> Ordering,
    {
        self.search(source, target, forward, backward, weights, cmp).map(|o| o.path)
    }

    /// Like [`BidirectionalDijkstra::find_shortest_path`], also reporting
    /// search stats.
    #[tracing::instrument(level = "debug", name = "bidirectional_dijkstra", skip_all)]
    pub fn search<N, E, B, F, C>(
        &self,
        source: &N,
        target: &N,
        forward: &E,
        backward: &B,
        weights: &F,
        cmp: C,
    ) -> Result<SearchOutcome<N>>
    where
        N: Eq + Hash + Clone,
        E: NodeExpander<N>,
        B: NodeExpander<N>,
        F: WeightFunction<N>,
        C: Fn(&F::Weight, &F::Weight) -> Ordering,
    {
        // The loop below needs distinct endpoints to terminate.
        if source == target {
            return Ok(SearchOutcome { path: vec![source.clone()], stats: SearchStats::default() });
        }

        let cap = self.config.frontier_capacity;
        let skip = self.config.skip_settled_on_pop;
        let mut fwd = SearchState::seeded(source.clone(), weights.zero(), &cmp, cap, skip);
        let mut bwd = SearchState::seeded(target.clone(), weights.zero(), &cmp, cap, skip);
        let mut meeting = Meeting::new(weights.infinity());

        while fwd.has_pending() && bwd.has_pending() {
            let (Some(cur_f), Some(cur_b)) = (fwd.pop(), bwd.pop()) else {
                break;
            };
            fwd.settle(cur_f.clone());
            bwd.settle(cur_b.clone());

            if let Some(base) = fwd.distance(&cur_f).cloned() {
                for child in forward.expand(&cur_f) {
                    if fwd.is_settled(&child) {
                        continue;
                    }
                    let arc = weights.weight(&cur_f, &child);
                    fwd.relax(&cur_f, child.clone(), weights.sum(&base, &arc));
                    if bwd.is_settled(&child) {
                        if let Some(rest) = bwd.distance(&child) {
                            meeting.offer(weights.sum3(&base, &arc, rest), &cur_f, &child, &cmp);
                        }
                    }
                }
            }

            if let Some(base) = bwd.distance(&cur_b).cloned() {
                for parent in backward.expand(&cur_b) {
                    if bwd.is_settled(&parent) {
                        continue;
                    }
                    let arc = weights.weight(&parent, &cur_b);
                    bwd.relax(&cur_b, parent.clone(), weights.sum(&base, &arc));
                    if fwd.is_settled(&parent) {
                        if let Some(head) = fwd.distance(&parent) {
                            meeting.offer(weights.sum3(head, &arc, &base), &parent, &cur_b, &cmp);
                        }
                    }
                }
            }

            if let (Some(df), Some(db)) = (fwd.distance(&cur_f), bwd.distance(&cur_b)) {
                if cmp(&weights.sum(df, db), &meeting.mu) == Ordering::Greater {
                    if let Some((touch_f, touch_b)) = &meeting.touch {
                        let path = path::join_at_touch(touch_f, touch_b, fwd.parents(), bwd.parents());
                        let stats = SearchStats::collect(&fwd, Some(&bwd), meeting.updates);
                        debug!(hops = path.len() - 1, settled = stats.settled, meeting_updates = meeting.updates, "frontiers separated by more than mu");
                        return Ok(SearchOutcome { path, stats });
                    }
                }
            }
        }

        // An exhausted side has settled everything it can reach, so every arc
        // between the two settled sets has been offered: a touch pair, if any,
        // is optimal. This also covers zero-cost plateaus where the strict
        // stopping test never fires.
        if let Some((touch_f, touch_b)) = &meeting.touch {
            let path = path::join_at_touch(touch_f, touch_b, fwd.parents(), bwd.parents());
            let stats = SearchStats::collect(&fwd, Some(&bwd), meeting.updates);
            debug!(hops = path.len() - 1, settled = stats.settled, "frontier exhausted after meeting");
            return Ok(SearchOutcome { path, stats });
        }

        debug!(
            settled_forward = fwd.settled_count(),
            settled_backward = bwd.settled_count(),
            "frontiers exhausted without meeting"
        );
        Err(SearchError::Unreachable)
    }
}
