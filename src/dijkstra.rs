//! Single-directional Dijkstra search, the baseline the bidirectional
//! search is checked against.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::expander::NodeExpander;
use crate::path;
use crate::state::SearchState;
use crate::stats::{SearchOutcome, SearchStats};
use crate::weight::WeightFunction;
use std::cmp::Ordering;
use std::hash::Hash;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    config: SearchConfig,
}

impl Dijkstra {
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
    pub fn find_shortest_path<N, E, F, C>(
        &self,
        source: &N,
        target: &N,
        expander: &E,
        weights: &F,
        cmp: C,
    ) -> Result<Vec<N>>
    where
        N: Eq + Hash + Clone,
        E: NodeExpander<N>,
        F: WeightFunction<N>,
        C: Fn(&F::Weight, &F::Weight) -> Ordering,
    {
        self.search(source, target, expander, weights, cmp).map(|o| o.path)
    }

    /// Like [`Dijkstra::find_shortest_path`], also reporting search stats.
    #[tracing::instrument(level = "debug", name = "dijkstra", skip_all)]
    pub fn search<N, E, F, C>(
        &self,
        source: &N,
        target: &N,
        expander: &E,
        weights: &F,
        cmp: C,
    ) -> Result<SearchOutcome<N>>
    where
        N: Eq + Hash + Clone,
        E: NodeExpander<N>,
        F: WeightFunction<N>,
        C: Fn(&F::Weight, &F::Weight) -> Ordering,
    {
        let mut open = SearchState::seeded(
            source.clone(),
            weights.zero(),
            &cmp,
            self.config.frontier_capacity,
            self.config.skip_settled_on_pop,
        );

        while let Some(current) = open.pop() {
            if current == *target {
                let path = path::trace_forward(&current, open.parents());
                let stats = SearchStats::collect(&open, None, 0);
                debug!(hops = path.len() - 1, pops = stats.forward.pops, pushes = stats.forward.pushes, "target settled");
                return Ok(SearchOutcome { path, stats });
            }
            open.settle(current.clone());
            let Some(base) = open.distance(&current).cloned() else {
                continue;
            };
            for child in expander.expand(&current) {
                if open.is_settled(&child) {
                    continue;
                }
                let tentative = weights.sum(&base, &weights.weight(&current, &child));
                open.relax(&current, child, tentative);
            }
        }

        let stats = open.frontier_stats();
        debug!(pops = stats.pops, settled = open.settled_count(), "frontier exhausted before target");
        Err(SearchError::Unreachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use crate::weight::path_cost;

    #[test]
    fn source_equal_to_target_is_first_pop() {
        let mut g = DirectedGraph::<char, i32>::new();
        g.add_arc('s', 'a', 4);
        let out = Dijkstra::new().search(&'s', &'s', &g.children(), &g, i32::cmp).unwrap();
        assert_eq!(out.path, vec!['s']);
        assert_eq!(out.stats.forward.pops, 1);
        assert_eq!(out.stats.backward, None);
    }

    #[test]
    fn prefers_cheaper_longer_route() {
        let mut g = DirectedGraph::<char, i32>::new();
        g.add_arc('s', 'a', 6);
        g.add_arc('a', 't', 4);
        g.add_arc('s', 'b', 3);
        g.add_arc('b', 'c', 3);
        g.add_arc('c', 't', 3);
        let path = Dijkstra::new().find_shortest_path(&'s', &'t', &g.children(), &g, i32::cmp).unwrap();
        assert_eq!(path, vec!['s', 'b', 'c', 't']);
        assert_eq!(path_cost(&path, &g), 9);
    }

    #[test]
    fn improved_distances_leave_stale_entries() {
        // b is first reached at 10, then at 2 through a
        let mut g = DirectedGraph::<char, u32>::new();
        g.add_arc('s', 'b', 10);
        g.add_arc('s', 'a', 1);
        g.add_arc('a', 'b', 1);
        g.add_arc('b', 'x', 1);
        g.add_arc('x', 't', 50);
        let out = Dijkstra::new().search(&'s', &'t', &g.children(), &g, u32::cmp).unwrap();
        assert_eq!(out.path, vec!['s', 'a', 'b', 'x', 't']);
        assert_eq!(out.stats.stale_pops, 1);

        let skipping = Dijkstra::with_config(SearchConfig { skip_settled_on_pop: true, ..SearchConfig::default() });
        let out2 = skipping.search(&'s', &'t', &g.children(), &g, u32::cmp).unwrap();
        assert_eq!(out2.path, out.path);
    }

    #[test]
    fn disconnected_target_is_unreachable() {
        let mut g = DirectedGraph::<u8, f64>::new();
        g.add_arc(0, 1, 1.0);
        g.add_arc(2, 3, 1.0);
        let err = Dijkstra::new().find_shortest_path(&0, &3, &g.children(), &g, f64::total_cmp);
        assert_eq!(err, Err(SearchError::Unreachable));
    }

    #[test]
    fn closures_serve_as_expander_and_weights() {
        use crate::weight::FnWeight;
        // implicit line graph 0 -> 1 -> ... -> 9, arc weight = head index
        let children = |n: &u32| if *n < 9 { vec![n + 1] } else { Vec::new() };
        let weights = FnWeight::new(|_: &u32, head: &u32| u64::from(*head));
        let path = Dijkstra::new().find_shortest_path(&2, &5, &children, &weights, u64::cmp).unwrap();
        assert_eq!(path, vec![2, 3, 4, 5]);
        assert_eq!(path_cost(&path, &weights), 12);
    }
}
