//! Reference directed graph with forward and backward adjacency views.
//!
//! The searches never see this type directly; they read it through
//! [`Children`] and [`Parents`] expanders and its [`WeightFunction`] impl.

use crate::expander::NodeExpander;
use crate::weight::{ArcWeight, WeightAlgebra, WeightFunction};
use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W> {
    /// Insertion order; keeps node listing independent of hash seeds.
    order: Vec<N>,
    outgoing: HashMap<N, HashMap<N, W>>,
    incoming: HashMap<N, HashMap<N, W>>,
    arc_count: usize,
}

impl<N, W> Default for DirectedGraph<N, W> {
    fn default() -> Self {
        Self { order: Vec::new(), outgoing: HashMap::new(), incoming: HashMap::new(), arc_count: 0 }
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the node was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.outgoing.contains_key(&node) {
            return false;
        }
        self.outgoing.insert(node.clone(), HashMap::new());
        self.incoming.insert(node.clone(), HashMap::new());
        self.order.push(node);
        true
    }

    /// Adds `tail -> head`, or overwrites its weight if the arc exists.
    pub fn add_arc(&mut self, tail: N, head: N, weight: W) {
        self.add_node(tail.clone());
        self.add_node(head.clone());
        let fresh = self
            .outgoing
            .entry(tail.clone())
            .or_default()
            .insert(head.clone(), weight)
            .is_none();
        self.incoming.entry(head).or_default().insert(tail, weight);
        if fresh {
            self.arc_count += 1;
        }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.outgoing.contains_key(node)
    }

    pub fn arc_weight(&self, tail: &N, head: &N) -> Option<W> {
        self.outgoing.get(tail).and_then(|m| m.get(head)).copied()
    }

    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    /// Forward expander: heads of outgoing arcs.
    pub fn children(&self) -> Children<'_, N, W> {
        Children(self)
    }

    /// Backward expander: tails of incoming arcs.
    pub fn parents(&self) -> Parents<'_, N, W> {
        Parents(self)
    }
}

impl<W: Copy> DirectedGraph<usize, W> {
    /// `nodes` nodes `0..nodes` and `arcs` distinct random arcs (self-loops
    /// allowed), each weighted by `weight` when first drawn. Deterministic
    /// for a given RNG state.
    pub fn random<R, F>(nodes: usize, arcs: usize, rng: &mut R, mut weight: F) -> Self
    where
        R: Rng,
        F: FnMut(&mut R) -> W,
    {
        let mut g = Self::new();
        for n in 0..nodes {
            g.add_node(n);
        }
        let target = arcs.min(nodes.saturating_mul(nodes));
        while g.arc_count < target {
            let tail = rng.gen_range(0..nodes);
            let head = rng.gen_range(0..nodes);
            if g.arc_weight(&tail, &head).is_some() {
                continue;
            }
            let w = weight(&mut *rng);
            g.add_arc(tail, head, w);
        }
        g
    }
}

fn keys<N: Clone, W>(adj: Option<&HashMap<N, W>>) -> Vec<N> {
    adj.map(|m| m.keys().cloned().collect()).unwrap_or_default()
}

#[derive(Debug, Clone, Copy)]
pub struct Children<'g, N, W>(&'g DirectedGraph<N, W>);

#[derive(Debug, Clone, Copy)]
pub struct Parents<'g, N, W>(&'g DirectedGraph<N, W>);

impl<N: Eq + Hash + Clone, W> NodeExpander<N> for Children<'_, N, W> {
    fn expand(&self, node: &N) -> Vec<N> {
        keys(self.0.outgoing.get(node))
    }
}

impl<N: Eq + Hash + Clone, W> NodeExpander<N> for Parents<'_, N, W> {
    fn expand(&self, node: &N) -> Vec<N> {
        keys(self.0.incoming.get(node))
    }
}

impl<N, W: ArcWeight> WeightAlgebra for DirectedGraph<N, W> {
    type Weight = W;

    fn zero(&self) -> W {
        W::ZERO
    }

    fn infinity(&self) -> W {
        W::INFINITY
    }

    fn sum(&self, a: &W, b: &W) -> W {
        a.saturating_sum(*b)
    }
}

/// A missing arc weighs `infinity()`.
impl<N, W> WeightFunction<N> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: ArcWeight,
{
    fn weight(&self, tail: &N, head: &N) -> W {
        self.arc_weight(tail, head).unwrap_or(W::INFINITY)
    }
}
