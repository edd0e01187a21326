//! Generic point-to-point shortest-path search over caller-described graphs.
//! Provides two variants:
//!  - Dijkstra: single-directional, lazy decrease-key binary heap ([`Dijkstra`])
//!  - Bidirectional Dijkstra: lockstep forward/backward search ([`BidirectionalDijkstra`])
//!
//! The graph is never materialised by the searches. Callers supply node
//! expansion ([`NodeExpander`]), arc weights and their algebra
//! ([`WeightFunction`]), and a three-way ordering over weights.
//!
//! ```
//! use sssp_bidir::{BidirectionalDijkstra, DirectedGraph};
//!
//! let mut g = DirectedGraph::<&str, u32>::new();
//! g.add_arc("s", "a", 6);
//! g.add_arc("a", "t", 4);
//! g.add_arc("s", "b", 3);
//! g.add_arc("b", "c", 3);
//! g.add_arc("c", "t", 3);
//!
//! let path = BidirectionalDijkstra::new()
//!     .find_shortest_path(&"s", &"t", &g.children(), &g.parents(), &g, u32::cmp)
//!     .unwrap();
//! assert_eq!(path, ["s", "b", "c", "t"]);
//! ```

pub mod bidirectional;
pub mod config;
pub mod dijkstra;
pub mod error;
pub mod expander;
pub mod frontier;
pub mod graph;
mod path;
mod state;
pub mod stats;
pub mod weight;

pub use bidirectional::BidirectionalDijkstra;
pub use config::SearchConfig;
pub use dijkstra::Dijkstra;
pub use error::{Result, SearchError};
pub use expander::NodeExpander;
pub use frontier::FrontierStats;
pub use graph::{Children, DirectedGraph, Parents};
pub use stats::{SearchOutcome, SearchStats};
pub use weight::{path_cost, ArcWeight, FnWeight, WeightAlgebra, WeightFunction};
