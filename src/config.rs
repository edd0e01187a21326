//! Search tuning knobs.
//!
//! Environment variables:
//!   SSSP_BIDIR_SKIP_SETTLED (default 0)     - drop stale frontier entries at pop time
//!   SSSP_BIDIR_FRONTIER_CAP (default 1024)  - initial frontier allocation per direction

use serde::{Deserialize, Serialize};

pub const SKIP_SETTLED_ENV: &str = "SSSP_BIDIR_SKIP_SETTLED";
pub const FRONTIER_CAP_ENV: &str = "SSSP_BIDIR_FRONTIER_CAP";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Off by default: a stale entry is popped and reprocessed, which is a
    /// no-op for the result. On, it is discarded before the search sees it.
    pub skip_settled_on_pop: bool,
    pub frontier_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { skip_settled_on_pop: false, frontier_capacity: 1024 }
    }
}

impl SearchConfig {
    /// Defaults overridden by any parseable `SSSP_BIDIR_*` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let skip_settled_on_pop = lookup(SKIP_SETTLED_ENV)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.skip_settled_on_pop);
        let frontier_capacity = lookup(FRONTIER_CAP_ENV)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.frontier_capacity);
        Self { skip_settled_on_pop, frontier_capacity }
    }
}
