//! Error type shared by both search procedures.

use thiserror::Error;

/// Failure outcome of a shortest-path search.
///
/// Deterministic: rerunning the same search over the same graph reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier(s) ran dry without connecting source and target.
    #[error("the target node is not reachable from the source node")]
    Unreachable,
}

pub type Result<T> = std::result::Result<T, SearchError>;
