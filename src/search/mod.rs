//! Search module
//!
//! Depth-limited minimax over a single mutable board, with an optional
//! alpha-beta pruning mode. Pruning never changes a score, only how many
//! nodes are visited on the way to it.

pub mod minimax;

pub use minimax::{SearchConfig, Searcher, INF};
