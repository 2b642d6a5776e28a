//! Position evaluation
//!
//! A single flat heuristic: win, loss, or nothing. The search does the
//! tactical work; the evaluation only recognises finished lines.

pub mod heuristic;

pub use heuristic::{evaluate, WIN_SCORE};
