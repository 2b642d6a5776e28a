//! 4x4 Tic-Tac-Toe AI engine
//!
//! An automated player for 4x4 tic-tac-toe built on depth-limited minimax
//! with an optional alpha-beta pruning mode. The human plays X, the AI
//! plays O, and a win is any full row, column, or main diagonal.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: grid representation with in-place apply/undo
//! - [`rules`]: win detection over rows, columns, and diagonals
//! - [`eval`]: flat win/loss/neutral evaluation
//! - [`search`]: depth-limited minimax with optional alpha-beta pruning
//! - [`engine`]: root move selection with search diagnostics
//! - [`ui`]: egui GUI for playing against the engine
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AiEngine, Board, Mark, Pos, SearchConfig};
//!
//! # fn main() -> Result<(), tictactoe::GameError> {
//! let mut board = Board::new();
//! board.apply(Pos::new(1, 1), Mark::X)?;
//!
//! let engine = AiEngine::with_config(SearchConfig {
//!     depth_limit: 3,
//!     pruning_enabled: true,
//! });
//!
//! let result = engine.choose_move(&mut board)?;
//! board.apply(result.best_move, Mark::O)?;
//! println!(
//!     "AI played ({}, {}): {} nodes in {:?}",
//!     result.best_move.row, result.best_move.col, result.nodes, result.elapsed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Evaluation
//!
//! The position evaluation is deliberately flat: +10 for a made O line,
//! -10 for a made X line, 0 for everything else, including positions cut
//! off at the depth limit. All tactical judgement comes from the search;
//! past its horizon the engine sees nothing.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use engine::{AiEngine, SearchResult};
pub use error::GameError;
pub use search::SearchConfig;
