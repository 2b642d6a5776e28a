//! AI move selection
//!
//! The engine owns the root of the search: it applies every legal move in
//! scan order, scores the resulting position with the minimax searcher,
//! undoes it, and keeps the best candidate. Ties go to the move earliest
//! in row-major scan order, so selection is fully deterministic.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AiEngine, Board, Mark, Pos};
//!
//! # fn main() -> Result<(), tictactoe::GameError> {
//! let mut board = Board::new();
//! board.apply(Pos::new(1, 1), Mark::X)?;
//!
//! let engine = AiEngine::new();
//! let result = engine.choose_move(&mut board)?;
//! println!(
//!     "AI plays ({}, {}) after {} nodes",
//!     result.best_move.row, result.best_move.col, result.nodes
//! );
//! # Ok(())
//! # }
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, Mark, Pos};
use crate::error::{GameError, GameResult};
use crate::search::{SearchConfig, Searcher, INF};

/// Result of one move selection, with search diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move
    pub best_move: Pos,
    /// Minimax score of the chosen move (+10 forced O win, -10 forced X
    /// win within the horizon, 0 undecided)
    pub score: i32,
    /// Nodes expanded across all root branches
    pub nodes: u64,
    /// Wall-clock time for the whole selection
    pub elapsed: Duration,
}

/// AI engine for the automated player.
///
/// The engine always plays O, the maximizing side of the evaluation. Its
/// search parameters are fixed at construction and hold for the lifetime
/// of the engine (one game, in practice).
pub struct AiEngine {
    config: SearchConfig,
}

impl AiEngine {
    /// Create an engine with the default configuration (depth 3, no
    /// pruning).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create an engine with the given search parameters
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The engine's search parameters
    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Choose the best move for O on the given board.
    ///
    /// Every legal move is tried in row-major scan order: applied, scored
    /// by the searcher with X to reply, and undone. The comparison is a
    /// strict `>`, so the first move reaching the maximum score wins ties.
    /// The board comes back exactly as it went in; only the caller applies
    /// the chosen move for real.
    ///
    /// # Errors
    ///
    /// `NoLegalMoves` if the board is full. Callers should have treated a
    /// full board as a finished game rather than asking for a move.
    pub fn choose_move(&self, board: &mut Board) -> GameResult<SearchResult> {
        let start = Instant::now();

        let moves: Vec<Pos> = board.legal_moves().collect();
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let mut searcher = Searcher::new(self.config);
        let mut best_move = moves[0];
        let mut best_score = -INF;

        for pos in moves {
            board.apply(pos, Mark::O)?;
            let value = searcher.score(board, Mark::X, 0, -INF, INF);
            board.undo(pos);

            if value > best_score {
                best_score = value;
                best_move = pos;
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            nodes: searcher.nodes(),
            elapsed: start.elapsed(),
        })
    }

    /// Convenience wrapper returning only the chosen move
    #[must_use]
    pub fn get_move(&self, board: &mut Board) -> Option<Pos> {
        self.choose_move(board).ok().map(|result| result.best_move)
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}
