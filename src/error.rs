//! Error types for the tic-tac-toe engine
//!
//! Covers move validation and move-selection failures. Both errors are
//! surfaced synchronously to the immediate caller; `InvalidMove` is
//! recoverable (the input layer re-prompts), `NoLegalMoves` indicates the
//! caller asked for a move on a finished game.

use thiserror::Error;

use crate::board::Pos;

/// Errors that can occur when applying or selecting moves
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Target cell is already occupied
    #[error("invalid move: cell ({}, {}) is already occupied", .pos.row, .pos.col)]
    InvalidMove { pos: Pos },

    /// A move was requested on a full board
    #[error("no legal moves: the board is full")]
    NoLegalMoves,
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
