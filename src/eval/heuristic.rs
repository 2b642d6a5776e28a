//! Flat heuristic evaluation for tic-tac-toe positions
//!
//! The evaluation recognises exactly three outcomes: O holds a winning
//! line (+10), X holds one (-10), or neither (0). There is no partial
//! credit for open lines, two-in-a-row, or forks. This is a deliberate
//! simplification, kept rather than fixed, and it has a known weakness:
//! any position cut off at the search depth limit scores 0, so beyond
//! that horizon the engine is blind to every tactical distinction.

use crate::board::{Board, Mark};
use crate::rules::is_winner;

/// Score of a won position, from O's perspective
pub const WIN_SCORE: i32 = 10;

/// Evaluate the board from O's perspective.
///
/// O is the automated, maximizing player and X the human, minimizing one.
/// A well-formed board has at most one winner; if both sides somehow hold
/// a line, O's is reported.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    if is_winner(board, Mark::O) {
        return WIN_SCORE;
    }
    if is_winner(board, Mark::X) {
        return -WIN_SCORE;
    }
    0
}
