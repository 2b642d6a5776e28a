//! Win condition checking
//!
//! Exactly ten line families exist on the 4x4 board: four rows, four
//! columns, and the two main diagonals. No other winning shapes are
//! checked.

use crate::board::{Board, Mark, Pos, BOARD_SIZE};

/// Check if the given mark holds a complete row, column, or diagonal
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    find_winning_line(board, mark).is_some()
}

/// Find the four cells of a winning line for `mark`, if one exists.
///
/// Rows are scanned first, then columns, then the two diagonals; the
/// first complete line found is returned (the GUI highlights it).
pub fn find_winning_line(board: &Board, mark: Mark) -> Option<[Pos; 4]> {
    let n = BOARD_SIZE as u8;

    for row in 0..n {
        let line = std::array::from_fn(|i| Pos::new(row, i as u8));
        if line.iter().all(|&pos| board.get(pos) == mark) {
            return Some(line);
        }
    }

    for col in 0..n {
        let line = std::array::from_fn(|i| Pos::new(i as u8, col));
        if line.iter().all(|&pos| board.get(pos) == mark) {
            return Some(line);
        }
    }

    let main: [Pos; 4] = std::array::from_fn(|i| Pos::new(i as u8, i as u8));
    if main.iter().all(|&pos| board.get(pos) == mark) {
        return Some(main);
    }

    let anti: [Pos; 4] = std::array::from_fn(|i| Pos::new(i as u8, n - 1 - i as u8));
    if anti.iter().all(|&pos| board.get(pos) == mark) {
        return Some(anti);
    }

    None
}

/// Check for a winner.
///
/// Returns `Some(mark)` if either side has a complete line. A well-formed
/// game has at most one winner; X is checked first.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| is_winner(board, mark))
}
