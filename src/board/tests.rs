use super::*;
use crate::error::GameError;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.row, 2);
    assert_eq!(pos.col, 3);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 1);
    assert_eq!(pos.to_index(), 2 * 4 + 1);
    assert_eq!(pos.to_index(), 9);

    let pos2 = Pos::from_index(9);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(3, 3));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(4, 0));
    assert!(!Pos::is_valid(0, 4));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 4);
    assert_eq!(TOTAL_CELLS, 16);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 3).to_index(), 3);
    assert_eq!(Pos::new(3, 0).to_index(), 12);
    assert_eq!(Pos::new(3, 3).to_index(), 15);
}

#[test]
fn test_pos_all_is_row_major() {
    let all: Vec<Pos> = Pos::all().collect();
    assert_eq!(all.len(), TOTAL_CELLS);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[1], Pos::new(0, 1));
    assert_eq!(all[4], Pos::new(1, 0));
    assert_eq!(all[15], Pos::new(3, 3));
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for pos in Pos::all() {
        assert_eq!(board.get(pos), Mark::Empty);
        assert!(board.is_empty(pos));
    }
    assert_eq!(board.mark_count(), 0);
    assert!(!board.is_full());
}

#[test]
fn test_apply_and_undo() {
    let mut board = Board::new();
    let pos = Pos::new(1, 2);

    board.apply(pos, Mark::X).unwrap();
    assert_eq!(board.get(pos), Mark::X);
    assert_eq!(board.mark_count(), 1);

    board.undo(pos);
    assert_eq!(board.get(pos), Mark::Empty);
    assert_eq!(board, Board::new());
}

#[test]
fn test_apply_occupied_cell_fails() {
    let mut board = Board::new();
    let pos = Pos::new(0, 0);

    board.apply(pos, Mark::X).unwrap();
    let err = board.apply(pos, Mark::O).unwrap_err();
    assert_eq!(err, GameError::InvalidMove { pos });

    // The failed apply must not change the cell
    assert_eq!(board.get(pos), Mark::X);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        assert!(!board.is_full());
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        board.apply(pos, mark).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.mark_count(), TOTAL_CELLS);
}

#[test]
fn test_legal_moves_scan_order() {
    let mut board = Board::new();
    board.apply(Pos::new(0, 0), Mark::X).unwrap();
    board.apply(Pos::new(0, 2), Mark::O).unwrap();
    board.apply(Pos::new(2, 1), Mark::X).unwrap();

    let moves: Vec<Pos> = board.legal_moves().collect();
    assert_eq!(moves.len(), 13);
    assert_eq!(moves[0], Pos::new(0, 1));
    assert_eq!(moves[1], Pos::new(0, 3));
    assert!(moves.windows(2).all(|w| w[0] < w[1]));
    assert!(moves.iter().all(|&pos| board.is_empty(pos)));
}

#[test]
fn test_legal_moves_restartable() {
    let mut board = Board::new();
    board.apply(Pos::new(1, 1), Mark::X).unwrap();

    let first: Vec<Pos> = board.legal_moves().collect();
    let second: Vec<Pos> = board.legal_moves().collect();
    assert_eq!(first, second);
}

#[test]
fn test_legal_moves_full_board() {
    let mut board = Board::new();
    for pos in Pos::all() {
        board.apply(pos, Mark::X).unwrap();
    }
    assert_eq!(board.legal_moves().count(), 0);
}

#[test]
fn test_board_default() {
    assert_eq!(Board::default(), Board::new());
}
