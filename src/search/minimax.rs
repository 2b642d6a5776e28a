//! Depth-limited minimax with optional alpha-beta pruning
//!
//! The searcher walks the game tree depth-first over one shared board,
//! applying each candidate move before the recursive call and undoing it
//! immediately after. O maximizes, X minimizes. With pruning enabled the
//! usual alpha-beta cutoff skips siblings that cannot change the parent's
//! value; with it disabled the bounds are never tightened and the
//! traversal is exactly plain minimax.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::{SearchConfig, Searcher, INF};
//!
//! let mut board = Board::new();
//! let mut searcher = Searcher::new(SearchConfig::default());
//!
//! let score = searcher.score(&mut board, Mark::O, 0, -INF, INF);
//! assert_eq!(score, 0); // nothing decided this close to the root
//! ```

use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, WIN_SCORE};

/// Alpha-beta bound just past the best achievable score
pub const INF: i32 = WIN_SCORE + 1;

/// Search parameters, fixed for the duration of one search call.
///
/// Chosen once at game start (the GUI settings card) and never
/// re-negotiated per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum plies explored below the root before falling back to the
    /// flat heuristic
    pub depth_limit: u8,
    /// Explore with alpha-beta cutoffs. Scores are identical either way;
    /// only the node count changes.
    pub pruning_enabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: 3,
            pruning_enabled: false,
        }
    }
}

/// Minimax searcher over a single mutable board.
///
/// The board handed to [`score`](Searcher::score) comes back untouched:
/// every apply is paired with an undo on the way out of the recursion.
pub struct Searcher {
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    /// Nodes visited so far, terminal and interior alike.
    ///
    /// Every `score` invocation counts exactly once; siblings skipped by a
    /// cutoff are never counted. Diagnostic only.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score the position with `to_move` to play, `depth` plies below the
    /// root of this search call.
    ///
    /// Terminal positions (a finished line, a full board, or the depth
    /// limit) return the flat evaluation directly. Callers seed
    /// `alpha`/`beta` with `(-INF, INF)`.
    pub fn score(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let score = evaluate(board);
        if score == WIN_SCORE
            || score == -WIN_SCORE
            || board.is_full()
            || depth >= self.config.depth_limit
        {
            return score;
        }

        if to_move == Mark::O {
            // Maximizing: O keeps the highest child value.
            let mut best = -INF;
            for pos in Pos::all() {
                if board.apply(pos, to_move).is_err() {
                    continue; // occupied
                }
                let value = self.score(board, Mark::X, depth + 1, alpha, beta);
                board.undo(pos);
                best = best.max(value);
                if self.config.pruning_enabled {
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            best
        } else {
            // Minimizing: X answers with the lowest.
            let mut best = INF;
            for pos in Pos::all() {
                if board.apply(pos, to_move).is_err() {
                    continue;
                }
                let value = self.score(board, Mark::O, depth + 1, alpha, beta);
                board.undo(pos);
                best = best.min(value);
                if self.config.pruning_enabled {
                    beta = beta.min(best);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(depth_limit: u8, pruning_enabled: bool) -> SearchConfig {
        SearchConfig {
            depth_limit,
            pruning_enabled,
        }
    }

    fn place(board: &mut Board, cells: &[(u8, u8)], mark: Mark) {
        for &(row, col) in cells {
            board.apply(Pos::new(row, col), mark).unwrap();
        }
    }

    /// A midgame position where X threatens to complete row 0.
    fn tactical_board() -> Board {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2)], Mark::X);
        place(&mut board, &[(2, 0), (2, 1), (3, 3)], Mark::O);
        board
    }

    #[test]
    fn test_won_position_is_terminal() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Mark::O);

        let mut searcher = Searcher::new(config(3, false));
        let score = searcher.score(&mut board, Mark::X, 0, -INF, INF);

        assert_eq!(score, WIN_SCORE);
        // Terminal at the first call: nothing below it is expanded.
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn test_lost_position_is_terminal() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 0), (2, 0), (3, 0)], Mark::X);

        let mut searcher = Searcher::new(config(3, true));
        let score = searcher.score(&mut board, Mark::O, 0, -INF, INF);

        assert_eq!(score, -WIN_SCORE);
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn test_depth_limit_returns_flat_zero() {
        // X threatens an immediate win, but at the depth limit the flat
        // heuristic sees nothing.
        let mut board = tactical_board();
        let mut searcher = Searcher::new(config(2, false));
        let score = searcher.score(&mut board, Mark::X, 2, -INF, INF);

        assert_eq!(score, 0);
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn test_node_count_one_ply() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0)], Mark::X);
        place(&mut board, &[(3, 3)], Mark::O);

        let mut searcher = Searcher::new(config(1, false));
        searcher.score(&mut board, Mark::O, 0, -INF, INF);

        // The call itself plus one terminal child per empty cell.
        assert_eq!(searcher.nodes(), 1 + 14);
    }

    #[test]
    fn test_board_unchanged_after_search() {
        let mut board = tactical_board();
        let snapshot = board.clone();

        let mut searcher = Searcher::new(config(3, true));
        searcher.score(&mut board, Mark::O, 0, -INF, INF);

        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_pruning_preserves_scores() {
        let positions = [
            (Board::new(), Mark::O),
            (tactical_board(), Mark::O),
            (tactical_board(), Mark::X),
        ];

        for depth_limit in 1..=4 {
            for (board, to_move) in &positions {
                let mut plain_board = board.clone();
                let mut plain = Searcher::new(config(depth_limit, false));
                let plain_score = plain.score(&mut plain_board, *to_move, 0, -INF, INF);

                let mut pruned_board = board.clone();
                let mut pruned = Searcher::new(config(depth_limit, true));
                let pruned_score = pruned.score(&mut pruned_board, *to_move, 0, -INF, INF);

                assert_eq!(
                    plain_score, pruned_score,
                    "scores diverged at depth limit {depth_limit}"
                );
                assert!(
                    pruned.nodes() <= plain.nodes(),
                    "pruning expanded more nodes at depth limit {depth_limit}"
                );
            }
        }
    }

    #[test]
    fn test_pruning_cuts_nodes_in_decided_position() {
        // O can win immediately in several branches; cutoffs should bite.
        let mut board = Board::new();
        place(&mut board, &[(1, 0), (1, 1), (1, 2)], Mark::O);
        place(&mut board, &[(0, 0), (0, 1), (3, 0)], Mark::X);

        let mut plain = Searcher::new(config(3, false));
        plain.score(&mut board, Mark::O, 0, -INF, INF);

        let mut pruned = Searcher::new(config(3, true));
        pruned.score(&mut board, Mark::O, 0, -INF, INF);

        assert!(pruned.nodes() < plain.nodes());
    }

    #[test]
    fn test_disabled_pruning_matches_plain_traversal() {
        // With pruning off, two runs over the same position must visit the
        // same number of nodes: the cutoff test is unreachable.
        let mut board = tactical_board();

        let mut first = Searcher::new(config(3, false));
        first.score(&mut board, Mark::O, 0, -INF, INF);

        let mut second = Searcher::new(config(3, false));
        second.score(&mut board, Mark::O, 0, -INF, INF);

        assert_eq!(first.nodes(), second.nodes());
    }

    #[test]
    fn test_finds_forced_win_one_ply() {
        // O to move with three in a row: any depth limit sees the win.
        let mut board = Board::new();
        place(&mut board, &[(2, 0), (2, 1), (2, 2)], Mark::O);
        place(&mut board, &[(0, 0), (1, 3)], Mark::X);

        let mut searcher = Searcher::new(config(1, false));
        let score = searcher.score(&mut board, Mark::O, 0, -INF, INF);

        assert_eq!(score, WIN_SCORE);
    }
}
