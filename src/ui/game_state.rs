//! Game state management for the tic-tac-toe GUI

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, Mark, Pos};
use crate::engine::{AiEngine, SearchResult};
use crate::error::{GameError, GameResult};
use crate::rules::find_winning_line;
use crate::search::SearchConfig;

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// A player completed a row, column, or diagonal
    Won { winner: Mark, line: [Pos; 4] },
    /// The board filled up with no winner
    Draw,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<SearchResult, GameError>>,
        start_time: Instant,
    },
}

/// Main game state
///
/// The human always plays X and the AI plays O. The search configuration
/// and the first-mover choice are fixed when the game starts.
pub struct GameState {
    pub board: Board,
    pub current_turn: Mark,
    pub game_over: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<SearchResult>,
    pub ai_state: AiState,
    pub message: Option<String>,

    /// Search parameters, held for the game's duration
    pub config: SearchConfig,
    /// Whether the AI takes the opening move
    pub ai_first: bool,
}

impl GameState {
    pub fn new(config: SearchConfig, ai_first: bool) -> Self {
        Self {
            board: Board::new(),
            current_turn: if ai_first { Mark::O } else { Mark::X },
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            config,
            ai_first,
        }
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        *self = GameState::new(self.config, self.ai_first);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Mark::X
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Mark::O
    }

    /// Check if the AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's mark at the given cell.
    ///
    /// Performs the same occupied-cell validation as the board itself;
    /// a rejected move leaves everything untouched and the player just
    /// picks again.
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|err| err.to_string())
    }

    /// Execute a move for the side to play (human and AI both land here)
    fn execute_move(&mut self, pos: Pos) -> GameResult<()> {
        let mark = self.current_turn;

        self.board.apply(pos, mark)?;
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.message = None;

        if let Some(line) = find_winning_line(&self.board, mark) {
            self.game_over = Some(GameOutcome::Won { winner: mark, line });
            return Ok(());
        }

        if self.board.is_full() {
            self.game_over = Some(GameOutcome::Draw);
            return Ok(());
        }

        self.current_turn = mark.opponent();
        Ok(())
    }

    /// Kick off the AI's move on a worker thread.
    ///
    /// The engine searches a snapshot of the board; the GUI keeps painting
    /// and polls for the result each frame via `check_ai_result`.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let mut board = self.board.clone();
        let engine = AiEngine::with_config(self.config);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.choose_move(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the AI has finished thinking and apply its move
    pub fn check_ai_result(&mut self) {
        let outcome = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI thread died".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        match outcome {
            Some(Ok(result)) => {
                self.ai_state = AiState::Idle;
                self.last_ai_result = Some(result);

                tracing::info!(
                    row = result.best_move.row,
                    col = result.best_move.col,
                    score = result.score,
                    nodes = result.nodes,
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "ai move selected"
                );

                if let Err(err) = self.execute_move(result.best_move) {
                    self.message = Some(err.to_string());
                }
            }
            Some(Err(err)) => {
                self.ai_state = AiState::Idle;
                self.message = Some(err.to_string());
            }
            None => {}
        }
    }

    /// How long the AI has been thinking, if it is
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo the last move pair (human + AI reply when both exist)
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = if self.move_history.len() >= 2 { 2 } else { 1 };
        let keep = self.move_history.len() - undo_count;
        let kept: Vec<(Pos, Mark)> = self.move_history[..keep].to_vec();

        let config = self.config;
        let ai_first = self.ai_first;
        *self = GameState::new(config, ai_first);

        // Replay the kept prefix; execute_move re-validates each cell and
        // re-records history and turn order.
        for (pos, _mark) in kept {
            if self.execute_move(pos).is_err() {
                break;
            }
        }
    }
}
