//! Game state management for the Four-in-a-Row GUI

use crate::board::{BoardView, Cell, FourInARowBoard, GameBoard, Pos, CONNECT};
use crate::config::{AppConfig, EngineConfig};
use crate::game::GameOutcome;
use crate::{AIEngine, MoveResult};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE {
        human_mark: Cell,
    },
    /// Player vs Player (hotseat)
    PvP {
        show_suggestions: bool,
    },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_mark: Cell::X }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: FourInARowBoard,
    pub mode: GameMode,
    pub game_over: Option<GameOutcome>,
    /// Columns played so far, in order
    pub move_history: Vec<usize>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_column: Option<usize>,
    pub message: Option<String>,

    /// Mark that opened the game
    first_mark: Cell,
    rows: usize,
    cols: usize,
    engine: EngineConfig,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

impl GameState {
    /// Game as described by the configuration file.
    pub fn from_config(config: &AppConfig) -> Self {
        let human_mark = config.game.human_cell().unwrap_or(Cell::X);
        let first_mark = if config.game.ai_first {
            human_mark.opponent()
        } else {
            human_mark
        };
        Self::new(GameMode::PvE { human_mark }, first_mark, config)
    }

    pub fn new(mode: GameMode, first_mark: Cell, config: &AppConfig) -> Self {
        let (rows, cols) = (config.game.rows, config.game.cols);
        Self {
            board: Self::empty_board(rows, cols),
            mode,
            game_over: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_column: None,
            message: None,
            first_mark,
            rows,
            cols,
            engine: config.engine.clone(),
        }
    }

    fn empty_board(rows: usize, cols: usize) -> FourInARowBoard {
        FourInARowBoard::with_size(rows, cols).unwrap_or_else(|err| {
            log::warn!("{err}, using the standard board");
            FourInARowBoard::new()
        })
    }

    pub fn reset(&mut self) {
        self.board = Self::empty_board(self.rows, self.cols);
        self.game_over = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_column = None;
        self.message = None;
    }

    /// Mark to move next
    pub fn current_turn(&self) -> Cell {
        if self.move_history.len() % 2 == 0 {
            self.first_mark
        } else {
            self.first_mark.opponent()
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_mark } => self.current_turn() == human_mark,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_mark } => self.current_turn() != human_mark,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn winning_line(&self) -> Option<[Pos; CONNECT]> {
        self.board.winning_line()
    }

    /// Attempt to drop the human's mark into `col`
    pub fn try_drop(&mut self, col: usize) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(col).map_err(|err| err.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, col: usize) -> Result<(), crate::error::MoveError> {
        let mark = self.current_turn();
        self.board.update(col, mark)?;

        self.move_history.push(col);
        self.suggested_column = None;
        self.move_timer.stop();
        self.message = None;

        if let Some(winner) = self.board.winner() {
            log::info!("{winner} wins after {} moves", self.move_history.len());
            self.game_over = Some(GameOutcome::Winner(winner));
        } else if self.board.is_draw() {
            log::info!("draw after {} moves", self.move_history.len());
            self.game_over = Some(GameOutcome::Draw);
        } else {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let mark = self.current_turn();
        let config = self.engine.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(&config);
            let result = engine.choose_with_stats(&board, mark, mark.opponent());
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let col = move_result.column;
            self.last_ai_result = Some(move_result);

            if let Err(err) = self.execute_move(col) {
                self.message = Some(format!("AI move rejected: {err}"));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mark = self.current_turn();

        // Run quick suggestion (lower depth)
        let mut engine = AIEngine::with_depth(self.engine.depth.min(5));
        let result = engine.choose_with_stats(&self.board, mark, mark.opponent());

        self.suggested_column = self.board.drop_row(result.column).map(|_| result.column);
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo two moves (human + AI)
        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.board = Self::empty_board(self.rows, self.cols);
        self.move_history.clear();
        self.game_over = None;
        self.suggested_column = None;
        self.message = None;

        for col in moves {
            if let Err(err) = self.execute_move(col) {
                log::warn!("replaying column {col} failed: {err}");
                break;
            }
        }

        self.move_timer.start();
    }
}
