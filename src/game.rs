//! Players and the turn loop
//!
//! A [`GameManager`] owns the authoritative board and one [`Player`] per mark.
//! X always moves first. Each turn asks the side to move for a column and
//! applies it through [`GameBoard::update`], so a player can never bypass the
//! board's legality checks.

use std::fmt;

use crate::board::{BoardView, Cell, FourInARowBoard, GameBoard, Pos};
use crate::engine::AIEngine;
use crate::error::GameError;

/// Who is behind a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Ai,
}

/// A participant that picks columns for one mark.
pub trait Player {
    fn name(&self) -> &str;
    fn mark(&self) -> Cell;
    fn kind(&self) -> PlayerKind;

    /// Column to play on `board`, or `None` if the player has no answer.
    fn choose_column(&mut self, board: &dyn BoardView) -> Option<usize>;
}

/// Player backed by the alpha-beta engine. Always answers.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    name: String,
    mark: Cell,
    engine: AIEngine,
}

impl AiPlayer {
    pub fn new(name: impl Into<String>, mark: Cell, engine: AIEngine) -> Self {
        debug_assert!(!mark.is_empty());
        Self {
            name: name.into(),
            mark,
            engine,
        }
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Cell {
        self.mark
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Ai
    }

    fn choose_column(&mut self, board: &dyn BoardView) -> Option<usize> {
        Some(self.engine.choose_column(board, self.mark, self.mark.opponent()))
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Cell),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(mark) => write!(f, "{mark} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Result of a single [`GameManager::play_turn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A mark was placed and the game goes on
    Ongoing { mark: Cell, pos: Pos },
    /// The game is over (possibly by the move just played)
    Finished(GameOutcome),
}

/// Drives a game between two players on an authoritative board.
pub struct GameManager {
    board: FourInARowBoard,
    /// Index 0 plays X, index 1 plays O
    players: [Box<dyn Player>; 2],
}

impl GameManager {
    /// Standard 6x7 game between `x_player` and `o_player`.
    pub fn new(x_player: Box<dyn Player>, o_player: Box<dyn Player>) -> Self {
        Self::with_board(FourInARowBoard::new(), x_player, o_player)
    }

    /// Game on `rows` x `cols`.
    pub fn with_size(
        rows: usize,
        cols: usize,
        x_player: Box<dyn Player>,
        o_player: Box<dyn Player>,
    ) -> Result<Self, GameError> {
        let board = FourInARowBoard::with_size(rows, cols)?;
        Ok(Self::with_board(board, x_player, o_player))
    }

    /// Continue a game from `board`. The side to move follows from the move count.
    pub fn with_board(
        board: FourInARowBoard,
        x_player: Box<dyn Player>,
        o_player: Box<dyn Player>,
    ) -> Self {
        debug_assert_eq!(x_player.mark(), Cell::X);
        debug_assert_eq!(o_player.mark(), Cell::O);
        Self {
            board,
            players: [x_player, o_player],
        }
    }

    pub fn board(&self) -> &FourInARowBoard {
        &self.board
    }

    /// Mark whose turn it is
    pub fn to_move(&self) -> Cell {
        if self.board.n_moves() % 2 == 0 {
            Cell::X
        } else {
            Cell::O
        }
    }

    /// Player seated on `mark`
    pub fn player(&self, mark: Cell) -> Option<&dyn Player> {
        match mark {
            Cell::X => Some(self.players[0].as_ref()),
            Cell::O => Some(self.players[1].as_ref()),
            Cell::Empty => None,
        }
    }

    /// Outcome of the game, `None` while it is still running.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(mark) = self.board.winner() {
            Some(GameOutcome::Winner(mark))
        } else if self.board.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Ask the side to move for a column and apply it.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if let Some(outcome) = self.outcome() {
            return Ok(TurnOutcome::Finished(outcome));
        }

        let mark = self.to_move();
        let player = match mark {
            Cell::O => &mut self.players[1],
            _ => &mut self.players[0],
        };

        let col = player
            .choose_column(&self.board)
            .ok_or_else(|| GameError::NoMove {
                name: player.name().to_string(),
            })?;
        let pos = self
            .board
            .update(col, mark)
            .map_err(|source| GameError::IllegalMove {
                name: player.name().to_string(),
                source,
            })?;

        log::info!(
            "move {}: {} ({mark}) plays column {col}",
            self.board.n_moves(),
            player.name()
        );

        match self.outcome() {
            Some(outcome) => {
                log::info!("game over after {} moves: {outcome}", self.board.n_moves());
                Ok(TurnOutcome::Finished(outcome))
            }
            None => Ok(TurnOutcome::Ongoing { mark, pos }),
        }
    }

    /// Play turns until the game ends.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            if let TurnOutcome::Finished(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }
}
