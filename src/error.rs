//! Structured error types for the board, game loop and configuration

use std::path::PathBuf;

/// Errors raised when building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown cell symbol {0:?}")]
    UnknownSymbol(char),
}

/// Errors raised by the authoritative board's move-update contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is out of range (0..{cols})")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("cannot place an empty mark")]
    EmptyMark,
}

/// Errors raised while driving a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("player {name} did not choose a column")]
    NoMove { name: String },

    #[error("player {name} made an illegal move: {source}")]
    IllegalMove {
        name: String,
        #[source]
        source: MoveError,
    },

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
