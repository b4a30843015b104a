//! Four-in-a-Row AI Engine
//!
//! A minimax engine for the gravity game Four-in-a-Row (Connect Four rules):
//! - 6x7 board by default, any size supported
//! - Marks drop to the lowest empty cell of the chosen column
//! - Four in a row horizontally, vertically or diagonally wins
//! - A full board with no four in a row is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Grid, authoritative board and the capability traits
//! - [`rules`]: Four-in-a-row detection
//! - [`eval`]: Static window evaluation
//! - [`search`]: Alpha-beta minimax (sequential and root-parallel)
//! - [`engine`]: Move selection integrating all components
//! - [`game`]: Players and the turn loop
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use four_in_a_row::{AIEngine, Cell, FourInARowBoard, GameBoard};
//!
//! let mut board = FourInARowBoard::new();
//! let mut engine = AIEngine::with_depth(4);
//!
//! board.update(3, Cell::X).unwrap();
//!
//! // AI responds as O
//! let col = engine.choose_column(&board, Cell::O, Cell::X);
//! let pos = board.update(col, Cell::O).unwrap();
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Search Priority
//!
//! The AI engine follows this search priority:
//! 1. Immediate winning column
//! 2. Block the opponent's immediate win
//! 3. Alpha-Beta search to the configured depth
//! 4. Center column when nothing is legal

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{BoardView, Cell, FourInARowBoard, GameBoard, Grid, Pos, COLS, ROWS};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{AiPlayer, GameManager, GameOutcome, Player, PlayerKind};
