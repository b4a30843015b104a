//! GUI module for the Four-in-a-Row game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::FourInARowApp;
pub use game_state::{GameMode, GameState};
