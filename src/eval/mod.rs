//! Evaluation module for Four-in-a-Row positions
//!
//! The evaluation considers:
//! - Win/loss detection
//! - Length-4 window scoring (threes and twos with room to grow)
//! - Center column control

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{score_window, WindowScore};
