//! Game rules for Four-in-a-Row
//!
//! Terminal test (four in a row) and winner lookup.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_connect_four, has_connect_four};
