//! Search module for the Four-in-a-Row AI
//!
//! Contains:
//! - Alpha-Beta minimax with depth-adjusted terminal scores
//! - Root-split parallel search over the rayon pool

pub mod alphabeta;
pub mod parallel;

pub use alphabeta::{SearchResult, Searcher, DEFAULT_DEPTH, INF, MAX_DEPTH};
pub use parallel::search_root_parallel;
