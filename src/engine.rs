//! Main AI engine for Four-in-a-Row
//!
//! This module provides the move selection used by the AI player. The search
//! follows a priority system:
//!
//! 1. **Immediate win**: the first column (left to right) whose drop completes
//!    our own four in a row
//! 2. **Block**: otherwise, the first column where the opponent's drop would
//!    complete theirs
//! 3. **Alpha-Beta**: full depth-limited minimax over every legal column
//! 4. **Fallback**: the center column when no column is legal
//!
//! The engine never touches the caller's board. It snapshots the view into a
//! scratch [`Grid`] that lives for one call.
//!
//! # Example
//!
//! ```
//! use four_in_a_row::{AIEngine, Cell, FourInARowBoard, GameBoard};
//!
//! let mut board = FourInARowBoard::new();
//! board.update(3, Cell::X).unwrap();
//!
//! let mut engine = AIEngine::with_depth(4);
//! let result = engine.choose_with_stats(&board, Cell::O, Cell::X);
//! assert!(result.column < 7);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{BoardView, Cell, Grid};
use crate::config::EngineConfig;
use crate::eval::WindowScore;
use crate::rules::has_connect_four;
use crate::search::{search_root_parallel, SearchResult, Searcher, DEFAULT_DEPTH};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Dropping here completes four in a row
    ImmediateWin,
    /// Dropping here stops the opponent's four in a row
    Block,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// No legal column; the default center column was returned
    Fallback,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Column to play
    pub column: usize,
    /// Minimax score of the column, from the mover's point of view
    pub score: i32,
    /// Which phase of the priority order chose the column
    pub search_type: SearchType,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(column: usize, score: i32, time_ms: u64) -> Self {
        Self {
            column,
            score,
            search_type: SearchType::ImmediateWin,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn block(column: usize, time_ms: u64) -> Self {
        Self {
            column,
            score: 0,
            search_type: SearchType::Block,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn from_alphabeta(column: usize, result: &SearchResult, time_ms: u64) -> Self {
        Self {
            column,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            nodes: result.nodes,
            time_ms,
        }
    }

    #[inline]
    fn fallback(column: usize, nodes: u64, time_ms: u64) -> Self {
        Self {
            column,
            score: 0,
            search_type: SearchType::Fallback,
            nodes,
            time_ms,
        }
    }
}

/// AI engine combining the immediate checks with alpha-beta search.
///
/// Holds configuration and the statistics of the last decision; no position
/// state survives between calls.
#[derive(Debug, Clone)]
pub struct AIEngine {
    depth: u8,
    parallel_root: bool,
    last_result: Option<MoveResult>,
}

impl AIEngine {
    /// Create an engine with the default depth of six plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create a sequential engine searching `depth` plies.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            parallel_root: false,
            last_result: None,
        }
    }

    /// Create an engine from the `[engine]` configuration section.
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            depth: config.depth.max(1),
            parallel_root: config.parallel_root,
            last_result: None,
        }
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Set the search depth (clamped to at least one ply).
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth.max(1);
    }

    #[must_use]
    pub fn parallel_root(&self) -> bool {
        self.parallel_root
    }

    pub fn set_parallel_root(&mut self, parallel: bool) {
        self.parallel_root = parallel;
    }

    /// Statistics of the most recent decision
    #[must_use]
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }

    /// Pick the column `own` should play against `opponent`.
    ///
    /// Convenience wrapper around [`choose_with_stats`](Self::choose_with_stats).
    pub fn choose_column<V: BoardView + ?Sized>(
        &mut self,
        view: &V,
        own: Cell,
        opponent: Cell,
    ) -> usize {
        self.choose_with_stats(view, own, opponent).column
    }

    /// Pick a column and report how it was found.
    ///
    /// Deterministic for a fixed position, pair of marks and depth.
    pub fn choose_with_stats<V: BoardView + ?Sized>(
        &mut self,
        view: &V,
        own: Cell,
        opponent: Cell,
    ) -> MoveResult {
        debug_assert!(own != opponent && !own.is_empty() && !opponent.is_empty());

        let start = Instant::now();
        let mut grid = view.snapshot();
        let result = self.decide(&mut grid, own, opponent, start);

        log::debug!(
            "{own} plays column {} ({:?}, score {}, {} nodes, {}ms)",
            result.column,
            result.search_type,
            result.score,
            result.nodes,
            result.time_ms
        );
        self.last_result = Some(result.clone());
        result
    }

    fn decide(&self, grid: &mut Grid, own: Cell, opponent: Cell, start: Instant) -> MoveResult {
        let elapsed = || start.elapsed().as_millis() as u64;

        if let Some(col) = find_immediate_win(grid, own) {
            return MoveResult::immediate_win(col, WindowScore::WIN - 1, elapsed());
        }

        if let Some(col) = find_immediate_win(grid, opponent) {
            return MoveResult::block(col, elapsed());
        }

        let result = if self.parallel_root {
            search_root_parallel(grid, self.depth, own, opponent)
        } else {
            Searcher::new(self.depth).search(grid, own, opponent)
        };

        match result.best_column {
            Some(col) => MoveResult::from_alphabeta(col, &result, elapsed()),
            None => {
                log::debug!("no legal column, falling back to the center");
                MoveResult::fallback(grid.center_col(), result.nodes, elapsed())
            }
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First legal column (left to right) where dropping `mark` gives `mark`
/// four in a row. The grid is restored before returning.
fn find_immediate_win(grid: &mut Grid, mark: Cell) -> Option<usize> {
    grid.legal_columns().into_iter().find(|&col| {
        grid.place(col, mark)
            .is_some_and(|placed| has_connect_four(&placed, mark))
    })
}
