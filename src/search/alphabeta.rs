//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the core search of the Four-in-a-Row AI.
//!
//! # Features
//!
//! - Explicit maximizing/minimizing formulation (two marks, one evaluator
//!   from the maximizer's point of view)
//! - Alpha-beta cutoffs as soon as `beta <= alpha`
//! - Depth-adjusted terminal scores: faster wins and slower losses score higher
//! - In-place mutate/undo on a single scratch grid through [`Grid::place`]
//!
//! Columns are always tried left to right, and only a strictly better score
//! replaces the current best, so the lowest column wins ties.
//!
//! # Example
//!
//! ```
//! use four_in_a_row::board::{Cell, Grid};
//! use four_in_a_row::search::Searcher;
//!
//! let mut grid = Grid::standard();
//! let mut searcher = Searcher::new(4);
//!
//! let result = searcher.search(&mut grid, Cell::X, Cell::O);
//! assert!(result.best_column.is_some());
//! ```

use crate::board::{Cell, Grid};
use crate::eval::{evaluate, WindowScore};
use crate::rules::has_connect_four;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = WindowScore::WIN + 1;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 6;

/// Deepest search accepted by the configuration
pub const MAX_DEPTH: u8 = 12;

/// Search result containing the best column found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best column found, `None` when the grid has no legal column
    pub best_column: Option<usize>,
    /// Minimax score of the best column
    pub score: i32,
    /// Depth limit used
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
}

/// Alpha-beta searcher with a fixed depth limit.
///
/// Holds no position state; the grid is borrowed mutably for the duration of
/// one search and restored before it is handed back.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth_limit: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher that looks `depth_limit` plies ahead (root move included).
    #[must_use]
    pub fn new(depth_limit: u8) -> Self {
        debug_assert!(depth_limit >= 1, "search depth must be at least one ply");
        Self {
            depth_limit: depth_limit.max(1),
            nodes: 0,
        }
    }

    #[must_use]
    pub fn depth_limit(&self) -> u8 {
        self.depth_limit
    }

    /// Nodes visited by the last search
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Root-level search with a running alpha.
    ///
    /// Each legal column is tried for `own`, scored with
    /// [`minimax`](Self::minimax) from the opponent's turn, and undone. The
    /// grid is unchanged when this returns.
    pub fn search(&mut self, grid: &mut Grid, own: Cell, opponent: Cell) -> SearchResult {
        self.nodes = 0;

        let mut best_column = None;
        let mut best_score = i32::MIN;
        let mut alpha = -INF;

        for col in grid.legal_columns() {
            let Some(mut placed) = grid.place(col, own) else {
                continue;
            };
            let score = self.minimax(
                &mut placed,
                self.depth_limit - 1,
                false,
                alpha,
                INF,
                own,
                opponent,
            );
            drop(placed);

            if score > best_score {
                best_score = score;
                best_column = Some(col);
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_column,
            score: if best_column.is_some() { best_score } else { 0 },
            depth: self.depth_limit,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `depth` is the number of plies still allowed below this node. Scores are
    /// from `max_cell`'s point of view.
    ///
    /// # Returns
    ///
    /// - `WIN - plies` if `max_cell` has four in a row (checked first)
    /// - `-WIN + plies` if `min_cell` has four in a row
    /// - `0` if the grid is full
    /// - the static evaluation once `depth` reaches zero
    /// - otherwise the best child score for the side to move
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        grid: &mut Grid,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        max_cell: Cell,
        min_cell: Cell,
    ) -> i32 {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(grid, depth, max_cell, min_cell) {
            return score;
        }

        let columns = grid.legal_columns();
        if columns.is_empty() {
            return 0;
        }
        if depth == 0 {
            return evaluate(grid, max_cell, min_cell);
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for col in columns {
                let Some(mut placed) = grid.place(col, max_cell) else {
                    continue;
                };
                let eval =
                    self.minimax(&mut placed, depth - 1, false, alpha, beta, max_cell, min_cell);
                drop(placed);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for col in columns {
                let Some(mut placed) = grid.place(col, min_cell) else {
                    continue;
                };
                let eval =
                    self.minimax(&mut placed, depth - 1, true, alpha, beta, max_cell, min_cell);
                drop(placed);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }

    /// Depth-adjusted score if either side already has four in a row.
    ///
    /// The maximizer is checked first, so a move that completes its own line
    /// counts as a win whoever is to move next.
    pub(crate) fn terminal_score(
        &self,
        grid: &Grid,
        depth: u8,
        max_cell: Cell,
        min_cell: Cell,
    ) -> Option<i32> {
        let plies = i32::from(self.depth_limit.saturating_sub(depth));
        if has_connect_four(grid, max_cell) {
            Some(WindowScore::WIN - plies)
        } else if has_connect_four(grid, min_cell) {
            Some(-WindowScore::WIN + plies)
        } else {
            None
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Plain minimax without pruning, same scoring rules.
    fn full_minimax(
        searcher: &Searcher,
        grid: &mut Grid,
        depth: u8,
        maximizing: bool,
        max_cell: Cell,
        min_cell: Cell,
    ) -> i32 {
        if let Some(score) = searcher.terminal_score(grid, depth, max_cell, min_cell) {
            return score;
        }
        let columns = grid.legal_columns();
        if columns.is_empty() {
            return 0;
        }
        if depth == 0 {
            return evaluate(grid, max_cell, min_cell);
        }

        let mark = if maximizing { max_cell } else { min_cell };
        let scores = columns.into_iter().map(|col| {
            let mut placed = grid.place(col, mark).unwrap();
            full_minimax(searcher, &mut placed, depth - 1, !maximizing, max_cell, min_cell)
        });
        let scores: Vec<i32> = scores.collect();
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    /// Play random legal moves from the empty grid, stopping before a win.
    fn random_position(rng: &mut StdRng, moves: usize) -> Grid {
        let mut grid = Grid::standard();
        let mut mark = Cell::X;
        for _ in 0..moves {
            let columns = grid.legal_columns();
            let Some(&col) = columns.choose(rng) else {
                break;
            };
            let row = grid.drop_row(col).unwrap();
            grid.set(Pos::new(row, col), mark);
            if has_connect_four(&grid, mark) {
                grid.set(Pos::new(row, col), Cell::Empty);
                break;
            }
            mark = mark.opponent();
        }
        grid
    }

    #[test]
    fn test_search_empty_board() {
        let mut grid = Grid::standard();
        let mut searcher = Searcher::new(4);

        let result = searcher.search(&mut grid, Cell::X, Cell::O);
        let col = result.best_column.unwrap();
        assert!(col < 7);
        assert!(result.nodes > 0);
        assert_eq!(result.depth, 4);
    }

    #[test]
    fn test_search_restores_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let mut grid = random_position(&mut rng, 12);
            let before = grid.clone();
            let _ = Searcher::new(5).search(&mut grid, Cell::X, Cell::O);
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut grid = Grid::parse(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "OOO....",
            "XXX....",
        ])
        .unwrap();
        let result = Searcher::new(3).search(&mut grid, Cell::X, Cell::O);
        assert_eq!(result.best_column, Some(3));
        assert_eq!(result.score, WindowScore::WIN - 1);
    }

    #[test]
    fn test_prefers_faster_win() {
        // X to move: X plays a column that makes an open three and wins on ply 3
        let mut grid = Grid::parse(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "..OO...",
            "..XX...",
        ])
        .unwrap();
        let result = Searcher::new(4).search(&mut grid, Cell::X, Cell::O);
        assert_eq!(result.best_column, Some(1));
        assert_eq!(result.score, WindowScore::WIN - 3);
    }

    #[test]
    fn test_terminal_scores_depend_on_plies() {
        let grid = Grid::parse(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "OOO....",
            "XXXX...",
        ])
        .unwrap();
        let searcher = Searcher::new(6);
        assert_eq!(
            searcher.terminal_score(&grid, 5, Cell::X, Cell::O),
            Some(WindowScore::WIN - 1)
        );
        assert_eq!(
            searcher.terminal_score(&grid, 2, Cell::X, Cell::O),
            Some(WindowScore::WIN - 4)
        );
        assert_eq!(
            searcher.terminal_score(&grid, 5, Cell::O, Cell::X),
            Some(-WindowScore::WIN + 1)
        );
        assert_eq!(
            searcher.terminal_score(&Grid::standard(), 5, Cell::X, Cell::O),
            None
        );
    }

    #[test]
    fn test_terminal_win_beats_evaluation() {
        let mut grid = Grid::parse(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "OOO....",
            "XXXX...",
        ])
        .unwrap();
        let mut searcher = Searcher::new(6);
        let score = searcher.minimax(&mut grid, 0, false, -INF, INF, Cell::X, Cell::O);
        assert!(score > 69 * WindowScore::THREE);
        let score = searcher.minimax(&mut grid, 0, true, -INF, INF, Cell::O, Cell::X);
        assert!(score < -69 * WindowScore::THREE);
    }

    #[test]
    fn test_full_board_scores_draw() {
        let mut grid = Grid::parse(&[
            "XOXOXOX",
            "XOXOXOX",
            "OXOXOXO",
            "OXOXOXO",
            "XOXOXOX",
            "XOXOXOX",
        ])
        .unwrap();
        let mut searcher = Searcher::new(6);
        assert_eq!(
            searcher.minimax(&mut grid, 5, true, -INF, INF, Cell::X, Cell::O),
            0
        );
        let result = searcher.search(&mut grid, Cell::X, Cell::O);
        assert_eq!(result.best_column, None);
    }

    #[test]
    fn test_pruning_matches_full_minimax() {
        let mut rng = StdRng::seed_from_u64(2024);
        for round in 0..40 {
            let mut grid = random_position(&mut rng, 6 + round % 20);
            for depth in 1..=4u8 {
                let mut searcher = Searcher::new(depth);
                let pruned =
                    searcher.minimax(&mut grid, depth, true, -INF, INF, Cell::X, Cell::O);
                let full = full_minimax(&searcher, &mut grid, depth, true, Cell::X, Cell::O);
                assert_eq!(pruned, full, "round {round}, depth {depth}\n{grid}");
            }
        }
    }

    #[test]
    fn test_root_search_matches_full_minimax() {
        let mut rng = StdRng::seed_from_u64(99);
        for round in 0..25 {
            let mut grid = random_position(&mut rng, 4 + round);
            let depth = 4;
            let searcher = Searcher::new(depth);

            let mut expected: Option<(usize, i32)> = None;
            for col in grid.legal_columns() {
                let mut placed = grid.place(col, Cell::O).unwrap();
                let score =
                    full_minimax(&searcher, &mut placed, depth - 1, false, Cell::O, Cell::X);
                drop(placed);
                if expected.map_or(true, |(_, best)| score > best) {
                    expected = Some((col, score));
                }
            }

            let result = Searcher::new(depth).search(&mut grid, Cell::O, Cell::X);
            assert_eq!(
                result.best_column.zip(Some(result.score)),
                expected,
                "round {round}\n{grid}"
            );
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut grid = Grid::standard();
        let mut searcher = Searcher::new(5);
        let _ = searcher.search(&mut grid, Cell::X, Cell::O);
        // Without pruning every root move costs 1 + 7 + ... + 7^4 nodes
        let full_tree: u64 = (0..5).map(|d| 7u64.pow(d)).sum::<u64>() * 7;
        assert!(searcher.nodes() < full_tree);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = random_position(&mut rng, 10);
        let first = Searcher::new(5).search(&mut grid, Cell::X, Cell::O);
        let second = Searcher::new(5).search(&mut grid, Cell::X, Cell::O);
        assert_eq!(first, second);
    }
}
