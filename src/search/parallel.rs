//! Root-split parallel search
//!
//! Once the root move is fixed the subtrees are independent, so each root
//! column is searched on its own clone of the grid across the rayon pool.
//! Every branch uses a full window; the result is the first column (left to
//! right) with the highest exact score, the same answer as
//! [`Searcher::search`].

use rayon::prelude::*;

use crate::board::{Cell, Grid};

use super::alphabeta::{SearchResult, Searcher, INF};

/// Search every root column of `grid` in parallel for `own`.
#[must_use]
pub fn search_root_parallel(grid: &Grid, depth_limit: u8, own: Cell, opponent: Cell) -> SearchResult {
    let scored: Vec<(usize, i32, u64)> = grid
        .legal_columns()
        .into_par_iter()
        .filter_map(|col| {
            let mut scratch = grid.clone();
            let mut searcher = Searcher::new(depth_limit);
            let mut placed = scratch.place(col, own)?;
            let score = searcher.minimax(
                &mut placed,
                searcher.depth_limit() - 1,
                false,
                -INF,
                INF,
                own,
                opponent,
            );
            Some((col, score, searcher.nodes()))
        })
        .collect();

    let nodes = scored.iter().map(|&(_, _, n)| n).sum();
    let mut best: Option<(usize, i32)> = None;
    for &(col, score, _) in &scored {
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((col, score));
        }
    }

    SearchResult {
        best_column: best.map(|(col, _)| col),
        score: best.map_or(0, |(_, score)| score),
        depth: depth_limit.max(1),
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_matches_sequential() {
        let positions = [
            Grid::standard(),
            Grid::parse(&[
                ".......",
                ".......",
                ".......",
                "...O...",
                "..XX...",
                ".OXOX..",
            ])
            .unwrap(),
            Grid::parse(&[
                ".......",
                ".......",
                "...X...",
                "..OO...",
                "..XXO..",
                "OXOXXO.",
            ])
            .unwrap(),
        ];

        for grid in positions {
            let parallel = search_root_parallel(&grid, 5, Cell::X, Cell::O);
            let mut scratch = grid.clone();
            let sequential = Searcher::new(5).search(&mut scratch, Cell::X, Cell::O);
            assert_eq!(parallel.best_column, sequential.best_column, "\n{grid}");
            assert_eq!(parallel.score, sequential.score, "\n{grid}");
        }
    }

    #[test]
    fn test_parallel_full_board() {
        let grid = Grid::parse(&["XO", "OX"]).unwrap();
        let result = search_root_parallel(&grid, 3, Cell::X, Cell::O);
        assert_eq!(result.best_column, None);
        assert_eq!(result.score, 0);
    }
}
