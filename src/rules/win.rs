//! Win condition checking for Four-in-a-Row
//!
//! A side wins with four contiguous marks horizontally, vertically, or on
//! either diagonal. The scans work for any grid size; lines that do not fit
//! are simply skipped.

use crate::board::{Cell, Grid, Pos, CONNECT};

/// Direction vectors for line checking (4 directions)
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal, top-left to bottom-right
    (-1, 1), // Diagonal, bottom-left to top-right
];

/// Positions of the `CONNECT`-long line starting at `start` in direction `dir`,
/// or `None` if it leaves the grid.
#[inline]
pub(crate) fn window(grid: &Grid, start: Pos, dir: (isize, isize)) -> Option<[Pos; CONNECT]> {
    let span = CONNECT as isize - 1;
    let end_row = start.row as isize + dir.0 * span;
    let end_col = start.col as isize + dir.1 * span;
    if end_row < 0 || end_row >= grid.rows() as isize || end_col < 0 || end_col >= grid.cols() as isize {
        return None;
    }

    let mut line = [start; CONNECT];
    for (i, slot) in line.iter_mut().enumerate() {
        let step = i as isize;
        *slot = Pos::new(
            (start.row as isize + dir.0 * step) as usize,
            (start.col as isize + dir.1 * step) as usize,
        );
    }
    Some(line)
}

/// Iterate over every length-4 window of the grid, in all four directions.
pub(crate) fn windows(grid: &Grid) -> impl Iterator<Item = [Pos; CONNECT]> + '_ {
    DIRECTIONS.iter().flat_map(move |&dir| {
        (0..grid.rows()).flat_map(move |row| {
            (0..grid.cols()).filter_map(move |col| window(grid, Pos::new(row, col), dir))
        })
    })
}

/// Find the first four-in-a-row for `mark`, if any.
pub fn find_connect_four(grid: &Grid, mark: Cell) -> Option<[Pos; CONNECT]> {
    if mark.is_empty() {
        return None;
    }
    windows(grid).find(|line| line.iter().all(|&pos| grid.get(pos) == mark))
}

/// Check if `mark` has four in a row anywhere on the grid
#[inline]
pub fn has_connect_four(grid: &Grid, mark: Cell) -> bool {
    find_connect_four(grid, mark).is_some()
}

/// Check for a winner. X is checked first.
pub fn check_winner(grid: &Grid) -> Option<Cell> {
    [Cell::X, Cell::O]
        .into_iter()
        .find(|&mark| has_connect_four(grid, mark))
}
