//! Static evaluation of Four-in-a-Row positions
//!
//! Called at the search frontier only. The score is from the maximizer's
//! point of view:
//! - `+WindowScore::WIN` if the maximizer already has four in a row
//! - `-WindowScore::WIN` if the minimizer does
//! - otherwise the sum of all window scores plus the center-column bonus

use crate::board::{Cell, Grid, Pos};
use crate::rules::has_connect_four;
use crate::rules::win::windows;

use super::patterns::{score_window, WindowScore};

/// Evaluate the grid for `max_cell` against `min_cell`.
///
/// # Arguments
/// * `grid` - Position to score
/// * `max_cell` - Mark of the maximizing side
/// * `min_cell` - Mark of the minimizing side
#[must_use]
pub fn evaluate(grid: &Grid, max_cell: Cell, min_cell: Cell) -> i32 {
    debug_assert!(max_cell != min_cell && !max_cell.is_empty() && !min_cell.is_empty());

    if has_connect_four(grid, max_cell) {
        return WindowScore::WIN;
    }
    if has_connect_four(grid, min_cell) {
        return -WindowScore::WIN;
    }

    evaluate_windows(grid, max_cell, min_cell) + center_bonus(grid, max_cell)
}

/// Sum of [`score_window`] over every length-4 window.
fn evaluate_windows(grid: &Grid, max_cell: Cell, min_cell: Cell) -> i32 {
    windows(grid)
        .map(|line| {
            let (mut own, mut opp, mut empty) = (0, 0, 0);
            for pos in line {
                match grid.get(pos) {
                    c if c == max_cell => own += 1,
                    c if c == min_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            score_window(own, opp, empty)
        })
        .sum()
}

/// Flat bonus per maximizer mark in the center column.
fn center_bonus(grid: &Grid, max_cell: Cell) -> i32 {
    let col = grid.center_col();
    let marks = (0..grid.rows())
        .filter(|&row| grid.get(Pos::new(row, col)) == max_cell)
        .count();
    marks as i32 * WindowScore::CENTER
}
