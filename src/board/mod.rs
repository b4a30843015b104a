//! Board representation for Four-in-a-Row
//!
//! - [`Grid`]: plain rows x columns array of cells, used as the search scratch board
//! - [`FourInARowBoard`]: the authoritative game board with its move-update contract
//! - [`BoardView`] / [`GameBoard`]: the capability interfaces the engine and game loop
//!   depend on

pub mod board;
pub mod grid;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::MoveError;

// Re-exports
pub use board::FourInARowBoard;
pub use grid::{Grid, Placement};

/// Standard board height
pub const ROWS: usize = 6;
/// Standard board width
pub const COLS: usize = 7;
/// Marks in a row needed to win
pub const CONNECT: usize = 4;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Display symbol (`'X'`, `'O'`, or `' '` for empty)
    pub fn symbol(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => ' ',
        }
    }

    /// Parse a symbol; `'.'` and `' '` both mean empty
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("."),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

/// Position on the board; row 0 is the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Read-only query interface over a gravity board.
///
/// The search engine only ever sees a board through this trait. It takes a
/// [`snapshot`](BoardView::snapshot) and works on that copy, so the
/// authoritative board is never mutated by the AI.
pub trait BoardView {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Cell at (row, col). Callers stay within `rows() x cols()`.
    fn cell(&self, row: usize, col: usize) -> Cell;

    fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_empty()
    }

    /// Lowest empty row of `col`, or `None` if the column is full or out of range.
    fn drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols() {
            return None;
        }
        (0..self.rows()).rev().find(|&row| self.is_empty(row, col))
    }

    /// Copy the current cells into an owned grid.
    fn snapshot(&self) -> Grid {
        let mut grid = Grid::blank(self.rows(), self.cols());
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                grid.set(Pos::new(row, col), self.cell(row, col));
            }
        }
        grid
    }
}

/// Mutable game-board capability used by the game loop.
///
/// `update` is the only way a move reaches the authoritative board.
pub trait GameBoard: BoardView {
    /// Drop `mark` into `col`, returning where it landed.
    fn update(&mut self, col: usize, mark: Cell) -> Result<Pos, MoveError>;

    /// Playable columns, left to right.
    fn legal_moves(&self) -> Vec<usize>;

    /// Someone has four in a row or the board is full.
    fn is_terminal(&self) -> bool;

    fn winner(&self) -> Option<Cell>;
}
