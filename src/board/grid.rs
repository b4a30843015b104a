//! Plain cell grid with gravity helpers and scoped placement

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{BoardView, Cell, Pos, COLS, ROWS};
use crate::error::BoardError;

/// Rows x columns array of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be non-zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self::blank(rows, cols))
    }

    /// Empty 6x7 grid
    pub fn standard() -> Self {
        Self::blank(ROWS, COLS)
    }

    pub(crate) fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a grid from text rows, top row first.
    ///
    /// `X`/`O` are marks, `.` or space is empty.
    ///
    /// ```
    /// use four_in_a_row::board::{Cell, Grid, Pos};
    ///
    /// let grid = Grid::parse(&["...", "XO."]).unwrap();
    /// assert_eq!(grid.get(Pos::new(1, 0)), Cell::X);
    /// ```
    pub fn parse(rows: &[&str]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(height, width)?;

        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != width {
                return Err(BoardError::RaggedRow {
                    row,
                    found,
                    expected: width,
                });
            }
            for (col, symbol) in text.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(BoardError::UnknownSymbol(symbol))?;
                grid.set(Pos::new(row, col), cell);
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column holding the most winning lines
    #[inline]
    pub fn center_col(&self) -> usize {
        self.cols / 2
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position {pos:?} outside {}x{} grid",
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Lowest empty row in `col`, scanning bottom to top.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(Pos::new(row, col)).is_empty())
    }

    /// Columns whose top cell is empty, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.get(Pos::new(0, col)).is_empty())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.get(Pos::new(0, col)).is_empty())
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over every cell with its position
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Pos::new(idx / self.cols, idx % self.cols), cell))
    }

    /// Drop `mark` into `col` for the lifetime of the returned guard.
    ///
    /// The cell is cleared again when the guard is dropped, on every exit
    /// path. Returns `None` when the column is full.
    pub fn place(&mut self, col: usize, mark: Cell) -> Option<Placement<'_>> {
        debug_assert!(!mark.is_empty(), "cannot place an empty mark");
        let row = self.drop_row(col)?;
        let pos = Pos::new(row, col);
        self.set(pos, mark);
        Some(Placement { grid: self, pos })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardView for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.get(Pos::new(row, col))
    }

    fn drop_row(&self, col: usize) -> Option<usize> {
        Grid::drop_row(self, col)
    }

    fn snapshot(&self) -> Grid {
        self.clone()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.get(Pos::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A mark placed on a [`Grid`], removed again on drop.
///
/// Derefs to the grid so the search can recurse through it.
pub struct Placement<'a> {
    grid: &'a mut Grid,
    pos: Pos,
}

impl Placement<'_> {
    /// Where the mark landed
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.grid
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        self.grid
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.grid.set(self.pos, Cell::Empty);
    }
}
