//! Authoritative Four-in-a-Row board with move tracking

use super::grid::Grid;
use super::{BoardView, Cell, GameBoard, Pos, CONNECT};
use crate::error::{BoardError, MoveError};
use crate::rules::{check_winner, find_connect_four, has_connect_four};

/// Game board where marks fall to the lowest empty cell of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FourInARowBoard {
    grid: Grid,
    /// Marks placed so far
    n_moves: usize,
    last_move: Option<Pos>,
}

impl FourInARowBoard {
    /// Standard 6x7 board
    pub fn new() -> Self {
        Self {
            grid: Grid::standard(),
            n_moves: 0,
            last_move: None,
        }
    }

    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            n_moves: 0,
            last_move: None,
        })
    }

    /// Adopt an existing grid, counting its marks as moves already played.
    pub fn from_grid(grid: Grid) -> Self {
        let n_moves = grid.rows() * grid.cols() - grid.count(Cell::Empty);
        Self {
            grid,
            n_moves,
            last_move: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn n_moves(&self) -> usize {
        self.n_moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn is_full(&self) -> bool {
        self.n_moves >= self.grid.rows() * self.grid.cols()
    }

    /// Check if `mark` has four in a row
    pub fn is_win(&self, mark: Cell) -> bool {
        has_connect_four(&self.grid, mark)
    }

    /// Board full and nobody has four in a row
    pub fn is_draw(&self) -> bool {
        self.is_full() && check_winner(&self.grid).is_none()
    }

    pub fn game_is_over(&self) -> bool {
        self.is_full() || check_winner(&self.grid).is_some()
    }

    /// The winner's four cells, if the game has been won
    pub fn winning_line(&self) -> Option<[Pos; CONNECT]> {
        let winner = check_winner(&self.grid)?;
        find_connect_four(&self.grid, winner)
    }
}

impl Default for FourInARowBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView for FourInARowBoard {
    fn rows(&self) -> usize {
        self.grid.rows()
    }

    fn cols(&self) -> usize {
        self.grid.cols()
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid.get(Pos::new(row, col))
    }

    fn drop_row(&self, col: usize) -> Option<usize> {
        self.grid.drop_row(col)
    }

    fn snapshot(&self) -> Grid {
        self.grid.clone()
    }
}

impl GameBoard for FourInARowBoard {
    fn update(&mut self, col: usize, mark: Cell) -> Result<Pos, MoveError> {
        if mark.is_empty() {
            return Err(MoveError::EmptyMark);
        }
        if col >= self.grid.cols() {
            return Err(MoveError::ColumnOutOfRange {
                col,
                cols: self.grid.cols(),
            });
        }
        if self.game_is_over() {
            return Err(MoveError::GameOver);
        }
        let row = self.grid.drop_row(col).ok_or(MoveError::ColumnFull(col))?;

        let pos = Pos::new(row, col);
        self.grid.set(pos, mark);
        self.n_moves += 1;
        self.last_move = Some(pos);
        Ok(pos)
    }

    fn legal_moves(&self) -> Vec<usize> {
        if check_winner(&self.grid).is_some() {
            return Vec::new();
        }
        self.grid.legal_columns()
    }

    fn is_terminal(&self) -> bool {
        self.game_is_over()
    }

    fn winner(&self) -> Option<Cell> {
        check_winner(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_drops_to_bottom() {
        let mut board = FourInARowBoard::new();
        assert_eq!(board.update(3, Cell::X), Ok(Pos::new(5, 3)));
        assert_eq!(board.update(3, Cell::O), Ok(Pos::new(4, 3)));
        assert_eq!(board.n_moves(), 2);
        assert_eq!(board.last_move(), Some(Pos::new(4, 3)));
        assert_eq!(board.cell(5, 3), Cell::X);
        assert_eq!(board.cell(4, 3), Cell::O);
    }

    #[test]
    fn test_update_rejects_out_of_range() {
        let mut board = FourInARowBoard::new();
        assert_eq!(
            board.update(7, Cell::X),
            Err(MoveError::ColumnOutOfRange { col: 7, cols: 7 })
        );
        assert_eq!(board.n_moves(), 0);
    }

    #[test]
    fn test_update_rejects_full_column() {
        let mut board = FourInARowBoard::new();
        let mut mark = Cell::X;
        for _ in 0..6 {
            board.update(0, mark).unwrap();
            mark = mark.opponent();
        }
        assert_eq!(board.update(0, Cell::X), Err(MoveError::ColumnFull(0)));
        assert!(!board.legal_moves().contains(&0));
    }

    #[test]
    fn test_update_rejects_empty_mark() {
        let mut board = FourInARowBoard::new();
        assert_eq!(board.update(0, Cell::Empty), Err(MoveError::EmptyMark));
    }

    #[test]
    fn test_win_ends_game() {
        let mut board = FourInARowBoard::new();
        for col in 0..3 {
            board.update(col, Cell::X).unwrap();
            board.update(col, Cell::O).unwrap();
        }
        board.update(3, Cell::X).unwrap();

        assert!(board.is_win(Cell::X));
        assert!(!board.is_win(Cell::O));
        assert!(board.game_is_over());
        assert!(!board.is_draw());
        assert_eq!(board.winner(), Some(Cell::X));
        assert!(board.legal_moves().is_empty());
        assert_eq!(
            board.winning_line(),
            Some([Pos::new(5, 0), Pos::new(5, 1), Pos::new(5, 2), Pos::new(5, 3)])
        );
        assert_eq!(board.update(4, Cell::O), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        let grid = Grid::parse(&[
            "XOXOXOX",
            "XOXOXOX",
            "OXOXOXO",
            "OXOXOXO",
            "XOXOXOX",
            "XOXOXOX",
        ])
        .unwrap();
        let board = FourInARowBoard::from_grid(grid);

        assert_eq!(board.n_moves(), 42);
        assert!(board.is_full());
        assert!(board.is_draw());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_with_size_rejects_zero() {
        assert!(FourInARowBoard::with_size(0, 7).is_err());
        let board = FourInARowBoard::with_size(5, 5).unwrap();
        assert_eq!(board.cols(), 5);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = FourInARowBoard::new();
        board.update(2, Cell::O).unwrap();
        let mut snap = board.snapshot();
        snap.set(Pos::new(0, 0), Cell::X);
        assert_eq!(board.cell(0, 0), Cell::Empty);
        assert_eq!(snap.get(Pos::new(5, 2)), Cell::O);
    }
}
