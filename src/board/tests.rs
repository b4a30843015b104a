use super::*;

#[test]
fn test_cell_opponent() {
    assert_eq!(Cell::X.opponent(), Cell::O);
    assert_eq!(Cell::O.opponent(), Cell::X);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
}

#[test]
fn test_cell_symbols() {
    assert_eq!(Cell::X.symbol(), 'X');
    assert_eq!(Cell::O.symbol(), 'O');
    assert_eq!(Cell::from_symbol('o'), Some(Cell::O));
    assert_eq!(Cell::from_symbol('.'), Some(Cell::Empty));
    assert_eq!(Cell::from_symbol('S'), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(ROWS, 6);
    assert_eq!(COLS, 7);
    assert_eq!(CONNECT, 4);
}

#[test]
fn test_drop_row_scans_bottom_up() {
    let grid = Grid::parse(&[
        ".......",
        ".......",
        ".......",
        "X......",
        "O......",
        "X.....O",
    ])
    .unwrap();
    assert_eq!(grid.drop_row(0), Some(2));
    assert_eq!(grid.drop_row(1), Some(5));
    assert_eq!(grid.drop_row(6), Some(4));
    assert_eq!(grid.drop_row(7), None);
}

#[test]
fn test_full_column_has_no_drop_row() {
    let grid = Grid::parse(&["X..", "O..", "X.."]).unwrap();
    assert_eq!(grid.drop_row(0), None);
    assert_eq!(grid.legal_columns(), vec![1, 2]);
}

#[test]
fn test_legal_columns_full_board() {
    let grid = Grid::parse(&["XO", "OX"]).unwrap();
    assert!(grid.legal_columns().is_empty());
    assert!(grid.is_full());
}

#[test]
fn test_placement_is_undone_on_drop() {
    let mut grid = Grid::standard();
    let before = grid.clone();
    {
        let placed = grid.place(3, Cell::X).unwrap();
        assert_eq!(placed.pos(), Pos::new(5, 3));
        assert_eq!(placed.get(Pos::new(5, 3)), Cell::X);
    }
    assert_eq!(grid, before);
}

#[test]
fn test_nested_placements_unwind() {
    let mut grid = Grid::standard();
    {
        let mut first = grid.place(2, Cell::X).unwrap();
        {
            let second = first.place(2, Cell::O).unwrap();
            assert_eq!(second.pos(), Pos::new(4, 2));
        }
        assert_eq!(first.get(Pos::new(4, 2)), Cell::Empty);
        assert_eq!(first.get(Pos::new(5, 2)), Cell::X);
    }
    assert_eq!(grid.count(Cell::Empty), ROWS * COLS);
}

#[test]
fn test_place_on_full_column() {
    let mut grid = Grid::parse(&["X", "O"]).unwrap();
    assert!(grid.place(0, Cell::X).is_none());
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Grid::parse(&["...", ".."]),
        Err(crate::error::BoardError::RaggedRow {
            row: 1,
            found: 2,
            expected: 3
        })
    );
    assert_eq!(
        Grid::parse(&["..Z"]),
        Err(crate::error::BoardError::UnknownSymbol('Z'))
    );
    assert!(Grid::parse(&[]).is_err());
}

#[test]
fn test_grid_display() {
    let grid = Grid::parse(&["X.", ".O"]).unwrap();
    assert_eq!(grid.to_string(), "X.\n.O\n");
}

#[test]
fn test_center_col() {
    assert_eq!(Grid::standard().center_col(), 3);
    assert_eq!(Grid::new(4, 4).unwrap().center_col(), 2);
}

#[test]
fn test_view_snapshot_matches_grid() {
    let mut board = FourInARowBoard::new();
    board.update(1, Cell::X).unwrap();
    board.update(1, Cell::O).unwrap();

    let view: &dyn BoardView = &board;
    let snap = view.snapshot();
    assert_eq!(&snap, board.grid());
    assert_eq!(view.drop_row(1), Some(3));
    assert!(view.is_empty(3, 1));
}
