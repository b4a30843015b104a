//! Board rendering for the Four-in-a-Row GUI

use crate::board::CONNECT;
use crate::{BoardView, Cell, FourInARowBoard, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board widget handles rendering and column input for the game board
pub struct BoardWidget {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    cols: usize,
}

impl Default for BoardWidget {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            cols: 0,
        }
    }
}

impl BoardWidget {
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &FourInARowBoard,
        current_turn: Cell,
        suggested_column: Option<usize>,
        winning_line: Option<[Pos; CONNECT]>,
        accepts_input: bool,
    ) -> Option<usize> {
        let (rows, cols) = (board.rows(), board.cols());
        let available = ui.available_size() - Vec2::splat(20.0);

        // Square cells that fit the available space
        self.cols = cols;
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols as f32)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows as f32)
            .max(8.0);

        let size = Vec2::new(
            cols as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
            rows as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        // Frame with one hole per cell
        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        painter.rect_stroke(
            self.board_rect,
            CornerRadius::same(8),
            Stroke::new(BORDER_WIDTH, BOARD_BORDER),
            egui::StrokeKind::Inside,
        );
        self.draw_column_labels(&painter);

        let hovered = if accepts_input {
            response.hover_pos().and_then(|p| self.screen_to_column(p))
        } else {
            None
        };
        if let Some(col) = hovered {
            self.draw_column_hover(&painter, board, col, rows);
        }

        self.draw_pieces(&painter, board);

        if let Some(pos) = board.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if let Some(col) = suggested_column {
            self.draw_suggestion(&painter, board, col);
        }

        // Falling-piece preview where the mark would land
        let mut clicked = None;
        if let Some(col) = hovered {
            if let Some(row) = board.drop_row(col) {
                let center = self.cell_center(Pos::new(row, col));
                let radius = self.cell_size * PIECE_RADIUS_RATIO;
                painter.circle_filled(center, radius, preview(piece_color(current_turn)));
                if response.clicked() {
                    clicked = Some(col);
                }
            }
        }

        clicked
    }

    /// Column labels above the frame (1-based, as players count them)
    fn draw_column_labels(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        for col in 0..self.cols {
            let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", col + 1),
                font.clone(),
                TEXT_PRIMARY,
            );
        }
    }

    /// Shade the hovered column, red when it is full
    fn draw_column_hover(&self, painter: &Painter, board: &FourInARowBoard, col: usize, rows: usize) {
        let left = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
        let top = self.board_rect.min.y + BOARD_MARGIN;
        let rect = Rect::from_min_size(
            Pos2::new(left, top),
            Vec2::new(self.cell_size, rows as f32 * self.cell_size),
        );
        let color = if board.drop_row(col).is_some() {
            hover_valid()
        } else {
            hover_invalid()
        };
        painter.rect_filled(rect, CornerRadius::same(4), color);
    }

    /// Draw every hole, filled or not
    fn draw_pieces(&self, painter: &Painter, board: &FourInARowBoard) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        for (pos, cell) in board.grid().iter() {
            let center = self.cell_center(pos);
            match cell {
                Cell::Empty => {
                    painter.circle_filled(center, radius, HOLE);
                }
                mark => self.draw_piece(painter, center, radius, mark),
            }
        }
    }

    /// Draw a single piece with a small highlight
    fn draw_piece(&self, painter: &Painter, center: Pos2, radius: f32, mark: Cell) {
        let highlight = match mark {
            Cell::X => X_PIECE_HIGHLIGHT,
            Cell::O => O_PIECE_HIGHLIGHT,
            Cell::Empty => return,
        };

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, piece_color(mark));
        painter.circle_stroke(center, radius * 0.75, Stroke::new(radius * 0.08, highlight));
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; CONNECT]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }

        let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.cell_center(*pos), radius, stroke);
        }
    }

    /// Ring the landing cell of a suggested column
    fn draw_suggestion(&self, painter: &Painter, board: &FourInARowBoard, col: usize) {
        let Some(row) = board.drop_row(col) else {
            return;
        };
        let center = self.cell_center(Pos::new(row, col));
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(3.0, SUGGESTION));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            SUGGESTION,
        );
    }

    /// Convert a screen position to the column under it
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        if x < 0.0 || relative.y < 0.0 {
            return None;
        }
        let col = x.floor() as usize;
        (col < self.cols).then_some(col)
    }

    /// Convert board position to the center of its hole on screen
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Fill color for a mark
pub fn piece_color(mark: Cell) -> Color32 {
    match mark {
        Cell::X => X_PIECE,
        Cell::O => O_PIECE,
        Cell::Empty => HOLE,
    }
}
