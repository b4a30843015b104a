//! Theme constants for the Four-in-a-Row GUI

use egui::Color32;

// Board colors - classic blue frame
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 80, 180);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(20, 55, 130);
pub const HOLE: Color32 = Color32::from_rgb(32, 34, 37);

// Piece colors
pub const X_PIECE: Color32 = Color32::from_rgb(220, 50, 50);
pub const X_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(245, 110, 100);
pub const O_PIECE: Color32 = Color32::from_rgb(240, 200, 40);
pub const O_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 230, 120);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const SUGGESTION: Color32 = Color32::from_rgb(80, 200, 255);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

pub fn preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110)
}

// Text colors
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.40;
pub const BORDER_WIDTH: f32 = 3.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
