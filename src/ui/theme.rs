//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - plain paper look
pub const BOARD_BG: Color32 = Color32::from_rgb(250, 250, 248);
pub const GRID_LINE: Color32 = Color32::from_rgb(30, 30, 32);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(220, 50, 50);
pub const O_MARK: Color32 = Color32::from_rgb(30, 30, 35);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(80, 140, 230);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 90);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(120, 120, 120, 110)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 110)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 6.0;
pub const MARK_STROKE_WIDTH: f32 = 7.0;
pub const MARK_SIZE_RATIO: f32 = 0.32;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
