//! Theme constants for the Queen's Game GUI

use egui::Color32;

// Cells
pub const CELL_EMPTY: Color32 = Color32::WHITE;
pub const CELL_OBSTACLE: Color32 = Color32::BLACK;
pub const CELL_GOAL: Color32 = Color32::from_rgb(0, 128, 0);
pub const CELL_QUEEN: Color32 = Color32::from_rgb(0, 0, 255);
pub const CELL_OUTLINE: Color32 = Color32::GRAY;
pub const QUEEN_TEXT: Color32 = Color32::WHITE;

// Markers
pub const SELECTED_OUTLINE: Color32 = Color32::RED;
pub const REACHABLE_MARKER: Color32 = Color32::from_rgb(150, 150, 160);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(60, 180, 90, 110)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_PLAYING: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_LOST: Color32 = Color32::from_rgb(255, 70, 70);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 10.0;
pub const SELECTED_OUTLINE_WIDTH: f32 = 3.0;
pub const CELL_OUTLINE_WIDTH: f32 = 1.0;
pub const QUEEN_FONT_RATIO: f32 = 0.4;
pub const REACHABLE_MARKER_RATIO: f32 = 0.12;

/// Score color by the share of the starting score left
pub fn score_color(score: i64, initial: u32) -> Color32 {
    let ratio = score as f32 / initial.max(1) as f32;
    if ratio > 0.5 {
        STATUS_PLAYING
    } else if ratio > 0.2 {
        STATUS_WARNING
    } else {
        STATUS_LOST
    }
}
