//! Board rendering for the Queen's Game GUI

use crate::{Board, Cell, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Cells per side at the last render
    size: u8,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            board_rect: Rect::NOTHING,
            size: crate::DEFAULT_BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Option<Pos>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.size = board.size();
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.board_rect = response.rect;

        self.draw_cells(&painter, board);

        if let Some(pos) = selected.filter(|_| !game_over) {
            painter.rect_stroke(
                self.cell_rect(pos),
                CornerRadius::ZERO,
                Stroke::new(SELECTED_OUTLINE_WIDTH, SELECTED_OUTLINE),
                StrokeKind::Inside,
            );
            for target in crate::rules::reachable_from(board, pos) {
                let radius = self.cell_size * REACHABLE_MARKER_RATIO;
                painter.circle_filled(self.cell_rect(target).center(), radius, REACHABLE_MARKER);
            }
        }

        if game_over {
            return None;
        }

        let pointer = response.hover_pos().and_then(|p| self.screen_to_board(p));

        // Preview whether the hovered destination is reachable
        if let (Some(from), Some(to)) = (selected, pointer) {
            if to != from {
                let color = if crate::rules::is_valid_path(board, from, to) {
                    hover_valid()
                } else {
                    hover_invalid()
                };
                painter.rect_filled(self.cell_rect(to), CornerRadius::ZERO, color);
            }
        }

        if response.clicked() {
            pointer
        } else {
            None
        }
    }

    /// Draw every cell with its outline
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let outline = Stroke::new(CELL_OUTLINE_WIDTH, CELL_OUTLINE);

        for (pos, cell) in board.iter() {
            let rect = self.cell_rect(pos);
            painter.rect_filled(rect, CornerRadius::ZERO, Self::cell_color(cell));
            painter.rect_stroke(rect, CornerRadius::ZERO, outline, StrokeKind::Inside);

            if cell == Cell::Queen {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Q",
                    egui::FontId::proportional(self.cell_size * QUEEN_FONT_RATIO),
                    QUEEN_TEXT,
                );
            }
        }
    }

    fn cell_color(cell: Cell) -> Color32 {
        match cell {
            Cell::Empty => CELL_EMPTY,
            Cell::Obstacle => CELL_OBSTACLE,
            Cell::Goal => CELL_GOAL,
            Cell::Queen => CELL_QUEEN,
        }
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        Pos::checked(row, col, self.size)
    }
}
