//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 4]>,
        game_over: bool,
        input_enabled: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Draw grid lines between cells
        self.draw_grid(&painter);

        // Draw placed marks
        self.draw_marks(&painter, board);

        // Draw last move marker
        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Draw winning line highlight
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over && input_enabled {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(board_pos);

                    let hover_color = if is_valid {
                        super::theme::hover_valid()
                    } else {
                        super::theme::hover_invalid()
                    };
                    self.draw_hover_preview(&painter, board_pos, current_turn, hover_color);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the interior grid lines of the 4x4 board
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw every placed mark
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            match board.get(pos) {
                Mark::X => self.draw_x(painter, pos, X_MARK),
                Mark::O => self.draw_o(painter, pos, O_MARK),
                Mark::Empty => {}
            }
        }
    }

    /// Draw an X as two crossing strokes
    fn draw_x(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.cell_center(pos);
        let arm = self.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        painter.line_segment(
            [
                center + Vec2::new(-arm, -arm),
                center + Vec2::new(arm, arm),
            ],
            stroke,
        );
        painter.line_segment(
            [
                center + Vec2::new(arm, -arm),
                center + Vec2::new(-arm, arm),
            ],
            stroke,
        );
    }

    /// Draw an O as a ring
    fn draw_o(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * MARK_SIZE_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, color));
    }

    /// Draw a small marker in the corner of the last-played cell
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        let offset = self.cell_size * 0.38;
        painter.circle_filled(
            center + Vec2::new(offset, -offset),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    /// Stroke a line through the four winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 4]) {
        let start = self.cell_center(line[0]);
        let end = self.cell_center(line[3]);
        painter.line_segment([start, end], Stroke::new(MARK_STROKE_WIDTH + 2.0, WIN_HIGHLIGHT));
    }

    /// Draw a translucent preview of the hovered move
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark, color: Color32) {
        match turn {
            Mark::X => self.draw_x(painter, pos, color),
            Mark::O => self.draw_o(painter, pos, color),
            Mark::Empty => {}
        }
    }

    /// Screen position of a cell's center
    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size,
                BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size,
            )
    }

    /// Map a screen position to the cell it falls in
    fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let rel = screen_pos - self.board_rect.min - Vec2::new(BOARD_MARGIN, BOARD_MARGIN);
        if rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }

        let col = (rel.x / self.cell_size) as i32;
        let row = (rel.y / self.cell_size) as i32;
        if !Pos::is_valid(row, col) {
            return None;
        }

        Some(Pos::new(row as u8, col as u8))
    }
}
