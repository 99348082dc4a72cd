//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Mark, Pos};
use crate::game::GameState;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Number of cells per side at the last frame
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            size: 3,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are only reported while a game is running; the state machine
    /// still gets the final say on whether the move is legal.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState, palette: &Palette) -> Option<Pos> {
        let available = ui.available_size();
        let board_px = available.x.min(available.y).min(MAX_BOARD_PX).max(120.0);

        self.size = state.size();
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN - (self.size as f32 - 1.0) * CELL_GAP) / self.size as f32;

        let sense = if state.is_playing() { Sense::click() } else { Sense::hover() };
        let (response, painter) = ui.allocate_painter(Vec2::splat(board_px), sense);
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), palette.board_bg);

        let hovered = if state.is_playing() {
            response.hover_pos().and_then(|p| self.screen_to_board(p))
        } else {
            None
        };

        for (pos, mark) in state.board().iter() {
            let rect = self.cell_rect(pos);
            let fill = if hovered == Some(pos) && mark == Mark::Empty {
                palette.cell_hover
            } else {
                palette.cell_bg
            };
            painter.rect_filled(rect, CornerRadius::same(4), fill);

            match mark {
                Mark::X => self.draw_x(&painter, rect, palette),
                Mark::O => self.draw_o(&painter, rect, palette),
                Mark::Empty if !state.is_playing() && !state.phase().is_finished() => {
                    self.draw_placeholder(&painter, rect, palette)
                }
                Mark::Empty => {}
            }
        }

        if let Some(line) = state.winning_line() {
            self.draw_winning_line(&painter, &line.cells, palette);
        }

        if response.clicked() {
            return response.interact_pointer_pos().and_then(|p| self.screen_to_board(p));
        }
        None
    }

    /// Screen rectangle of one cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let step = self.cell_size + CELL_GAP;
        let min = self.board_rect.min + Vec2::new(BOARD_MARGIN + pos.col as f32 * step, BOARD_MARGIN + pos.row as f32 * step);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Draw player one's cross
    fn draw_x(&self, painter: &Painter, rect: Rect, palette: &Palette) {
        let c = rect.center();
        let r = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(MARK_STROKE, palette.mark_x);
        painter.line_segment([c + Vec2::new(-r, -r), c + Vec2::new(r, r)], stroke);
        painter.line_segment([c + Vec2::new(-r, r), c + Vec2::new(r, -r)], stroke);
    }

    /// Draw player two's ring
    fn draw_o(&self, painter: &Painter, rect: Rect, palette: &Palette) {
        let r = self.cell_size * MARK_RATIO;
        painter.circle_stroke(rect.center(), r, Stroke::new(MARK_STROKE, palette.mark_o));
    }

    /// Crossed-out box shown on cells while no game is running
    fn draw_placeholder(&self, painter: &Painter, rect: Rect, palette: &Palette) {
        let inner = rect.shrink(self.cell_size * 0.3);
        let stroke = Stroke::new(PLACEHOLDER_STROKE, palette.placeholder);
        let corners = [inner.left_top(), inner.right_top(), inner.right_bottom(), inner.left_bottom()];
        for i in 0..4 {
            painter.line_segment([corners[i], corners[(i + 1) % 4]], stroke);
        }
        painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
        painter.line_segment([inner.left_bottom(), inner.right_top()], stroke);
    }

    /// Strike through the completed line
    fn draw_winning_line(&self, painter: &Painter, cells: &[Pos], palette: &Palette) {
        let (Some(first), Some(last)) = (cells.first(), cells.last()) else {
            return;
        };
        let stroke = Stroke::new(WIN_STROKE, palette.win_highlight);
        painter.line_segment([self.board_to_screen(*first), self.board_to_screen(*last)], stroke);

        for pos in cells {
            let radius = self.cell_size * 0.45;
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }

        let step = self.cell_size + CELL_GAP;
        let col = (relative.x / step).floor() as usize;
        let row = (relative.y / step).floor() as usize;

        // Gaps between cells are not clickable
        let in_cell = relative.x - col as f32 * step <= self.cell_size && relative.y - row as f32 * step <= self.cell_size;

        if in_cell && row < self.size && col < self.size {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates (cell centre)
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
