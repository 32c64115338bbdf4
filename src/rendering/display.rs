//! # Display Management
//!
//! Presents the retained canvas in a macroquad window.
//!
//! The canvas lives on the CPU in an [`ImageSurface`]; each frame it is
//! uploaded to a texture and drawn over the board background, with the
//! message panel to its right.

use crate::board::{point_to_grid, GridCell, PixelPoint};
use crate::config::{canvas_size, BORDER_OFFSET, CELL_DIMENSION};
use crate::rendering::ImageSurface;
use crate::screen::Screen;
use macroquad::color::{Color, LIGHTGRAY, SKYBLUE, WHITE};
use macroquad::shapes::{draw_line, draw_rectangle};
use macroquad::text::draw_text;
use macroquad::texture::{draw_texture, FilterMode, Texture2D};
use macroquad::window::clear_background;

/// Window-side renderer for a [`Screen`] drawing onto an [`ImageSurface`].
pub struct MacroquadDisplay {
    /// Board edge length in cells
    pub board_size: i32,
    /// Message panel width in pixels
    pub panel_width: f32,
    /// GPU copy of the canvas, created on first render
    canvas: Option<Texture2D>,
}

impl MacroquadDisplay {
    /// Felt green of the board
    pub const BOARD_COLOR: Color = Color::new(0.13, 0.45, 0.25, 1.0);
    /// Background outside the board
    pub const BACKGROUND_COLOR: Color = Color::new(0.08, 0.08, 0.08, 1.0);
    /// Grid line color
    pub const LINE_COLOR: Color = Color::new(0.05, 0.2, 0.1, 1.0);

    /// Creates a display for a square board of `board_size` cells.
    pub fn new(board_size: i32) -> Self {
        Self {
            board_size,
            panel_width: 240.0,
            canvas: None,
        }
    }

    /// Window size fitting the canvas and the message panel.
    pub fn window_size(&self) -> (i32, i32) {
        let canvas = canvas_size(self.board_size);
        (canvas + self.panel_width as i32, canvas)
    }

    /// Board cell under a window position, if it is on the board.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<GridCell> {
        let cell = point_to_grid(PixelPoint::new(x.floor() as i32, y.floor() as i32));
        let on_board =
            (0..self.board_size).contains(&cell.x) && (0..self.board_size).contains(&cell.y);
        on_board.then_some(cell)
    }

    /// Draws one frame: board, canvas and messages.
    pub fn render(&mut self, screen: &Screen<ImageSurface>) {
        clear_background(Self::BACKGROUND_COLOR);
        self.render_board();
        self.render_canvas(screen.surface());
        self.render_messages(screen);
    }

    fn render_board(&self) {
        let origin = BORDER_OFFSET as f32;
        let extent = (self.board_size * CELL_DIMENSION) as f32;
        draw_rectangle(origin, origin, extent, extent, Self::BOARD_COLOR);

        for i in 0..=self.board_size {
            let offset = origin + (i * CELL_DIMENSION) as f32;
            draw_line(offset, origin, offset, origin + extent, 2.0, Self::LINE_COLOR);
            draw_line(origin, offset, origin + extent, offset, 2.0, Self::LINE_COLOR);
        }
    }

    fn render_canvas(&mut self, surface: &ImageSurface) {
        match &self.canvas {
            Some(texture) => texture.update(surface.image()),
            None => {
                let texture = Texture2D::from_image(surface.image());
                texture.set_filter(FilterMode::Nearest);
                self.canvas = Some(texture);
            }
        }

        if let Some(texture) = &self.canvas {
            draw_texture(texture, 0.0, 0.0, WHITE);
        }
    }

    fn render_messages(&self, screen: &Screen<ImageSurface>) {
        let panel_x = canvas_size(self.board_size) as f32 + 10.0;
        let line_height = 24.0;
        let mut line_y = BORDER_OFFSET as f32;

        draw_text("FLIPOUT", panel_x, line_y, 28.0, WHITE);
        line_y += line_height * 2.0;

        for (id, text) in screen.messages().iter() {
            draw_text(id, panel_x, line_y, 20.0, SKYBLUE);
            draw_text(text, panel_x + 70.0, line_y, 20.0, WHITE);
            line_y += line_height;
        }

        if screen.is_animating() {
            line_y += line_height;
            draw_text("flipping...", panel_x, line_y, 18.0, LIGHTGRAY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_includes_panel() {
        let display = MacroquadDisplay::new(8);
        assert_eq!(display.window_size(), (960, 720));
    }

    #[test]
    fn test_cell_at_bounds() {
        let display = MacroquadDisplay::new(8);
        assert_eq!(display.cell_at(285.5, 365.0), Some(GridCell::new(3, 4)));
        assert_eq!(display.cell_at(10.0, 10.0), None);
        assert_eq!(display.cell_at(700.0, 100.0), None);
        assert_eq!(display.cell_at(679.9, 679.9), Some(GridCell::new(7, 7)));
    }
}
