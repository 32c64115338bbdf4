//! # Renderer
//!
//! Fixed-size draw and clear operations on the output surface.

use crate::board::{
    grid_to_point, BoardMirror, CellState, DiscColor, GridCell, PixelPoint, PixelRect,
};
use crate::config::{HINT_ROW, STONE_ROW};
use crate::rendering::{SpriteAtlas, Surface};
use log::trace;

/// Draws board sprites onto a surface it owns.
///
/// Every operation touches only its own region, so calls on different cells
/// never interfere.
pub struct Renderer<S: Surface> {
    surface: S,
    atlas: SpriteAtlas,
    mirror: BoardMirror,
}

impl<S: Surface> Renderer<S> {
    /// Creates a renderer for a square board of `board_size` cells.
    pub fn new(surface: S, atlas: SpriteAtlas, board_size: i32) -> Self {
        Self {
            surface,
            atlas,
            mirror: BoardMirror::new(board_size),
        }
    }

    /// Clears a rectangle of the surface.
    pub fn clear(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.surface.clear(PixelRect::new(x, y, width, height));
    }

    /// Draws atlas sprite `(column, row)` with its top-left at pixel `(x, y)`.
    pub fn put_sprite(&mut self, x: i32, y: i32, row: i32, column: i32) {
        self.atlas
            .draw(&mut self.surface, PixelPoint::new(x, y), column, row);
    }

    /// Draws a resting disc on a cell.
    pub fn put_stone(&mut self, color: DiscColor, cell: GridCell) {
        let point = grid_to_point(cell);
        self.put_sprite(point.x, point.y, STONE_ROW, color.rest_column());
        self.mirror.set(cell, CellState::Stone(color));
    }

    /// Draws a hint marker on a cell.
    pub fn put_hint(&mut self, color: DiscColor, cell: GridCell) {
        let point = grid_to_point(cell);
        self.put_sprite(point.x, point.y, HINT_ROW, color.rest_column());
        self.mirror.set(cell, CellState::Hint(color));
    }

    /// Clears a cell, whatever it showed.
    pub fn remove_stone(&mut self, cell: GridCell) {
        self.clear_cell(cell);
        self.mirror.set(cell, CellState::Empty);
    }

    /// Replaces a cell with one flip frame; the resting state is left alone.
    pub(crate) fn redraw_frame(&mut self, cell: GridCell, column: i32) {
        trace!("Flip frame {} at {}", column, cell);
        self.clear_cell(cell);
        let point = grid_to_point(cell);
        self.put_sprite(point.x, point.y, STONE_ROW, column);
    }

    /// Records the state a cell will settle in.
    pub(crate) fn settle(&mut self, cell: GridCell, state: CellState) {
        self.mirror.set(cell, state);
    }

    fn clear_cell(&mut self, cell: GridCell) {
        self.surface.clear(PixelRect::cell_at(grid_to_point(cell)));
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The sprite atlas.
    pub fn atlas(&self) -> &SpriteAtlas {
        &self.atlas
    }

    /// Mutable access to the atlas, for completing its load.
    pub fn atlas_mut(&mut self) -> &mut SpriteAtlas {
        &mut self.atlas
    }

    /// Resting picture of the board.
    pub fn mirror(&self) -> &BoardMirror {
        &self.mirror
    }

    /// Gives back the surface and the atlas.
    pub fn into_parts(self) -> (S, SpriteAtlas) {
        (self.surface, self.atlas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{DrawCall, ImageSurface, RecordingSurface};

    fn recording() -> Renderer<RecordingSurface> {
        Renderer::new(RecordingSurface::new(), SpriteAtlas::generated(), 8)
    }

    #[test]
    fn test_put_stone_uses_rest_column() {
        let mut renderer = recording();
        renderer.put_stone(DiscColor::Black, GridCell::new(3, 4));
        renderer.put_stone(DiscColor::White, GridCell::new(0, 0));

        assert_eq!(
            renderer.surface().blits(),
            vec![
                (PixelRect::new(0, 0, 80, 80), PixelPoint::new(280, 360)),
                (PixelRect::new(1200, 0, 80, 80), PixelPoint::new(40, 40)),
            ]
        );
        assert_eq!(
            renderer.mirror().get(GridCell::new(3, 4)),
            CellState::Stone(DiscColor::Black)
        );
    }

    #[test]
    fn test_put_hint_uses_hint_row() {
        let mut renderer = recording();
        renderer.put_hint(DiscColor::White, GridCell::new(2, 3));

        assert_eq!(
            renderer.surface().blits(),
            vec![(PixelRect::new(1200, 80, 80, 80), PixelPoint::new(200, 280))]
        );
        assert_eq!(
            renderer.mirror().get(GridCell::new(2, 3)),
            CellState::Hint(DiscColor::White)
        );
    }

    #[test]
    fn test_remove_stone_clears_cell() {
        let mut renderer = recording();
        renderer.remove_stone(GridCell::new(3, 4));

        assert_eq!(
            renderer.surface().calls(),
            &[DrawCall::Clear(PixelRect::new(280, 360, 80, 80))]
        );
    }

    #[test]
    fn test_put_then_remove_restores_canvas() {
        let mut renderer = Renderer::new(ImageSurface::for_board(8), SpriteAtlas::generated(), 8);
        let before = renderer.surface().bytes().to_vec();

        renderer.put_stone(DiscColor::White, GridCell::new(3, 4));
        assert!(!renderer.surface().is_clear(PixelRect::new(280, 360, 80, 80)));

        renderer.remove_stone(GridCell::new(3, 4));
        assert_eq!(renderer.surface().bytes(), before.as_slice());
    }

    #[test]
    fn test_disjoint_cells_do_not_interfere() {
        let mut renderer = Renderer::new(ImageSurface::for_board(8), SpriteAtlas::generated(), 8);
        renderer.put_stone(DiscColor::Black, GridCell::new(2, 2));
        let snapshot: Vec<_> = (200..280)
            .map(|x| renderer.surface().pixel(x, 240))
            .collect();

        renderer.put_stone(DiscColor::White, GridCell::new(3, 2));
        renderer.remove_stone(GridCell::new(3, 2));

        assert!(renderer.surface().is_clear(PixelRect::new(280, 200, 80, 80)));
        let after: Vec<_> = (200..280)
            .map(|x| renderer.surface().pixel(x, 240))
            .collect();
        assert_eq!(snapshot, after);
        assert!(!renderer
            .surface()
            .is_clear(PixelRect::new(200, 200, 80, 80)));
    }

    #[test]
    fn test_draws_are_skipped_until_atlas_loads() {
        let mut renderer =
            Renderer::new(RecordingSurface::new(), SpriteAtlas::new("missing.png"), 8);
        renderer.put_stone(DiscColor::Black, GridCell::new(0, 0));
        assert!(renderer.surface().blits().is_empty());

        renderer.atlas_mut().install(crate::rendering::generate_sheet());
        renderer.put_stone(DiscColor::Black, GridCell::new(0, 0));
        assert_eq!(renderer.surface().blits().len(), 1);
    }
}
