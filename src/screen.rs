//! # Screen
//!
//! The render context: surface, atlas, animations and message panel in one
//! object owned by the caller.
//!
//! A screen is created with [`Screen::init`] and handed back apart with
//! [`Screen::teardown`]. Time moves only through [`Screen::advance`].

use crate::animation::{AnimationHandle, AnimationPhase, FlipAnimator, FlipParams};
use crate::board::{BoardMirror, CellState, DiscColor, GridCell};
use crate::config::DEFAULT_BOARD_SIZE;
use crate::rendering::{MessagePanel, Renderer, SpriteAtlas, Surface};
use log::{debug, info};
use std::time::Duration;

/// Everything needed to draw and animate the board.
pub struct Screen<S: Surface> {
    renderer: Renderer<S>,
    animator: FlipAnimator,
    messages: MessagePanel,
}

impl<S: Surface> Screen<S> {
    /// Creates a screen for the default 8×8 board.
    pub fn init(surface: S, atlas: SpriteAtlas) -> Self {
        Self::with_board_size(surface, atlas, DEFAULT_BOARD_SIZE)
    }

    /// Creates a screen for a square board of `board_size` cells.
    pub fn with_board_size(surface: S, atlas: SpriteAtlas, board_size: i32) -> Self {
        info!(
            "Screen initialized ({}x{} board, atlas {})",
            board_size,
            board_size,
            if atlas.is_loaded() { "ready" } else { "pending" }
        );
        Self {
            renderer: Renderer::new(surface, atlas, board_size),
            animator: FlipAnimator::default(),
            messages: MessagePanel::new(),
        }
    }

    /// Stops every animation and returns the surface and atlas.
    pub fn teardown(mut self) -> (S, SpriteAtlas) {
        let running = self.animator.live_count();
        self.animator.cancel_all();
        info!("Screen torn down ({} flips cancelled)", running);
        self.renderer.into_parts()
    }

    /// Draws a resting disc, superseding any flip on the cell.
    pub fn put_stone(&mut self, color: DiscColor, cell: GridCell) {
        self.release(cell);
        self.renderer.put_stone(color, cell);
    }

    /// Draws a hint marker, superseding any flip on the cell.
    pub fn put_hint(&mut self, color: DiscColor, cell: GridCell) {
        self.release(cell);
        self.renderer.put_hint(color, cell);
    }

    /// Clears a cell, superseding any flip on it.
    pub fn remove_stone(&mut self, cell: GridCell) {
        self.release(cell);
        self.renderer.remove_stone(cell);
    }

    /// Flips the disc on `cell` to `color` after `delay` ticks.
    pub fn flip(&mut self, color: DiscColor, cell: GridCell, delay: u32) -> AnimationHandle {
        self.renderer.settle(cell, CellState::Stone(color));
        self.animator.start(cell, FlipParams::new(color, delay))
    }

    /// Stops a flip started earlier; stale handles are ignored.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        self.animator.cancel(handle)
    }

    /// Moves time forward, drawing any flip frames that fall due.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.animator.advance(elapsed, &mut self.renderer)
    }

    /// Writes text into a named message element.
    pub fn show_message(&mut self, id: &str, text: &str) {
        debug!("Message {:?} = {:?}", id, text);
        self.messages.set(id, text);
    }

    fn release(&mut self, cell: GridCell) {
        if self.animator.cancel_cell(cell) {
            debug!("Direct draw at {} superseded a running flip", cell);
        }
    }

    /// Whether any flip is still running.
    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    /// Phase of the flip on `cell`.
    pub fn phase(&self, cell: GridCell) -> AnimationPhase {
        self.animator.phase(cell)
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    pub fn animator(&self) -> &FlipAnimator {
        &self.animator
    }

    pub fn messages(&self) -> &MessagePanel {
        &self.messages
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    /// Resting picture of the board.
    pub fn mirror(&self) -> &BoardMirror {
        self.renderer.mirror()
    }

    /// The sprite atlas, for completing its load.
    pub fn atlas_mut(&mut self) -> &mut SpriteAtlas {
        self.renderer.atlas_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PixelPoint, PixelRect};
    use crate::config::TICK_PERIOD;
    use crate::rendering::{DrawCall, ImageSurface, RecordingSurface};

    #[test]
    fn test_flip_records_target_immediately() {
        let mut screen = Screen::init(RecordingSurface::new(), SpriteAtlas::generated());
        let cell = GridCell::new(3, 3);

        screen.put_stone(DiscColor::White, cell);
        screen.flip(DiscColor::Black, cell, 2);

        assert_eq!(screen.mirror().get(cell), CellState::Stone(DiscColor::Black));
        assert_eq!(screen.phase(cell), AnimationPhase::Waiting);
        assert!(screen.is_animating());
    }

    #[test]
    fn test_direct_draw_supersedes_flip() {
        let mut screen = Screen::init(RecordingSurface::new(), SpriteAtlas::generated());
        let cell = GridCell::new(1, 2);

        screen.flip(DiscColor::White, cell, 0);
        screen.advance(TICK_PERIOD * 3);
        screen.put_stone(DiscColor::Black, cell);

        assert_eq!(screen.phase(cell), AnimationPhase::Idle);
        assert_eq!(screen.advance(TICK_PERIOD * 20), 0);
        assert_eq!(
            screen.surface().calls().last(),
            Some(&DrawCall::Blit {
                source: PixelRect::new(0, 0, 80, 80),
                dest: PixelPoint::new(120, 200),
            })
        );
    }

    #[test]
    fn test_teardown_cancels_flips() {
        let mut screen = Screen::init(ImageSurface::for_board(8), SpriteAtlas::generated());
        screen.flip(DiscColor::White, GridCell::new(0, 0), 0);
        screen.flip(DiscColor::White, GridCell::new(1, 0), 5);

        let (surface, atlas) = screen.teardown();
        assert!(atlas.is_loaded());
        assert_eq!(surface.width(), 720);
    }

    #[test]
    fn test_messages() {
        let mut screen = Screen::init(RecordingSurface::new(), SpriteAtlas::generated());
        screen.show_message("com", "Pass");
        assert_eq!(screen.messages().get("com"), Some("Pass"));
        assert!(screen.surface().calls().is_empty());
    }
}
