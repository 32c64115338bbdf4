//! # Rendering Module
//!
//! Sprite-atlas drawing onto a retained canvas, presented with macroquad.
//!
//! Drawing goes through the [`Surface`] trait, which needs only two
//! capabilities: clearing a rectangle and copying a block out of an image.
//! [`ImageSurface`] is the canvas used by the game, [`RecordingSurface`] logs
//! calls instead of touching pixels.

pub mod atlas;
pub mod display;
pub mod recording;
pub mod renderer;
pub mod surface;
pub mod ui;

pub use atlas::*;
pub use display::*;
pub use recording::*;
pub use renderer::*;
pub use surface::*;
pub use ui::*;

use crate::board::{PixelPoint, PixelRect};
use macroquad::texture::Image;

/// A drawing target that sprites are copied onto.
pub trait Surface {
    /// Resets every pixel of `area` to transparent.
    fn clear(&mut self, area: PixelRect);

    /// Copies the `source` block of `image` so its top-left lands on `dest`.
    fn blit(&mut self, image: &Image, source: PixelRect, dest: PixelPoint);
}
