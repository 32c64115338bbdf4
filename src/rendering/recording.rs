//! # Recording Surface
//!
//! A surface that logs draw calls instead of compositing pixels.

use crate::board::{PixelPoint, PixelRect};
use crate::rendering::Surface;
use macroquad::texture::Image;

/// One call made against a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    /// A rectangle was cleared
    Clear(PixelRect),
    /// An atlas block was copied to `dest`
    Blit { source: PixelRect, dest: PixelPoint },
}

/// Surface that remembers every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Only the blits, in order.
    pub fn blits(&self) -> Vec<(PixelRect, PixelPoint)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Blit { source, dest } => Some((*source, *dest)),
                DrawCall::Clear(_) => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, area: PixelRect) {
        self.calls.push(DrawCall::Clear(area));
    }

    fn blit(&mut self, _image: &Image, source: PixelRect, dest: PixelPoint) {
        self.calls.push(DrawCall::Blit { source, dest });
    }
}
