//! # Image Surface
//!
//! A retained RGBA canvas backed by a macroquad [`Image`].
//!
//! The canvas keeps whatever was drawn until it is cleared, like an HTML
//! canvas, and is uploaded to the GPU by the display once per frame.

use crate::board::{PixelPoint, PixelRect};
use crate::config::canvas_size;
use crate::rendering::Surface;
use macroquad::texture::Image;
use std::fmt;

/// Transparent black, the value of a cleared pixel.
pub const CLEAR_PIXEL: [u8; 4] = [0, 0, 0, 0];

/// CPU-side canvas that sprites are composited onto.
#[derive(Clone)]
pub struct ImageSurface {
    canvas: Image,
}

impl fmt::Debug for ImageSurface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImageSurface")
            .field("width", &self.canvas.width)
            .field("height", &self.canvas.height)
            .finish()
    }
}

impl ImageSurface {
    /// Creates a fully transparent canvas.
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize * 4;
        Self {
            canvas: Image {
                bytes: vec![0; len],
                width,
                height,
            },
        }
    }

    /// Creates a canvas large enough for a square board including its border.
    pub fn for_board(board_size: i32) -> Self {
        let edge = u16::try_from(canvas_size(board_size.max(0))).unwrap_or(u16::MAX);
        Self::new(edge, edge)
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.canvas.width as i32
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.canvas.height as i32
    }

    /// The underlying image, for uploading to a texture.
    pub fn image(&self) -> &Image {
        &self.canvas
    }

    /// Raw RGBA bytes of the whole canvas.
    pub fn bytes(&self) -> &[u8] {
        &self.canvas.bytes
    }

    /// RGBA value at a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.canvas.bytes[offset..offset + 4]);
        Some(rgba)
    }

    /// Whether every in-bounds pixel of `area` is transparent.
    pub fn is_clear(&self, area: PixelRect) -> bool {
        match self.clip(area) {
            Some(area) => (area.y..area.y + area.height).all(|y| {
                (area.x..area.x + area.width).all(|x| self.pixel(x, y) == Some(CLEAR_PIXEL))
            }),
            None => true,
        }
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        Some((y as usize * self.canvas.width as usize + x as usize) * 4)
    }

    /// Intersection of `area` with the canvas bounds.
    fn clip(&self, area: PixelRect) -> Option<PixelRect> {
        let left = area.x.max(0);
        let top = area.y.max(0);
        let right = (area.x.saturating_add(area.width)).min(self.width());
        let bottom = (area.y.saturating_add(area.height)).min(self.height());
        let clipped = PixelRect::new(left, top, right - left, bottom - top);
        (!clipped.is_empty()).then_some(clipped)
    }
}

impl Surface for ImageSurface {
    fn clear(&mut self, area: PixelRect) {
        let Some(area) = self.clip(area) else {
            return;
        };
        let row_bytes = area.width as usize * 4;
        for y in area.y..area.y + area.height {
            if let Some(start) = self.offset(area.x, y) {
                self.canvas.bytes[start..start + row_bytes].fill(0);
            }
        }
    }

    fn blit(&mut self, image: &Image, source: PixelRect, dest: PixelPoint) {
        let (image_width, image_height) = (image.width as i32, image.height as i32);

        for dy in 0..source.height.max(0) {
            for dx in 0..source.width.max(0) {
                let (sx, sy) = (source.x.saturating_add(dx), source.y.saturating_add(dy));
                if sx < 0 || sy < 0 || sx >= image_width || sy >= image_height {
                    continue;
                }
                let (tx, ty) = (dest.x.saturating_add(dx), dest.y.saturating_add(dy));
                let Some(target) = self.offset(tx, ty) else {
                    continue;
                };

                let from = (sy as usize * image.width as usize + sx as usize) * 4;
                let mut src = [0; 4];
                src.copy_from_slice(&image.bytes[from..from + 4]);
                let mut dst = [0; 4];
                dst.copy_from_slice(&self.canvas.bytes[target..target + 4]);

                self.canvas.bytes[target..target + 4].copy_from_slice(&source_over(src, dst));
            }
        }
    }
}

/// Composites `src` over `dst` (non-premultiplied RGBA).
fn source_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let src_alpha = src[3] as f32 / 255.0;
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    let mut out = [0; 4];
    for channel in 0..3 {
        let blended = (src[channel] as f32 * src_alpha
            + dst[channel] as f32 * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        out[channel] = blended.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}
