//! # Sprite Atlas
//!
//! One image holding every sprite, addressed by `(column, row)` cells of
//! `CELL_DIMENSION` pixels.
//!
//! Columns are flip frames: column 0 is a black disc at rest, column 15 a white
//! disc at rest, and the columns between show the disc turning edge-on. Row 0
//! holds stones, row 1 holds hint markers.

use crate::board::{PixelPoint, PixelRect};
use crate::config::{CELL_DIMENSION, FLIP_STEPS, HINT_ROW, STONE_ROW};
use crate::rendering::Surface;
use crate::{FlipoutError, FlipoutResult};
use log::{debug, info, warn};
use macroquad::texture::{load_image, Image};
use std::path::{Path, PathBuf};

/// The sprite sheet shared by every draw call.
///
/// The image arrives asynchronously. Until it does, drawing is a silent no-op.
pub struct SpriteAtlas {
    path: PathBuf,
    image: Option<Image>,
}

impl SpriteAtlas {
    /// Creates an atlas whose image has not been loaded yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            image: None,
        }
    }

    /// Creates an atlas around an image that is already in memory.
    pub fn from_image(image: Image) -> Self {
        Self {
            path: PathBuf::new(),
            image: Some(image),
        }
    }

    /// Creates an atlas holding the built-in procedural sprite sheet.
    pub fn generated() -> Self {
        Self::from_image(generate_sheet())
    }

    /// Where the atlas image is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether drawing will produce pixels.
    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// The loaded image, if any.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Supplies the image once it has arrived.
    ///
    /// The atlas is read-only after loading; a second image is refused and
    /// `false` is returned.
    pub fn install(&mut self, image: Image) -> bool {
        if self.image.is_some() {
            warn!("Sprite atlas already loaded, ignoring replacement image");
            return false;
        }
        info!(
            "Sprite atlas ready ({}x{} pixels)",
            image.width, image.height
        );
        self.image = Some(image);
        true
    }

    /// Reads the atlas image from [`path`](Self::path) through macroquad's
    /// asset loader.
    pub async fn load(&mut self) -> FlipoutResult<()> {
        if self.is_loaded() {
            return Ok(());
        }

        let path = self.path.to_string_lossy().into_owned();
        debug!("Loading sprite atlas from {}", path);

        let image = load_image(&path)
            .await
            .map_err(|e| FlipoutError::AssetLoad(format!("{}: {}", path, e)))?;
        self.install(image);
        Ok(())
    }

    /// Pixel block of the sprite at `(column, row)`.
    pub fn source_rect(column: i32, row: i32) -> PixelRect {
        PixelRect::new(
            column * CELL_DIMENSION,
            row * CELL_DIMENSION,
            CELL_DIMENSION,
            CELL_DIMENSION,
        )
    }

    /// Copies the sprite at `(column, row)` onto `surface` at `dest`.
    pub fn draw<S: Surface>(&self, surface: &mut S, dest: PixelPoint, column: i32, row: i32) {
        match &self.image {
            Some(image) => surface.blit(image, Self::source_rect(column, row), dest),
            None => debug!(
                "Sprite atlas not loaded yet, skipping sprite ({}, {}) at {:?}",
                column, row, dest
            ),
        }
    }
}

/// Paints a stand-in sprite sheet: discs squashed horizontally to fake a
/// rotation, and small dots for hints.
pub fn generate_sheet() -> Image {
    let width = (FLIP_STEPS * CELL_DIMENSION) as u16;
    let height = ((HINT_ROW + 1) * CELL_DIMENSION) as u16;
    let mut bytes = vec![0u8; width as usize * height as usize * 4];

    let dark = [24, 24, 24, 255];
    let light = [236, 236, 236, 255];
    let center = CELL_DIMENSION as f32 / 2.0;
    let radius = center - 4.0;

    let mut paint = |column: i32, row: i32, radius_x: f32, radius_y: f32, rgba: [u8; 4]| {
        for py in 0..CELL_DIMENSION {
            for px in 0..CELL_DIMENSION {
                let dx = (px as f32 + 0.5 - center) / radius_x.max(0.5);
                let dy = (py as f32 + 0.5 - center) / radius_y;
                if dx * dx + dy * dy > 1.0 {
                    continue;
                }
                let x = (column * CELL_DIMENSION + px) as usize;
                let y = (row * CELL_DIMENSION + py) as usize;
                let at = (y * width as usize + x) * 4;
                bytes[at..at + 4].copy_from_slice(&rgba);
            }
        }
    };

    let last = (FLIP_STEPS - 1) as f32;
    for column in 0..FLIP_STEPS {
        let angle = column as f32 / last * std::f32::consts::PI;
        let face = if column < FLIP_STEPS / 2 { dark } else { light };
        paint(column, STONE_ROW, radius * angle.cos().abs(), radius, face);
        paint(column, HINT_ROW, radius / 4.0, radius / 4.0, face);
    }

    Image {
        bytes,
        width,
        height,
    }
}
