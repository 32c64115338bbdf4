//! # Coordinate Mapping
//!
//! Conversion between board cells and canvas pixels.
//!
//! A cell `(x, y)` occupies the `CELL_DIMENSION`-sized square whose top-left
//! corner sits at `(x * D + O, y * D + O)`, where `O` is the board border.

use crate::board::GridCell;
use crate::config::{BORDER_OFFSET, CELL_DIMENSION};
use serde::{Deserialize, Serialize};

/// A pixel position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    /// Creates a new pixel point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    /// Creates a new rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The `CELL_DIMENSION` square whose top-left corner is `origin`.
    pub fn cell_at(origin: PixelPoint) -> Self {
        Self::new(origin.x, origin.y, CELL_DIMENSION, CELL_DIMENSION)
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point lies inside the rectangle.
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x.saturating_add(self.width)
            && point.y < self.y.saturating_add(self.height)
    }
}

/// Maps a grid cell to the pixel origin of its sprite.
///
/// Cells too far out for `i32` pixels saturate to the canvas limits, which
/// lie off any real canvas.
///
/// # Examples
///
/// ```
/// use flipout::{grid_to_point, GridCell, PixelPoint};
///
/// assert_eq!(grid_to_point(GridCell::new(3, 4)), PixelPoint::new(280, 360));
/// ```
pub fn grid_to_point(cell: GridCell) -> PixelPoint {
    let axis = |v: i32| v.saturating_mul(CELL_DIMENSION).saturating_add(BORDER_OFFSET);
    PixelPoint::new(axis(cell.x), axis(cell.y))
}

/// Maps a pixel to the grid cell containing it.
///
/// Pixels inside the border map to negative cells; the result is floored, never
/// truncated toward zero.
///
/// # Examples
///
/// ```
/// use flipout::{point_to_grid, GridCell, PixelPoint};
///
/// assert_eq!(point_to_grid(PixelPoint::new(359, 439)), GridCell::new(3, 4));
/// assert_eq!(point_to_grid(PixelPoint::new(0, 0)), GridCell::new(-1, -1));
/// ```
pub fn point_to_grid(point: PixelPoint) -> GridCell {
    let axis = |v: i32| v.saturating_sub(BORDER_OFFSET).div_euclid(CELL_DIMENSION);
    GridCell::new(axis(point.x), axis(point.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_to_point_origin() {
        assert_eq!(grid_to_point(GridCell::new(0, 0)), PixelPoint::new(40, 40));
        assert_eq!(grid_to_point(GridCell::new(7, 7)), PixelPoint::new(600, 600));
    }

    #[test]
    fn test_point_to_grid_rounds_down_inside_cell() {
        assert_eq!(point_to_grid(PixelPoint::new(40, 40)), GridCell::new(0, 0));
        assert_eq!(point_to_grid(PixelPoint::new(119, 119)), GridCell::new(0, 0));
        assert_eq!(point_to_grid(PixelPoint::new(120, 40)), GridCell::new(1, 0));
    }

    #[test]
    fn test_point_to_grid_floors_border_pixels() {
        assert_eq!(point_to_grid(PixelPoint::new(39, 39)), GridCell::new(-1, -1));
        assert_eq!(point_to_grid(PixelPoint::new(-41, 0)), GridCell::new(-2, -1));
    }

    #[test]
    fn test_extreme_cells_saturate() {
        assert_eq!(
            grid_to_point(GridCell::new(i32::MAX, i32::MIN)),
            PixelPoint::new(i32::MAX, i32::MIN + BORDER_OFFSET)
        );
        assert_eq!(
            point_to_grid(PixelPoint::new(i32::MIN, i32::MAX)),
            GridCell::new(
                i32::MIN / CELL_DIMENSION - 1,
                (i32::MAX - BORDER_OFFSET) / CELL_DIMENSION
            )
        );

        let edge = PixelRect::new(i32::MAX - 40, 0, 80, 80);
        assert!(edge.contains(PixelPoint::new(i32::MAX - 1, 0)));
    }

    #[test]
    fn test_rect_contains() {
        let rect = PixelRect::cell_at(PixelPoint::new(280, 360));
        assert!(rect.contains(PixelPoint::new(280, 360)));
        assert!(rect.contains(PixelPoint::new(359, 439)));
        assert!(!rect.contains(PixelPoint::new(360, 360)));
        assert!(!PixelRect::new(0, 0, 0, 10).contains(PixelPoint::new(0, 0)));
        assert!(PixelRect::new(0, 0, 0, 10).is_empty());
    }
}
