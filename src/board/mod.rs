//! # Board Module
//!
//! Grid cells, disc colors and the resting picture of the board.
//!
//! The screen never validates moves. It only tracks what each cell shows once
//! every running animation has settled, which is what the text board prints.

pub mod coords;

pub use coords::*;

use crate::config::{BLACK_REST_COLUMN, WHITE_REST_COLUMN};
use crate::FlipoutError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A board coordinate.
///
/// The board size is chosen by the caller; cells outside it are still drawn
/// wherever their pixels fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    /// Creates a new cell.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Number of king moves between two cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipout::GridCell;
    ///
    /// assert_eq!(GridCell::new(2, 3).chebyshev_distance(GridCell::new(5, 4)), 3);
    /// ```
    pub fn chebyshev_distance(self, other: GridCell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Color of a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscColor {
    Black,
    White,
}

impl DiscColor {
    /// The other color.
    pub fn opposite(self) -> Self {
        match self {
            DiscColor::Black => DiscColor::White,
            DiscColor::White => DiscColor::Black,
        }
    }

    /// Atlas column of a disc of this color at rest.
    pub fn rest_column(self) -> i32 {
        match self {
            DiscColor::Black => BLACK_REST_COLUMN,
            DiscColor::White => WHITE_REST_COLUMN,
        }
    }

    /// Lowercase name, as used on the command surface.
    pub fn as_str(self) -> &'static str {
        match self {
            DiscColor::Black => "black",
            DiscColor::White => "white",
        }
    }
}

impl FromStr for DiscColor {
    type Err = FlipoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(DiscColor::Black),
            "white" => Ok(DiscColor::White),
            other => Err(FlipoutError::UnknownColor(other.to_string())),
        }
    }
}

impl fmt::Display for DiscColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a cell shows at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Stone(DiscColor),
    Hint(DiscColor),
}

/// Resting picture of the board, kept in step with every draw command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardMirror {
    size: i32,
    cells: HashMap<GridCell, CellState>,
}

impl BoardMirror {
    /// Creates an empty mirror for a square board of `size` cells.
    pub fn new(size: i32) -> Self {
        Self {
            size,
            cells: HashMap::new(),
        }
    }

    /// State of a cell; cells never drawn are empty.
    pub fn get(&self, cell: GridCell) -> CellState {
        self.cells.get(&cell).copied().unwrap_or_default()
    }

    /// Records the resting state of a cell.
    pub fn set(&mut self, cell: GridCell, state: CellState) {
        if state == CellState::Empty {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, state);
        }
    }

    /// Number of stones of the given color.
    pub fn count(&self, color: DiscColor) -> usize {
        self.cells
            .values()
            .filter(|state| **state == CellState::Stone(color))
            .count()
    }
}

impl fmt::Display for BoardMirror {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (black, white) = ("●", "○");

        write!(f, "  ")?;
        for x in 0..self.size {
            let letter = u32::try_from(x)
                .ok()
                .and_then(|x| char::from_u32(0xFF41 + x))
                .unwrap_or('？');
            write!(f, "{}", letter)?;
        }

        for y in 0..self.size {
            write!(f, "\n{:<2}", y + 1)?;
            for x in 0..self.size {
                let glyph = match self.get(GridCell::new(x, y)) {
                    CellState::Stone(DiscColor::Black) => black,
                    CellState::Stone(DiscColor::White) => white,
                    CellState::Hint(_) => "＊",
                    CellState::Empty => "・",
                };
                write!(f, "{}", glyph)?;
            }
        }

        writeln!(
            f,
            "\n{}:{} {}:{}",
            black,
            self.count(DiscColor::Black),
            white,
            self.count(DiscColor::White)
        )
    }
}
