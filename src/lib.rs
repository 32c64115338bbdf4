//! # Flipout Screen
//!
//! Board rendering and disc-flip animation for a reversi game.
//!
//! ## Architecture Overview
//!
//! The crate is the drawing half of the game. Game rules and move selection live
//! elsewhere and talk to the screen through a single command entry point:
//!
//! - **Board**: grid cells, disc colors and the grid ↔ pixel mapping
//! - **Rendering**: the sprite atlas, drawing surfaces and the renderer
//! - **Animation**: the per-cell flip state machine and its interval scheduler
//! - **Dispatch**: `update_grid` commands parsed into a closed command type
//! - **Screen**: the render context tying all of the above together
//! - **Script**: JSON-lines command scripts for replaying a game on the screen
//!
//! Everything runs on one thread. The host drives time forward by calling
//! [`Screen::advance`] once per frame.

pub mod animation;
pub mod board;
pub mod dispatch;
pub mod rendering;
pub mod screen;
pub mod script;

pub use animation::*;
pub use board::*;
pub use dispatch::*;
pub use rendering::*;
pub use screen::*;
pub use script::*;

/// Core error type for the flipout screen.
#[derive(thiserror::Error, Debug)]
pub enum FlipoutError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The sprite atlas could not be loaded
    #[error("Failed to load sprite atlas: {0}")]
    AssetLoad(String),

    /// Command opcode is not one of put/remove/flip/hint
    #[error("Unknown opcode: {0:?}")]
    UnknownOpcode(String),

    /// Disc color is neither black nor white
    #[error("Unknown color: {0:?}")]
    UnknownColor(String),

    /// A command script is malformed
    #[error("Invalid script: {0}")]
    InvalidScript(String),
}

/// Result type used throughout the flipout codebase.
pub type FlipoutResult<T> = Result<T, FlipoutError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Screen configuration constants.
pub mod config {
    use std::time::Duration;

    /// Width and height of one board cell (and one atlas cell) in pixels
    pub const CELL_DIMENSION: i32 = 80;

    /// Border between the canvas edge and the first cell in pixels
    pub const BORDER_OFFSET: i32 = 40;

    /// Number of frames in a disc flip, and columns in the atlas
    pub const FLIP_STEPS: i32 = 16;

    /// Atlas column of a black disc at rest
    pub const BLACK_REST_COLUMN: i32 = 0;

    /// Atlas column of a white disc at rest
    pub const WHITE_REST_COLUMN: i32 = FLIP_STEPS - 1;

    /// Atlas row holding stone sprites
    pub const STONE_ROW: i32 = 0;

    /// Atlas row holding hint markers
    pub const HINT_ROW: i32 = 1;

    /// Period of the flip animation tick (about 30 ticks per second)
    pub const TICK_PERIOD: Duration = Duration::from_micros(33_300);

    /// Default board edge length in cells
    pub const DEFAULT_BOARD_SIZE: i32 = 8;

    /// Largest board edge the binary accepts
    pub const MAX_BOARD_SIZE: i32 = 64;

    /// Ticks of extra delay per ring of distance in a flip wave
    pub const DEFAULT_WAVE_STEP: u32 = 3;

    /// Default location of the sprite atlas
    pub const DEFAULT_SPRITE_PATH: &str = "assets/sprites.png";

    /// Canvas edge length in pixels for a square board of `board_size` cells
    pub const fn canvas_size(board_size: i32) -> i32 {
        board_size
            .saturating_mul(CELL_DIMENSION)
            .saturating_add(2 * BORDER_OFFSET)
    }
}
