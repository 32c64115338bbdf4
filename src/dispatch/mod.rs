//! # Dispatch Module
//!
//! The single entry point used by game logic to change what the board shows.
//!
//! Malformed instructions are logged and dropped. Nothing in this path returns
//! an error to the caller or panics on bad input.

pub mod commands;

pub use commands::*;

use crate::board::GridCell;
use crate::rendering::Surface;
use crate::screen::Screen;
use log::{trace, warn};

impl<S: Surface> Screen<S> {
    /// Applies a parsed command.
    pub fn dispatch(&mut self, command: GridCommand) {
        trace!("Dispatching {:?}", command);
        match command {
            GridCommand::Put { color, cell } => self.put_stone(color, cell),
            GridCommand::Remove { cell } => self.remove_stone(cell),
            GridCommand::Flip { color, cell, delay } => {
                self.flip(color, cell, delay);
            }
            GridCommand::Hint { color, cell } => self.put_hint(color, cell),
        }
    }

    /// Applies a command given in its string form.
    ///
    /// Unknown opcodes, and colors that are not `black`/`white` where one is
    /// needed, leave the screen untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipout::{RecordingSurface, Screen, SpriteAtlas};
    ///
    /// let mut screen = Screen::init(RecordingSurface::new(), SpriteAtlas::generated());
    /// screen.update_grid("put", "black", 3, 4, None);
    /// screen.update_grid("teleport", "black", 3, 4, None);
    /// assert_eq!(screen.surface().calls().len(), 1);
    /// ```
    pub fn update_grid(&mut self, opcode: &str, color: &str, x: i32, y: i32, delay: Option<u32>) {
        match GridCommand::parse(opcode, color, x, y, delay) {
            Ok(command) => self.dispatch(command),
            Err(e) => warn!(
                "Ignoring grid command {:?} at {}: {}",
                opcode,
                GridCell::new(x, y),
                e
            ),
        }
    }
}
