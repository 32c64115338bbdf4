//! # Command Definitions
//!
//! The closed set of grid commands and their parsing from the string-typed
//! command surface.

use crate::board::{DiscColor, GridCell};
use crate::{FlipoutError, FlipoutResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operation tag of a grid command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opcode {
    Put,
    Remove,
    Flip,
    Hint,
}

impl FromStr for Opcode {
    type Err = FlipoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "put" => Ok(Opcode::Put),
            "remove" => Ok(Opcode::Remove),
            "flip" => Ok(Opcode::Flip),
            "hint" => Ok(Opcode::Hint),
            other => Err(FlipoutError::UnknownOpcode(other.to_string())),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Opcode::Put => "put",
            Opcode::Remove => "remove",
            Opcode::Flip => "flip",
            Opcode::Hint => "hint",
        };
        f.write_str(name)
    }
}

/// One instruction for the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridCommand {
    /// Draw a resting disc
    Put { color: DiscColor, cell: GridCell },
    /// Clear the cell
    Remove { cell: GridCell },
    /// Animate the disc over to `color` after `delay` ticks
    Flip {
        color: DiscColor,
        cell: GridCell,
        delay: u32,
    },
    /// Draw a hint marker
    Hint { color: DiscColor, cell: GridCell },
}

impl GridCommand {
    /// Builds a command from the string-typed surface.
    ///
    /// `color` is ignored for `remove`, and `delay` for everything but `flip`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipout::{DiscColor, GridCell, GridCommand};
    ///
    /// let command = GridCommand::parse("flip", "white", 3, 4, Some(2)).unwrap();
    /// assert_eq!(
    ///     command,
    ///     GridCommand::Flip { color: DiscColor::White, cell: GridCell::new(3, 4), delay: 2 }
    /// );
    /// assert!(GridCommand::parse("spin", "white", 3, 4, None).is_err());
    /// ```
    pub fn parse(
        opcode: &str,
        color: &str,
        x: i32,
        y: i32,
        delay: Option<u32>,
    ) -> FlipoutResult<Self> {
        let cell = GridCell::new(x, y);
        let command = match opcode.parse::<Opcode>()? {
            Opcode::Put => GridCommand::Put {
                color: color.parse()?,
                cell,
            },
            Opcode::Remove => GridCommand::Remove { cell },
            Opcode::Flip => GridCommand::Flip {
                color: color.parse()?,
                cell,
                delay: delay.unwrap_or(0),
            },
            Opcode::Hint => GridCommand::Hint {
                color: color.parse()?,
                cell,
            },
        };
        Ok(command)
    }

    /// Operation tag of the command.
    pub fn opcode(&self) -> Opcode {
        match self {
            GridCommand::Put { .. } => Opcode::Put,
            GridCommand::Remove { .. } => Opcode::Remove,
            GridCommand::Flip { .. } => Opcode::Flip,
            GridCommand::Hint { .. } => Opcode::Hint,
        }
    }

    /// Cell the command targets.
    pub fn cell(&self) -> GridCell {
        match *self {
            GridCommand::Put { cell, .. }
            | GridCommand::Remove { cell }
            | GridCommand::Flip { cell, .. }
            | GridCommand::Hint { cell, .. } => cell,
        }
    }
}
