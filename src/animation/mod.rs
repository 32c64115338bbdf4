//! # Animation Module
//!
//! Timed disc flips.
//!
//! A flip plays the 16 atlas columns of a turning disc, one per tick, after an
//! optional wait of `delay` ticks. Each cell owns at most one flip at a time;
//! the [`FlipAnimator`] schedules them and the [`FlipAnimation`] state machine
//! decides what each tick draws.

pub mod scheduler;
pub mod timer;
pub mod wave;

pub use scheduler::*;
pub use timer::*;
pub use wave::*;

use crate::board::{DiscColor, GridCell};
use crate::config::FLIP_STEPS;
use serde::{Deserialize, Serialize};

/// Which way the disc turns through the atlas columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipDirection {
    /// Columns 0 → 15
    TowardWhite,
    /// Columns 15 → 0
    TowardBlack,
}

impl FlipDirection {
    /// Direction of a flip ending on `target`.
    pub fn toward(target: DiscColor) -> Self {
        match target {
            DiscColor::White => FlipDirection::TowardWhite,
            DiscColor::Black => FlipDirection::TowardBlack,
        }
    }

    /// Column increment per drawn frame.
    pub fn step(self) -> i32 {
        match self {
            FlipDirection::TowardWhite => 1,
            FlipDirection::TowardBlack => -1,
        }
    }

    /// Column shown on the first drawn frame.
    pub fn start_column(self) -> i32 {
        match self {
            FlipDirection::TowardWhite => DiscColor::Black.rest_column(),
            FlipDirection::TowardBlack => DiscColor::White.rest_column(),
        }
    }
}

/// Lifecycle of a cell's flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// No flip owns the cell
    Idle,
    /// Counting down the start delay, nothing drawn
    Waiting,
    /// Drawing one frame per tick
    Running,
    /// All frames drawn; the timer is released on this tick
    Done,
}

/// Parameters of a flip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipParams {
    /// Color the disc ends on
    pub color: DiscColor,
    /// Ticks to wait before the first frame
    pub delay: u32,
}

impl FlipParams {
    /// Creates flip parameters.
    pub fn new(color: DiscColor, delay: u32) -> Self {
        Self { color, delay }
    }
}

/// State of one running flip.
///
/// `frame_index` starts at `-delay` and counts every tick; frames are drawn
/// while it is in `0..16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipAnimation {
    cell: GridCell,
    target: DiscColor,
    frame_index: i32,
    direction: FlipDirection,
    column: i32,
    token: TimerToken,
}

impl FlipAnimation {
    /// Creates a flip that will be ticked by the interval `token`.
    pub fn new(cell: GridCell, params: FlipParams, token: TimerToken) -> Self {
        let direction = FlipDirection::toward(params.color);
        let delay = i32::try_from(params.delay).unwrap_or(i32::MAX);
        Self {
            cell,
            target: params.color,
            frame_index: -delay,
            direction,
            column: direction.start_column(),
            token,
        }
    }

    /// Advances one tick, returning the column to draw if this tick draws.
    pub fn tick(&mut self) -> Option<i32> {
        if self.phase() == AnimationPhase::Done {
            return None;
        }

        let drawn = (self.frame_index >= 0).then(|| {
            let column = self.column;
            self.column += self.direction.step();
            column
        });
        self.frame_index += 1;
        drawn
    }

    /// Current phase; never [`AnimationPhase::Idle`].
    pub fn phase(&self) -> AnimationPhase {
        if self.frame_index < 0 {
            AnimationPhase::Waiting
        } else if self.frame_index < FLIP_STEPS {
            AnimationPhase::Running
        } else {
            AnimationPhase::Done
        }
    }

    pub fn cell(&self) -> GridCell {
        self.cell
    }

    pub fn target(&self) -> DiscColor {
        self.target
    }

    pub fn frame_index(&self) -> i32 {
        self.frame_index
    }

    pub fn direction(&self) -> FlipDirection {
        self.direction
    }

    pub fn token(&self) -> TimerToken {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> TimerToken {
        IntervalTimers::<()>::new().set_interval(crate::config::TICK_PERIOD, ())
    }

    #[test]
    fn test_flip_to_white_runs_columns_upward() {
        let mut flip = FlipAnimation::new(
            GridCell::new(3, 4),
            FlipParams::new(DiscColor::White, 0),
            token(),
        );
        assert_eq!(flip.phase(), AnimationPhase::Running);

        let columns: Vec<_> = (0..16).filter_map(|_| flip.tick()).collect();
        assert_eq!(columns, (0..16).collect::<Vec<_>>());
        assert_eq!(flip.phase(), AnimationPhase::Done);
        assert_eq!(flip.tick(), None);
    }

    #[test]
    fn test_flip_to_black_runs_columns_downward() {
        let mut flip = FlipAnimation::new(
            GridCell::new(0, 0),
            FlipParams::new(DiscColor::Black, 0),
            token(),
        );
        let columns: Vec<_> = (0..16).filter_map(|_| flip.tick()).collect();
        assert_eq!(columns, (0..16).rev().collect::<Vec<_>>());
        assert_eq!(flip.direction(), FlipDirection::TowardBlack);
    }

    #[test]
    fn test_delay_waits_before_drawing() {
        let mut flip = FlipAnimation::new(
            GridCell::new(0, 0),
            FlipParams::new(DiscColor::White, 3),
            token(),
        );
        assert_eq!(flip.phase(), AnimationPhase::Waiting);
        assert_eq!(flip.frame_index(), -3);

        assert_eq!(flip.tick(), None);
        assert_eq!(flip.tick(), None);
        assert_eq!(flip.tick(), None);
        assert_eq!(flip.phase(), AnimationPhase::Running);
        assert_eq!(flip.tick(), Some(0));
    }

    #[test]
    fn test_direction_columns() {
        assert_eq!(FlipDirection::toward(DiscColor::White).step(), 1);
        assert_eq!(FlipDirection::toward(DiscColor::Black).step(), -1);
        assert_eq!(FlipDirection::TowardWhite.start_column(), 0);
        assert_eq!(FlipDirection::TowardBlack.start_column(), 15);
    }
}
