//! # Flip Animator
//!
//! Schedules flips per cell on an [`IntervalTimers`] clock.
//!
//! A cell has at most one live flip and one live timer. Starting a flip on a
//! busy cell clears the old timer before the new one is set.

use crate::animation::{AnimationPhase, FlipAnimation, FlipParams, IntervalTimers, TimerToken};
use crate::board::GridCell;
use crate::config::TICK_PERIOD;
use crate::rendering::{Renderer, Surface};
use log::{debug, trace};
use std::collections::HashMap;
use std::time::Duration;

/// Caller-side identity of a started flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle {
    pub cell: GridCell,
    pub token: TimerToken,
}

/// Owns every running flip and the timers that drive them.
#[derive(Debug, Clone)]
pub struct FlipAnimator {
    period: Duration,
    timers: IntervalTimers<GridCell>,
    live: HashMap<GridCell, FlipAnimation>,
}

impl FlipAnimator {
    /// Creates an animator ticking every `period`.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timers: IntervalTimers::new(),
            live: HashMap::new(),
        }
    }

    /// Starts a flip on `cell`, replacing any flip already running there.
    pub fn start(&mut self, cell: GridCell, params: FlipParams) -> AnimationHandle {
        if let Some(previous) = self.live.remove(&cell) {
            self.timers.clear_interval(previous.token());
            debug!(
                "Restarting flip at {} (previous at frame {})",
                cell,
                previous.frame_index()
            );
        }

        let token = self.timers.set_interval(self.period, cell);
        self.live.insert(cell, FlipAnimation::new(cell, params, token));
        debug!(
            "Flip to {} at {} with delay {}",
            params.color, cell, params.delay
        );

        AnimationHandle { cell, token }
    }

    /// Stops the flip behind `handle`.
    ///
    /// Returns `false` if that flip already finished or was replaced.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        match self.live.get(&handle.cell) {
            Some(flip) if flip.token() == handle.token => self.cancel_cell(handle.cell),
            _ => false,
        }
    }

    /// Stops whatever flip is running on `cell`.
    pub fn cancel_cell(&mut self, cell: GridCell) -> bool {
        match self.live.remove(&cell) {
            Some(flip) => {
                self.timers.clear_interval(flip.token());
                debug!("Cancelled flip at {}", cell);
                true
            }
            None => false,
        }
    }

    /// Stops every flip.
    pub fn cancel_all(&mut self) {
        for (_, flip) in self.live.drain() {
            self.timers.clear_interval(flip.token());
        }
    }

    /// Moves time forward by `elapsed`, drawing every tick that falls due.
    ///
    /// Returns the number of ticks fired.
    pub fn advance<S: Surface>(&mut self, elapsed: Duration, renderer: &mut Renderer<S>) -> usize {
        let until = self.timers.now() + elapsed;
        let mut fired = 0;

        while let Some((token, cell)) = self.timers.pop_due(until) {
            let Some(flip) = self.live.get_mut(&cell).filter(|flip| flip.token() == token) else {
                self.timers.clear_interval(token);
                continue;
            };

            fired += 1;
            if let Some(column) = flip.tick() {
                renderer.redraw_frame(cell, column);
            } else {
                trace!("Flip at {} waiting ({})", cell, flip.frame_index());
            }

            if flip.phase() == AnimationPhase::Done {
                debug!("Flip at {} finished on {}", cell, flip.target());
                self.timers.clear_interval(token);
                self.live.remove(&cell);
            }
        }

        self.timers.settle(until);
        fired
    }

    /// Phase of the flip on `cell`, [`AnimationPhase::Idle`] if none.
    pub fn phase(&self, cell: GridCell) -> AnimationPhase {
        self.live
            .get(&cell)
            .map_or(AnimationPhase::Idle, FlipAnimation::phase)
    }

    /// The flip running on `cell`.
    pub fn animation(&self, cell: GridCell) -> Option<&FlipAnimation> {
        self.live.get(&cell)
    }

    /// Number of running flips.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of live timers, across all cells.
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Number of live timers driving `cell`.
    pub fn timers_for(&self, cell: GridCell) -> usize {
        self.timers.payloads().filter(|owner| *owner == cell).count()
    }

    /// Whether no flip is running.
    pub fn is_idle(&self) -> bool {
        self.live.is_empty()
    }
}

impl Default for FlipAnimator {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
