//! # Interval Timers
//!
//! A cooperative stand-in for `setInterval`/`clearInterval`.
//!
//! Time only moves when the owner advances it. Each interval fires one period
//! after it was set and then once per period, and every firing is reported in
//! timestamp order (ties broken by creation order).

use std::collections::BTreeMap;
use std::time::Duration;

/// Identity of one scheduled interval; releasing it stops future ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
struct Interval<T> {
    period: Duration,
    next_due: Duration,
    payload: T,
}

/// Periodic callbacks keyed by token, each carrying a payload.
#[derive(Debug, Clone)]
pub struct IntervalTimers<T> {
    now: Duration,
    next_id: u64,
    intervals: BTreeMap<TimerToken, Interval<T>>,
}

impl<T: Copy> IntervalTimers<T> {
    /// Creates an empty timer set at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            intervals: BTreeMap::new(),
        }
    }

    /// Time reached so far.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `payload` to fire every `period`, starting one period from now.
    pub fn set_interval(&mut self, period: Duration, payload: T) -> TimerToken {
        let period = period.max(Duration::from_micros(1));
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        self.intervals.insert(
            token,
            Interval {
                period,
                next_due: self.now + period,
                payload,
            },
        );
        token
    }

    /// Stops an interval. Returns `false` if it was already gone.
    pub fn clear_interval(&mut self, token: TimerToken) -> bool {
        self.intervals.remove(&token).is_some()
    }

    /// Whether the interval will fire again.
    pub fn is_live(&self, token: TimerToken) -> bool {
        self.intervals.contains_key(&token)
    }

    /// Number of live intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval is live.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Payloads of the live intervals.
    pub fn payloads(&self) -> impl Iterator<Item = T> + '_ {
        self.intervals.values().map(|interval| interval.payload)
    }

    /// Takes the earliest firing due at or before `until`.
    ///
    /// The clock moves to that firing's timestamp and the interval is
    /// rescheduled one period later. Returns `None` once nothing is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerToken, T)> {
        let (token, interval) = self
            .intervals
            .iter_mut()
            .filter(|(_, interval)| interval.next_due <= until)
            .min_by_key(|(token, interval)| (interval.next_due, **token))?;

        self.now = self.now.max(interval.next_due);
        interval.next_due += interval.period;
        Some((*token, interval.payload))
    }

    /// Moves the clock to `until` once every due firing has been taken.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<T: Copy> Default for IntervalTimers<T> {
    fn default() -> Self {
        Self::new()
    }
}
