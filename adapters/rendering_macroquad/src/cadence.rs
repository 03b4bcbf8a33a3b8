//! Fixed-interval tick clock driven by frame deltas.

use std::time::Duration;

/// Default spacing between simulation ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Accumulates frame time and reports when a simulation tick is due.
///
/// At most one tick fires per frame. Time beyond one extra interval is
/// dropped so a stalled frame does not trigger a burst of catch-up ticks.
#[derive(Clone, Copy, Debug)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    /// Creates a clock firing every `interval`; a zero interval fires every frame.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Spacing between ticks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds a frame delta and reports whether a tick should run this frame.
    pub fn advance(&mut self, frame: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(frame);
        if self.accumulated < self.interval {
            return false;
        }

        self.accumulated -= self.interval;
        if self.accumulated >= self.interval {
            self.accumulated = self.interval;
        }
        true
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
