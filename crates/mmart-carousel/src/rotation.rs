//! Auto-rotation timer driven by elapsed time.

use std::time::Duration;

/// Counts elapsed time toward the next automatic advance.
///
/// The timer owns no clock. The host calls [`advance`](Self::advance) with
/// the time since its last call and gets back how many intervals elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationTimer {
    interval: Duration,
    elapsed: Duration,
    armed: bool,
}

impl RotationTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            armed: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Stop counting and discard accumulated time.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed = Duration::ZERO;
    }

    /// Start a fresh interval.
    pub fn rearm(&mut self) {
        self.armed = true;
        self.elapsed = Duration::ZERO;
    }

    /// Add `dt` and return the number of completed intervals.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.armed || self.interval.is_zero() {
            return 0;
        }

        let total = self.elapsed.as_nanos() + dt.as_nanos();
        let interval = self.interval.as_nanos();
        let remainder = total % interval;
        self.elapsed = Duration::from_nanos(remainder as u64);
        u32::try_from(total / interval).unwrap_or(u32::MAX)
    }

    /// Time left until the next fire, if armed.
    pub fn remaining(&self) -> Option<Duration> {
        self.armed
            .then(|| self.interval.saturating_sub(self.elapsed))
    }
}
