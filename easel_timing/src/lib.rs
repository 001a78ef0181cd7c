// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Timing: host-driven periodic timers.
//!
//! Easel never spawns threads or registers callbacks with a runtime. Instead,
//! the host owns the clock and calls `poll(now)` (usually from an animation
//! frame or an event-loop tick). [`Interval`] answers whether its period has
//! elapsed since the last firing.
//!
//! Time is an opaque monotonic [`Duration`] measured from any origin the host
//! chooses, which keeps tests deterministic: they simply pass increasing
//! timestamps.
//!
//! ## Semantics
//!
//! - [`Interval::start`] arms the timer; calling it while running is a no-op.
//! - [`Interval::restart`] re-arms from `now` whether or not it was running.
//! - [`Interval::stop`] disarms; it is safe to call when never started.
//! - [`Interval::poll`] fires at most once per call. If several periods were
//!   missed, they are coalesced into a single firing and the next deadline is
//!   one period after `now`.
//!
//! ```
//! use core::time::Duration;
//! use easel_timing::Interval;
//!
//! let mut interval = Interval::new(Duration::from_millis(30));
//! assert!(interval.start(Duration::ZERO));
//! assert!(!interval.poll(Duration::from_millis(10)));
//! assert!(interval.poll(Duration::from_millis(30)));
//! assert!(!interval.poll(Duration::from_millis(45)));
//! assert!(interval.poll(Duration::from_millis(60)));
//!
//! interval.stop();
//! assert!(!interval.poll(Duration::from_secs(10)));
//! ```

#![no_std]

use core::time::Duration;

/// A repeating deadline polled by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Option<Duration>,
}

impl Interval {
    /// Creates a stopped interval with the given period.
    ///
    /// A zero period fires on every poll while running.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// The firing period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Changes the period. A running interval keeps its current deadline.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Arms the interval so it first fires one period after `now`.
    ///
    /// Returns `false` (and leaves the deadline untouched) if it was already
    /// running.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now.saturating_add(self.period));
        true
    }

    /// Arms the interval from `now`, discarding any pending deadline.
    pub fn restart(&mut self, now: Duration) {
        self.next_due = Some(now.saturating_add(self.period));
    }

    /// Disarms the interval. Returns `true` if it was running.
    pub fn stop(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Returns `true` while armed.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// The next deadline, if armed.
    #[must_use]
    pub const fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// Returns `true` if the deadline has passed, re-arming for one period
    /// after `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now.saturating_add(self.period));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn stopped_interval_never_fires() {
        let mut interval = Interval::new(ms(30));
        assert!(!interval.is_running());
        assert!(!interval.poll(ms(1_000)));
    }

    #[test]
    fn start_is_idempotent() {
        let mut interval = Interval::new(ms(30));
        assert!(interval.start(ms(0)));
        assert!(!interval.start(ms(20)));
        assert_eq!(interval.next_due(), Some(ms(30)));
    }

    #[test]
    fn restart_moves_deadline() {
        let mut interval = Interval::new(ms(30));
        interval.start(ms(0));
        interval.restart(ms(20));
        assert!(!interval.poll(ms(30)));
        assert!(interval.poll(ms(50)));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut interval = Interval::new(ms(30));
        assert!(!interval.stop());
        interval.start(ms(0));
        assert!(interval.stop());
        assert!(!interval.stop());
        assert!(!interval.poll(ms(100)));
    }

    #[test]
    fn missed_periods_coalesce() {
        let mut interval = Interval::new(ms(10));
        interval.start(ms(0));
        assert!(interval.poll(ms(95)));
        assert!(!interval.poll(ms(100)));
        assert!(interval.poll(ms(105)));
    }

    #[test]
    fn zero_period_fires_each_poll() {
        let mut interval = Interval::new(Duration::ZERO);
        interval.start(ms(5));
        assert!(interval.poll(ms(5)));
        assert!(interval.poll(ms(5)));
    }
}
