//! Wall-clock sources for timed matches.

use core::time::Duration;

/// A monotonic clock measuring time since it was last started.
pub trait Clock {
    /// Returns the time elapsed since the clock was created or restarted.
    fn elapsed(&mut self) -> Duration;

    /// Restarts the clock from zero.
    fn restart(&mut self);
}

/// Clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Creates a clock started now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn elapsed(&mut self) -> Duration {
        self.started.elapsed()
    }

    fn restart(&mut self) {
        self.started = std::time::Instant::now();
    }
}

/// A time limit polled against a [`Clock`].
#[derive(Debug, Clone)]
pub struct Deadline<C> {
    clock: C,
    limit: Duration,
}

impl<C: Clock> Deadline<C> {
    /// Creates a deadline `limit` after the clock's current start.
    pub const fn new(clock: C, limit: Duration) -> Self {
        Self { clock, limit }
    }

    /// Returns whether the limit has been reached.
    pub fn expired(&mut self) -> bool {
        self.clock.elapsed() >= self.limit
    }

    /// Restarts the underlying clock.
    pub fn restart(&mut self) {
        self.clock.restart();
    }

    /// Returns the configured limit.
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Returns the underlying clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}
