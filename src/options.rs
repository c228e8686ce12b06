//! Match configuration options.

use core::time::Duration;

/// Score that wins an un-timed match.
pub const DEFAULT_TARGET_SCORE: u32 = 100;

/// Turn total at which the automated policy holds when far from the target.
pub const DEFAULT_HOLD_CAP: u32 = 25;

/// Wall-clock limit for timed matches.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Configuration options for a Pig match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use pigrs::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_target_score(50)
///     .with_hold_cap(20)
///     .with_time_limit(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Score at which a player wins once a turn banks it.
    pub target_score: u32,
    /// Upper bound on the automated policy's holding threshold.
    pub hold_cap: u32,
    /// Time limit used by timed matches.
    pub time_limit: Duration,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            hold_cap: DEFAULT_HOLD_CAP,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

impl MatchOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use pigrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_target_score(50);
    /// assert_eq!(options.target_score, 50);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Sets the automated policy's hold cap.
    ///
    /// # Example
    ///
    /// ```
    /// use pigrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_hold_cap(20);
    /// assert_eq!(options.hold_cap, 20);
    /// ```
    #[must_use]
    pub const fn with_hold_cap(mut self, hold_cap: u32) -> Self {
        self.hold_cap = hold_cap;
        self
    }

    /// Sets the time limit for timed matches.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use pigrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_time_limit(Duration::from_secs(5));
    /// assert_eq!(options.time_limit, Duration::from_secs(5));
    /// ```
    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }
}
