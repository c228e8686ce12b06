//! Match result types.

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// A player banked enough points to reach the target score.
    TargetReached,
    /// The clock ran out and one player was ahead.
    TimeExpired,
    /// The clock ran out on a tie and a sudden-death turn broke it.
    SuddenDeath,
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Seat index (0 or 1) of the winner.
    ///
    /// Always `Some` for matches that finish through this crate's controllers.
    pub winner: Option<usize>,
    /// Both players' scores when the match ended, by seat.
    pub final_scores: [u32; 2],
    /// How the match was decided.
    pub reason: WinReason,
    /// Number of turns started, including busted and abandoned ones.
    pub turns: u32,
}

impl MatchResult {
    /// Returns the loser's seat index.
    #[must_use]
    pub fn loser(&self) -> Option<usize> {
        self.winner.map(|seat| 1 - seat)
    }
}
