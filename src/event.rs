//! Match notifications.
//!
//! Controllers report progress as [`MatchEvent`]s. Each event renders as the
//! status line shown to players through its `Display` impl.

use core::fmt;

use crate::result::WinReason;

/// Something observable that happened during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent<'a> {
    /// A player's turn begins.
    TurnStarted {
        /// Acting player.
        player: &'a str,
        /// Acting player's score.
        score: u32,
        /// Opponent.
        opponent: &'a str,
        /// Opponent's score.
        opponent_score: u32,
    },
    /// The die was rolled.
    Rolled {
        /// Acting player.
        player: &'a str,
        /// Face rolled.
        face: u8,
        /// Turn total after the roll; zero on a bust.
        turn_total: u32,
    },
    /// A one was rolled and the turn total was lost.
    Busted {
        /// Acting player.
        player: &'a str,
    },
    /// A turn total was added to a player's score.
    Banked {
        /// Acting player.
        player: &'a str,
        /// Points added.
        points: u32,
        /// Score after banking.
        score: u32,
        /// The bank was forced by sudden death rather than chosen.
        forced: bool,
    },
    /// The clock ran out mid-turn and the unbanked total was discarded.
    TurnAbandoned {
        /// Acting player.
        player: &'a str,
        /// Points that were on the table.
        discarded: u32,
    },
    /// The match clock ran out.
    TimeUp,
    /// Scores were tied when the clock ran out.
    SuddenDeath {
        /// The tied score.
        score: u32,
    },
    /// The match is over.
    Won {
        /// Winner.
        player: &'a str,
        /// Winner's score.
        score: u32,
        /// How the match was decided.
        reason: WinReason,
    },
}

impl fmt::Display for MatchEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TurnStarted {
                player,
                score,
                opponent,
                opponent_score,
            } => write!(
                f,
                "{player}'s turn. Scores: {player}={score}, {opponent}={opponent_score}"
            ),
            Self::Rolled {
                player,
                face,
                turn_total,
            } => {
                write!(f, "{player} rolled: {face}")?;
                if turn_total > 0 {
                    write!(f, ". Turn total now: {turn_total}")?;
                }
                Ok(())
            }
            Self::Busted { player } => write!(f, "{player} busts. Turn ends."),
            Self::Banked {
                player,
                score,
                forced,
                ..
            } => {
                if forced {
                    write!(f, "{player} holds due to sudden death. New score: {score}")
                } else {
                    write!(f, "{player} holds. New score: {score}")
                }
            }
            Self::TurnAbandoned { player, discarded } => {
                write!(f, "{player} ran out of time; lost {discarded} unbanked.")
            }
            Self::TimeUp => f.write_str("Time up."),
            Self::SuddenDeath { score } => {
                write!(f, "Tied at {score}. Next point wins sudden death.")
            }
            Self::Won {
                player,
                score,
                reason,
            } => match reason {
                WinReason::TargetReached => write!(f, "Winner: {player} with {score} points."),
                WinReason::TimeExpired => write!(f, "Leader {player} wins with {score} points."),
                WinReason::SuddenDeath => {
                    write!(f, "Sudden death winner: {player} with {score} points.")
                }
            },
        }
    }
}

/// Receives match notifications.
///
/// Implemented for any `FnMut(&MatchEvent<'_>)`; use [`NoopObserver`] to
/// ignore them.
pub trait MatchObserver {
    /// Called once per event, in order.
    fn notify(&mut self, event: &MatchEvent<'_>);
}

impl<F> MatchObserver for F
where
    F: FnMut(&MatchEvent<'_>),
{
    fn notify(&mut self, event: &MatchEvent<'_>) {
        self(event);
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn notify(&mut self, _event: &MatchEvent<'_>) {}
}
