//! Time-boxed matches with sudden-death tie breaking.
//!
//! A [`TimedMatch`] plays ordinary turns until its deadline passes. The
//! deadline is polled before each turn and before each decision within a
//! turn; a turn caught by the deadline is abandoned without banking. Once
//! time is up the leader wins, or, on a tie, play continues un-timed in sudden
//! death: each turn rolls until it either busts (the turn passes) or puts any
//! points on the table, which are banked at once and win the match.

use crate::clock::{Clock, Deadline};
use crate::die::RandomSource;
use crate::error::MatchError;
use crate::event::{MatchEvent, MatchObserver};
use crate::policy::{DecisionPolicy, Policy};
use crate::result::{MatchResult, WinReason};

use super::flow::TurnMode;
use super::turn::TurnEnd;
use super::{Match, MatchState};

/// A [`Match`] played against a clock.
///
/// ```
/// use core::time::Duration;
/// use pigrs::{Automated, Die, Match, MatchOptions, NoopObserver, Player, SystemClock, TimedMatch};
///
/// let options = MatchOptions::default().with_time_limit(Duration::from_secs(60));
/// let inner = Match::new(
///     options,
///     [Player::new("Ann"), Player::new("Bob")],
///     [Automated::new(&options), Automated::new(&options)],
/// );
/// let mut game = TimedMatch::new(inner, SystemClock::new());
/// let result = game.play(&mut Die::new(3), &mut NoopObserver);
/// assert!(result.winner.is_some());
/// ```
#[derive(Debug)]
pub struct TimedMatch<C, P = Policy> {
    inner: Match<P>,
    deadline: Deadline<C>,
    sudden_death: bool,
}

impl<C: Clock, P: DecisionPolicy> TimedMatch<C, P> {
    /// Wraps a match with a deadline of `options.time_limit` on `clock`.
    pub fn new(inner: Match<P>, clock: C) -> Self {
        let limit = inner.options.time_limit;
        Self {
            inner,
            deadline: Deadline::new(clock, limit),
            sudden_death: false,
        }
    }

    /// Returns the wrapped match.
    pub const fn inner(&self) -> &Match<P> {
        &self.inner
    }

    /// Returns the deadline.
    pub const fn deadline(&self) -> &Deadline<C> {
        &self.deadline
    }

    /// Returns whether the match is in sudden death.
    pub const fn in_sudden_death(&self) -> bool {
        self.sudden_death
    }

    /// Resets the wrapped match, leaves sudden death, and restarts the clock.
    pub fn reset(&mut self) {
        self.inner.reset();
        self.deadline.restart();
        self.sudden_death = false;
    }

    /// Plays one turn, checking the deadline first.
    ///
    /// When time is up on a tie, this enters sudden death and plays the
    /// current seat's sudden-death turn in the same call.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::AlreadyFinished`] if the match is over.
    pub fn play_turn<R, O>(
        &mut self,
        die: &mut R,
        observer: &mut O,
    ) -> Result<Option<MatchResult>, MatchError>
    where
        R: RandomSource + ?Sized,
        O: MatchObserver + ?Sized,
    {
        if self.inner.state() == MatchState::Finished {
            return Err(MatchError::AlreadyFinished);
        }

        if !self.sudden_death && self.deadline.expired() {
            if let Some(result) = self.time_up(observer) {
                return Ok(Some(result));
            }
        }
        if self.sudden_death {
            return Ok(self.sudden_death_turn(die, observer));
        }

        let deadline = &mut self.deadline;
        let outcome = self
            .inner
            .run_turn(TurnMode::Normal, die, observer, || deadline.expired());
        match outcome.end {
            TurnEnd::Held => {
                self.inner.bank(outcome.banked_points, false, observer);
                Ok(self.inner.settle_target(observer))
            }
            TurnEnd::Busted => Ok(self.inner.settle_target(observer)),
            TurnEnd::Abandoned { .. } => {
                if let Some(result) = self.time_up(observer) {
                    return Ok(Some(result));
                }
                Ok(self.sudden_death_turn(die, observer))
            }
        }
    }

    /// Plays until the target is reached or the clock resolves the match.
    ///
    /// A finished match is reset first. The clock restarts whenever play
    /// begins from a fresh match.
    pub fn play<R, O>(&mut self, die: &mut R, observer: &mut O) -> MatchResult
    where
        R: RandomSource + ?Sized,
        O: MatchObserver + ?Sized,
    {
        if self.inner.state() == MatchState::Finished {
            self.inner.reset();
            self.sudden_death = false;
        }
        if self.inner.turns_played() == 0 {
            self.deadline.restart();
        }
        log::info!(
            "timed match start: {} vs {}, limit {:?}",
            self.inner.players[0].name(),
            self.inner.players[1].name(),
            self.deadline.limit()
        );

        loop {
            if let Ok(Some(result)) = self.play_turn(die, observer) {
                return result;
            }
        }
    }

    /// Resolves an expired clock: the leader wins, a tie enters sudden death.
    fn time_up<O: MatchObserver + ?Sized>(&mut self, observer: &mut O) -> Option<MatchResult> {
        log::info!(
            "time limit reached after {} turns",
            self.inner.turns_played()
        );
        observer.notify(&MatchEvent::TimeUp);

        if let Some(seat) = self.inner.leader() {
            return Some(self.inner.finish(seat, WinReason::TimeExpired, observer));
        }

        let score = self.inner.players[0].score();
        log::info!("scores tied at {score}, entering sudden death");
        self.sudden_death = true;
        self.inner.state = MatchState::AwaitingTurn;
        observer.notify(&MatchEvent::SuddenDeath { score });
        None
    }

    /// Plays one un-timed sudden-death turn for the current seat.
    fn sudden_death_turn<R, O>(&mut self, die: &mut R, observer: &mut O) -> Option<MatchResult>
    where
        R: RandomSource + ?Sized,
        O: MatchObserver + ?Sized,
    {
        let outcome = self
            .inner
            .run_turn(TurnMode::SuddenDeath, die, observer, || false);
        if outcome.end == TurnEnd::Held {
            self.inner.bank(outcome.banked_points, true, observer);
            if let Some(seat) = self.inner.leader() {
                return Some(self.inner.finish(seat, WinReason::SuddenDeath, observer));
            }
        }
        self.inner.advance();
        None
    }
}
