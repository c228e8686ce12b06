use crate::die::RandomSource;
use crate::error::MatchError;
use crate::event::MatchObserver;
use crate::policy::{DecisionPolicy, SuddenDeath};
use crate::result::{MatchResult, WinReason};

use super::turn::{TurnEnd, TurnOutcome, execute_turn_until};
use super::{Match, MatchState};

/// Which policy drives a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TurnMode {
    /// The seat's own policy.
    Normal,
    /// Forced sudden-death play.
    SuddenDeath,
}

impl<P: DecisionPolicy> Match<P> {
    /// Plays one turn for the current seat.
    ///
    /// Returns `Ok(Some(result))` if the turn ended the match and `Ok(None)`
    /// if play passes to the other seat.
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
        if self.state == MatchState::Finished {
            return Err(MatchError::AlreadyFinished);
        }

        let outcome = self.run_turn(TurnMode::Normal, die, observer, || false);
        if outcome.end == TurnEnd::Held {
            self.bank(outcome.banked_points, false, observer);
        }
        Ok(self.settle_target(observer))
    }

    /// Plays turns until a player reaches the target score.
    ///
    /// A finished match is reset first, so calling `play` repeatedly replays
    /// from zero.
    pub fn play<R, O>(&mut self, die: &mut R, observer: &mut O) -> MatchResult
    where
        R: RandomSource + ?Sized,
        O: MatchObserver + ?Sized,
    {
        if self.state == MatchState::Finished {
            self.reset();
        }
        log::info!(
            "match start: {} vs {}, target {}",
            self.players[0].name(),
            self.players[1].name(),
            self.options.target_score
        );

        loop {
            if let Ok(Some(result)) = self.play_turn(die, observer) {
                return result;
            }
        }
    }

    /// Runs one turn for the current seat without applying its outcome.
    pub(super) fn run_turn<R, O, F>(
        &mut self,
        mode: TurnMode,
        die: &mut R,
        observer: &mut O,
        interrupted: F,
    ) -> TurnOutcome
    where
        R: RandomSource + ?Sized,
        O: MatchObserver + ?Sized,
        F: FnMut() -> bool,
    {
        self.begin_turn(observer);
        let seat = self.current;
        let player = &self.players[seat];
        let opponent = &self.players[1 - seat];
        let mut forced = SuddenDeath;
        let policy: &mut dyn DecisionPolicy = match mode {
            TurnMode::Normal => &mut self.policies[seat],
            TurnMode::SuddenDeath => &mut forced,
        };
        execute_turn_until(player, opponent, policy, die, observer, interrupted)
    }

    /// Finishes the match if the current seat reached the target, otherwise
    /// passes the turn.
    pub(super) fn settle_target<O: MatchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Option<MatchResult> {
        let seat = self.current;
        if self.players[seat].score() >= self.options.target_score {
            Some(self.finish(seat, WinReason::TargetReached, observer))
        } else {
            self.advance();
            None
        }
    }
}
