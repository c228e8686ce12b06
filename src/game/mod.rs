//! Match controllers and turn execution.

use crate::event::{MatchEvent, MatchObserver};
use crate::options::MatchOptions;
use crate::player::Player;
use crate::policy::{DecisionPolicy, Policy};
use crate::result::{MatchResult, WinReason};

mod flow;
pub mod state;
pub mod timed;
pub mod turn;

pub use state::MatchState;
pub use timed::TimedMatch;
pub use turn::{TurnEnd, TurnOutcome, execute_turn, execute_turn_until};

/// A two-player Pig match that ends when a player reaches the target score.
///
/// The match owns both players and their policies. Players alternate turns,
/// starting with seat 0; call [`Match::reset`] before replaying.
#[derive(Debug)]
pub struct Match<P = Policy> {
    /// Match options.
    pub options: MatchOptions,
    /// Players by seat.
    players: [Player; 2],
    /// Decision policies by seat.
    policies: [P; 2],
    /// Seat whose turn it is.
    current: usize,
    /// Current match state.
    state: MatchState,
    /// Turns started since the last reset.
    turns: u32,
    /// Set once the match finishes.
    result: Option<MatchResult>,
}

impl<P: DecisionPolicy> Match<P> {
    /// Creates a match between two seated players.
    ///
    /// # Example
    ///
    /// ```
    /// use pigrs::{Automated, Match, MatchOptions, Player};
    ///
    /// let options = MatchOptions::default();
    /// let game = Match::new(
    ///     options,
    ///     [Player::new("Ann"), Player::new("Bob")],
    ///     [Automated::new(&options), Automated::new(&options)],
    /// );
    /// assert_eq!(game.current_player(), 0);
    /// ```
    #[must_use]
    pub const fn new(options: MatchOptions, players: [Player; 2], policies: [P; 2]) -> Self {
        Self {
            options,
            players,
            policies,
            current: 0,
            state: MatchState::AwaitingTurn,
            turns: 0,
            result: None,
        }
    }

    /// Clears both scores and returns to seat 0 awaiting a turn.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.current = 0;
        self.state = MatchState::AwaitingTurn;
        self.turns = 0;
        self.result = None;
    }

    /// Returns the current match state.
    pub const fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the seat index whose turn it is.
    pub const fn current_player(&self) -> usize {
        self.current
    }

    /// Returns both players by seat.
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player in `seat`, if it exists.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the number of turns started since the last reset.
    pub const fn turns_played(&self) -> u32 {
        self.turns
    }

    /// Returns the result once the match has finished.
    pub const fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Returns the winning player once the match has finished.
    pub fn winner(&self) -> Option<&Player> {
        self.result
            .and_then(|result| result.winner)
            .and_then(|seat| self.players.get(seat))
    }

    /// Returns the seat of the strictly higher score, or `None` on a tie.
    pub(crate) fn leader(&self) -> Option<usize> {
        let [a, b] = &self.players;
        match a.score().cmp(&b.score()) {
            core::cmp::Ordering::Greater => Some(0),
            core::cmp::Ordering::Less => Some(1),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// Marks the start of a turn for the current seat.
    fn begin_turn<O: MatchObserver + ?Sized>(&mut self, observer: &mut O) {
        self.state = MatchState::TurnInProgress;
        self.turns += 1;
        let player = &self.players[self.current];
        let opponent = &self.players[1 - self.current];
        observer.notify(&MatchEvent::TurnStarted {
            player: player.name(),
            score: player.score(),
            opponent: opponent.name(),
            opponent_score: opponent.score(),
        });
    }

    /// Adds a held turn total to the current seat's score.
    fn bank<O: MatchObserver + ?Sized>(&mut self, points: u32, forced: bool, observer: &mut O) {
        let player = &mut self.players[self.current];
        let score = player.bank(points);
        log::debug!("{} banks {points} -> {score}", player.name());
        observer.notify(&MatchEvent::Banked {
            player: player.name(),
            points,
            score,
            forced,
        });
    }

    /// Passes the turn to the other seat.
    const fn advance(&mut self) {
        self.current = 1 - self.current;
        self.state = MatchState::AwaitingTurn;
    }

    /// Ends the match in favour of `seat`.
    fn finish<O: MatchObserver + ?Sized>(
        &mut self,
        seat: usize,
        reason: WinReason,
        observer: &mut O,
    ) -> MatchResult {
        let result = MatchResult {
            winner: Some(seat),
            final_scores: [self.players[0].score(), self.players[1].score()],
            reason,
            turns: self.turns,
        };
        let winner = &self.players[seat];
        log::info!(
            "{} wins {}-{} ({reason:?}) after {} turns",
            winner.name(),
            winner.score(),
            self.players[1 - seat].score(),
            self.turns
        );
        observer.notify(&MatchEvent::Won {
            player: winner.name(),
            score: winner.score(),
            reason,
        });
        self.state = MatchState::Finished;
        self.result = Some(result);
        result
    }
}
