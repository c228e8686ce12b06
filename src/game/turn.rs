//! Single-turn execution.

use crate::die::{BUST_FACE, RandomSource};
use crate::event::{MatchEvent, MatchObserver};
use crate::player::Player;
use crate::policy::{Decision, DecisionContext, DecisionPolicy};

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// The player chose to hold.
    Held,
    /// A one was rolled.
    Busted,
    /// The interrupt fired before the next decision.
    Abandoned {
        /// Unbanked points discarded with the turn.
        discarded: u32,
    },
}

/// Result of one turn, not yet applied to the player's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Points to add to the acting player's score; zero unless held.
    pub banked_points: u32,
    /// How the turn ended.
    pub end: TurnEnd,
}

impl TurnOutcome {
    /// Returns whether the turn busted.
    #[must_use]
    pub const fn busted(&self) -> bool {
        matches!(self.end, TurnEnd::Busted)
    }
}

/// Plays one turn for `player` until it holds or busts.
///
/// Scores are not touched; the caller applies [`TurnOutcome::banked_points`].
pub fn execute_turn<P, R, O>(
    player: &Player,
    opponent: &Player,
    policy: &mut P,
    die: &mut R,
    observer: &mut O,
) -> TurnOutcome
where
    P: DecisionPolicy + ?Sized,
    R: RandomSource + ?Sized,
    O: MatchObserver + ?Sized,
{
    execute_turn_until(player, opponent, policy, die, observer, || false)
}

/// Like [`execute_turn`], but polls `interrupted` before every decision and
/// abandons the turn, banking nothing, as soon as it returns `true`.
pub fn execute_turn_until<P, R, O, F>(
    player: &Player,
    opponent: &Player,
    policy: &mut P,
    die: &mut R,
    observer: &mut O,
    mut interrupted: F,
) -> TurnOutcome
where
    P: DecisionPolicy + ?Sized,
    R: RandomSource + ?Sized,
    O: MatchObserver + ?Sized,
    F: FnMut() -> bool,
{
    let name = player.name();
    let mut turn_total: u32 = 0;

    loop {
        if interrupted() {
            log::debug!("{name}: turn abandoned with {turn_total} unbanked");
            observer.notify(&MatchEvent::TurnAbandoned {
                player: name,
                discarded: turn_total,
            });
            return TurnOutcome {
                banked_points: 0,
                end: TurnEnd::Abandoned {
                    discarded: turn_total,
                },
            };
        }

        let context = DecisionContext {
            player: name,
            own_score: player.score(),
            turn_total,
            opponent_score: opponent.score(),
        };
        let decision = policy.decide(&context);
        log::debug!("{name}: {decision:?} at turn total {turn_total}");

        match decision {
            Decision::Roll => {
                let face = die.roll();
                if face == BUST_FACE {
                    observer.notify(&MatchEvent::Rolled {
                        player: name,
                        face,
                        turn_total: 0,
                    });
                    observer.notify(&MatchEvent::Busted { player: name });
                    return TurnOutcome {
                        banked_points: 0,
                        end: TurnEnd::Busted,
                    };
                }
                turn_total += u32::from(face);
                observer.notify(&MatchEvent::Rolled {
                    player: name,
                    face,
                    turn_total,
                });
            }
            Decision::Hold => {
                return TurnOutcome {
                    banked_points: turn_total,
                    end: TurnEnd::Held,
                };
            }
        }
    }
}
