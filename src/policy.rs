//! Roll/hold decision policies.
//!
//! A [`DecisionPolicy`] is consulted before every step of a turn. Two
//! policies ship with the crate: [`Automated`], a deterministic threshold
//! rule, and [`Interactive`], which forwards each request to an external
//! [`DecisionActor`] (a terminal, a test harness, a remote client) and asks
//! again until it gets a valid answer. [`Policy`] is the closed set of the two,
//! built from a [`PlayerKind`] by [`Policy::from_kind`].

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::DecisionInputError;
use crate::options::MatchOptions;
use crate::player::PlayerKind;

/// A single step decision within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Roll the die again.
    Roll,
    /// Bank the turn total and end the turn.
    Hold,
}

impl FromStr for Decision {
    type Err = DecisionInputError;

    /// Parses `r` or `h`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("r") {
            Ok(Self::Roll)
        } else if token.eq_ignore_ascii_case("h") {
            Ok(Self::Hold)
        } else {
            Err(DecisionInputError::Unrecognized)
        }
    }
}

/// What a policy sees when asked to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionContext<'a> {
    /// Name of the deciding player.
    pub player: &'a str,
    /// The deciding player's banked score.
    pub own_score: u32,
    /// Points accumulated so far this turn.
    pub turn_total: u32,
    /// The opponent's banked score.
    pub opponent_score: u32,
}

/// Chooses whether to roll or hold.
pub trait DecisionPolicy {
    /// Decides the next step of the current turn.
    fn decide(&mut self, context: &DecisionContext<'_>) -> Decision;
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    fn decide(&mut self, context: &DecisionContext<'_>) -> Decision {
        (**self).decide(context)
    }
}

/// Deterministic threshold policy.
///
/// Holds once the turn total reaches `min(hold_cap, target_score - own_score)`,
/// so it grows more conservative as it nears the target. The threshold never
/// drops below 1, so every turn rolls at least once.
///
/// ```
/// use pigrs::{Automated, Decision, DecisionContext, DecisionPolicy, MatchOptions};
///
/// let mut policy = Automated::new(&MatchOptions::default());
/// let context = DecisionContext {
///     player: "cpu",
///     own_score: 80,
///     turn_total: 20,
///     opponent_score: 0,
/// };
/// assert_eq!(policy.decide(&context), Decision::Hold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Automated {
    target_score: u32,
    hold_cap: u32,
}

impl Automated {
    /// Creates an automated policy for the given options.
    #[must_use]
    pub const fn new(options: &MatchOptions) -> Self {
        Self {
            target_score: options.target_score,
            hold_cap: options.hold_cap,
        }
    }

    /// Returns the turn total at which this policy holds.
    #[must_use]
    pub fn hold_at(&self, own_score: u32) -> u32 {
        let remaining = self.target_score.saturating_sub(own_score);
        self.hold_cap.min(remaining).max(1)
    }
}

impl DecisionPolicy for Automated {
    fn decide(&mut self, context: &DecisionContext<'_>) -> Decision {
        if context.turn_total >= self.hold_at(context.own_score) {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }
}

/// A request presented to an external actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionRequest<'a> {
    /// The state the decision is about.
    pub context: DecisionContext<'a>,
    /// Whether the previous response to this request was rejected.
    pub retry: bool,
}

/// An external source of raw roll/hold responses.
///
/// Implemented for any `FnMut(&DecisionRequest<'_>) -> String`.
pub trait DecisionActor {
    /// Returns the actor's raw response to a request. Blocks as long as needed.
    fn respond(&mut self, request: &DecisionRequest<'_>) -> String;
}

impl<F> DecisionActor for F
where
    F: FnMut(&DecisionRequest<'_>) -> String,
{
    fn respond(&mut self, request: &DecisionRequest<'_>) -> String {
        self(request)
    }
}

/// Policy that asks an external actor, re-asking until the response parses.
pub struct Interactive {
    actor: Box<dyn DecisionActor>,
}

impl Interactive {
    /// Wraps an actor.
    #[must_use]
    pub fn new(actor: impl DecisionActor + 'static) -> Self {
        Self {
            actor: Box::new(actor),
        }
    }
}

impl fmt::Debug for Interactive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactive").finish_non_exhaustive()
    }
}

impl DecisionPolicy for Interactive {
    fn decide(&mut self, context: &DecisionContext<'_>) -> Decision {
        let mut request = DecisionRequest {
            context: *context,
            retry: false,
        };
        loop {
            let response = self.actor.respond(&request);
            match response.parse() {
                Ok(decision) => return decision,
                Err(err) => {
                    log::warn!("{}: {err}, got {:?}", context.player, response.trim());
                    request.retry = true;
                }
            }
        }
    }
}

/// The closed set of policies a player can be configured with.
#[derive(Debug)]
pub enum Policy {
    /// Asks an external actor.
    Interactive(Interactive),
    /// Follows the threshold rule.
    Automated(Automated),
}

impl Policy {
    /// Builds the policy for a player kind.
    ///
    /// `make_actor` is only invoked for [`PlayerKind::Human`].
    ///
    /// ```
    /// use pigrs::{MatchOptions, PlayerKind, Policy};
    ///
    /// let kind: PlayerKind = "Computer".parse().unwrap();
    /// let policy = Policy::from_kind(kind, &MatchOptions::default(), || {
    ///     |_: &pigrs::DecisionRequest<'_>| String::from("h")
    /// });
    /// assert!(matches!(policy, Policy::Automated(_)));
    /// ```
    pub fn from_kind<A, F>(kind: PlayerKind, options: &MatchOptions, make_actor: F) -> Self
    where
        A: DecisionActor + 'static,
        F: FnOnce() -> A,
    {
        match kind {
            PlayerKind::Human => Self::Interactive(Interactive::new(make_actor())),
            PlayerKind::Computer => Self::Automated(Automated::new(options)),
        }
    }

    /// Returns the kind this policy was built for.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        match self {
            Self::Interactive(_) => PlayerKind::Human,
            Self::Automated(_) => PlayerKind::Computer,
        }
    }
}

impl DecisionPolicy for Policy {
    fn decide(&mut self, context: &DecisionContext<'_>) -> Decision {
        match self {
            Self::Interactive(policy) => policy.decide(context),
            Self::Automated(policy) => policy.decide(context),
        }
    }
}

/// Forced sudden-death play: roll until any points are on the table, then bank.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SuddenDeath;

impl DecisionPolicy for SuddenDeath {
    fn decide(&mut self, context: &DecisionContext<'_>) -> Decision {
        if context.turn_total >= 1 {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    const fn context(own_score: u32, turn_total: u32) -> DecisionContext<'static> {
        DecisionContext {
            player: "p",
            own_score,
            turn_total,
            opponent_score: 0,
        }
    }

    #[test]
    fn parses_decision_tokens() {
        assert_eq!("r".parse(), Ok(Decision::Roll));
        assert_eq!(" H \n".parse(), Ok(Decision::Hold));
        assert_eq!(
            "roll".parse::<Decision>(),
            Err(DecisionInputError::Unrecognized)
        );
        assert_eq!(
            "".parse::<Decision>(),
            Err(DecisionInputError::Unrecognized)
        );
    }

    #[test]
    fn automated_threshold_shrinks_near_target() {
        let mut policy = Automated::new(&MatchOptions::default());
        assert_eq!(policy.hold_at(0), 25);
        assert_eq!(policy.hold_at(80), 20);
        assert_eq!(policy.hold_at(99), 1);
        assert_eq!(policy.decide(&context(80, 19)), Decision::Roll);
        assert_eq!(policy.decide(&context(80, 20)), Decision::Hold);
        assert_eq!(policy.decide(&context(0, 24)), Decision::Roll);
        assert_eq!(policy.decide(&context(0, 25)), Decision::Hold);
    }

    #[test]
    fn automated_always_rolls_once() {
        let mut policy = Automated::new(&MatchOptions::default().with_hold_cap(0));
        assert_eq!(policy.hold_at(0), 1);
        assert_eq!(policy.decide(&context(0, 0)), Decision::Roll);
        assert_eq!(policy.decide(&context(0, 2)), Decision::Hold);

        let policy = Automated::new(&MatchOptions::default().with_target_score(0));
        assert_eq!(policy.hold_at(0), 1);
    }

    #[test]
    fn automated_ignores_opponent_score() {
        let mut policy = Automated::new(&MatchOptions::default());
        for opponent_score in [0, 50, 99] {
            let ctx = DecisionContext {
                opponent_score,
                ..context(80, 19)
            };
            assert_eq!(policy.decide(&ctx), Decision::Roll);
        }
    }

    #[test]
    fn interactive_reprompts_until_valid() {
        let mut answers: Vec<&str> = vec!["x", "maybe", "R"];
        answers.reverse();
        let mut retries = Vec::new();
        let mut policy = Interactive::new(move |request: &DecisionRequest<'_>| {
            retries.push(request.retry);
            assert_eq!(retries.len() > 1, request.retry);
            String::from(answers.pop().unwrap_or("h"))
        });
        assert_eq!(policy.decide(&context(0, 0)), Decision::Roll);
    }

    #[test]
    fn factory_only_builds_actor_for_humans() {
        let options = MatchOptions::default();
        let unused = || -> fn(&DecisionRequest<'_>) -> String {
            panic!("actor should not be built for computer players")
        };
        let policy = Policy::from_kind(PlayerKind::Computer, &options, unused);
        assert_eq!(policy.kind(), PlayerKind::Computer);

        let policy = Policy::from_kind(PlayerKind::Human, &options, || {
            |_: &DecisionRequest<'_>| String::from("h")
        });
        assert_eq!(policy.kind(), PlayerKind::Human);
    }

    #[test]
    fn sudden_death_banks_first_points() {
        let mut policy = SuddenDeath;
        assert_eq!(policy.decide(&context(50, 0)), Decision::Roll);
        assert_eq!(policy.decide(&context(50, 1)), Decision::Hold);
        assert_eq!(policy.decide(&context(50, 6)), Decision::Hold);
    }
}
