//! A Pig dice game engine with optional `no_std` support.
//!
//! Two players take turns rolling a die, adding each face to a turn total.
//! Rolling a one busts the turn and loses the total; holding banks it. The
//! first player to bank [`MatchOptions::target_score`] points wins.
//!
//! [`Match`] drives an ordinary game. [`TimedMatch`] adds a wall-clock limit:
//! when it runs out the leader wins, and a tie is settled by sudden death.
//! Decisions come from a [`DecisionPolicy`], either the [`Automated`] threshold
//! rule or an [`Interactive`] policy backed by any [`DecisionActor`].
//!
//! # Example
//!
//! ```
//! use pigrs::{Die, Match, MatchOptions, NoopObserver, Player, PlayerKind, Policy};
//!
//! let options = MatchOptions::default();
//! let policy = |kind: PlayerKind| {
//!     Policy::from_kind(kind, &options, || {
//!         |_: &pigrs::DecisionRequest<'_>| String::from("h")
//!     })
//! };
//! let mut game = Match::new(
//!     options,
//!     [Player::new("Player 1"), Player::new("Player 2")],
//!     [policy(PlayerKind::Computer), policy(PlayerKind::Computer)],
//! );
//! let result = game.play(&mut Die::new(42), &mut NoopObserver);
//! assert!(result.final_scores.iter().any(|&score| score >= 100));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod clock;
pub mod die;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod policy;
pub mod result;

// Re-export main types
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, Deadline};
pub use die::{Die, RandomSource};
pub use error::{ConfigError, DecisionInputError, MatchError};
pub use event::{MatchEvent, MatchObserver, NoopObserver};
pub use game::{Match, MatchState, TimedMatch, TurnEnd, TurnOutcome, execute_turn};
pub use options::MatchOptions;
pub use player::{Player, PlayerKind};
pub use policy::{
    Automated, Decision, DecisionActor, DecisionContext, DecisionPolicy, DecisionRequest,
    Interactive, Policy,
};
pub use result::{MatchResult, WinReason};
