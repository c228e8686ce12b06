//! Error types for match setup and play.

use thiserror::Error;

/// Errors that can occur while configuring a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player kind is not one of `human` or `computer`.
    #[error("invalid player kind (expected `human` or `computer`)")]
    InvalidPlayerKind,
}

/// Errors produced when parsing a response from an interactive actor.
///
/// The interactive policy recovers from this locally by asking again, so it
/// never escapes a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionInputError {
    /// Response was neither `r` nor `h`.
    #[error("unrecognized decision (expected `r` to roll or `h` to hold)")]
    Unrecognized,
}

/// Errors that can occur while driving a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The match has already finished; call `reset` to start over.
    #[error("match has already finished")]
    AlreadyFinished,
}
