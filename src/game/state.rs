//! Match state types.

/// Match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting for the current player to start a turn.
    AwaitingTurn,
    /// A turn is being played.
    TurnInProgress,
    /// The match is over; only `reset` leaves this state.
    Finished,
}
