//! Player state and player kinds.

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ConfigError;

/// Who makes a player's roll/hold decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Decisions come from an external actor.
    Human,
    /// Decisions come from the automated threshold rule.
    Computer,
}

impl PlayerKind {
    /// Returns the configuration name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Computer => "computer",
        }
    }
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    /// Parses `human` or `computer`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim();
        if kind.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if kind.eq_ignore_ascii_case("computer") {
            Ok(Self::Computer)
        } else {
            log::warn!("rejected player kind {kind:?}");
            Err(ConfigError::InvalidPlayerKind)
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player's identity and banked score.
///
/// Scores only ever grow during a match; they are cleared by the controller's
/// `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name, unique within a match.
    name: String,
    /// Banked score.
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the banked score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Adds banked points and returns the new score.
    pub(crate) const fn bank(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    pub(crate) const fn reset(&mut self) {
        self.score = 0;
    }
}
