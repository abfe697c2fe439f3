//! Player identification.
//!
//! Mancala is strictly a two-player game; `PlayerNumber` is the identifier
//! used by the board, the rule engine, the AI and the serialized state string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::MancalaError;

/// One of the two players.
///
/// The `Display`/`FromStr` pair produces the tokens used by the game state
/// string (`"One"` / `"Two"`), so the representation must not change without
/// versioning saved states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerNumber {
    /// Player one.
    One,
    /// Player two.
    Two,
}

impl PlayerNumber {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerNumber::One => PlayerNumber::Two,
            PlayerNumber::Two => PlayerNumber::One,
        }
    }

    /// Get the 0-based index of this player (used for per-player storage).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerNumber::One => 0,
            PlayerNumber::Two => 1,
        }
    }

    /// Both players, in turn order.
    #[must_use]
    pub const fn both() -> [PlayerNumber; 2] {
        [PlayerNumber::One, PlayerNumber::Two]
    }
}

impl fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerNumber::One => write!(f, "One"),
            PlayerNumber::Two => write!(f, "Two"),
        }
    }
}

impl FromStr for PlayerNumber {
    type Err = MancalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "One" => Ok(PlayerNumber::One),
            "Two" => Ok(PlayerNumber::Two),
            other => Err(MancalaError::InvalidStateString(format!(
                "unknown player token '{other}'"
            ))),
        }
    }
}
