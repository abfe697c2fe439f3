//! Game-level configuration: mode, difficulty, and per-rule-set board layout.
//!
//! The board dimensions are *not* crate-level constants. Each rule set
//! declares its own `BoardLayout` so alternative variants (different hollow
//! counts or seedings) can be slotted in without touching the engine.
//!
//! `GameMode` and `Difficulty` round-trip through `Display`/`FromStr` because
//! their tokens are embedded in the serialized game state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::MancalaError;

/// Whether player two is a human or the computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Single player versus the computer.
    OnePlayer,
    /// Two humans sharing the board.
    TwoPlayer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::OnePlayer => write!(f, "OnePlayer"),
            GameMode::TwoPlayer => write!(f, "TwoPlayer"),
        }
    }
}

impl FromStr for GameMode {
    type Err = MancalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OnePlayer" => Ok(GameMode::OnePlayer),
            "TwoPlayer" => Ok(GameMode::TwoPlayer),
            other => Err(MancalaError::InvalidStateString(format!(
                "unknown game mode token '{other}'"
            ))),
        }
    }
}

/// Difficulty level for the computer opponent.
///
/// Selects the scoring heuristic a rule set hands to its AI player; it has no
/// effect on the rules themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = MancalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(MancalaError::InvalidStateString(format!(
                "unknown difficulty token '{other}'"
            ))),
        }
    }
}

/// Board dimensions declared by a rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Playable hollows on each player's row (excludes the store).
    pub hollows_per_player: usize,
    /// Marbles seeded into each hollow at the start of a game.
    pub marbles_per_hollow: usize,
}

impl BoardLayout {
    /// Create a layout.
    #[must_use]
    pub const fn new(hollows_per_player: usize, marbles_per_hollow: usize) -> Self {
        Self {
            hollows_per_player,
            marbles_per_hollow,
        }
    }

    /// Total pits on the board: both rows plus the two stores.
    #[must_use]
    pub const fn total_pits(&self) -> usize {
        self.hollows_per_player * 2 + 2
    }

    /// Total marbles in play for the whole game.
    #[must_use]
    pub const fn total_marbles(&self) -> usize {
        self.hollows_per_player * self.marbles_per_hollow * 2
    }
}
