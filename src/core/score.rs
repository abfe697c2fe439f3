//! Final scoring snapshots.
//!
//! `PlayerScore` and `FinalScore` are computed once from board queries when a
//! game ends and never mutated afterwards. The winner is derived at
//! construction time by comparing totals; it is never recomputed.

use serde::{Deserialize, Serialize};

use super::player::PlayerNumber;

/// One player's share of the final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    remaining: usize,
    in_store: usize,
}

impl PlayerScore {
    /// Create a score from the open-play and store counts.
    #[must_use]
    pub const fn new(remaining: usize, in_store: usize) -> Self {
        Self {
            remaining,
            in_store,
        }
    }

    /// Marbles still sitting in the player's playable hollows.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Marbles banked in the player's store.
    #[must_use]
    pub const fn in_store(&self) -> usize {
        self.in_store
    }

    /// Total score: store plus open play.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.in_store + self.remaining
    }
}

/// The outcome of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Player1Wins,
    Player2Wins,
    Draw,
}

/// The final score of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    result: GameResult,
    player1: PlayerScore,
    player2: PlayerScore,
}

impl FinalScore {
    /// Build the final score and derive the result from the two totals.
    #[must_use]
    pub fn new(player1: PlayerScore, player2: PlayerScore) -> Self {
        let result = if player1.total() == player2.total() {
            GameResult::Draw
        } else if player1.total() > player2.total() {
            GameResult::Player1Wins
        } else {
            GameResult::Player2Wins
        };

        Self {
            result,
            player1,
            player2,
        }
    }

    /// The derived game result.
    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }

    /// The score for the requested player.
    #[must_use]
    pub const fn score_for(&self, player: PlayerNumber) -> PlayerScore {
        match player {
            PlayerNumber::One => self.player1,
            PlayerNumber::Two => self.player2,
        }
    }
}
