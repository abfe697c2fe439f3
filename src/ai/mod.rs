//! The computer opponent.
//!
//! A `ComputerPlayer` is a thin, deterministic move picker: it enumerates its
//! player's non-empty pits, scores each with the heuristic its rule set
//! selected for the difficulty level, and plays the first best-scoring pit.
//! All game knowledge lives in the scoring function; the picker itself never
//! changes between difficulties and holds no randomness.

use crate::board::{Board, PitId};
use crate::core::{Difficulty, MancalaError, PlayerNumber};

/// A move-scoring heuristic: higher is better.
///
/// Pure function of the board; implementations must not mutate anything, so
/// scoring a move is always side-effect free and repeatable.
pub type ScoreFn = fn(&Board, PitId, PlayerNumber) -> i32;

/// A computer player bound to one side of the board and one difficulty.
#[derive(Clone, Copy, Debug)]
pub struct ComputerPlayer {
    player: PlayerNumber,
    level: Difficulty,
    score: ScoreFn,
}

impl ComputerPlayer {
    /// Create a computer player using the given scoring heuristic.
    ///
    /// Rule sets construct these via `RuleSet::create_ai_player`, pairing the
    /// difficulty with their own heuristic table.
    #[must_use]
    pub fn new(player: PlayerNumber, level: Difficulty, score: ScoreFn) -> Self {
        Self {
            player,
            level,
            score,
        }
    }

    /// The side this player plays.
    #[must_use]
    pub const fn player(&self) -> PlayerNumber {
        self.player
    }

    /// The difficulty this player was built for.
    #[must_use]
    pub const fn level(&self) -> Difficulty {
        self.level
    }

    /// Pick the best-scoring legal pit for this player.
    ///
    /// Pits are considered in ring order and ties keep the earliest pit, so
    /// the choice is fully determined by the board state.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` if none of the player's pits hold marbles. Callers that
    /// run end-of-game detection before asking the AI to play never see this.
    pub fn play(&self, board: &Board) -> Result<PitId, MancalaError> {
        let mut best: Option<(PitId, i32)> = None;

        for &pit in board.players_pits(self.player) {
            if board.pit(pit).marble_count() == 0 {
                continue;
            }

            let score = (self.score)(board, pit, self.player);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((pit, score));
            }
        }

        best.map(|(pit, _)| pit).ok_or(MancalaError::NoLegalMove {
            player: self.player,
        })
    }
}
