//! The rule-engine capability trait and its notification vocabulary.
//!
//! A rule set owns move legality, sowing, captures, turn order and
//! end-of-game detection. It never talks to listeners directly: each
//! operation appends `GameEvent`s to a caller-supplied buffer, and the
//! orchestrator fans them out in order. That keeps rule sets free of any
//! reference back into the game that owns them.

use serde::{Deserialize, Serialize};

use crate::ai::ComputerPlayer;
use crate::board::{Board, PitId};
use crate::core::{BoardLayout, Difficulty, FinalScore, MancalaError, PlayerNumber};

/// A notification produced while executing a game operation.
///
/// Events appear in the buffer in the exact order they occurred; receivers
/// may rely on that ordering (e.g. a capture's `BoardChanged` always follows
/// its `PitCaptured`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game has started.
    NewGame,
    /// A saved game has been restored.
    GameRestored,
    /// The listed pits changed and should be re-read, in order.
    BoardChanged(Vec<PitId>),
    /// The turn passed to the given player.
    PlayerChanged(PlayerNumber),
    /// The current player earned a replay; the turn does not pass.
    PlayerHasAnotherTurn,
    /// The opponent's pit was emptied by a capture.
    PitCaptured(PitId),
    /// The game ended with the given score. Terminal for the game.
    GameComplete(FinalScore),
}

/// A swappable mancala rule set.
///
/// The engine is rule-set-agnostic: the orchestrator owns the board and the
/// listeners, and delegates every rules decision here. Implementations hold
/// only their own turn state (`current_player`); the board is passed into
/// each call.
pub trait RuleSet {
    /// Short display name of the variant.
    fn name(&self) -> &str;

    /// Player-facing description of the variant's rules.
    fn description(&self) -> &str;

    /// The board dimensions this variant plays on.
    fn layout(&self) -> BoardLayout;

    /// The player whose turn it is.
    fn current_player(&self) -> PlayerNumber;

    /// Set the player to move next. Used for the new-game coin flip and when
    /// restoring a saved game.
    fn set_initial_player(&mut self, player: PlayerNumber);

    /// Re-initialise the board to this variant's starting position,
    /// discarding whatever was on it.
    fn reset(&self, board: &mut Board);

    /// Execute a move from `source` for the current player.
    ///
    /// Runs the full move state machine (sow, capture check, extra-turn
    /// check, player switch, end-of-game check), appending notifications to
    /// `events`. On error the board is untouched and no events are appended.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if `source` is not a playable, non-empty pit of this
    /// board.
    fn make_move(
        &mut self,
        board: &mut Board,
        source: PitId,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), MancalaError>;

    /// Build a computer player for this variant at the given difficulty.
    fn create_ai_player(&self, player: PlayerNumber, level: Difficulty) -> ComputerPlayer;
}
