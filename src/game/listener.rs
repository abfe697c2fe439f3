//! The listener contract consumed by a presentation layer.
//!
//! Listeners receive the engine's notifications synchronously, on the thread
//! that made the move, in registration order. Every method has an empty
//! default body so receivers only override the callbacks they care about.

use crate::board::PitId;
use crate::core::{FinalScore, PlayerNumber};

/// Handle returned by `Game::add_listener`, used to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Receiver for game notifications.
#[allow(unused_variables)]
pub trait GameListener {
    /// A new game has started.
    fn on_new_game(&mut self) {}

    /// A saved game has been restored.
    fn on_game_restored(&mut self) {}

    /// The listed pits changed and their display should be refreshed, in
    /// order. Fired once per sow and again per capture.
    fn on_board_changed(&mut self, changed_pits: &[PitId]) {}

    /// The turn passed to `new_player`. Fired exactly once per move that
    /// ends the turn; never fired on extra-turn or game-ending moves.
    fn on_player_changed(&mut self, new_player: PlayerNumber) {}

    /// The current player earned a replay. Fired instead of
    /// `on_player_changed`.
    fn on_player_has_another_turn(&mut self) {}

    /// The opponent's `captured_pit` was emptied by a capture.
    fn on_pit_captured(&mut self, captured_pit: PitId) {}

    /// The game ended. Terminal for the current game.
    fn on_game_complete(&mut self, score: FinalScore) {}
}
