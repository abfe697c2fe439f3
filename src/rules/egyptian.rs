//! The Egyptian rule set.
//!
//! Six hollows of four marbles per player. Landing the last marble in your
//! own store earns a replay; landing it in one of your own empty hollows
//! captures that marble plus everything in the opposing hollow. The game ends
//! as soon as either player's row is out of marbles.

use tracing::debug;

use crate::ai::{ComputerPlayer, ScoreFn};
use crate::board::{Board, PitId};
use crate::core::{BoardLayout, Difficulty, FinalScore, MancalaError, PlayerNumber};

use super::engine::{GameEvent, RuleSet};

/// The Egyptian variant: replay on a store landing, capture across the board
/// from your own empty hollow.
#[derive(Clone, Debug)]
pub struct EgyptianRules {
    current_player: PlayerNumber,
}

impl EgyptianRules {
    /// Board dimensions for this variant.
    pub const LAYOUT: BoardLayout = BoardLayout::new(6, 4);

    /// Create the rule set. Player one moves first until
    /// [`RuleSet::set_initial_player`] says otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_player: PlayerNumber::One,
        }
    }

    /// True once either player's open-play marbles have run out.
    fn game_over(&self, board: &Board) -> bool {
        board.score_for_player(PlayerNumber::One).remaining() == 0
            || board.score_for_player(PlayerNumber::Two).remaining() == 0
    }

    fn final_score(&self, board: &Board) -> FinalScore {
        FinalScore::new(
            board.score_for_player(PlayerNumber::One),
            board.score_for_player(PlayerNumber::Two),
        )
    }

    /// Perform the capture triggered by the last sown marble landing in the
    /// empty pit `last`: that marble and the mirror pit's marbles all move to
    /// the current player's store.
    fn capture(&self, board: &mut Board, last: PitId, adjacent: PitId) -> PitId {
        let store = board.players_store(self.current_player);

        // Combine through a scratch buffer so the store sees one mutation
        // and its previous-count snapshot stays meaningful.
        let mut captured = board.pit_mut(last).remove_all();
        captured.extend(board.pit_mut(adjacent).remove_all());
        board.pit_mut(store).add_all(captured);

        store
    }
}

impl Default for EgyptianRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for EgyptianRules {
    fn name(&self) -> &str {
        "Egyptian Rules"
    }

    fn description(&self) -> &str {
        "If a player drops the last stone from his hand into his mancala, he gets to move \
         again. If a player drops the last stone into one of the empty bowls on his side of \
         the board, he takes that stone, plus all the stones in the opponent's bowl directly \
         across from his bowl, and places them in his mancala. The game ends when one player \
         no longer has stones in his small bowls."
    }

    fn layout(&self) -> BoardLayout {
        Self::LAYOUT
    }

    fn current_player(&self) -> PlayerNumber {
        self.current_player
    }

    fn set_initial_player(&mut self, player: PlayerNumber) {
        self.current_player = player;
    }

    fn reset(&self, board: &mut Board) {
        // The layout constants are known-valid; failure here is a bug.
        board
            .initialise(Self::LAYOUT.hollows_per_player, Self::LAYOUT.marbles_per_hollow)
            .expect("egyptian board layout is valid");
    }

    fn make_move(
        &mut self,
        board: &mut Board,
        source: PitId,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), MancalaError> {
        let source_pit = board
            .get_pit(source)
            .ok_or_else(|| MancalaError::IllegalMove("no such pit on the board".to_string()))?;

        if source_pit.is_store() {
            return Err(MancalaError::IllegalMove(
                "a store cannot be played".to_string(),
            ));
        }

        if source_pit.marble_count() == 0 {
            return Err(MancalaError::IllegalMove(
                "source pit holds no marbles".to_string(),
            ));
        }

        let marbles = board.pit_mut(source).remove_all();
        debug!(
            player = %self.current_player,
            pit = source.index(),
            marbles = marbles.len(),
            "sowing"
        );

        let placements = board.next_pits(source, self.current_player, marbles.len());
        for (&target, marble) in placements.iter().zip(marbles) {
            board.pit_mut(target).add(marble);
        }

        events.push(GameEvent::BoardChanged(placements.to_vec()));

        if self.game_over(board) {
            events.push(GameEvent::GameComplete(self.final_score(board)));
            return Ok(());
        }

        let last = *placements
            .last()
            .expect("a non-empty sow visits at least one pit");

        // Landing in your own store earns a replay; the turn does not pass
        // and no capture is possible (a store is not a playable pit).
        if board.pit(last).is_store() {
            debug!(player = %self.current_player, "extra turn");
            events.push(GameEvent::PlayerHasAnotherTurn);
            return Ok(());
        }

        let mut completed = false;

        // A capture needs the last pit to have been empty before this sow
        // (it now holds exactly the one marble just placed) and the mirror
        // pit to be the opponent's with marbles to take.
        if board.pit(last).marble_count() == 1 {
            let adjacent = board.adjacent_pit(last);

            if board.pit(adjacent).player() != self.current_player
                && board.pit(adjacent).marble_count() > 0
            {
                let store = self.capture(board, last, adjacent);
                debug!(
                    player = %self.current_player,
                    captured = adjacent.index(),
                    "capture"
                );

                events.push(GameEvent::PitCaptured(adjacent));

                let mut changed = placements.to_vec();
                changed.extend([last, adjacent, store]);
                events.push(GameEvent::BoardChanged(changed));

                // The capture emptied a hollow, so the end-of-game test has
                // to run again.
                if self.game_over(board) {
                    events.push(GameEvent::GameComplete(self.final_score(board)));
                    completed = true;
                }
            }
        }

        if !completed {
            self.current_player = self.current_player.opponent();
            events.push(GameEvent::PlayerChanged(self.current_player));
        }

        Ok(())
    }

    fn create_ai_player(&self, player: PlayerNumber, level: Difficulty) -> ComputerPlayer {
        ComputerPlayer::new(player, level, scoring_for(level))
    }
}

/// Difficulty-to-heuristic mapping for this variant.
fn scoring_for(level: Difficulty) -> ScoreFn {
    match level {
        Difficulty::Easy => easy_score,
        Difficulty::Medium => medium_score,
        Difficulty::Hard => hard_score,
    }
}

/// Every playable pit is worth the same, so the AI takes the first legal pit.
fn easy_score(_board: &Board, _pit: PitId, _player: PlayerNumber) -> i32 {
    1
}

/// One point for any move, one more if the sow feeds the player's store.
fn medium_score(board: &Board, pit: PitId, player: PlayerNumber) -> i32 {
    let mut score = 1;

    let placements = board.next_pits(pit, player, board.pit(pit).marble_count());
    if placements.contains(&board.players_store(player)) {
        score += 1;
    }

    score
}

/// Weighted lookahead over the placement list: feeding the store is worth a
/// point, finishing in the store (a replay) five more, and finishing in one
/// of the player's own empty hollows is worth the capturable mirror count.
fn hard_score(board: &Board, pit: PitId, player: PlayerNumber) -> i32 {
    let mut score = 0;

    let placements = board.next_pits(pit, player, board.pit(pit).marble_count());
    if placements.contains(&board.players_store(player)) {
        score += 1;
    }

    let Some(&last) = placements.last() else {
        return score;
    };

    if board.pit(last).is_store() {
        score += 5;
    } else if board.pit(last).player() == player && board.pit(last).marble_count() == 0 {
        score += board.pit(board.adjacent_pit(last)).marble_count() as i32;
    }

    score
}
