//! The game orchestrator.
//!
//! `Game` binds a board to a rule set, owns the listener registry, and is the
//! only public entry point for playing: moves go in, notifications fan out,
//! and after every completed move the serialized state snapshot is refreshed.
//!
//! ## State string
//!
//! The save format is a flat tab-delimited string:
//!
//! ```text
//! <GameMode> \t <Difficulty> \t <CurrentPlayer> \t <count pit 0> \t ... \t
//! ```
//!
//! with pit counts in ring order and a trailing delimiter. Restoring parses
//! and validates the whole string before touching any state, so a rejected
//! string leaves the game exactly as it was.

pub mod listener;

pub use listener::{GameListener, ListenerId};

use tracing::{info, warn};

use crate::ai::ComputerPlayer;
use crate::board::{Board, Marble, MarbleColour, PitId};
use crate::core::{Difficulty, GameMode, GameRng, MancalaError, PlayerNumber};
use crate::rules::{GameEvent, RuleSet};

/// Fully parsed, validated content of a state string.
struct ParsedState {
    mode: GameMode,
    difficulty: Difficulty,
    player: PlayerNumber,
    counts: Vec<usize>,
}

/// The game orchestrator: board + rule set + listeners.
///
/// Single-threaded by design; every operation runs to completion on the
/// calling thread before returning, and nothing here is shared between
/// concurrent games.
pub struct Game {
    board: Board,
    rules: Option<Box<dyn RuleSet>>,
    listeners: Vec<(ListenerId, Box<dyn GameListener>)>,
    next_listener_id: u64,
    mode: GameMode,
    difficulty: Difficulty,
    player_two: Option<ComputerPlayer>,
    saved_state: Option<String>,
    rng: GameRng,
}

const STATE_DELIMITER: char = '\t';

impl Game {
    /// Create a game with the default coin-flip seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a game whose first-player coin flips draw from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            board: Board::new(),
            rules: None,
            listeners: Vec::new(),
            next_listener_id: 0,
            mode: GameMode::TwoPlayer,
            difficulty: Difficulty::Easy,
            player_two: None,
            saved_state: None,
            rng: GameRng::new(seed),
        }
    }

    /// The board in play.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, for fixtures and tooling.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Attach the rule set this game plays by.
    pub fn set_rule_set(&mut self, rules: Box<dyn RuleSet>) {
        self.rules = Some(rules);
    }

    /// The attached rule set, if any.
    #[must_use]
    pub fn rule_set(&self) -> Option<&dyn RuleSet> {
        self.rules.as_deref()
    }

    /// The player whose turn it is, once a rule set is attached.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerNumber> {
        self.rules.as_ref().map(|rules| rules.current_player())
    }

    /// The current game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The current difficulty level.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The computer player for player two, present in one-player mode.
    #[must_use]
    pub fn player_two(&self) -> Option<&ComputerPlayer> {
        self.player_two.as_ref()
    }

    /// Start a new game in the given mode and difficulty.
    ///
    /// In one-player mode, builds a computer opponent for player two at the
    /// given difficulty. The board is reseeded through the rule set and
    /// `on_new_game` fires.
    ///
    /// # Errors
    ///
    /// `NoRuleSet` if no rule set has been attached.
    pub fn new_game(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
    ) -> Result<(), MancalaError> {
        let rules = self.rules.as_ref().ok_or(MancalaError::NoRuleSet)?;

        self.player_two = match mode {
            GameMode::OnePlayer => Some(rules.create_ai_player(PlayerNumber::Two, difficulty)),
            GameMode::TwoPlayer => None,
        };

        self.mode = mode;
        self.difficulty = difficulty;
        rules.reset(&mut self.board);
        self.saved_state = None;

        info!(%mode, %difficulty, "new game");
        self.dispatch(&[GameEvent::NewGame]);
        Ok(())
    }

    /// Flip a coin for who moves first and tell the rule set.
    ///
    /// # Errors
    ///
    /// `NoRuleSet` if no rule set has been attached.
    pub fn flip_for_first_player(&mut self) -> Result<PlayerNumber, MancalaError> {
        let rules = self.rules.as_mut().ok_or(MancalaError::NoRuleSet)?;

        let player = if self.rng.gen_range(0..10) % 2 == 0 {
            PlayerNumber::One
        } else {
            PlayerNumber::Two
        };

        rules.set_initial_player(player);
        Ok(player)
    }

    /// Play the given pit for the current player.
    ///
    /// Delegates to the rule set, fans the resulting notifications out to
    /// listeners in registration order, then refreshes the serialized
    /// snapshot. On error nothing is dispatched and the snapshot is
    /// untouched.
    ///
    /// # Errors
    ///
    /// `NoRuleSet` if no rule set has been attached; `IllegalMove` from the
    /// rule set for a bad source pit.
    pub fn make_move(&mut self, pit: PitId) -> Result<(), MancalaError> {
        let rules = self.rules.as_mut().ok_or(MancalaError::NoRuleSet)?;

        let mut events = Vec::new();
        rules.make_move(&mut self.board, pit, &mut events)?;

        self.dispatch(&events);
        self.saved_state = Some(self.serialize_state()?);
        Ok(())
    }

    /// Register a listener; it receives every subsequent notification, after
    /// all listeners registered before it.
    pub fn add_listener(&mut self, listener: Box<dyn GameListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregister a listener. Unknown or already-removed ids are a no-op.
    ///
    /// Returns whether a listener was removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// The serialized state of the game.
    ///
    /// Snapshots are taken after every completed move; between moves this
    /// returns the cached snapshot, computing one lazily if none exists yet.
    ///
    /// # Errors
    ///
    /// `NoRuleSet` if no rule set has been attached.
    pub fn game_state(&mut self) -> Result<String, MancalaError> {
        if let Some(state) = &self.saved_state {
            return Ok(state.clone());
        }

        let state = self.serialize_state()?;
        self.saved_state = Some(state.clone());
        Ok(state)
    }

    /// Restore the game from a serialized state string.
    ///
    /// The string is fully parsed and validated first; on any failure the
    /// game is left exactly as it was and `InvalidStateString` is returned.
    /// On success the board is reseeded and refilled, the current player and
    /// mode/difficulty are restored, the computer opponent is rebuilt for
    /// one-player mode, and `on_game_restored` fires.
    ///
    /// # Errors
    ///
    /// `NoRuleSet` if no rule set has been attached; `InvalidStateString` if
    /// the string does not parse against the rule set's layout.
    pub fn restore_game_state(&mut self, state: &str) -> Result<(), MancalaError> {
        let rules = self.rules.as_ref().ok_or(MancalaError::NoRuleSet)?;
        let expected_pits = rules.layout().total_pits();

        let parsed = match Self::parse_state(state, expected_pits) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(%error, "rejected game state string");
                return Err(error);
            }
        };

        let rules = self
            .rules
            .as_mut()
            .expect("rule set presence checked above");
        rules.reset(&mut self.board);
        rules.set_initial_player(parsed.player);

        for (index, &count) in parsed.counts.iter().enumerate() {
            let pit = self.board.pit_mut(PitId::new(index as u32));
            pit.remove_all();
            for marble_index in 0..count {
                pit.add(Marble::new(MarbleColour::from_index(marble_index)));
            }
        }

        self.player_two = match parsed.mode {
            GameMode::OnePlayer => {
                Some(rules.create_ai_player(PlayerNumber::Two, parsed.difficulty))
            }
            GameMode::TwoPlayer => None,
        };
        self.mode = parsed.mode;
        self.difficulty = parsed.difficulty;

        self.saved_state = Some(self.serialize_state()?);
        self.dispatch(&[GameEvent::GameRestored]);
        Ok(())
    }

    fn parse_state(state: &str, expected_pits: usize) -> Result<ParsedState, MancalaError> {
        if state.is_empty() {
            return Err(MancalaError::InvalidStateString(
                "empty state string".to_string(),
            ));
        }

        // The serialized form carries a trailing delimiter; drop it before
        // splitting so the last count does not gain an empty segment.
        let trimmed = state.strip_suffix(STATE_DELIMITER).unwrap_or(state);
        let segments: Vec<&str> = trimmed.split(STATE_DELIMITER).collect();

        let expected_segments = expected_pits + 3;
        if segments.len() != expected_segments {
            return Err(MancalaError::InvalidStateString(format!(
                "expected {expected_segments} segments, found {}",
                segments.len()
            )));
        }

        let mode: GameMode = segments[0].parse()?;
        let difficulty: Difficulty = segments[1].parse()?;
        let player: PlayerNumber = segments[2].parse()?;

        let counts = segments[3..]
            .iter()
            .map(|segment| {
                segment.parse::<usize>().map_err(|_| {
                    MancalaError::InvalidStateString(format!(
                        "invalid marble count '{segment}'"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedState {
            mode,
            difficulty,
            player,
            counts,
        })
    }

    fn serialize_state(&self) -> Result<String, MancalaError> {
        let rules = self.rules.as_ref().ok_or(MancalaError::NoRuleSet)?;

        let mut state = String::new();
        state.push_str(&self.mode.to_string());
        state.push(STATE_DELIMITER);
        state.push_str(&self.difficulty.to_string());
        state.push(STATE_DELIMITER);
        state.push_str(&rules.current_player().to_string());
        state.push(STATE_DELIMITER);

        for pit in self.board.pits() {
            state.push_str(&pit.marble_count().to_string());
            state.push(STATE_DELIMITER);
        }

        Ok(state)
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            for (_, listener) in &mut self.listeners {
                match event {
                    GameEvent::NewGame => listener.on_new_game(),
                    GameEvent::GameRestored => listener.on_game_restored(),
                    GameEvent::BoardChanged(pits) => listener.on_board_changed(pits),
                    GameEvent::PlayerChanged(player) => listener.on_player_changed(*player),
                    GameEvent::PlayerHasAnotherTurn => listener.on_player_has_another_turn(),
                    GameEvent::PitCaptured(pit) => listener.on_pit_captured(*pit),
                    GameEvent::GameComplete(score) => listener.on_game_complete(*score),
                }
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
