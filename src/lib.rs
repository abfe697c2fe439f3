//! # mancala-core
//!
//! A rules engine for two-player mancala plus a heuristic computer opponent.
//!
//! ## Design Principles
//!
//! 1. **The engine owns the state**: the board, move legality, captures,
//!    extra turns, termination and scoring all live here. Rendering and
//!    input are someone else's problem, reached only through the
//!    [`GameListener`] notification contract.
//!
//! 2. **Rule sets are swappable**: [`Game`] drives any [`RuleSet`]
//!    implementation. [`EgyptianRules`] is the variant shipped; others plug
//!    in without touching the orchestrator.
//!
//! 3. **Deterministic by default**: moves, AI choices and tie-breaks are
//!    pure functions of board state. The only random decision (who goes
//!    first) draws from a seedable RNG.
//!
//! ## Architecture
//!
//! ```text
//! Game::make_move(pit)
//!   └─> RuleSet::make_move       sow, capture, extra turn, end of game
//!         └─> Board queries/mutations
//!   └─> listeners                synchronous fan-out, registration order
//!   └─> state snapshot           flat tab-delimited save string
//! ```
//!
//! ## Modules
//!
//! - `core`: players, configuration, scores, errors, RNG
//! - `board`: marbles, pits, the ring, traversal and adjacency
//! - `rules`: the `RuleSet` trait, its events, the Egyptian rule set
//! - `ai`: the difficulty-driven computer opponent
//! - `game`: the orchestrator, listeners, save/restore

pub mod ai;
pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardLayout, Difficulty, FinalScore, GameMode, GameResult, GameRng, MancalaError,
    PlayerNumber, PlayerScore,
};

pub use crate::board::{Board, Marble, MarbleColour, Pit, PitId, PitKind, Placements};

pub use crate::rules::{EgyptianRules, GameEvent, RuleSet};

pub use crate::ai::{ComputerPlayer, ScoreFn};

pub use crate::game::{Game, GameListener, ListenerId};
