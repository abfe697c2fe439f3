//! Core types shared across the engine: players, configuration, scoring,
//! errors and deterministic RNG.
//!
//! Nothing here knows about the board ring or the rules; these are the
//! vocabulary the other modules speak.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod score;

pub use config::{BoardLayout, Difficulty, GameMode};
pub use error::MancalaError;
pub use player::PlayerNumber;
pub use rng::GameRng;
pub use score::{FinalScore, GameResult, PlayerScore};
