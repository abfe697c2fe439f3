//! Rule sets: the move-execution state machines for mancala variants.
//!
//! `RuleSet` is the seam the orchestrator works through; `EgyptianRules` is
//! the one variant shipped. Alternative variants implement the trait and plug
//! into `Game` unchanged.

pub mod egyptian;
pub mod engine;

pub use egyptian::EgyptianRules;
pub use engine::{GameEvent, RuleSet};
