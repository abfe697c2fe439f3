//! Marbles: the tokens sown around the board.
//!
//! A marble's colour is cosmetic. It exists so a presentation layer can draw
//! varied pieces; no rule ever reads it.

use serde::{Deserialize, Serialize};

/// The fixed set of marble colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarbleColour {
    Red,
    Green,
    Blue,
    Yellow,
}

impl MarbleColour {
    /// All colours, in cycling order.
    pub const ALL: [MarbleColour; 4] = [
        MarbleColour::Red,
        MarbleColour::Green,
        MarbleColour::Blue,
        MarbleColour::Yellow,
    ];

    /// Colour for the given marble index, cycling through the fixed set.
    ///
    /// Used wherever pits are filled with freshly created marbles (board
    /// seeding and state restore) so a refilled board looks varied.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// An immutable colour-tagged token.
///
/// Marbles are created when a pit is seeded or refilled and move wholesale
/// between pits on every sow and capture; they carry no other state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marble {
    colour: MarbleColour,
}

impl Marble {
    /// Create a marble with the given colour.
    #[must_use]
    pub const fn new(colour: MarbleColour) -> Self {
        Self { colour }
    }

    /// The marble's colour.
    #[must_use]
    pub const fn colour(&self) -> MarbleColour {
        self.colour
    }
}
