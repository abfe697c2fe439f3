//! Pits: the marble containers making up the board ring.
//!
//! ## PitId
//!
//! Stable handle for a pit: its index in the board's ring. All engine APIs
//! pass `PitId`s rather than pit references, so the board stays the single
//! owner of the pits.
//!
//! ## PitKind
//!
//! A store is a pit with an explicit `Store` tag rather than a separate type.
//! The traversal and capture logic branch on the tag, which keeps the rule
//! engine free of downcasts while letting stores share the whole container
//! contract.

use serde::{Deserialize, Serialize};

use crate::core::PlayerNumber;

use super::marble::Marble;

/// Handle for a pit: its position in the board ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitId(pub u32);

impl PitId {
    /// Create a pit id from a ring index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The ring index as a `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Whether a pit is a playable hollow or a player's store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitKind {
    /// A playable hollow on a player's row.
    Hollow,
    /// A player's scoring well.
    Store,
}

/// A mutable, ordered container of marbles belonging to one player.
///
/// Every mutation first snapshots the current count into
/// `previous_marble_count`. That snapshot is a presentation hint (it lets a
/// renderer animate "was N, now M"); the rules never consult it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pit {
    player: PlayerNumber,
    kind: PitKind,
    marbles: Vec<Marble>,
    previous_count: usize,
}

impl Pit {
    /// Create an empty playable hollow for the given player.
    #[must_use]
    pub fn new(player: PlayerNumber) -> Self {
        Self {
            player,
            kind: PitKind::Hollow,
            marbles: Vec::new(),
            previous_count: 0,
        }
    }

    /// Create an empty store for the given player.
    #[must_use]
    pub fn new_store(player: PlayerNumber) -> Self {
        Self {
            player,
            kind: PitKind::Store,
            marbles: Vec::new(),
            previous_count: 0,
        }
    }

    /// The owning player.
    #[must_use]
    pub const fn player(&self) -> PlayerNumber {
        self.player
    }

    /// The pit kind.
    #[must_use]
    pub const fn kind(&self) -> PitKind {
        self.kind
    }

    /// Whether this pit is a store.
    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self.kind, PitKind::Store)
    }

    /// The marbles currently held, in insertion order.
    #[must_use]
    pub fn marbles(&self) -> &[Marble] {
        &self.marbles
    }

    /// Number of marbles currently held.
    #[must_use]
    pub fn marble_count(&self) -> usize {
        self.marbles.len()
    }

    /// The count held immediately before the most recent mutation.
    #[must_use]
    pub const fn previous_marble_count(&self) -> usize {
        self.previous_count
    }

    /// Add a single marble.
    pub fn add(&mut self, marble: Marble) {
        self.previous_count = self.marbles.len();
        self.marbles.push(marble);
    }

    /// Add a batch of marbles as one mutation (one snapshot).
    pub fn add_all(&mut self, marbles: Vec<Marble>) {
        self.previous_count = self.marbles.len();
        self.marbles.extend(marbles);
    }

    /// Remove and return every marble.
    pub fn remove_all(&mut self) -> Vec<Marble> {
        self.previous_count = self.marbles.len();
        std::mem::take(&mut self.marbles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::marble::MarbleColour;

    fn marbles(count: usize) -> Vec<Marble> {
        (0..count)
            .map(|i| Marble::new(MarbleColour::from_index(i)))
            .collect()
    }

    #[test]
    fn test_constructor() {
        let pit = Pit::new(PlayerNumber::Two);
        assert_eq!(pit.player(), PlayerNumber::Two);
        assert_eq!(pit.kind(), PitKind::Hollow);
        assert!(!pit.is_store());
        assert_eq!(pit.marble_count(), 0);
    }

    #[test]
    fn test_store_constructor() {
        let store = Pit::new_store(PlayerNumber::One);
        assert!(store.is_store());
        assert_eq!(store.player(), PlayerNumber::One);
    }

    #[test]
    fn test_marble_count() {
        let mut pit = Pit::new(PlayerNumber::One);
        for _ in 0..5 {
            pit.add(Marble::new(MarbleColour::Blue));
        }
        assert_eq!(pit.marble_count(), 5);
    }

    #[test]
    fn test_marble_removal() {
        let mut pit = Pit::new(PlayerNumber::One);
        pit.add_all(marbles(5));

        let removed = pit.remove_all();
        assert_eq!(removed.len(), 5);
        assert_eq!(pit.marble_count(), 0);
    }

    #[test]
    fn test_previous_count_tracks_each_mutation() {
        let mut pit = Pit::new(PlayerNumber::One);
        assert_eq!(pit.previous_marble_count(), 0);

        pit.add(Marble::new(MarbleColour::Red));
        assert_eq!(pit.previous_marble_count(), 0);

        pit.add(Marble::new(MarbleColour::Green));
        assert_eq!(pit.previous_marble_count(), 1);

        pit.add_all(marbles(3));
        assert_eq!(pit.previous_marble_count(), 2);
        assert_eq!(pit.marble_count(), 5);

        pit.remove_all();
        assert_eq!(pit.previous_marble_count(), 5);
        assert_eq!(pit.marble_count(), 0);
    }

    #[test]
    fn test_add_all_is_one_snapshot() {
        let mut pit = Pit::new(PlayerNumber::One);
        pit.add(Marble::new(MarbleColour::Red));

        // A batch add must record a single "before" value, not one per marble.
        pit.add_all(marbles(4));
        assert_eq!(pit.previous_marble_count(), 1);
        assert_eq!(pit.marble_count(), 5);
    }
}
