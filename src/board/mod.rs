//! The board: a fixed ring of pits plus per-player lookups.
//!
//! ## Ring layout
//!
//! Pits are held in play order: player one's row, player one's store, player
//! two's row, player two's store. The ring order is fixed at initialisation;
//! every `PitId` is an index into it.
//!
//! ## Traversal
//!
//! `next_pits` is the one place wraparound and the "skip the opponent's
//! store" rule live. Everything downstream (captures, extra turns, the AI
//! heuristics) is expressed in terms of the placement list it returns.

pub mod marble;
pub mod pit;

pub use marble::{Marble, MarbleColour};
pub use pit::{Pit, PitId, PitKind};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::{MancalaError, PlayerNumber, PlayerScore};

/// The ordered pit ids a single sow will drop marbles into.
///
/// Sows are almost always shorter than a full lap of a standard board, so the
/// list stays on the stack.
pub type Placements = SmallVec<[PitId; 16]>;

/// The mancala board: the ring of all pits and the per-player views over it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pits: Vec<Pit>,
    rows: [Vec<PitId>; 2],
    stores: [Option<PitId>; 2],
    hollows_per_player: usize,
}

impl Board {
    /// Create an empty, uninitialised board.
    ///
    /// Call [`Board::initialise`] before using any query; most accessors
    /// panic on an uninitialised board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)build the ring: each player's row of `hollows_per_player` pits
    /// seeded with `marbles_per_hollow` marbles, followed by that player's
    /// empty store.
    ///
    /// Safe to call repeatedly; every call discards all prior state.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `hollows_per_player` is zero.
    pub fn initialise(
        &mut self,
        hollows_per_player: usize,
        marbles_per_hollow: usize,
    ) -> Result<(), MancalaError> {
        if hollows_per_player < 1 {
            return Err(MancalaError::InvalidConfiguration(
                "hollows_per_player cannot be less than 1".to_string(),
            ));
        }

        self.clear();
        self.hollows_per_player = hollows_per_player;

        for player in PlayerNumber::both() {
            self.build_row(player, hollows_per_player, marbles_per_hollow);

            let store_id = PitId::new(self.pits.len() as u32);
            self.pits.push(Pit::new_store(player));
            self.stores[player.index()] = Some(store_id);
        }

        Ok(())
    }

    /// Empty the ring and both per-player views.
    pub fn clear(&mut self) {
        self.pits.clear();
        self.rows = [Vec::new(), Vec::new()];
        self.stores = [None, None];
        self.hollows_per_player = 0;
    }

    fn build_row(&mut self, player: PlayerNumber, hollows: usize, marbles_per_hollow: usize) {
        for _ in 0..hollows {
            let id = PitId::new(self.pits.len() as u32);
            let mut pit = Pit::new(player);

            for marble_index in 0..marbles_per_hollow {
                pit.add(Marble::new(MarbleColour::from_index(marble_index)));
            }

            self.pits.push(pit);
            self.rows[player.index()].push(id);
        }
    }

    /// Number of playable hollows on each player's row.
    #[must_use]
    pub fn hollows_per_player(&self) -> usize {
        self.hollows_per_player
    }

    /// The full ring in fixed play order.
    #[must_use]
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    /// All pit ids in ring order.
    pub fn pit_ids(&self) -> impl Iterator<Item = PitId> + '_ {
        (0..self.pits.len() as u32).map(PitId::new)
    }

    /// Get a pit by id, or `None` for an id outside the ring.
    #[must_use]
    pub fn get_pit(&self, id: PitId) -> Option<&Pit> {
        self.pits.get(id.index())
    }

    /// Get a pit by id.
    ///
    /// # Panics
    ///
    /// Panics if the id is outside the ring.
    #[must_use]
    pub fn pit(&self, id: PitId) -> &Pit {
        &self.pits[id.index()]
    }

    /// Get a pit mutably by id.
    ///
    /// # Panics
    ///
    /// Panics if the id is outside the ring.
    pub fn pit_mut(&mut self, id: PitId) -> &mut Pit {
        &mut self.pits[id.index()]
    }

    /// Ids of every pit matching the predicate, in ring order.
    pub fn pits_where(&self, predicate: impl Fn(&Pit) -> bool) -> Vec<PitId> {
        self.pit_ids()
            .filter(|&id| predicate(self.pit(id)))
            .collect()
    }

    /// Id of the first pit matching the predicate, in ring order.
    pub fn first_pit(&self, predicate: impl Fn(&Pit) -> bool) -> Option<PitId> {
        self.pit_ids().find(|&id| predicate(self.pit(id)))
    }

    /// The given player's playable row, in ring order.
    #[must_use]
    pub fn players_pits(&self, player: PlayerNumber) -> &[PitId] {
        &self.rows[player.index()]
    }

    /// The given player's store.
    ///
    /// # Panics
    ///
    /// Panics if the board has not been initialised.
    #[must_use]
    pub fn players_store(&self, player: PlayerNumber) -> PitId {
        self.stores[player.index()].expect("board has not been initialised")
    }

    /// The pit directly across the board from a playable pit.
    ///
    /// Row position `i` mirrors to position `rowLength - 1 - i` on the other
    /// row, so the mapping is a bijection between the two rows (and applying
    /// it twice returns the original pit).
    ///
    /// # Panics
    ///
    /// Panics if `id` refers to a store; stores have no mirror.
    #[must_use]
    pub fn adjacent_pit(&self, id: PitId) -> PitId {
        let pit = self.pit(id);
        assert!(!pit.is_store(), "a store has no adjacent pit");

        let row = self.players_pits(pit.player());
        let adjacent_row = self.players_pits(pit.player().opponent());

        let position = row
            .iter()
            .position(|&p| p == id)
            .expect("playable pit is missing from its owner's row");

        adjacent_row[row.len() - 1 - position]
    }

    /// The `count` pits a sow from `from` will visit, in visitation order.
    ///
    /// Walks the ring circularly starting immediately after `from`, skipping
    /// any store that does not belong to `current_player`. Returns an empty
    /// list when `from` is a store: stores are never a sowing source.
    #[must_use]
    pub fn next_pits(&self, from: PitId, current_player: PlayerNumber, count: usize) -> Placements {
        let mut placements = Placements::new();

        if self.pit(from).is_store() {
            return placements;
        }

        let mut index = from.index();

        while placements.len() < count {
            index = (index + 1) % self.pits.len();

            let pit = &self.pits[index];
            if pit.is_store() && pit.player() != current_player {
                continue;
            }

            placements.push(PitId::new(index as u32));
        }

        placements
    }

    /// Current score for a player: open-play marbles summed across the row,
    /// store marbles read from the store.
    #[must_use]
    pub fn score_for_player(&self, player: PlayerNumber) -> PlayerScore {
        let mut remaining = 0;
        let mut in_store = 0;

        for pit in &self.pits {
            if pit.player() != player {
                continue;
            }

            if pit.is_store() {
                in_store = pit.marble_count();
            } else {
                remaining += pit.marble_count();
            }
        }

        PlayerScore::new(remaining, in_store)
    }
}

impl fmt::Display for Board {
    /// Renders both rows with player two's reversed, the way the board sits
    /// in front of player one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_counts = |player: PlayerNumber| -> Vec<usize> {
            self.players_pits(player)
                .iter()
                .map(|&id| self.pit(id).marble_count())
                .collect()
        };

        let mut top = row_counts(PlayerNumber::Two);
        top.reverse();
        let bottom = row_counts(PlayerNumber::One);

        writeln!(f, "      {:?}", top)?;
        writeln!(
            f,
            "[{:2}]{}[{:2}]",
            self.pit(self.players_store(PlayerNumber::Two)).marble_count(),
            " ".repeat(top.len() * 3 + 4),
            self.pit(self.players_store(PlayerNumber::One)).marble_count(),
        )?;
        write!(f, "      {:?}", bottom)
    }
}
