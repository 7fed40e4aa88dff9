//! Cell occupancy derived from marble positions.
//!
//! Marble positions are the only source of truth. An [`Occupancy`] is built
//! from a state when needed and dropped afterwards; nothing ever updates it
//! in place.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::topology::{kennel_cells, Cell};
use crate::core::{GameState, Marble, PlayerId};

/// Identifies one marble: its owner and its slot in the owner's marble list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleRef {
    pub owner: PlayerId,
    pub index: usize,
}

impl MarbleRef {
    #[must_use]
    pub const fn new(owner: PlayerId, index: usize) -> Self {
        Self { owner, index }
    }
}

/// Snapshot of which marble sits on which cell.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    cells: FxHashMap<Cell, (MarbleRef, Marble)>,
}

impl Occupancy {
    /// Index every marble of the state by its cell.
    ///
    /// Duplicate positions are not detected here; see
    /// [`GameState::validate`].
    #[must_use]
    pub fn build(state: &GameState) -> Self {
        let mut cells = FxHashMap::default();
        for (owner, player) in state.players.iter() {
            for (index, marble) in player.marbles.iter().enumerate() {
                cells.insert(marble.pos, (MarbleRef::new(owner, index), *marble));
            }
        }
        Self { cells }
    }

    /// The marble on a cell, if any.
    #[must_use]
    pub fn at(&self, cell: Cell) -> Option<(MarbleRef, Marble)> {
        self.cells.get(&cell).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// True if a safe marble sits on the cell. Safe marbles block passage.
    #[must_use]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.cells.get(&cell).is_some_and(|(_, m)| m.is_safe)
    }

    /// Lowest kennel cell of the seat that no marble occupies.
    #[must_use]
    pub fn free_kennel_cell(&self, player: PlayerId) -> Option<Cell> {
        kennel_cells(player)
            .into_iter()
            .find(|cell| !self.is_occupied(*cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::start_cell;

    #[test]
    fn test_fresh_state_has_full_kennels() {
        let state = GameState::empty_table();
        let occ = Occupancy::build(&state);

        for player in PlayerId::all(4) {
            assert!(occ.free_kennel_cell(player).is_none());
            assert!(!occ.is_occupied(start_cell(player)));
        }
        let (marble_ref, marble) = occ.at(Cell::new(73)).unwrap();
        assert_eq!(marble_ref, MarbleRef::new(PlayerId::new(1), 1));
        assert!(!marble.is_safe);
    }

    #[test]
    fn test_safe_marble_blocks() {
        let mut state = GameState::empty_table();
        let p2 = PlayerId::new(2);
        state.players[p2].marbles[0] = Marble::on(start_cell(p2), true);
        state.players[p2].marbles[1] = Marble::on(Cell::new(40), false);

        let occ = Occupancy::build(&state);
        assert!(occ.is_blocked(Cell::new(32)));
        assert!(occ.is_occupied(Cell::new(40)));
        assert!(!occ.is_blocked(Cell::new(40)));
        assert_eq!(occ.free_kennel_cell(p2), Some(Cell::new(80)));
    }
}
