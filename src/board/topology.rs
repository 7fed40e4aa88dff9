//! Board layout.
//!
//! 96 logical cells:
//!
//! - `0..64` the shared ring, wrapping modulo 64. Seat `p` enters the ring
//!   at its start cell `16 * p`.
//! - `64 + 8p .. 64 + 8p + 4` the kennel of seat `p`.
//! - `68 + 8p .. 68 + 8p + 4` the finish lane of seat `p`; lane index 0 is
//!   the cell entered first.
//!
//! Everything here is pure arithmetic. Which of the reachable cells a move
//! may actually use is decided by the action generator.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Cells on the shared ring.
pub const RING_SIZE: u8 = 64;

/// Ring cells between two neighbouring start cells.
pub const START_SPACING: u8 = 16;

/// Marbles (and kennel cells, and lane cells) per seat.
pub const MARBLES_PER_PLAYER: usize = 4;

const RESERVED_BASE: u8 = RING_SIZE;
const RESERVED_PER_PLAYER: u8 = 8;

/// Total logical cells.
pub const BOARD_SIZE: u8 = RING_SIZE + 4 * RESERVED_PER_PLAYER;

/// Cells passed and landed on by one move, landing cell last.
pub type Path = SmallVec<[Cell; 16]>;

/// A logical board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(pub u8);

impl Cell {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn is_ring(self) -> bool {
        self.0 < RING_SIZE
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < BOARD_SIZE
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What part of the board a cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Ring,
    Kennel(PlayerId),
    /// Finish lane of the seat, with the lane index (0 = entry).
    Finish(PlayerId, usize),
}

/// Classify a cell. `None` for indices past the board.
#[must_use]
pub fn zone_of(cell: Cell) -> Option<Zone> {
    if cell.is_ring() {
        return Some(Zone::Ring);
    }
    if !cell.is_valid() {
        return None;
    }
    let offset = cell.0 - RESERVED_BASE;
    let player = PlayerId::new(offset / RESERVED_PER_PLAYER);
    let slot = (offset % RESERVED_PER_PLAYER) as usize;
    if slot < MARBLES_PER_PLAYER {
        Some(Zone::Kennel(player))
    } else {
        Some(Zone::Finish(player, slot - MARBLES_PER_PLAYER))
    }
}

/// Ring cell where the seat's marbles enter play.
#[must_use]
pub const fn start_cell(player: PlayerId) -> Cell {
    Cell(START_SPACING * player.0)
}

/// The seat's kennel cells, lowest first.
#[must_use]
pub fn kennel_cells(player: PlayerId) -> [Cell; MARBLES_PER_PLAYER] {
    let base = RESERVED_BASE + RESERVED_PER_PLAYER * player.0;
    std::array::from_fn(|k| Cell(base + k as u8))
}

/// The seat's finish lane, entry cell first.
#[must_use]
pub fn finish_cells(player: PlayerId) -> [Cell; MARBLES_PER_PLAYER] {
    let base = RESERVED_BASE + RESERVED_PER_PLAYER * player.0 + MARBLES_PER_PLAYER as u8;
    std::array::from_fn(|k| Cell(base + k as u8))
}

/// Move along the ring. Negative steps move back.
#[must_use]
pub fn advance(cell: Cell, steps: i8) -> Cell {
    debug_assert!(cell.is_ring(), "advance called on reserved cell {cell}");
    let ring = i16::from(RING_SIZE);
    Cell((i16::from(cell.0) + i16::from(steps)).rem_euclid(ring) as u8)
}

/// Forward ring distance from `from` to `to` (0 when equal).
#[must_use]
pub fn distance_forward(from: Cell, to: Cell) -> u8 {
    (to.0 + RING_SIZE - from.0) % RING_SIZE
}

/// Ring cells passed and landed on when moving `steps` from `from`.
///
/// Excludes `from` itself; the landing cell is last.
#[must_use]
pub fn ring_path(from: Cell, steps: i8) -> Path {
    let dir: i8 = if steps < 0 { -1 } else { 1 };
    (1..=steps.unsigned_abs())
        .map(|k| advance(from, dir * k as i8))
        .collect()
}

/// Path into the owner's finish lane, if a forward move of `steps` can end there.
///
/// The marble must pass (or stand on) its owner's start cell with steps to
/// spare, and the spare steps must fit in the lane. A marble that has just
/// left the kennel (`fresh`) still stands on its start and needs a full lap.
/// The returned path lists the ring cells up to and including the start
/// cell, then the lane cells up to the landing cell.
#[must_use]
pub fn finish_path(owner: PlayerId, from: Cell, steps: u8, fresh: bool) -> Option<Path> {
    let start = start_cell(owner);
    if fresh && from == start {
        return None;
    }
    let to_start = distance_forward(from, start);
    if steps <= to_start {
        return None;
    }
    let lane_steps = (steps - to_start) as usize;
    if lane_steps > MARBLES_PER_PLAYER {
        return None;
    }

    let mut path = ring_path(from, to_start as i8);
    path.extend(finish_cells(owner).into_iter().take(lane_steps));
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_start_cells() {
        let starts: Vec<_> = PlayerId::all(4).map(|pl| start_cell(pl).0).collect();
        assert_eq!(starts, vec![0, 16, 32, 48]);
    }

    #[test]
    fn test_reserved_layout() {
        assert_eq!(kennel_cells(p(0)), [Cell(64), Cell(65), Cell(66), Cell(67)]);
        assert_eq!(finish_cells(p(0)), [Cell(68), Cell(69), Cell(70), Cell(71)]);
        assert_eq!(kennel_cells(p(3)), [Cell(88), Cell(89), Cell(90), Cell(91)]);
        assert_eq!(finish_cells(p(3))[3], Cell(95));
        assert_eq!(BOARD_SIZE, 96);
    }

    #[test]
    fn test_zone_of() {
        assert_eq!(zone_of(Cell(0)), Some(Zone::Ring));
        assert_eq!(zone_of(Cell(63)), Some(Zone::Ring));
        assert_eq!(zone_of(Cell(72)), Some(Zone::Kennel(p(1))));
        assert_eq!(zone_of(Cell(77)), Some(Zone::Finish(p(1), 1)));
        assert_eq!(zone_of(Cell(95)), Some(Zone::Finish(p(3), 3)));
        assert_eq!(zone_of(Cell(96)), None);
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        assert_eq!(advance(Cell(60), 7), Cell(3));
        assert_eq!(advance(Cell(2), -4), Cell(62));
        assert_eq!(advance(Cell(10), 13), Cell(23));
    }

    #[test]
    fn test_distance_forward() {
        assert_eq!(distance_forward(Cell(60), Cell(0)), 4);
        assert_eq!(distance_forward(Cell(5), Cell(5)), 0);
        assert_eq!(distance_forward(Cell(20), Cell(16)), 60);
    }

    #[test]
    fn test_ring_path() {
        let path = ring_path(Cell(62), 3);
        assert_eq!(path.as_slice(), &[Cell(63), Cell(0), Cell(1)]);

        let back = ring_path(Cell(1), -4);
        assert_eq!(back.as_slice(), &[Cell(0), Cell(63), Cell(62), Cell(61)]);
    }

    #[test]
    fn test_finish_path_enters_lane() {
        // Seat 1 starts at 16; from 14, 4 steps: 15, 16, lane 0, lane 1.
        let path = finish_path(p(1), Cell(14), 4, false).unwrap();
        assert_eq!(path.as_slice(), &[Cell(15), Cell(16), Cell(76), Cell(77)]);
    }

    #[test]
    fn test_finish_path_rejections() {
        // Not far enough to pass the start.
        assert!(finish_path(p(0), Cell(60), 4, false).is_none());
        // Overshoots the lane.
        assert!(finish_path(p(0), Cell(60), 9, false).is_none());
        // Fresh marble on its start needs a lap.
        assert!(finish_path(p(0), Cell(0), 2, true).is_none());
        // Marble that came round onto its start may go straight in.
        let path = finish_path(p(0), Cell(0), 2, false).unwrap();
        assert_eq!(path.as_slice(), &[Cell(68), Cell(69)]);
    }
}
