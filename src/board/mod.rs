//! Board topology and derived cell occupancy.

pub mod occupancy;
pub mod topology;

pub use occupancy::{MarbleRef, Occupancy};
pub use topology::{
    advance, distance_forward, finish_cells, finish_path, kennel_cells, ring_path, start_cell,
    zone_of, Cell, Path, Zone, BOARD_SIZE, MARBLES_PER_PLAYER, RING_SIZE,
};
