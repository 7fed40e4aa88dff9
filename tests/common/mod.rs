//! Shared helpers for integration tests.

#![allow(dead_code)]

use dog_engine::{Card, Cell, Dog, DogConfig, GameState, Marble, PlayerId};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber. Safe to call from every test.
///
/// Level comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

/// An engine whose state is an empty table with the given hand for seat 0.
pub fn game_with_hand(cards: &[Card]) -> (Dog, GameState) {
    init_tracing();
    let game = Dog::new(DogConfig::default()).expect("default config is valid");
    let mut state = GameState::empty_table();
    state.players[p(0)].hand = cards.iter().copied().collect();
    (game, state)
}

/// Put a marble of `seat` on a ring cell.
pub fn put(state: &mut GameState, seat: u8, idx: usize, cell: u8, safe: bool) {
    state.players[p(seat)].marbles[idx] = Marble::on(Cell::new(cell), safe);
}

/// Cells of all marbles, sorted.
pub fn marble_cells(state: &GameState) -> Vec<Cell> {
    let mut cells: Vec<Cell> = state
        .players
        .values()
        .flat_map(|pl| pl.marbles.iter().map(|m| m.pos))
        .collect();
    cells.sort();
    cells
}
