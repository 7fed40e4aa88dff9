//! # dog-engine
//!
//! Rules engine for Dog, the four-player marble race card game.
//!
//! Each seat owns four marbles that leave a private kennel onto a shared
//! ring of 64 cells, travel once around, and enter a private four-cell
//! finish lane. Cards from a shared 110-card double deck drive every move.
//!
//! ## Design Principles
//!
//! 1. **Single authority**: [`Dog`] owns the only live [`GameState`];
//!    callers get copies and inject snapshots through validation.
//!
//! 2. **All-or-nothing actions**: an action is fully validated against the
//!    generated legal set before anything changes.
//!
//! 3. **Deterministic**: the same seed deals the same game, and policy
//!    randomness never disturbs the deal stream.
//!
//! ## Architecture
//!
//! - **Rank table**: every rank maps to one [`MovePolicy`]; the generator
//!   dispatches on it in one place.
//!
//! - **Derived occupancy**: marble positions are the only record of the
//!   board; cell lookups are rebuilt on demand.
//!
//! - **Persistent piles**: draw and discard piles are `im` vectors, so
//!   snapshots are cheap.
//!
//! ## Modules
//!
//! - `core`: seats, state, actions, RNG, configuration and errors
//! - `cards`: cards, the double deck and per-rank movement rules
//! - `board`: cell layout, paths and occupancy
//! - `rules`: action generation, application and turn flow
//! - `players`: decision policies
//! - `game`: the [`Dog`] facade

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod players;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, DogConfig, DogError, GamePhase, GameRng, GameState, IllegalReason,
    Marble, PlayerId, PlayerMap, PlayerState,
};

pub use crate::cards::{Card, MovePolicy, Rank, Suit};

pub use crate::board::{Cell, MarbleRef, Occupancy, Zone};

pub use crate::rules::{list_actions, DogRules, RulesEngine};

pub use crate::players::{ActionPolicy, RandomPlayer};

pub use crate::game::Dog;
