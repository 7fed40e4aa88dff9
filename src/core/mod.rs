//! Core engine types: seats, state, actions, RNG, configuration and errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{DogConfig, DEFAULT_HAND_SIZES, PLAYER_COUNT};
pub use error::{DogError, IllegalReason};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GamePhase, GameState, Hand, Marble, PlayerState};
