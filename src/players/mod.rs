//! Decision policies for seats.
//!
//! A policy sees the acting seat's masked view and the legal actions, and
//! picks one (or `None` to pass). Policies draw randomness only from the
//! stream they are handed, never from the deal stream.

mod random;

pub use random::RandomPlayer;

use crate::core::{Action, GameRng, GameState};

/// Chooses an action for the active seat.
pub trait ActionPolicy: Send + Sync {
    /// Pick one of `actions`, or `None` to pass.
    ///
    /// `state` is the view of the acting seat; opposing hands are face down.
    fn select_action(&self, state: &GameState, actions: &[Action], rng: &mut GameRng) -> Option<Action>;
}
