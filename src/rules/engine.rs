//! Rules engine trait.
//!
//! The [`crate::Dog`] facade drives a game through this trait:
//! - what the active seat may do
//! - how an action (or a pass) changes the state
//! - who has won

use crate::core::{Action, DogError, GamePhase, GameRng, GameState, PlayerId};

/// Rules of a marble-race card game.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty when the active seat must pass
/// - `apply_action`: all-or-nothing; on error the state is unchanged
/// - `apply_action(None)`: a pass, never an error on a finished game
pub trait RulesEngine {
    /// All legal actions of the active seat, in a stable order.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action of the active seat, or pass with `None`.
    ///
    /// `rng` drives reshuffles when a new round is dealt.
    fn apply_action(&self, state: &mut GameState, rng: &mut GameRng, action: Option<&Action>) -> Result<(), DogError>;

    /// The winning seat, once the game is over.
    fn winner(&self, state: &GameState) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// True once no more actions can be played.
    fn is_terminal(&self, state: &GameState) -> bool {
        state.phase == GamePhase::Finished || self.winner(state).is_some()
    }
}
