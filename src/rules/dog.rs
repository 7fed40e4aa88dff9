//! The Dog rules.

use super::applier;
use super::engine::RulesEngine;
use super::generator::list_actions;
use crate::core::{Action, DogConfig, DogError, GameRng, GameState, PlayerId};

/// Dog rules with a hand size schedule.
#[derive(Clone, Debug)]
pub struct DogRules {
    hand_sizes: Vec<usize>,
}

impl DogRules {
    /// Rules for a validated configuration.
    pub fn new(config: &DogConfig) -> Result<Self, DogError> {
        config.validate()?;
        Ok(Self {
            hand_sizes: config.hand_sizes.clone(),
        })
    }

    #[must_use]
    pub fn hand_sizes(&self) -> &[usize] {
        &self.hand_sizes
    }
}

impl RulesEngine for DogRules {
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        list_actions(state)
    }

    fn apply_action(&self, state: &mut GameState, rng: &mut GameRng, action: Option<&Action>) -> Result<(), DogError> {
        applier::apply_action(state, rng, &self.hand_sizes, action)
    }

    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        state.winner
    }
}
