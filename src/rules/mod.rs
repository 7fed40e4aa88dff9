//! Game rules: legal action generation, action application and turn flow.

pub mod applier;
pub mod dog;
pub mod engine;
pub mod generator;
pub mod turn;

pub use applier::apply_action;
pub use dog::DogRules;
pub use engine::RulesEngine;
pub use generator::list_actions;
pub use turn::{new_game, next_turn, reshuffle_discard, setup_next_round, swap_cards};
