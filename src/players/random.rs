use crate::core::{Action, GameRng, GameState};

use super::ActionPolicy;

/// Uniform random policy.
///
/// Passes only when nothing is legal.
#[derive(Clone, Debug, Default)]
pub struct RandomPlayer;

impl ActionPolicy for RandomPlayer {
    fn select_action(&self, _state: &GameState, actions: &[Action], rng: &mut GameRng) -> Option<Action> {
        rng.choose(actions).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn test_passes_without_actions() {
        let mut rng = GameRng::new(0);
        let state = GameState::empty_table();
        assert_eq!(RandomPlayer.select_action(&state, &[], &mut rng), None);
    }

    #[test]
    fn test_picks_a_listed_action() {
        let mut rng = GameRng::new(9);
        let state = GameState::empty_table();
        let king = Card::new(Suit::Spades, Rank::King);
        let actions = vec![
            Action::start(king, Cell::new(0)),
            Action::step(king, Cell::new(3), Cell::new(16)),
        ];

        for _ in 0..20 {
            let choice = RandomPlayer.select_action(&state, &actions, &mut rng).unwrap();
            assert!(actions.contains(&choice));
        }
    }
}
