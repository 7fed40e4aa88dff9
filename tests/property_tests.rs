//! Properties that hold in every reachable state under random play.

mod common;

use common::{init_tracing, marble_cells};
use dog_engine::cards::DECK_SIZE;
use dog_engine::{Action, Card, Cell, Dog, DogConfig, GameState, RandomPlayer, Rank, Suit};
use proptest::prelude::*;

fn check_state(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert_eq!(state.total_cards(), DECK_SIZE);

    let cells = marble_cells(state);
    let mut unique = cells.clone();
    unique.dedup();
    prop_assert_eq!(cells.len(), unique.len(), "two marbles share a cell");

    prop_assert!(state.validate().is_ok(), "{:?}", state.validate());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_conservation_and_exclusivity(seed in any::<u64>(), turns in 50usize..400) {
        init_tracing();
        let mut game = Dog::new(DogConfig::default().with_seed(seed)).unwrap();
        check_state(game.state())?;

        for _ in 0..turns {
            if game.is_finished() {
                break;
            }
            let played = game.play_turn(&RandomPlayer).unwrap();
            check_state(game.state())?;

            if let Some(action) = played {
                if action.pos_from.is_none() {
                    let state = game.state();
                    let started = state
                        .players
                        .values()
                        .flat_map(|pl| pl.marbles.iter())
                        .find(|m| Some(m.pos) == action.pos_to);
                    prop_assert!(started.is_some_and(|m| m.is_safe));
                }
            }
        }
    }

    #[test]
    fn prop_illegal_actions_change_nothing(
        seed in any::<u64>(),
        turns in 0usize..60,
        from in 0u8..96,
        to in 0u8..96,
        rank_idx in 0usize..13,
    ) {
        init_tracing();
        let mut game = Dog::new(DogConfig::default().with_seed(seed)).unwrap();
        for _ in 0..turns {
            game.play_turn(&RandomPlayer).unwrap();
        }

        let card = Card::new(Suit::Spades, Rank::SUITED[rank_idx]);
        let action = Action::step(card, Cell::new(from), Cell::new(to));
        prop_assume!(!game.get_list_action().contains(&action));

        let before = game.get_state();
        prop_assert!(game.apply_action(Some(&action)).is_err());
        prop_assert_eq!(game.get_state(), before);
    }

    #[test]
    fn prop_action_lists_are_deterministic(seed in any::<u64>(), turns in 0usize..100) {
        let mut game = Dog::new(DogConfig::default().with_seed(seed)).unwrap();
        for _ in 0..turns {
            game.play_turn(&RandomPlayer).unwrap();
        }
        let first = game.get_list_action();
        prop_assert_eq!(&first, &game.get_list_action());

        let mut unique = first.clone();
        unique.sort_by_key(|a| format!("{a:?}"));
        unique.dedup();
        prop_assert_eq!(unique.len(), first.len(), "duplicate actions listed");
    }
}
