//! Dealing, turn rotation and rounds.
//!
//! A round ends when the turn comes back to the starting seat. Every round
//! opens by collecting leftover hands, then dealing the next hand size from
//! the draw pile, reshuffling the discard pile in whenever the draw pile
//! runs dry. Cards only ever move between piles and hands, so the total is
//! checked around every deal.

use im::Vector;
use tracing::info;

use crate::cards::{full_deck, Card};
use crate::core::config::hand_size_for_round;
use crate::core::{
    DogConfig, DogError, GamePhase, GameRng, GameState, IllegalReason, PlayerId, PlayerMap,
    PlayerState,
};

/// A freshly shuffled and dealt game for the configuration.
///
/// The starting seat is drawn from `rng` after the shuffle.
pub fn new_game(config: &DogConfig, rng: &mut GameRng) -> GameState {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);

    let names = &config.player_names;
    let mut state = GameState {
        phase: GamePhase::Setup,
        round: 1,
        card_exchanged: false,
        starting_player: PlayerId::new(0),
        active_player: PlayerId::new(0),
        players: PlayerMap::new(config.player_count, |seat| {
            let name = names
                .get(seat.index())
                .cloned()
                .unwrap_or_else(|| seat.to_string());
            PlayerState::new(name, seat)
        }),
        draw_pile: deck.into_iter().collect(),
        discard_pile: Vector::new(),
        card_active: None,
        steps_remaining: None,
        winner: None,
    };

    let size = config.hand_size(1);
    for (_, player) in state.players.iter_mut() {
        for _ in 0..size {
            if let Some(card) = state.draw_pile.pop_back() {
                player.hand.push(card);
            }
        }
    }

    let starting = PlayerId::new(rng.gen_range_usize(0..config.player_count) as u8);
    state.starting_player = starting;
    state.active_player = starting;
    state.phase = GamePhase::Running;

    info!(seed = rng.seed(), starting = %starting, hand_size = size, "new game dealt");
    state
}

/// Pass the turn to the next seat, opening a new round when it wraps.
pub fn next_turn(state: &mut GameState, rng: &mut GameRng, hand_sizes: &[usize]) -> Result<(), DogError> {
    if state.phase != GamePhase::Running {
        return Ok(());
    }
    state.active_player = state.active_player.next(state.player_count());
    if state.active_player == state.starting_player {
        state.round += 1;
        setup_next_round(state, rng, hand_sizes)?;
    }
    Ok(())
}

/// Collect leftover hands and deal the current round's hand size.
pub fn setup_next_round(state: &mut GameState, rng: &mut GameRng, hand_sizes: &[usize]) -> Result<(), DogError> {
    let before = state.total_cards();

    for (_, player) in state.players.iter_mut() {
        state.discard_pile.extend(player.hand.drain(..));
    }

    let size = hand_size_for_round(hand_sizes, state.round);
    for seat in state.players.player_ids().collect::<Vec<_>>() {
        for _ in 0..size {
            match draw_card(state, rng) {
                Some(card) => state.players[seat].hand.push(card),
                None => break,
            }
        }
    }
    state.card_exchanged = false;
    state.card_active = None;
    state.steps_remaining = None;

    let after = state.total_cards();
    if before != after {
        return Err(DogError::InvariantViolation(format!(
            "deal changed the card total from {before} to {after}"
        )));
    }
    info!(round = state.round, hand_size = size, draw_pile = state.draw_pile.len(), "round dealt");
    Ok(())
}

/// Top card of the draw pile, reshuffling the discards in first if it is empty.
fn draw_card(state: &mut GameState, rng: &mut GameRng) -> Option<Card> {
    if state.draw_pile.is_empty() {
        reshuffle_discard(state, rng);
    }
    state.draw_pile.pop_back()
}

/// Move the whole discard pile, shuffled, onto the draw pile.
pub fn reshuffle_discard(state: &mut GameState, rng: &mut GameRng) {
    let mut cards: Vec<Card> = state.discard_pile.iter().copied().collect();
    rng.shuffle(&mut cards);
    state.discard_pile.clear();
    state.draw_pile.extend(cards);
    info!(cards = state.draw_pile.len(), "discard pile reshuffled into draw pile");
}

/// Exchange one card between two seats.
pub fn swap_cards(
    state: &mut GameState,
    first: PlayerId,
    second: PlayerId,
    first_card: Card,
    second_card: Card,
) -> Result<(), DogError> {
    for seat in [first, second] {
        if seat.index() >= state.player_count() {
            return Err(DogError::InvalidConfiguration(format!("no seat {}", seat.0)));
        }
    }
    if first == second {
        return Err(DogError::illegal(first, IllegalReason::NotLegal));
    }
    if !state.players[first].holds(first_card) {
        return Err(DogError::illegal(first, IllegalReason::CardNotHeld(first_card)));
    }
    if !state.players[second].holds(second_card) {
        return Err(DogError::illegal(second, IllegalReason::CardNotHeld(second_card)));
    }

    state.players[first].remove_card(first_card);
    state.players[second].remove_card(second_card);
    state.players[first].hand.push(second_card);
    state.players[second].hand.push(first_card);
    state.card_exchanged = true;
    Ok(())
}
