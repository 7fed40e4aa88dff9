//! Action validation and execution.
//!
//! `apply_action` either commits a whole action or leaves the state exactly
//! as it was. Validation runs first, on the untouched state; execution then
//! works on a copy that replaces the original only on success.
//!
//! ## Order of checks
//!
//! 1. the game is running
//! 2. the card is in the active hand
//! 3. during a split, the card is the split card
//! 4. `pos_from` (if any) holds an own marble
//! 5. the action is one of the generated legal actions

use tracing::{debug, info};

use super::generator::{legal_moves, Effect, LegalMove};
use super::turn::next_turn;
use crate::board::{start_cell, Cell, MarbleRef, Occupancy};
use crate::cards::{Card, MovePolicy, Rank};
use crate::core::{Action, DogError, GamePhase, GameRng, GameState, IllegalReason, Marble};

/// Apply an action (or a pass) for the active seat.
///
/// `None` passes. A pass during a split forfeits the remaining steps and
/// discards the split card. Once the game is finished a pass does nothing.
pub fn apply_action(
    state: &mut GameState,
    rng: &mut GameRng,
    hand_sizes: &[usize],
    action: Option<&Action>,
) -> Result<(), DogError> {
    let Some(action) = action else {
        return pass(state, rng, hand_sizes);
    };

    let legal = validate(state, action)?;
    let mut next = state.clone();
    execute(&mut next, rng, hand_sizes, &legal)?;
    *state = next;
    Ok(())
}

/// Check an action against the state without touching it.
pub(crate) fn validate(state: &GameState, action: &Action) -> Result<LegalMove, DogError> {
    let player = state.active_player;
    let refuse = |reason| Err(DogError::illegal(player, reason));

    if state.phase != GamePhase::Running {
        return refuse(IllegalReason::GameNotRunning);
    }
    if !state.active().holds(action.card) {
        return refuse(IllegalReason::CardNotHeld(action.card));
    }
    if let Some(active) = state.card_active {
        if active != action.card {
            return refuse(IllegalReason::WrongActiveCard {
                active,
                played: action.card,
            });
        }
    }
    if let Some(from) = action.pos_from {
        if !state.active().marbles.iter().any(|m| m.pos == from) {
            return refuse(IllegalReason::NoMarbleAt(from));
        }
    }

    match legal_moves(state).into_iter().find(|m| m.action == *action) {
        Some(legal) => Ok(legal),
        None => refuse(IllegalReason::NotLegal),
    }
}

fn pass(state: &mut GameState, rng: &mut GameRng, hand_sizes: &[usize]) -> Result<(), DogError> {
    if state.phase != GamePhase::Running {
        return Ok(());
    }
    let mut next = state.clone();
    if let Some(card) = next.card_active {
        debug!(player = %next.active_player, card = %card, "split abandoned");
        complete_card(&mut next, card)?;
    } else {
        debug!(player = %next.active_player, "pass");
    }
    next_turn(&mut next, rng, hand_sizes)?;
    *state = next;
    Ok(())
}

fn execute(state: &mut GameState, rng: &mut GameRng, hand_sizes: &[usize], legal: &LegalMove) -> Result<(), DogError> {
    let player = state.active_player;
    let card = legal.action.card;
    let mut split_open = false;

    match &legal.effect {
        Effect::Start { marble } => {
            let start = start_cell(player);
            evict(state, start, *marble)?;
            *state.marble_mut(*marble) = Marble::on(start, true);
        }
        Effect::Move { marble, path } => {
            let landing = landing_cell(path)?;
            evict(state, landing, *marble)?;
            land(state, *marble, landing);
        }
        Effect::Swap { own, other } => {
            let a = state.marble(*own).pos;
            let b = state.marble(*other).pos;
            *state.marble_mut(*own) = Marble::on(b, false);
            *state.marble_mut(*other) = Marble::on(a, false);
        }
        Effect::Split { marble, path } => {
            let landing = landing_cell(path)?;
            for &cell in path.iter().filter(|c| c.is_ring()) {
                evict(state, cell, *marble)?;
            }
            land(state, *marble, landing);

            let budget = state.steps_remaining.unwrap_or_else(|| split_budget(card));
            let left = budget.saturating_sub(path.len() as u8);
            split_open = left > 0;
            state.card_active = split_open.then_some(card);
            state.steps_remaining = split_open.then_some(left);
        }
    }
    debug!(player = %player, action = %legal.action, "action applied");

    if state.players[player].all_finished() {
        complete_card(state, card)?;
        state.phase = GamePhase::Finished;
        state.winner = Some(player);
        info!(winner = %player, round = state.round, "game finished");
        return Ok(());
    }

    if split_open && !legal_moves(state).is_empty() {
        return Ok(());
    }
    complete_card(state, card)?;
    next_turn(state, rng, hand_sizes)
}

/// Steps a fresh split with this card may spend.
fn split_budget(card: Card) -> u8 {
    let rank = if card.is_joker() { Rank::Seven } else { card.rank };
    match rank.policy() {
        MovePolicy::Split(n) => n,
        _ => 0,
    }
}

fn landing_cell(path: &[Cell]) -> Result<Cell, DogError> {
    path.last()
        .copied()
        .ok_or_else(|| DogError::InvariantViolation("move with an empty path".into()))
}

/// Put a marble on its destination, finishing it if the cell is in a lane.
fn land(state: &mut GameState, marble: MarbleRef, cell: Cell) {
    *state.marble_mut(marble) = if cell.is_ring() {
        Marble::on(cell, false)
    } else {
        Marble::finished(cell)
    };
}

/// Send whatever marble (other than `mover`) sits on `cell` back to its kennel.
fn evict(state: &mut GameState, cell: Cell, mover: MarbleRef) -> Result<(), DogError> {
    let occ = Occupancy::build(state);
    let Some((victim, marble)) = occ.at(cell) else {
        return Ok(());
    };
    if victim == mover {
        return Ok(());
    }
    if marble.is_safe {
        return Err(DogError::InvariantViolation(format!(
            "tried to capture the safe marble on {cell}"
        )));
    }
    let home = occ.free_kennel_cell(victim.owner).ok_or_else(|| {
        DogError::InvariantViolation(format!("{} has no free kennel cell", victim.owner))
    })?;
    *state.marble_mut(victim) = Marble::in_kennel(home);
    debug!(owner = %victim.owner, from = %cell, "marble sent home");
    Ok(())
}

/// Discard the played card and close any split context.
fn complete_card(state: &mut GameState, card: Card) -> Result<(), DogError> {
    let player = state.active_player;
    if !state.players[player].remove_card(card) {
        return Err(DogError::InvariantViolation(format!(
            "played card {card} vanished from {player}'s hand"
        )));
    }
    state.discard_pile.push_back(card);
    state.card_active = None;
    state.steps_remaining = None;
    Ok(())
}
