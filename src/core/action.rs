//! Action representation: the card played plus where the marble goes.
//!
//! - Start from the kennel: `pos_from = None`, `pos_to = start cell`
//! - Move: `pos_from` = the marble's cell, `pos_to` = landing cell
//! - Jack swap: `pos_from` = own marble, `pos_to` = the other marble
//! - Joker played as another rank: `card_swap` names the stand-in rank
//!
//! Passing is not an action; callers hand `None` to the engine.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::Cell;
use crate::cards::Card;

/// A complete game action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The card played (the joker itself when a joker stands in for a rank).
    pub card: Card,

    /// Cell of the moving marble. `None` when leaving the kennel.
    pub pos_from: Option<Cell>,

    /// Destination cell (or the swap partner's cell for a jack).
    pub pos_to: Option<Cell>,

    /// Stand-in card when a joker is played as another rank.
    pub card_swap: Option<Card>,
}

impl Action {
    /// Bring a marble out of the kennel.
    #[must_use]
    pub fn start(card: Card, to: Cell) -> Self {
        Self {
            card,
            pos_from: None,
            pos_to: Some(to),
            card_swap: None,
        }
    }

    /// Move (or swap) a marble.
    #[must_use]
    pub fn step(card: Card, from: Cell, to: Cell) -> Self {
        Self {
            card,
            pos_from: Some(from),
            pos_to: Some(to),
            card_swap: None,
        }
    }

    /// Tag the action with the rank a joker stands in for.
    #[must_use]
    pub fn with_stand_in(mut self, stand_in: Option<Card>) -> Self {
        self.card_swap = stand_in;
        self
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.card)?;
        if let Some(stand_in) = self.card_swap {
            write!(f, " as {stand_in}")?;
        }
        match self.pos_from {
            Some(from) => write!(f, " {from}")?,
            None => f.write_str(" kennel")?,
        }
        if let Some(to) = self.pos_to {
            write!(f, " -> {to}")?;
        }
        Ok(())
    }
}

/// A recorded action with metadata for history tracking.
///
/// `action = None` records a pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub player: PlayerId,

    /// The action taken, `None` for a pass.
    pub action: Option<Action>,

    /// Round in which the action was taken.
    pub round: u32,

    /// Sequence number over the whole game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Option<Action>, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_constructors() {
        let king = Card::new(Suit::Hearts, Rank::King);
        let start = Action::start(king, Cell::new(16));
        assert_eq!(start.pos_from, None);
        assert_eq!(start.pos_to, Some(Cell::new(16)));

        let step = Action::step(king, Cell::new(3), Cell::new(16));
        assert_eq!(step.pos_from, Some(Cell::new(3)));
        assert_ne!(start, step);
    }

    #[test]
    fn test_display() {
        let seven = Card::stand_in(Rank::Seven);
        let action = Action::step(Card::joker(), Cell::new(5), Cell::new(9)).with_stand_in(Some(seven));
        assert_eq!(action.to_string(), "JKR as 7 5 -> 9");

        let start = Action::start(Card::new(Suit::Spades, Rank::Ace), Cell::new(0));
        assert_eq!(start.to_string(), "♠A kennel -> 0");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::step(Card::new(Suit::Clubs, Rank::Four), Cell::new(2), Cell::new(62));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_action_record() {
        let action = Action::start(Card::joker(), Cell::new(32));
        let record = ActionRecord::new(PlayerId::new(2), Some(action.clone()), 3, 17);

        assert_eq!(record.player, PlayerId::new(2));
        assert_eq!(record.action, Some(action));

        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
