//! The fixed double deck.
//!
//! One pack is 4 suits × 13 ranks plus 3 jokers; Dog is played with two
//! packs, 110 cards in total.

use super::card::{Card, Rank, Suit};

/// Jokers per pack.
pub const JOKERS_PER_PACK: usize = 3;

/// Cards in one pack.
pub const PACK_SIZE: usize = Suit::ALL.len() * Rank::SUITED.len() + JOKERS_PER_PACK;

/// Cards in the full double deck.
pub const DECK_SIZE: usize = 2 * PACK_SIZE;

/// One pack in catalog order (rank by rank, suits in order, jokers last).
#[must_use]
pub fn pack() -> Vec<Card> {
    let mut cards = Vec::with_capacity(PACK_SIZE);
    for rank in Rank::SUITED {
        for suit in Suit::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards.extend(std::iter::repeat(Card::joker()).take(JOKERS_PER_PACK));
    cards
}

/// The unshuffled double deck.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = pack();
    cards.extend(pack());
    cards
}
