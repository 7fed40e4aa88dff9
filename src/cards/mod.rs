//! Card catalog: card values, the double deck and per-rank movement rules.

pub mod card;
pub mod deck;
pub mod movement;

pub use card::{Card, Rank, Suit};
pub use deck::{full_deck, DECK_SIZE};
pub use movement::MovePolicy;
