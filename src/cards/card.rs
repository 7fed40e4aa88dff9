//! Card values: suit, rank and the card itself.
//!
//! Cards are plain `Copy` values compared structurally. The deck holds two
//! packs, so equal cards are interchangeable: removing "a ♥7" from a hand
//! removes the first matching instance.

use serde::{Deserialize, Serialize};

use super::movement::MovePolicy;

/// The four suits. Jokers have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Card ranks.
///
/// `Hidden` is the face-down marker used in masked player views. It is never
/// dealt and moves nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
    Hidden,
}

impl Rank {
    /// The 13 suited ranks, in catalog order.
    pub const SUITED: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Short label as printed on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "JKR",
            Rank::Hidden => "??",
        }
    }

    /// Movement rule of this rank.
    #[must_use]
    pub const fn policy(self) -> MovePolicy {
        match self {
            Rank::Two => MovePolicy::Forward(2),
            Rank::Three => MovePolicy::Forward(3),
            Rank::Four => MovePolicy::ForwardOrBack(4),
            Rank::Five => MovePolicy::Forward(5),
            Rank::Six => MovePolicy::Forward(6),
            Rank::Seven => MovePolicy::Split(7),
            Rank::Eight => MovePolicy::Forward(8),
            Rank::Nine => MovePolicy::Forward(9),
            Rank::Ten => MovePolicy::Forward(10),
            Rank::Jack => MovePolicy::Swap,
            Rank::Queen => MovePolicy::Forward(12),
            Rank::King => MovePolicy::StartOrForward(&[13]),
            Rank::Ace => MovePolicy::StartOrForward(&[1, 11]),
            Rank::Joker => MovePolicy::Wild,
            Rank::Hidden => MovePolicy::Inert,
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Option<Suit>,
    pub rank: Rank,
}

impl Card {
    /// Face-down card shown in place of an opponent's hand card.
    pub const FACE_DOWN: Card = Card {
        suit: None,
        rank: Rank::Hidden,
    };

    /// A suited card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit: Some(suit),
            rank,
        }
    }

    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: None,
            rank: Rank::Joker,
        }
    }

    /// Suitless card naming the rank a joker is played as.
    #[must_use]
    pub const fn stand_in(rank: Rank) -> Self {
        Self { suit: None, rank }
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.rank, Rank::Joker)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", suit.symbol(), self.rank.label()),
            None => f.write_str(self.rank.label()),
        }
    }
}
