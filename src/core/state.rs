//! Game state: the canonical snapshot of a Dog table.
//!
//! ## GameState
//!
//! - Phase, round, starting and active seat
//! - Per-seat hands and marbles
//! - Draw and discard piles
//! - The split context of a SEVEN in progress (`card_active`,
//!   `steps_remaining`)
//!
//! Piles use `im` persistent vectors, so handing out copies is O(1).
//! Cell occupancy is not stored; see [`crate::board::Occupancy`].

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::PLAYER_COUNT;
use super::error::DogError;
use super::player::{PlayerId, PlayerMap};
use crate::board::{kennel_cells, start_cell, zone_of, Cell, MarbleRef, Zone, MARBLES_PER_PLAYER};
use crate::cards::{Card, Rank};

/// Hand storage. Hands never exceed six cards in regular play.
pub type Hand = SmallVec<[Card; 6]>;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first deal.
    Setup,
    /// Cards are being played.
    Running,
    /// A seat has brought all four marbles home.
    Finished,
}

/// One marble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marble {
    /// Current cell. Kennel marbles sit on one of their owner's kennel cells.
    pub pos: Cell,
    /// Just left the kennel and has not moved since. Blocks passage.
    pub is_safe: bool,
    /// In the owner's finish lane. Finished marbles never move again.
    pub is_finished: bool,
}

impl Marble {
    /// A marble resting on a kennel cell.
    #[must_use]
    pub const fn in_kennel(cell: Cell) -> Self {
        Self {
            pos: cell,
            is_safe: false,
            is_finished: false,
        }
    }

    /// A marble on a ring cell.
    #[must_use]
    pub const fn on(cell: Cell, is_safe: bool) -> Self {
        Self {
            pos: cell,
            is_safe,
            is_finished: false,
        }
    }

    /// A marble in a finish-lane cell.
    #[must_use]
    pub const fn finished(cell: Cell) -> Self {
        Self {
            pos: cell,
            is_safe: false,
            is_finished: true,
        }
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        matches!(zone_of(self.pos), Some(Zone::Kennel(_)))
    }

    /// On the ring and free to move.
    #[must_use]
    pub fn is_in_play(&self) -> bool {
        self.pos.is_ring() && !self.is_finished
    }
}

/// One seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub hand: Hand,
    pub marbles: SmallVec<[Marble; MARBLES_PER_PLAYER]>,
}

impl PlayerState {
    /// A seat with an empty hand and every marble in its kennel.
    #[must_use]
    pub fn new(name: impl Into<String>, seat: PlayerId) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            marbles: kennel_cells(seat).into_iter().map(Marble::in_kennel).collect(),
        }
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Remove the first instance of `card`. Returns false if not held.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(idx) => {
                self.hand.remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.marbles.iter().all(|m| m.is_finished)
    }
}

/// Complete game state. Owned by the engine; callers get copies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,

    /// Current round (starts at 1).
    pub round: u32,

    /// Cards were exchanged between seats this round.
    pub card_exchanged: bool,

    /// Seat that opened the current round.
    pub starting_player: PlayerId,

    /// Seat whose turn it is.
    pub active_player: PlayerId,

    pub players: PlayerMap<PlayerState>,

    /// Draw pile, top = back.
    pub draw_pile: Vector<Card>,

    /// Discard pile, most recent = back.
    pub discard_pile: Vector<Card>,

    /// Card of a split in progress.
    pub card_active: Option<Card>,

    /// Steps left in the split in progress.
    pub steps_remaining: Option<u8>,

    /// Seat that finished first.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// A running table with empty hands and piles and every marble at home.
    ///
    /// Starting point for hand-crafted scenarios injected with `set_state`.
    #[must_use]
    pub fn empty_table() -> Self {
        Self {
            phase: GamePhase::Running,
            round: 1,
            card_exchanged: false,
            starting_player: PlayerId::new(0),
            active_player: PlayerId::new(0),
            players: PlayerMap::new(PLAYER_COUNT, |seat| {
                PlayerState::new(format!("Player {}", seat.index() + 1), seat)
            }),
            draw_pile: Vector::new(),
            discard_pile: Vector::new(),
            card_active: None,
            steps_remaining: None,
            winner: None,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn active(&self) -> &PlayerState {
        &self.players[self.active_player]
    }

    #[must_use]
    pub fn marble(&self, marble: MarbleRef) -> &Marble {
        &self.players[marble.owner].marbles[marble.index]
    }

    pub fn marble_mut(&mut self, marble: MarbleRef) -> &mut Marble {
        &mut self.players[marble.owner].marbles[marble.index]
    }

    /// Cards in draw pile, discard pile and all hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.values().map(|p| p.hand.len()).sum::<usize>()
    }

    /// True while a SEVEN (or a joker played as one) is being split.
    #[must_use]
    pub fn split_in_progress(&self) -> bool {
        self.steps_remaining.is_some()
    }

    /// Copy of the state as seen from one seat: other hands are face down.
    #[must_use]
    pub fn masked_for(&self, viewer: PlayerId) -> GameState {
        let mut view = self.clone();
        for (seat, player) in view.players.iter_mut() {
            if seat != viewer {
                let len = player.hand.len();
                player.hand = std::iter::repeat(Card::FACE_DOWN).take(len).collect();
            }
        }
        view
    }

    /// Check structural consistency of a snapshot.
    ///
    /// Used on injected states; a failure means the snapshot is malformed.
    pub fn validate(&self) -> Result<(), DogError> {
        let bad = |msg: String| Err(DogError::InvalidConfiguration(msg));

        if self.player_count() != PLAYER_COUNT {
            return bad(format!("expected {PLAYER_COUNT} players, got {}", self.player_count()));
        }
        for seat in [self.active_player, self.starting_player] {
            if seat.index() >= PLAYER_COUNT {
                return bad(format!("seat index {} out of range", seat.0));
            }
        }

        let mut seen = FxHashSet::default();
        for (owner, player) in self.players.iter() {
            if player.marbles.len() != MARBLES_PER_PLAYER {
                return bad(format!(
                    "{owner} has {} marbles, expected {MARBLES_PER_PLAYER}",
                    player.marbles.len()
                ));
            }
            for marble in &player.marbles {
                match zone_of(marble.pos) {
                    None => return bad(format!("{owner} has a marble off the board at {}", marble.pos)),
                    Some(Zone::Kennel(p)) | Some(Zone::Finish(p, _)) if p != owner => {
                        return bad(format!("{owner} has a marble in {p}'s reserved cell {}", marble.pos));
                    }
                    Some(zone) => {
                        let in_lane = matches!(zone, Zone::Finish(..));
                        if marble.is_finished != in_lane {
                            return bad(format!("finish flag of marble at {} does not match its cell", marble.pos));
                        }
                    }
                }
                if marble.is_safe && marble.pos != start_cell(owner) {
                    return bad(format!("safe marble of {owner} is not on its start cell"));
                }
                if !seen.insert(marble.pos) {
                    return bad(format!("two marbles on cell {}", marble.pos));
                }
            }
            if player.hand.iter().any(|c| c.rank == Rank::Hidden) {
                return bad(format!("{owner} holds a face-down card"));
            }
        }

        match (self.card_active, self.steps_remaining) {
            (None, None) => {}
            (Some(card), Some(steps)) => {
                if !matches!(card.rank, Rank::Seven | Rank::Joker) {
                    return bad(format!("{card} cannot be split"));
                }
                if !(1..=7).contains(&steps) {
                    return bad(format!("{steps} split steps remaining"));
                }
                if !self.active().holds(card) {
                    return bad(format!("active card {card} is not in the active hand"));
                }
            }
            _ => return bad("split card and remaining steps must be set together".into()),
        }

        if self.winner.is_some() && self.phase != GamePhase::Finished {
            return bad("winner set on an unfinished game".into());
        }
        Ok(())
    }
}
