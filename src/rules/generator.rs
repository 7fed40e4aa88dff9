//! Legal action enumeration for the active seat.
//!
//! Generation is pure: it reads a state and returns moves, in hand order,
//! then marble order, then ascending distance (ring destination before lane
//! destination for the same distance). Each move carries the effect the
//! applier executes, so validation and execution share one source of truth.
//!
//! Blocking rules:
//! - a safe marble on any ring cell passed or landed on blocks the move;
//! - a marble on any finish-lane cell of the path blocks lane entry;
//! - an unsafe marble on the landing cell is captured, not blocking.

use smallvec::SmallVec;
use tracing::trace;

use crate::board::{finish_path, ring_path, start_cell, Cell, MarbleRef, Occupancy, Path};
use crate::cards::{Card, MovePolicy, Rank};
use crate::core::{Action, GamePhase, GameState, Marble, PlayerId};

/// What applying a move does to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
    /// Kennel to start cell; captures an unsafe marble there.
    Start { marble: MarbleRef },
    /// Single move along `path`; only the landing cell captures.
    Move { marble: MarbleRef, path: Path },
    /// One part of a split; every ring cell of `path` is swept.
    Split { marble: MarbleRef, path: Path },
    /// Jack: exchange two marbles.
    Swap { own: MarbleRef, other: MarbleRef },
}

/// An action together with its effect.
#[derive(Clone, Debug)]
pub(crate) struct LegalMove {
    pub action: Action,
    pub effect: Effect,
}

/// Every legal action of the active seat.
///
/// Empty when the game is not running or nothing can be played; the caller
/// then passes with `None`.
#[must_use]
pub fn list_actions(state: &GameState) -> Vec<Action> {
    legal_moves(state).into_iter().map(|m| m.action).collect()
}

pub(crate) fn legal_moves(state: &GameState) -> Vec<LegalMove> {
    if state.phase != GamePhase::Running {
        return Vec::new();
    }
    let moves = Generator::new(state).run();
    trace!(player = %state.active_player, count = moves.len(), "generated legal moves");
    moves
}

struct Generator<'a> {
    state: &'a GameState,
    occ: Occupancy,
    player: PlayerId,
    out: Vec<LegalMove>,
}

impl<'a> Generator<'a> {
    fn new(state: &'a GameState) -> Self {
        Self {
            state,
            occ: Occupancy::build(state),
            player: state.active_player,
            out: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<LegalMove> {
        // A split in progress may only be continued.
        if let (Some(card), Some(steps)) = (self.state.card_active, self.state.steps_remaining) {
            let stand_in = card.is_joker().then(|| Card::stand_in(Rank::Seven));
            self.split(card, stand_in, steps);
            return self.out;
        }

        let state = self.state;
        let mut seen: SmallVec<[Card; 6]> = SmallVec::new();
        for &card in &state.active().hand {
            if seen.contains(&card) {
                continue;
            }
            seen.push(card);
            self.card(card);
        }
        self.out
    }

    fn card(&mut self, card: Card) {
        match card.rank.policy() {
            MovePolicy::Wild => {
                self.start(card);
                for rank in Rank::SUITED {
                    self.policy(rank.policy(), card, Some(Card::stand_in(rank)), false);
                }
            }
            policy => self.policy(policy, card, None, true),
        }
    }

    fn policy(&mut self, policy: MovePolicy, card: Card, stand_in: Option<Card>, allow_start: bool) {
        match policy {
            MovePolicy::Forward(n) => {
                for marble in self.movable() {
                    self.forward(card, stand_in, marble, n);
                }
            }
            MovePolicy::ForwardOrBack(n) => {
                for marble in self.movable() {
                    self.forward(card, stand_in, marble, n);
                    self.backward(card, stand_in, marble, n);
                }
            }
            MovePolicy::StartOrForward(distances) => {
                if allow_start {
                    self.start(card);
                }
                for marble in self.movable() {
                    for &n in distances {
                        self.forward(card, stand_in, marble, n);
                    }
                }
            }
            MovePolicy::Split(n) => self.split(card, stand_in, n),
            MovePolicy::Swap => self.swap(card, stand_in),
            MovePolicy::Wild | MovePolicy::Inert => {}
        }
    }

    /// Own marbles on the ring, in marble order.
    fn movable(&self) -> SmallVec<[(MarbleRef, Marble); 4]> {
        self.state.players[self.player]
            .marbles
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_in_play())
            .map(|(idx, m)| (MarbleRef::new(self.player, idx), *m))
            .collect()
    }

    fn start(&mut self, card: Card) {
        let marbles = &self.state.players[self.player].marbles;
        let Some(index) = marbles.iter().position(Marble::is_home) else {
            return;
        };
        let start = start_cell(self.player);
        if let Some((occupant, m)) = self.occ.at(start) {
            if occupant.owner == self.player && m.is_safe {
                return;
            }
        }
        self.out.push(LegalMove {
            action: Action::start(card, start),
            effect: Effect::Start {
                marble: MarbleRef::new(self.player, index),
            },
        });
    }

    fn forward(&mut self, card: Card, stand_in: Option<Card>, (mref, marble): (MarbleRef, Marble), n: u8) {
        let ring = ring_path(marble.pos, n as i8);
        if self.ring_clear(&ring) {
            self.push_path(card, stand_in, mref, marble.pos, ring, false);
        }
        if let Some(lane) = finish_path(self.player, marble.pos, n, marble.is_safe) {
            if self.lane_clear(&lane) {
                self.push_path(card, stand_in, mref, marble.pos, lane, false);
            }
        }
    }

    fn backward(&mut self, card: Card, stand_in: Option<Card>, (mref, marble): (MarbleRef, Marble), n: u8) {
        let ring = ring_path(marble.pos, -(n as i8));
        if self.ring_clear(&ring) {
            self.push_path(card, stand_in, mref, marble.pos, ring, false);
        }
    }

    /// Every (marble, destination) reachable with 1..=budget steps.
    fn split(&mut self, card: Card, stand_in: Option<Card>, budget: u8) {
        for (mref, marble) in self.movable() {
            for steps in 1..=budget {
                let ring = ring_path(marble.pos, steps as i8);
                if self.ring_clear(&ring) {
                    self.push_path(card, stand_in, mref, marble.pos, ring, true);
                }
                if let Some(lane) = finish_path(self.player, marble.pos, steps, marble.is_safe) {
                    if self.lane_clear(&lane) {
                        self.push_path(card, stand_in, mref, marble.pos, lane, true);
                    }
                }
            }
        }
    }

    /// Own unsafe ring marble with an opponent's unsafe ring marble.
    fn swap(&mut self, card: Card, stand_in: Option<Card>) {
        let targets: Vec<(MarbleRef, Marble)> = self
            .state
            .players
            .iter()
            .filter(|(seat, _)| *seat != self.player)
            .flat_map(|(seat, p)| {
                p.marbles
                    .iter()
                    .enumerate()
                    .map(move |(idx, m)| (MarbleRef::new(seat, idx), *m))
            })
            .filter(|(_, m)| m.is_in_play() && !m.is_safe)
            .collect();

        for (own, mine) in self.movable().into_iter().filter(|(_, m)| !m.is_safe) {
            for &(other, theirs) in &targets {
                self.out.push(LegalMove {
                    action: Action::step(card, mine.pos, theirs.pos).with_stand_in(stand_in),
                    effect: Effect::Swap { own, other },
                });
            }
        }
    }

    fn push_path(
        &mut self,
        card: Card,
        stand_in: Option<Card>,
        marble: MarbleRef,
        from: Cell,
        path: Path,
        sweep: bool,
    ) {
        let Some(&to) = path.last() else {
            return;
        };
        let effect = if sweep {
            Effect::Split { marble, path }
        } else {
            Effect::Move { marble, path }
        };
        self.out.push(LegalMove {
            action: Action::step(card, from, to).with_stand_in(stand_in),
            effect,
        });
    }

    fn ring_clear(&self, path: &[Cell]) -> bool {
        path.iter()
            .filter(|c| c.is_ring())
            .all(|&c| !self.occ.is_blocked(c))
    }

    fn lane_clear(&self, path: &[Cell]) -> bool {
        path.iter().all(|&c| {
            if c.is_ring() {
                !self.occ.is_blocked(c)
            } else {
                !self.occ.is_occupied(c)
            }
        })
    }
}
