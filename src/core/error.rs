//! Engine error types.
//!
//! Illegal actions are rejected before any state is touched. Configuration
//! errors surface when an engine is built or a snapshot is injected.
//! Invariant violations mean the engine itself is wrong and are never
//! swallowed.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::Cell;
use crate::cards::Card;

/// Why an action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalReason {
    #[error("the game is not running")]
    GameNotRunning,
    #[error("card {0} is not in hand")]
    CardNotHeld(Card),
    #[error("no own marble at cell {0}")]
    NoMarbleAt(Cell),
    #[error("a split with {active} is in progress, {played} cannot be played")]
    WrongActiveCard { active: Card, played: Card },
    #[error("move is not legal in the current position")]
    NotLegal,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DogError {
    #[error("illegal action by {player}: {reason}")]
    IllegalAction {
        player: PlayerId,
        reason: IllegalReason,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl DogError {
    pub(crate) fn illegal(player: PlayerId, reason: IllegalReason) -> Self {
        Self::IllegalAction { player, reason }
    }

    /// The refusal reason, if this is an illegal-action error.
    #[must_use]
    pub fn illegal_reason(&self) -> Option<&IllegalReason> {
        match self {
            Self::IllegalAction { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
