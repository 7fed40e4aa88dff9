//! Engine configuration.
//!
//! Everything a table needs before the first shuffle: seat count, seed, the
//! per-round hand size schedule and the seat names.

use serde::{Deserialize, Serialize};

use super::error::DogError;
use crate::cards::DECK_SIZE;

/// Seats at a Dog table. The rules are only defined for four.
pub const PLAYER_COUNT: usize = 4;

/// Cards dealt per seat, cycling by round.
pub const DEFAULT_HAND_SIZES: [usize; 5] = [6, 5, 4, 3, 2];

/// Configuration for a [`crate::Dog`] engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogConfig {
    /// Number of seats. Must be 4.
    pub player_count: usize,

    /// Seed for the deal and starting-seat draw.
    /// Same seed produces the same game after every reset.
    pub seed: u64,

    /// Cards dealt per seat in round `n` are `hand_sizes[(n - 1) % len]`.
    pub hand_sizes: Vec<usize>,

    /// Seat names, in seat order.
    pub player_names: Vec<String>,
}

impl Default for DogConfig {
    fn default() -> Self {
        Self {
            player_count: PLAYER_COUNT,
            seed: 42,
            hand_sizes: DEFAULT_HAND_SIZES.to_vec(),
            player_names: (1..=PLAYER_COUNT).map(|i| format!("Player {i}")).collect(),
        }
    }
}

impl DogConfig {
    /// Use a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a different hand size schedule.
    #[must_use]
    pub fn with_hand_sizes(mut self, hand_sizes: Vec<usize>) -> Self {
        self.hand_sizes = hand_sizes;
        self
    }

    /// Use different seat names.
    #[must_use]
    pub fn with_player_names(mut self, names: Vec<String>) -> Self {
        self.player_names = names;
        self
    }

    /// Hand size for the given (1-based) round.
    #[must_use]
    pub fn hand_size(&self, round: u32) -> usize {
        hand_size_for_round(&self.hand_sizes, round)
    }

    /// Check the configuration. Fatal at engine construction.
    pub fn validate(&self) -> Result<(), DogError> {
        if self.player_count != PLAYER_COUNT {
            return Err(DogError::InvalidConfiguration(format!(
                "Dog needs {PLAYER_COUNT} players, got {}",
                self.player_count
            )));
        }
        if self.player_names.len() != self.player_count {
            return Err(DogError::InvalidConfiguration(format!(
                "expected {} player names, got {}",
                self.player_count,
                self.player_names.len()
            )));
        }
        if self.hand_sizes.is_empty() {
            return Err(DogError::InvalidConfiguration("hand size schedule is empty".into()));
        }
        if let Some(&size) = self
            .hand_sizes
            .iter()
            .find(|&&size| size == 0 || size * self.player_count > DECK_SIZE)
        {
            return Err(DogError::InvalidConfiguration(format!(
                "cannot deal {size} cards to each of {} players",
                self.player_count
            )));
        }
        Ok(())
    }
}

/// Hand size for the given (1-based) round of a schedule.
pub(crate) fn hand_size_for_round(hand_sizes: &[usize], round: u32) -> usize {
    let idx = (round.max(1) as usize - 1) % hand_sizes.len();
    hand_sizes[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player_names[3], "Player 4");
    }

    #[test]
    fn test_hand_size_cycle() {
        let config = DogConfig::default();
        let sizes: Vec<_> = (1..=7).map(|r| config.hand_size(r)).collect();
        assert_eq!(sizes, vec![6, 5, 4, 3, 2, 6, 5]);
    }

    #[test]
    fn test_rejects_wrong_player_count() {
        let config = DogConfig {
            player_count: 3,
            ..DogConfig::default()
        };
        assert!(matches!(config.validate(), Err(DogError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_bad_schedule() {
        assert!(DogConfig::default().with_hand_sizes(vec![]).validate().is_err());
        assert!(DogConfig::default().with_hand_sizes(vec![6, 0]).validate().is_err());
        assert!(DogConfig::default().with_hand_sizes(vec![28]).validate().is_err());
        assert!(DogConfig::default().with_hand_sizes(vec![27]).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = DogConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let back: DogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
