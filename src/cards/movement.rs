//! Movement rules per rank.
//!
//! Every rank maps to exactly one [`MovePolicy`] via [`super::Rank::policy`].
//! The action generator dispatches on the policy in one place instead of
//! branching on ranks.

/// How a card may move marbles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePolicy {
    /// Move one marble exactly `n` cells forward.
    Forward(u8),
    /// Move one marble `n` cells forward or `n` cells back.
    ForwardOrBack(u8),
    /// Leave the kennel, or move one marble forward by one of the distances.
    StartOrForward(&'static [u8]),
    /// Spread `n` single steps over one or more marbles, sweeping what is passed.
    Split(u8),
    /// Exchange an own marble with an opponent's marble.
    Swap,
    /// Leave the kennel, or act as any suited rank.
    Wild,
    /// No movement (face-down placeholder).
    Inert,
}

impl MovePolicy {
    /// True for policies that can bring a marble out of the kennel.
    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(self, MovePolicy::StartOrForward(_) | MovePolicy::Wild)
    }

    /// True for multi-step split policies (the SEVEN).
    #[must_use]
    pub const fn is_split(self) -> bool {
        matches!(self, MovePolicy::Split(_))
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::Rank;

    use super::*;

    #[test]
    fn test_rank_table() {
        assert_eq!(Rank::Ace.policy(), MovePolicy::StartOrForward(&[1, 11]));
        assert_eq!(Rank::King.policy(), MovePolicy::StartOrForward(&[13]));
        assert_eq!(Rank::Queen.policy(), MovePolicy::Forward(12));
        assert_eq!(Rank::Four.policy(), MovePolicy::ForwardOrBack(4));
        assert_eq!(Rank::Jack.policy(), MovePolicy::Swap);
        assert!(Rank::Seven.policy().is_split());
    }

    #[test]
    fn test_start_capable_ranks() {
        let starters: Vec<_> = Rank::SUITED
            .iter()
            .chain(&[Rank::Joker])
            .filter(|r| r.policy().can_start())
            .copied()
            .collect();
        assert_eq!(starters, vec![Rank::King, Rank::Ace, Rank::Joker]);
    }
}
