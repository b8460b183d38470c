use crate::cards::{Rank, Suit};
use crate::hand::Hand;

/// Rank and suit frequencies of one hand.
///
/// Every predicate here is an exact count: four Kings do not contain
/// "a rank occurring 3 times".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HandCounts {
    // indexed by rank value 2..=14
    ranks: [u8; 15],
    suits: [u8; 4],
}

impl HandCounts {
    pub(crate) fn of(hand: &Hand) -> Self {
        let mut ranks = [0u8; 15];
        let mut suits = [0u8; 4];
        for card in hand.cards() {
            ranks[card.rank().value() as usize] += 1;
            suits[card.suit() as usize] += 1;
        }
        Self { ranks, suits }
    }

    pub(crate) fn rank_count(&self, rank: Rank) -> u8 {
        self.ranks[rank.value() as usize]
    }

    pub(crate) fn suit_count(&self, suit: Suit) -> u8 {
        self.suits[suit as usize]
    }

    pub(crate) fn any_suit_exactly(&self, n: u8) -> bool {
        Suit::ALL.iter().any(|&s| self.suit_count(s) == n)
    }

    pub(crate) fn any_rank_exactly(&self, n: u8) -> bool {
        self.highest_rank_exactly(n).is_some()
    }

    /// Highest rank occurring exactly `n` times, if any.
    pub(crate) fn highest_rank_exactly(&self, n: u8) -> Option<Rank> {
        Rank::ALL.iter().rev().copied().find(|&r| self.rank_count(r) == n)
    }
}
