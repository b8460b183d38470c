use crate::cards::{parse_cards, Card, Rank};
use std::fmt;
use std::str::FromStr;

/// Number of cards in every hand of this variant.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Exactly five cards, sorted by descending rank.
///
/// The sort is stable, so cards of equal rank keep the order they were given
/// in. Every positional comparison made by the resolver relies on this order,
/// which is why the only way to obtain a `Hand` is through a sorting
/// constructor.
///
/// ```
/// use poker_showdown::cards::Rank;
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "3c Ah 9d 9s Kc".parse().unwrap();
/// assert_eq!(
///     hand.ranks(),
///     [Rank::Ace, Rank::King, Rank::Nine, Rank::Nine, Rank::Three]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
        Self { cards }
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::CardCount(cards.len()))?;
        Ok(Self::new(cards))
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Ranks in hand order (descending).
    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.cards.map(Card::rank)
    }

    /// Ranks with every card of `rank` left out, order preserved.
    pub fn ranks_without(&self, rank: Rank) -> Vec<Rank> {
        self.cards.iter().map(|c| c.rank()).filter(|r| *r != rank).collect()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_slice(&cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn new_sorts_descending_and_keeps_ties_stable() {
        let hand = Hand::new([
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Hearts),
        ]);
        assert_eq!(
            hand.cards(),
            &[
                Card::new(Rank::Ace, Suit::Diamonds),
                Card::new(Rank::Queen, Suit::Spades),
                Card::new(Rank::Four, Suit::Hearts),
                Card::new(Rank::Four, Suit::Clubs),
                Card::new(Rank::Two, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn wrong_card_count_is_rejected() {
        let four = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(Hand::from_slice(&four), Err(HandError::CardCount(4)));
        let six = parse_cards("As Ks Qs Js 9s 2c").unwrap();
        assert_eq!(Hand::try_from(six), Err(HandError::CardCount(6)));
    }

    #[test]
    fn parse_errors_are_wrapped() {
        assert!(matches!("As Ks Qs Js 1s".parse::<Hand>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn ranks_without_drops_every_matching_card() {
        let hand: Hand = "Kh Kd 9c 5s 3h".parse().unwrap();
        assert_eq!(hand.ranks_without(Rank::King), vec![Rank::Nine, Rank::Five, Rank::Three]);
    }

    #[test]
    fn display_joins_with_spaces() {
        let hand: Hand = "2c Ah Td 9s 9h".parse().unwrap();
        assert_eq!(hand.to_string(), "Ah Td 9s 9h 2c");
    }
}
