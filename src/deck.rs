use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("not enough cards: need {needed}, have {available}")]
    NotEnoughCards { needed: usize, available: usize },
}

/// A 52-card deck. Cards are handed out from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every suit/rank combination once, suit-major.
    ///
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducible rounds.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Fisher-Yates shuffle driven by the caller's RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Deal `per_player` cards to each of `players` seats, one card per seat
    /// per pass, burning one card after every pass.
    ///
    /// Dealt and burnt cards leave the deck.
    ///
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(3);
    /// let hands = deck.deal(3, 5).unwrap();
    /// assert_eq!(hands.len(), 3);
    /// assert!(hands.iter().all(|h| h.len() == 5));
    /// assert_eq!(deck.len(), 52 - 3 * 5 - 5);
    /// ```
    pub fn deal(&mut self, players: usize, per_player: usize) -> Result<Vec<Vec<Card>>, DeckError> {
        let needed = Self::cards_needed(players, per_player);
        if needed > self.cards.len() {
            return Err(DeckError::NotEnoughCards { needed, available: self.cards.len() });
        }
        let mut hands: Vec<Vec<Card>> =
            (0..players).map(|_| Vec::with_capacity(per_player)).collect();
        let mut drawn = self.cards.drain(..needed);
        for _ in 0..per_player {
            for hand in hands.iter_mut() {
                // length checked above
                if let Some(card) = drawn.next() {
                    hand.push(card);
                }
            }
            let _burn = drawn.next();
        }
        Ok(hands)
    }

    /// Cards consumed by [`Deck::deal`], burns included.
    pub const fn cards_needed(players: usize, per_player: usize) -> usize {
        (players + 1) * per_player
    }
}
