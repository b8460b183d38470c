use crate::deck::{Deck, DeckError};
use crate::evaluator::{resolve_winner_refs, EvalError, HandCategory, PlayerHandResult};
use crate::hand::{Hand, HAND_SIZE};
use rand::Rng;
use std::collections::HashSet;

/// Seats a single deck can serve, counting one burn card per dealing pass.
pub const MAX_PLAYERS: usize = 52 / HAND_SIZE - 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("too many players for one deck: {0}")]
    TooManyPlayers(usize),
    #[error("duplicate player name: {0}")]
    DuplicateName(String),
    #[error("no round has been dealt yet")]
    NotDealt,
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) result: Option<PlayerHandResult>,
}

impl Player {
    fn new(name: String) -> Self {
        Self { name, result: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// This round's hand, if dealt.
    pub fn hand(&self) -> Option<&Hand> {
        self.result.as_ref().map(PlayerHandResult::hand)
    }

    pub fn category(&self) -> Option<HandCategory> {
        self.result.as_ref().map(PlayerHandResult::category)
    }
}

/// Runs rounds of five-card showdown for a fixed roster.
#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    rounds: u64,
}

impl Game {
    /// ```
    /// use poker_showdown::game::Game;
    ///
    /// let mut game = Game::new(["Joe", "Jen", "Bob"]).unwrap();
    /// game.deal_seeded(7).unwrap();
    /// let winners = game.winners().unwrap();
    /// assert!(!winners.is_empty());
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(names.len()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(GameError::DuplicateName(dup.clone()));
        }
        Ok(Self { players: names.into_iter().map(Player::new).collect(), rounds: 0 })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Rounds dealt so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn deal(&mut self) -> Result<(), GameError> {
        self.deal_with(&mut rand::rng())
    }

    pub fn deal_seeded(&mut self, seed: u64) -> Result<(), GameError> {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        self.deal_from(deck)
    }

    pub fn deal_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        self.deal_from(deck)
    }

    /// Clear the previous round, deal five cards to every seat and classify
    /// each hand once.
    fn deal_from(&mut self, mut deck: Deck) -> Result<(), GameError> {
        for p in self.players.iter_mut() {
            p.result = None;
        }
        let dealt = deck.deal(self.players.len(), HAND_SIZE)?;
        for (player, cards) in self.players.iter_mut().zip(dealt) {
            let hand = Hand::from_slice(&cards).map_err(EvalError::from)?;
            let result = PlayerHandResult::new(player.name.clone(), hand);
            log::debug!("{}: {} ({})", player.name, result.hand(), result.category());
            player.result = Some(result);
        }
        self.rounds += 1;
        Ok(())
    }

    /// Results of the current round in seat order; empty before the first deal.
    pub fn results(&self) -> Vec<&PlayerHandResult> {
        self.players.iter().filter_map(|p| p.result.as_ref()).collect()
    }

    pub fn best_category(&self) -> Option<HandCategory> {
        self.results().iter().map(|r| r.category()).max()
    }

    /// Winners of the current round. More than one entry is a draw.
    pub fn winners(&self) -> Result<Vec<PlayerHandResult>, GameError> {
        let results = self.results();
        if results.is_empty() {
            return Err(GameError::NotDealt);
        }
        let winners = showdown_refs(&results)?;
        log::debug!(
            "round {}: won by {}",
            self.rounds,
            winners.iter().map(|w| w.player()).collect::<Vec<_>>().join(", ")
        );
        Ok(winners.into_iter().cloned().collect())
    }
}

/// Keep only the results in the strongest category present and resolve that
/// group; results in weaker categories never reach the resolver.
///
/// ```
/// use poker_showdown::evaluator::PlayerHandResult;
/// use poker_showdown::game::showdown;
///
/// let results = vec![
///     PlayerHandResult::new("Joe", "Ah Kd 9c 5s 2h".parse().unwrap()),
///     PlayerHandResult::new("Jen", "3c 3d 7h 5d 2s".parse().unwrap()),
///     PlayerHandResult::new("Bob", "4c 4s 8d 6h 2c".parse().unwrap()),
/// ];
/// let winners = showdown(&results).unwrap();
/// assert_eq!(winners.len(), 1);
/// assert_eq!(winners[0].player(), "Bob");
/// ```
pub fn showdown(results: &[PlayerHandResult]) -> Result<Vec<&PlayerHandResult>, EvalError> {
    let refs: Vec<&PlayerHandResult> = results.iter().collect();
    showdown_refs(&refs)
}

fn showdown_refs<'a>(
    results: &[&'a PlayerHandResult],
) -> Result<Vec<&'a PlayerHandResult>, EvalError> {
    let Some(best) = results.iter().map(|r| r.category()).max() else {
        return Err(EvalError::EmptyGroup);
    };
    let group: Vec<&PlayerHandResult> =
        results.iter().copied().filter(|r| r.category() == best).collect();
    resolve_winner_refs(&group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_validated() {
        assert_eq!(Game::new(Vec::<String>::new()).unwrap_err(), GameError::NoPlayers);
        let many: Vec<String> = (0..10).map(|i| format!("p{i}")).collect();
        assert_eq!(Game::new(many).unwrap_err(), GameError::TooManyPlayers(10));
        assert_eq!(
            Game::new(["Joe", "Jen", "Joe"]).unwrap_err(),
            GameError::DuplicateName("Joe".into())
        );
    }

    #[test]
    fn max_players_fills_the_deck() {
        assert_eq!(MAX_PLAYERS, 9);
        let names: Vec<String> = (0..MAX_PLAYERS).map(|i| format!("p{i}")).collect();
        let mut game = Game::new(names).unwrap();
        assert!(game.deal_seeded(1).is_ok());
    }

    #[test]
    fn winners_before_deal_is_an_error() {
        let game = Game::new(["Joe"]).unwrap();
        assert!(game.results().is_empty());
        assert_eq!(game.best_category(), None);
        assert_eq!(game.winners().unwrap_err(), GameError::NotDealt);
    }

    #[test]
    fn deal_classifies_every_player() {
        let mut game = Game::new(["Joe", "Jen", "Bob"]).unwrap();
        game.deal_seeded(11).unwrap();
        assert_eq!(game.rounds(), 1);
        for p in game.players() {
            let hand = p.hand().expect("dealt");
            assert_eq!(p.category(), Some(crate::evaluator::classify(hand)));
        }
    }

    #[test]
    fn showdown_on_empty_slice_is_an_error() {
        assert_eq!(showdown(&[]).unwrap_err(), EvalError::EmptyGroup);
    }
}
