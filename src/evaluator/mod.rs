pub(crate) mod counts;
pub(crate) mod tiebreak;

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use counts::HandCounts;
use std::fmt;

/// Hand categories of the reduced rule set, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    ThreeOfAKind = 2,
    Flush = 3,
}

impl HandCategory {
    pub const ALL: [HandCategory; 4] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::ThreeOfAKind,
        HandCategory::Flush,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Flush => "Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("cannot resolve winners of an empty group")]
    EmptyGroup,
    #[error("group mixes categories: expected {expected}, found {found}")]
    MixedCategories { expected: HandCategory, found: HandCategory },
}

/// A player's hand for one round together with its category.
///
/// The category is computed once, on construction, and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHandResult {
    player: String,
    hand: Hand,
    category: HandCategory,
}

impl PlayerHandResult {
    pub fn new(player: impl Into<String>, hand: Hand) -> Self {
        let category = classify(&hand);
        Self { player: player.into(), hand, category }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }
}

type Predicate = fn(&HandCounts) -> bool;

fn is_flush(counts: &HandCounts) -> bool {
    counts.any_suit_exactly(5)
}

fn is_three_of_a_kind(counts: &HandCounts) -> bool {
    counts.any_rank_exactly(3)
}

fn is_one_pair(counts: &HandCounts) -> bool {
    counts.any_rank_exactly(2)
}

type TieBreak = for<'a> fn(Vec<&'a PlayerHandResult>) -> Vec<&'a PlayerHandResult>;

/// One link of the chain: the category it assigns, the test that assigns it
/// and the tie-break used when that category wins a round.
#[derive(Clone, Copy)]
pub struct Rule {
    category: HandCategory,
    matches: Predicate,
    tie_break: TieBreak,
}

impl Rule {
    pub fn category(&self) -> HandCategory {
        self.category
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("category", &self.category).finish_non_exhaustive()
    }
}

/// Ordered classifier and resolver chain.
///
/// Rules are tried from the head. Classification returns the category of the
/// first matching rule and falls back to [`HandCategory::HighCard`].
/// Resolution forwards past every rule bound to a different category than the
/// group's, so callers always start at the head; a group no rule claims gets
/// the high-card comparison.
#[derive(Debug, Clone, Copy)]
pub struct RuleChain {
    rules: [Rule; 3],
}

impl RuleChain {
    /// Flush, then three of a kind, then one pair.
    pub const fn standard() -> Self {
        Self {
            rules: [
                Rule {
                    category: HandCategory::Flush,
                    matches: is_flush,
                    tie_break: tiebreak::flush,
                },
                Rule {
                    category: HandCategory::ThreeOfAKind,
                    matches: is_three_of_a_kind,
                    tie_break: tiebreak::three_of_a_kind,
                },
                Rule {
                    category: HandCategory::OnePair,
                    matches: is_one_pair,
                    tie_break: tiebreak::one_pair,
                },
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn classify(&self, hand: &Hand) -> HandCategory {
        let counts = HandCounts::of(hand);
        for rule in &self.rules {
            if (rule.matches)(&counts) {
                return rule.category;
            }
        }
        HandCategory::HighCard
    }

    pub fn resolve<'a>(
        &self,
        group: &'a [PlayerHandResult],
    ) -> Result<Vec<&'a PlayerHandResult>, EvalError> {
        let refs: Vec<&PlayerHandResult> = group.iter().collect();
        self.resolve_refs(&refs)
    }

    /// [`RuleChain::resolve`] over borrowed results, for callers that filtered
    /// a larger slice down to one category.
    pub fn resolve_refs<'a>(
        &self,
        group: &[&'a PlayerHandResult],
    ) -> Result<Vec<&'a PlayerHandResult>, EvalError> {
        let expected = group.first().ok_or(EvalError::EmptyGroup)?.category();
        if let Some(odd) = group.iter().find(|r| r.category() != expected) {
            return Err(EvalError::MixedCategories { expected, found: odd.category() });
        }

        let tie_break = self
            .rules
            .iter()
            .find(|rule| rule.category == expected)
            .map_or(tiebreak::high_card as TieBreak, |rule| rule.tie_break);
        let winners = tie_break(group.to_vec());
        log::debug!(
            "resolved {} {expected} hand(s) to {} winner(s)",
            group.len(),
            winners.len()
        );
        Ok(winners)
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD: RuleChain = RuleChain::standard();

/// Classify a hand with the standard rule chain.
///
/// ```
/// use poker_showdown::evaluator::{classify, HandCategory};
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "Qh Qd 9c 5s 2h".parse().unwrap();
/// assert_eq!(classify(&hand), HandCategory::OnePair);
///
/// // four of a kind is not part of this rule set
/// let quads: Hand = "9c 9d 9h 9s Ac".parse().unwrap();
/// assert_eq!(classify(&quads), HandCategory::HighCard);
/// ```
pub fn classify(hand: &Hand) -> HandCategory {
    STANDARD.classify(hand)
}

/// Classify loose cards, rejecting anything but exactly five.
pub fn classify_cards(cards: &[Card]) -> Result<HandCategory, EvalError> {
    let hand = Hand::from_slice(cards)?;
    Ok(classify(&hand))
}

/// Narrow a group of same-category results to its winners.
///
/// The group must be non-empty and share a single category. The returned
/// references keep the group's order; more than one means a draw.
///
/// ```
/// use poker_showdown::evaluator::{resolve_winners, PlayerHandResult};
///
/// let group = vec![
///     PlayerHandResult::new("Joe", "Ah Kh Qh Jh 9h".parse().unwrap()),
///     PlayerHandResult::new("Jen", "Ac Kc Qc Jc 8c".parse().unwrap()),
/// ];
/// let winners = resolve_winners(&group).unwrap();
/// assert_eq!(winners.len(), 1);
/// assert_eq!(winners[0].player(), "Joe");
/// ```
pub fn resolve_winners(
    group: &[PlayerHandResult],
) -> Result<Vec<&PlayerHandResult>, EvalError> {
    STANDARD.resolve(group)
}

/// [`resolve_winners`] over borrowed results.
pub fn resolve_winner_refs<'a>(
    group: &[&'a PlayerHandResult],
) -> Result<Vec<&'a PlayerHandResult>, EvalError> {
    STANDARD.resolve_refs(group)
}
