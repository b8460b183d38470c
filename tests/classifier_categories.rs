use poker_showdown::cards::{Card, Rank::*, Suit::*};
use poker_showdown::evaluator::{classify, classify_cards, EvalError, HandCategory};
use poker_showdown::hand::{Hand, HandError};

fn hand(cards: [Card; 5]) -> Hand {
    Hand::new(cards)
}

#[test]
fn category_flush() {
    let h = hand([
        Card::new(King, Hearts),
        Card::new(Ten, Hearts),
        Card::new(Eight, Hearts),
        Card::new(Six, Hearts),
        Card::new(Three, Hearts),
    ]);
    assert_eq!(classify(&h), HandCategory::Flush);
}

#[test]
fn category_flush_beats_straight_shape() {
    // no straights in this rule set; a suited run is just a flush
    let h = hand([
        Card::new(Ace, Spades),
        Card::new(King, Spades),
        Card::new(Queen, Spades),
        Card::new(Jack, Spades),
        Card::new(Ten, Spades),
    ]);
    assert_eq!(classify(&h), HandCategory::Flush);
}

#[test]
fn category_straight_shape_is_high_card() {
    let h = hand([
        Card::new(Nine, Clubs),
        Card::new(Eight, Diamonds),
        Card::new(Seven, Hearts),
        Card::new(Six, Spades),
        Card::new(Five, Clubs),
    ]);
    assert_eq!(classify(&h), HandCategory::HighCard);
}

#[test]
fn category_three_of_a_kind() {
    let h = hand([
        Card::new(Queen, Clubs),
        Card::new(Queen, Diamonds),
        Card::new(Queen, Hearts),
        Card::new(Ten, Spades),
        Card::new(Two, Clubs),
    ]);
    assert_eq!(classify(&h), HandCategory::ThreeOfAKind);
}

#[test]
fn category_full_house_counts_as_three_of_a_kind() {
    let h = hand([
        Card::new(Three, Clubs),
        Card::new(Three, Diamonds),
        Card::new(Three, Hearts),
        Card::new(Jack, Spades),
        Card::new(Jack, Clubs),
    ]);
    assert_eq!(classify(&h), HandCategory::ThreeOfAKind);
}

#[test]
fn category_one_pair() {
    let h = hand([
        Card::new(Ace, Hearts),
        Card::new(Ace, Diamonds),
        Card::new(Ten, Spades),
        Card::new(Nine, Clubs),
        Card::new(Two, Diamonds),
    ]);
    assert_eq!(classify(&h), HandCategory::OnePair);
}

#[test]
fn category_two_pair_counts_as_one_pair() {
    let h = hand([
        Card::new(Jack, Clubs),
        Card::new(Jack, Diamonds),
        Card::new(Nine, Clubs),
        Card::new(Nine, Hearts),
        Card::new(Two, Spades),
    ]);
    assert_eq!(classify(&h), HandCategory::OnePair);
}

#[test]
fn category_four_of_a_kind_falls_through_to_high_card() {
    let h = hand([
        Card::new(Nine, Clubs),
        Card::new(Nine, Diamonds),
        Card::new(Nine, Hearts),
        Card::new(Nine, Spades),
        Card::new(Ace, Clubs),
    ]);
    assert_eq!(classify(&h), HandCategory::HighCard);
}

#[test]
fn category_high_card() {
    let h = hand([
        Card::new(Ace, Hearts),
        Card::new(King, Diamonds),
        Card::new(Seven, Spades),
        Card::new(Five, Clubs),
        Card::new(Two, Diamonds),
    ]);
    assert_eq!(classify(&h), HandCategory::HighCard);
}

#[test]
fn classify_cards_is_an_invalid_argument_for_other_sizes() {
    let four = [
        Card::new(Ace, Hearts),
        Card::new(King, Diamonds),
        Card::new(Seven, Spades),
        Card::new(Five, Clubs),
    ];
    assert_eq!(
        classify_cards(&four),
        Err(EvalError::InvalidHand(HandError::CardCount(4)))
    );
    assert_eq!(classify_cards(&[]), Err(EvalError::InvalidHand(HandError::CardCount(0))));
}
