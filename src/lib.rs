//! poker-showdown: reduced-rule five-card showdown
//!
//! Four categories only, strongest first: Flush, Three of a Kind, One Pair,
//! High Card. Every hand gets exactly one of them; the players holding the
//! best category of a round are then narrowed to the winners (a draw when
//! more than one remains).
//!
//! ## Quick start
//! ```
//! use poker_showdown::evaluator::{classify, resolve_winners, HandCategory, PlayerHandResult};
//! use poker_showdown::hand::Hand;
//!
//! let hand: Hand = "Kh Kd 9c 5s 3h".parse().unwrap();
//! assert_eq!(classify(&hand), HandCategory::OnePair);
//!
//! let group = vec![
//!     PlayerHandResult::new("Joe", hand),
//!     PlayerHandResult::new("Jen", "Kc Ks 9d 5h 2s".parse().unwrap()),
//! ];
//! let winners = resolve_winners(&group).unwrap();
//! assert_eq!(winners[0].player(), "Joe");
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin poker-showdown -- --player Joe --player Jen --player Bob
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
