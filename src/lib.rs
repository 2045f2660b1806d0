//! deck-rs: playing-card deck construction
//!
//! Goals:
//! - Build the standard 52-card deck and reshape it with a chain of transforms
//! - Transforms are plain functions or closures, `Vec<Card> -> Vec<Card>`
//! - No failure modes when building; `Result` only at the parsing boundary
//!
//! ## Quick start
//! ```
//! use deck_rs::cards::{Card, Rank, Suit};
//! use deck_rs::deck::DeckBuilder;
//! use deck_rs::transforms::{add_jokers, default_sort, filter_out, multiply, shuffle_seeded};
//!
//! let cards = DeckBuilder::new()
//!     .with(filter_out(|c| matches!(c.rank(), Some(Rank::Two | Rank::Three))))
//!     .with(multiply(2))
//!     .with(add_jokers(2))
//!     .with(shuffle_seeded(42))
//!     .with(default_sort)
//!     .build();
//!
//! assert_eq!(cards.len(), 2 * 44 + 2);
//! assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spade));
//! assert_eq!(cards[0].to_string(), "Ace of Spades");
//! assert_eq!(cards[cards.len() - 1].to_string(), "Joker");
//! ```
//!
//! ## CLI
//! Print a shuffled double deck with two jokers:
//! ```sh
//! cargo run --bin deck-rs -- --decks 2 --jokers 2 --shuffle
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod transforms;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
