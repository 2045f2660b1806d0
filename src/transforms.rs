//! Transforms for [`build_deck`](crate::deck::build_deck) and
//! [`DeckBuilder`](crate::deck::DeckBuilder).
//!
//! Plain transforms are functions (`default_sort`, `shuffle`); the rest are
//! constructors returning a closure configured by their arguments.

use crate::cards::Card;
use core::cmp::Ordering;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Comparator used by [`default_sort`]: suit-major, then rank (jokers by tag).
pub fn less(a: &Card, b: &Card) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}

/// Sort into canonical order: Spades, Diamonds, Clubs, Hearts, then jokers by tag.
///
/// ```
/// use deck_rs::cards::{Card, Rank, Suit};
/// use deck_rs::deck::build_deck;
/// use deck_rs::transforms::{default_sort, shuffle};
///
/// let cards = build_deck([shuffle, default_sort]);
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spade));
/// ```
pub fn default_sort(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by(less);
    cards
}

/// Stable sort with a caller-supplied comparator.
pub fn sort_by<F>(mut compare: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: FnMut(&Card, &Card) -> Ordering,
{
    move |mut cards| {
        cards.sort_by(&mut compare);
        cards
    }
}

/// Drop every card matching `predicate`, keeping the others in order.
///
/// ```
/// use deck_rs::cards::Rank;
/// use deck_rs::deck::build_deck;
/// use deck_rs::transforms::filter_out;
///
/// let cards = build_deck([filter_out(|c| matches!(c.rank(), Some(Rank::Two | Rank::Three)))]);
/// assert_eq!(cards.len(), 44);
/// ```
pub fn filter_out<P>(mut predicate: P) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    P: FnMut(&Card) -> bool,
{
    move |mut cards| {
        cards.retain(|c| !predicate(c));
        cards
    }
}

/// Shuffle with a fresh OS-seeded generator. Not reproducible; see [`shuffle_seeded`].
pub fn shuffle(mut cards: Vec<Card>) -> Vec<Card> {
    let mut rng = ChaCha8Rng::from_os_rng();
    cards.shuffle(&mut rng);
    cards
}

/// Shuffle using a `ChaCha8Rng` seeded from `seed`, for reproducibility.
///
/// The generator is created once, so reusing the same transform in a
/// [`DeckBuilder`](crate::deck::DeckBuilder) continues the stream.
pub fn shuffle_seeded(seed: u64) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    shuffle_with(ChaCha8Rng::seed_from_u64(seed))
}

/// Shuffle using the provided RNG implementing Rng.
pub fn shuffle_with<R: Rng>(mut rng: R) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut cards| {
        cards.shuffle(&mut rng);
        cards
    }
}

/// Append `n` jokers tagged `0..n`.
pub fn add_jokers(n: usize) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut cards| {
        cards.reserve(n);
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Concatenate `n` copies of the sequence. `multiply(0)` empties it.
pub fn multiply(n: usize) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |cards| cards.repeat(n)
}
