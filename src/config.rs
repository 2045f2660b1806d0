//! Declarative deck configuration.
//!
//! `DeckConfig` names the common transforms as plain fields so a deck can be
//! described by data (CLI flags, settings) rather than closures. Steps run in
//! a fixed order: exclusions, copies, jokers, sort, shuffle.

use crate::cards::{Card, Rank, Suit};
use crate::deck::DeckBuilder;
use crate::transforms::{add_jokers, default_sort, filter_out, multiply, shuffle, shuffle_seeded};

/// Configuration for a built deck.
///
/// ```
/// use deck_rs::cards::Rank;
/// use deck_rs::config::DeckConfig;
///
/// let cards = DeckConfig::default()
///     .with_decks(2)
///     .with_jokers(2)
///     .exclude_rank(Rank::Two)
///     .with_shuffle(true)
///     .with_seed(Some(7))
///     .build();
/// assert_eq!(cards.len(), 2 * 48 + 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Copies of the (filtered) base deck. Negative values count as zero; capped at [`MAX_DECKS`].
    pub decks: i64,
    /// Jokers appended after copying. Negative values count as zero; capped at [`MAX_JOKERS`].
    pub jokers: i64,
    pub exclude_ranks: Vec<Rank>,
    pub exclude_suits: Vec<Suit>,
    /// Sort into canonical order after jokers are added.
    pub sort: bool,
    /// Shuffle as the last step.
    pub shuffle: bool,
    /// Seed for a reproducible shuffle; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            exclude_ranks: Vec::new(),
            exclude_suits: Vec::new(),
            sort: false,
            shuffle: false,
            seed: None,
        }
    }
}

/// Upper bound on `decks` accepted by [`DeckConfig::builder`].
pub const MAX_DECKS: usize = 1024;

/// Upper bound on `jokers` accepted by [`DeckConfig::builder`].
pub const MAX_JOKERS: usize = 1024;

/// Clamp a signed count to `usize`, treating negatives as zero.
pub fn clamp_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

fn capped(field: &'static str, requested: i64, max: usize) -> usize {
    let n = clamp_count(requested);
    if n > max {
        tracing::warn!(field, requested, max, "count too large, capping");
        return max;
    }
    n
}

impl DeckConfig {
    pub fn with_decks(mut self, decks: i64) -> Self {
        self.decks = decks;
        self
    }

    pub fn with_jokers(mut self, jokers: i64) -> Self {
        self.jokers = jokers;
        self
    }

    pub fn exclude_rank(mut self, rank: Rank) -> Self {
        self.exclude_ranks.push(rank);
        self
    }

    pub fn exclude_suit(mut self, suit: Suit) -> Self {
        self.exclude_suits.push(suit);
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Whether `card` is removed by the rank/suit exclusions. Jokers are never excluded here.
    pub fn excludes(&self, card: &Card) -> bool {
        match card.rank() {
            Some(rank) => {
                self.exclude_ranks.contains(&rank) || self.exclude_suits.contains(&card.suit())
            }
            None => false,
        }
    }

    /// The transform chain this configuration describes.
    pub fn builder(&self) -> DeckBuilder {
        let mut builder = DeckBuilder::new();

        if !self.exclude_ranks.is_empty() || !self.exclude_suits.is_empty() {
            let cfg = self.clone();
            builder = builder.with(filter_out(move |c: &Card| cfg.excludes(c)));
        }

        let decks = capped("decks", self.decks, MAX_DECKS);
        if decks != 1 {
            builder = builder.with(multiply(decks));
        }

        let jokers = capped("jokers", self.jokers, MAX_JOKERS);
        if jokers > 0 {
            builder = builder.with(add_jokers(jokers));
        }

        if self.sort {
            builder = builder.with(default_sort);
        }

        if self.shuffle {
            builder = match self.seed {
                Some(seed) => builder.with(shuffle_seeded(seed)),
                None => builder.with(shuffle),
            };
        }

        tracing::debug!(
            decks,
            jokers,
            excluded_ranks = self.exclude_ranks.len(),
            excluded_suits = self.exclude_suits.len(),
            sort = self.sort,
            shuffle = self.shuffle,
            seeded = self.seed.is_some(),
            steps = builder.len(),
            "deck config resolved"
        );
        builder
    }

    pub fn build(&self) -> Vec<Card> {
        self.builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::standard_deck;

    #[test]
    fn default_config_builds_the_standard_deck() {
        let cfg = DeckConfig::default();
        assert!(cfg.builder().is_empty());
        assert_eq!(cfg.build(), standard_deck());
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(clamp_count(-3), 0);
        assert_eq!(clamp_count(4), 4);

        let cards = DeckConfig::default().with_jokers(-5).build();
        assert_eq!(cards, standard_deck());

        let cards = DeckConfig::default().with_decks(-2).with_jokers(2).build();
        assert_eq!(cards, vec![Card::joker(0), Card::joker(1)]);
    }

    #[test]
    fn huge_counts_are_capped() {
        let cards = DeckConfig::default().with_decks(i64::MAX).with_jokers(i64::MAX).build();
        assert_eq!(cards.len(), 52 * MAX_DECKS + MAX_JOKERS);
        assert_eq!(cards.last().copied(), Some(Card::joker(MAX_JOKERS - 1)));
    }

    #[test]
    fn exclusions_skip_jokers() {
        let cfg = DeckConfig::default()
            .exclude_suit(Suit::Heart)
            .exclude_rank(Rank::Ace)
            .with_jokers(1);
        assert!(cfg.excludes(&Card::new(Rank::Two, Suit::Heart)));
        assert!(cfg.excludes(&Card::new(Rank::Ace, Suit::Spade)));
        assert!(!cfg.excludes(&Card::joker(0)));

        let cards = cfg.build();
        // 39 non-heart cards minus three remaining aces, plus one joker
        assert_eq!(cards.len(), 37);
        assert!(cards.iter().all(|c| !cfg.excludes(c)));
        assert!(cards[36].is_joker());
    }

    #[test]
    fn excluding_the_joker_suit_keeps_jokers() {
        let cards = DeckConfig::default().exclude_suit(Suit::Joker).with_jokers(2).build();
        assert_eq!(cards.len(), 54);
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let cfg = DeckConfig::default().with_decks(2).with_shuffle(true).with_seed(Some(11));
        assert_eq!(cfg.build(), cfg.build());
        assert_ne!(cfg.build(), cfg.clone().with_shuffle(false).build());
    }

    #[test]
    fn sort_runs_before_shuffle() {
        let cfg = DeckConfig::default().with_sort(true).with_shuffle(true).with_seed(Some(3));
        assert_eq!(cfg.builder().len(), 2);
        assert_ne!(cfg.build(), standard_deck());
    }
}
