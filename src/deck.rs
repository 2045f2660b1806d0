use crate::cards::{Card, Rank, Suit};
use core::fmt;

/// Number of cards in a standard deck without jokers.
pub const STANDARD_DECK_SIZE: usize = 52;

/// A step in a deck build: takes the accumulated cards and returns the next sequence.
///
/// Any `FnMut(Vec<Card>) -> Vec<Card>` fits; boxing lets different closures share one list.
pub type Transform = Box<dyn FnMut(Vec<Card>) -> Vec<Card>>;

/// The 52-card base deck: Spades, Diamonds, Clubs, Hearts, each Ace through King.
///
/// ```
/// use deck_rs::cards::{Card, Rank, Suit};
/// use deck_rs::deck::standard_deck;
///
/// let deck = standard_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Spade));
/// assert_eq!(deck[51], Card::new(Rank::King, Suit::Heart));
/// ```
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Build the base deck and run each transform over it, in order.
///
/// ```
/// use deck_rs::deck::build_deck;
/// use deck_rs::transforms::{add_jokers, multiply};
///
/// let cards = build_deck([multiply(2)]);
/// assert_eq!(cards.len(), 104);
///
/// let cards = build_deck([add_jokers(2)]);
/// assert_eq!(cards.len(), 54);
/// ```
pub fn build_deck<I, F>(transforms: I) -> Vec<Card>
where
    I: IntoIterator<Item = F>,
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    let mut cards = standard_deck();
    for (step, mut transform) in transforms.into_iter().enumerate() {
        cards = transform(cards);
        tracing::trace!(step, len = cards.len(), "applied deck transform");
    }
    cards
}

/// Collects transforms of different types, then builds the deck.
///
/// ```
/// use deck_rs::cards::Suit;
/// use deck_rs::deck::DeckBuilder;
/// use deck_rs::transforms::{add_jokers, default_sort, filter_out, shuffle_seeded};
///
/// let cards = DeckBuilder::new()
///     .with(filter_out(|c| c.suit() == Suit::Club))
///     .with(add_jokers(2))
///     .with(shuffle_seeded(7))
///     .with(default_sort)
///     .build();
/// assert_eq!(cards.len(), 41);
/// assert!(cards[39].is_joker() && cards[40].is_joker());
/// ```
#[derive(Default)]
pub struct DeckBuilder {
    transforms: Vec<Transform>,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform to the chain.
    pub fn with<F>(mut self, transform: F) -> Self
    where
        F: FnMut(Vec<Card>) -> Vec<Card> + 'static,
    {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Append an already boxed transform.
    pub fn push(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn build(self) -> Vec<Card> {
        tracing::debug!(transforms = self.transforms.len(), "building deck");
        build_deck(self.transforms)
    }
}

impl fmt::Debug for DeckBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder").field("transforms", &self.transforms.len()).finish()
    }
}

impl From<Vec<Transform>> for DeckBuilder {
    fn from(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }
}
