use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of ranks in a suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Card ranks from Ace (low) to King (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value, 1 (Ace) through 13 (King).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based position within a suit, 0 (Ace) through 12 (King).
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Some(r) = Rank::ALL.iter().find(|r| r.name().eq_ignore_ascii_case(t)) {
            return Ok(*r);
        }
        let r = match t.to_ascii_uppercase().as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// Suits in canonical deck order, plus the `Joker` marker which always sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spade,
    Diamond,
    Club,
    Heart,
    Joker,
}

impl Suit {
    /// The four suits of a standard deck, in build order.
    pub const STANDARD: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
            Suit::Heart => "Heart",
            Suit::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        match t.as_str() {
            "s" | "spade" | "spades" => Ok(Suit::Spade),
            "d" | "diamond" | "diamonds" => Ok(Suit::Diamond),
            "c" | "club" | "clubs" => Ok(Suit::Club),
            "h" | "heart" | "hearts" => Ok(Suit::Heart),
            "joker" | "jokers" => Ok(Suit::Joker),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

/// A playing card: rank + suit, or a joker carrying a tag.
///
/// A joker's rank is not meaningful; the tag tells jokers in the same deck apart.
///
/// ```
/// use deck_rs::cards::{Card, Rank, Suit};
///
/// assert_eq!(Card::new(Rank::Ace, Suit::Heart).to_string(), "Ace of Hearts");
/// assert_eq!(Card::joker(0).to_string(), "Joker");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    tag: usize,
}

impl Card {
    /// Build a card. Passing `Suit::Joker` yields a joker tagged with the rank's index.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        match suit {
            Suit::Joker => Self::joker(rank.index()),
            _ => Self { rank, suit, tag: 0 },
        }
    }

    pub const fn joker(tag: usize) -> Self {
        Self { rank: Rank::Ace, suit: Suit::Joker, tag }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// The rank, or `None` for a joker.
    pub const fn rank(self) -> Option<Rank> {
        if self.is_joker() {
            None
        } else {
            Some(self.rank)
        }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The joker's tag, or `None` for a standard card.
    pub const fn tag(self) -> Option<usize> {
        if self.is_joker() {
            Some(self.tag)
        } else {
            None
        }
    }

    /// Ordering key: suit index, then rank index (or tag for jokers).
    pub const fn sort_key(self) -> (usize, usize) {
        let within = if self.is_joker() { self.tag } else { self.rank.index() };
        (self.suit.index(), within)
    }

    /// Position in a fully sorted deck: `suit_index * 13 + rank_index`.
    /// Jokers take `52 + tag`, after every standard card, saturating at `usize::MAX`.
    pub const fn absolute_rank(self) -> usize {
        let (suit, within) = self.sort_key();
        (suit * RANKS_PER_SUIT).saturating_add(within)
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return write!(f, "{}", Suit::Joker);
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Accepts "Ace of Hearts", "Joker", or the compact "AH" / "10s" form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("joker") {
            return Ok(Card::joker(0));
        }

        let words: Vec<&str> = t.split_whitespace().collect();
        let card = match words.as_slice() {
            [rank, of, suit] if of.eq_ignore_ascii_case("of") => {
                Card::new(Rank::from_str(rank)?, standard_suit(suit, s)?)
            }
            [compact] if compact.is_ascii() && compact.len() >= 2 => {
                let (rank, suit) = compact.split_at(compact.len() - 1);
                Card::new(Rank::from_str(rank)?, standard_suit(suit, s)?)
            }
            _ => return Err(CardParseError::Invalid(s.to_string())),
        };
        Ok(card)
    }
}

// Jokers only parse from the bare word; "Ace of Jokers" is rejected.
fn standard_suit(text: &str, whole: &str) -> Result<Suit, CardParseError> {
    match Suit::from_str(text)? {
        Suit::Joker => Err(CardParseError::Invalid(whole.to_string())),
        suit => Ok(suit),
    }
}

/// Parse cards separated by commas or newlines.
///
/// ```
/// use deck_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("Ace of Spades, 10h\nJoker").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spade));
/// assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Heart));
/// assert!(cards[2].is_joker());
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
