use deck_rs::cards::{Card, Rank, Suit};
use deck_rs::deck::{build_deck, standard_deck, DeckBuilder, Transform};
use deck_rs::transforms::{add_jokers, default_sort, filter_out, less, multiply, shuffle, sort_by};
use std::collections::HashMap;

#[test]
fn empty_chain_yields_52_cards_13_per_suit() {
    let cards = build_deck(Vec::<Transform>::new());
    assert_eq!(cards.len(), 13 * 4);

    let mut per_suit: HashMap<Suit, Vec<Rank>> = HashMap::new();
    for c in &cards {
        per_suit.entry(c.suit()).or_default().push(c.rank().expect("no jokers"));
    }
    assert_eq!(per_suit.len(), 4);
    for ranks in per_suit.values() {
        assert_eq!(ranks.as_slice(), Rank::ALL.as_slice());
    }
}

#[test]
fn default_sort_and_sort_less_start_with_ace_of_spades() {
    let ace = Card::new(Rank::Ace, Suit::Spade);
    assert_eq!(build_deck([default_sort])[0], ace);
    assert_eq!(build_deck([sort_by(less)])[0], ace);
}

#[test]
fn shuffle_changes_order_but_not_contents() {
    let shuffled = build_deck([shuffle]);
    let base = standard_deck();
    assert_ne!(shuffled, base);

    let mut resorted = shuffled.clone();
    resorted.sort();
    assert_eq!(resorted, base);
}

#[test]
fn last_five_cards_are_jokers() {
    let n = 5;
    let cards = build_deck([add_jokers(n)]);
    assert!(cards[cards.len() - n..].iter().all(|c| c.suit() == Suit::Joker));
}

#[test]
fn filter_removes_twos_and_threes() {
    let cards = build_deck([filter_out(|c| matches!(c.rank(), Some(Rank::Two | Rank::Three)))]);
    for c in &cards {
        assert!(!matches!(c.rank(), Some(Rank::Two | Rank::Three)), "found {c}");
    }
}

#[test]
fn five_decks_have_260_cards() {
    assert_eq!(build_deck([multiply(5)]).len(), 13 * 4 * 5);
}

#[test]
fn rendering() {
    assert_eq!(Card::new(Rank::Ace, Suit::Heart).to_string(), "Ace of Hearts");
    assert_eq!(Card::new(Rank::Ace, Suit::Joker).to_string(), "Joker");
}

#[test]
fn builder_chains_mixed_transforms() {
    let cards = DeckBuilder::new()
        .with(multiply(2))
        .with(filter_out(|c| c.suit() == Suit::Spade))
        .with(add_jokers(4))
        .with(default_sort)
        .build();
    assert_eq!(cards.len(), 2 * 39 + 4);
    assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Diamond));
    assert_eq!(cards[1], Card::new(Rank::Ace, Suit::Diamond));
    assert_eq!(cards.last().copied(), Some(Card::joker(3)));
}
