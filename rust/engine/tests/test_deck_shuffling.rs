use std::collections::HashSet;

use pokerhand_engine::cards::Card;
use pokerhand_engine::deck::Deck;
use pokerhand_engine::showdown::{showdown, Seat};

#[test]
fn fresh_deck_deals_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    while let Some(c) = deck.deal_card() {
        assert!(set.insert(c), "card {c} duplicated");
    }
    assert_eq!(set.len(), 52);
    assert_eq!(deck.remaining(), 0);
    deck.reset();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..52).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..52).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(a, b);
}

#[test]
fn consecutive_shuffles_keep_the_full_deck() {
    let mut deck = Deck::new_with_seed(5);
    for _ in 0..3 {
        deck.shuffle();
        let cards: HashSet<Card> = (0..52).map(|_| deck.deal_card().unwrap()).collect();
        assert_eq!(cards.len(), 52);
    }
}

#[test]
fn dealt_hand_feeds_a_showdown() {
    let mut deck = Deck::new_with_seed(777);
    let deal = deck.deal_holdem(4).unwrap();
    let seats: Vec<Seat<usize>> = deal
        .pockets
        .iter()
        .enumerate()
        .map(|(id, pocket)| Seat { id, pocket: *pocket })
        .collect();
    let result = showdown(&deal.board, &seats).unwrap();
    assert_eq!(result.hands.len(), 4);
    assert!(!result.winners.is_empty());
    assert!(result.winners.iter().all(|w| *w < 4));
}
