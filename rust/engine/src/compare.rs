//! Ordering of five-card hands.
//!
//! Hands of different categories order by category. Within a category the
//! tie-break looks only at what defines the hand:
//!
//! - pair / three of a kind: the group rank, then the single top kicker
//! - two pair: high pair, low pair, kicker
//! - four of a kind / full house: the quad or triple rank
//! - straight, flush, straight flush, royal flush: the top card
//! - high card: always a tie
//!
//! Flushes and high-card hands do not walk the full kicker chain, so two such
//! hands with the same top card split.

use std::cmp::Ordering;

use crate::hand::{Category, Hand};

pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    let (ca, cb) = (a.category(), b.category());
    match ca.cmp(&cb) {
        Ordering::Equal => compare_same_category(ca, a, b),
        ord => ord,
    }
}

fn compare_same_category(category: Category, a: &Hand, b: &Hand) -> Ordering {
    match category {
        Category::Pair => compare_pairs(a, b),
        Category::TwoPair => compare_two_pairs(a, b),
        Category::ThreeOfAKind => compare_threes(a, b),
        Category::FourOfAKind => compare_fours(a, b),
        Category::FullHouse => compare_full_houses(a, b),
        Category::Straight | Category::Flush | Category::StraightFlush | Category::RoyalFlush => {
            a.max_card().compare_rank(&b.max_card())
        }
        Category::HighCard => Ordering::Equal,
    }
}

fn compare_pairs(a: &Hand, b: &Hand) -> Ordering {
    match (a.pair_group(), b.pair_group()) {
        (Some(ga), Some(gb)) => ga
            .rank()
            .cmp(&gb.rank())
            .then_with(|| ga.top_kicker().map(|c| c.rank).cmp(&gb.top_kicker().map(|c| c.rank))),
        _ => Ordering::Equal,
    }
}

fn compare_two_pairs(a: &Hand, b: &Hand) -> Ordering {
    match (a.two_pair_groups(), b.two_pair_groups()) {
        (Some(ta), Some(tb)) => ta.high[0]
            .compare_rank(&tb.high[0])
            .then_with(|| ta.low[0].compare_rank(&tb.low[0]))
            .then_with(|| ta.kicker.compare_rank(&tb.kicker)),
        _ => Ordering::Equal,
    }
}

fn compare_threes(a: &Hand, b: &Hand) -> Ordering {
    match (a.three_group(), b.three_group()) {
        (Some(ga), Some(gb)) => ga
            .rank()
            .cmp(&gb.rank())
            .then_with(|| ga.top_kicker().map(|c| c.rank).cmp(&gb.top_kicker().map(|c| c.rank))),
        _ => Ordering::Equal,
    }
}

fn compare_fours(a: &Hand, b: &Hand) -> Ordering {
    match (a.four_group(), b.four_group()) {
        (Some(ga), Some(gb)) => ga.rank().cmp(&gb.rank()),
        _ => Ordering::Equal,
    }
}

fn compare_full_houses(a: &Hand, b: &Hand) -> Ordering {
    match (a.full_house_groups(), b.full_house_groups()) {
        (Some(fa), Some(fb)) => fa.three[0].compare_rank(&fb.three[0]),
        _ => Ordering::Equal,
    }
}
