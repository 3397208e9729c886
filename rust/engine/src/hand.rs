use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::HandError;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Hand categories ordered from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Rank label for display.
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A group of same-rank cards with the remaining kickers ordered high -> low.
///
/// Only built by [`Hand`], for a rank the hand actually holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    rank: Rank,
    cards: Vec<Card>,
    kickers: Vec<Card>,
}

impl Group {
    /// Rank shared by the grouped cards.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    pub fn top_kicker(&self) -> Option<Card> {
        self.kickers.first().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoPairGroups {
    pub high: [Card; 2],
    pub low: [Card; 2],
    pub kicker: Card,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullHouseGroups {
    pub three: [Card; 3],
    pub pair: [Card; 2],
}

/// Exactly five distinct cards.
///
/// Cards are kept sorted high -> low by rank (suit breaks ties) so that two
/// hands holding the same cards are equal regardless of input order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Hand, HandError> {
        if cards.len() != HAND_SIZE {
            return Err(HandError::InvalidHandSize {
                expected: HAND_SIZE,
                actual: cards.len(),
            });
        }
        check_distinct(cards)?;
        let mut sorted = [cards[0]; HAND_SIZE];
        sorted.copy_from_slice(cards);
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Hand { cards: sorted })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Number of cards per rank, indexed by rank value (2..=14).
    pub fn rank_counts(&self) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for c in &self.cards {
            counts[c.rank.value() as usize] += 1;
        }
        counts
    }

    pub fn category(&self) -> Category {
        classify(self)
    }

    /// Highest-ranked card of the hand.
    pub fn max_card(&self) -> Card {
        self.cards[0]
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|c| c.suit == suit)
    }

    /// Five consecutive ranks with the Ace only at the top.
    pub fn is_straight(&self) -> bool {
        // cards are sorted high -> low
        self.cards
            .windows(2)
            .all(|w| w[0].rank.value() == w[1].rank.value() + 1)
    }

    /// The single pair of a one-pair hand; `None` for two pair, full house
    /// or any hand holding a triple or quad.
    pub fn pair_group(&self) -> Option<Group> {
        if !self.ranks_with_count(3).is_empty() || !self.ranks_with_count(4).is_empty() {
            return None;
        }
        let ranks = self.ranks_with_count(2);
        match ranks.as_slice() {
            [rank] => Some(self.group(*rank)),
            _ => None,
        }
    }

    pub fn two_pair_groups(&self) -> Option<TwoPairGroups> {
        // ascending rank order
        let ranks = self.ranks_with_count(2);
        let [low, high] = ranks.as_slice() else {
            return None;
        };
        let kicker = self.group(*high).kickers.into_iter().find(|c| c.rank != *low)?;
        Some(TwoPairGroups {
            high: self.pick(*high)?,
            low: self.pick(*low)?,
            kicker,
        })
    }

    pub fn three_group(&self) -> Option<Group> {
        self.ranks_with_count(3).first().map(|r| self.group(*r))
    }

    pub fn four_group(&self) -> Option<Group> {
        self.ranks_with_count(4).first().map(|r| self.group(*r))
    }

    pub fn full_house_groups(&self) -> Option<FullHouseGroups> {
        let three = *self.ranks_with_count(3).first()?;
        let pair = *self.ranks_with_count(2).first()?;
        Some(FullHouseGroups {
            three: self.pick(three)?,
            pair: self.pick(pair)?,
        })
    }

    fn ranks_with_count(&self, n: u8) -> Vec<Rank> {
        self.rank_counts()
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == n)
            .filter_map(|(value, _)| Rank::from_u8(value as u8))
            .collect()
    }

    fn group(&self, rank: Rank) -> Group {
        let (cards, kickers): (Vec<Card>, Vec<Card>) =
            self.cards.iter().copied().partition(|c| c.rank == rank);
        Group {
            rank,
            cards,
            kickers,
        }
    }

    fn pick<const N: usize>(&self, rank: Rank) -> Option<[Card; N]> {
        let cards: Vec<Card> = self.cards.iter().copied().filter(|c| c.rank == rank).collect();
        cards.try_into().ok()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl std::str::FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::new(&crate::cards::parse_cards(s)?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), HandError> {
    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(HandError::DuplicateCard(*c));
        }
    }
    Ok(())
}

/// Determines the category of a five-card hand.
///
/// Straight and flush are checked first; otherwise the rank counts decide.
/// A-2-3-4-5 is not a straight: the Ace only ranks above the King.
pub fn classify(hand: &Hand) -> Category {
    let straight = hand.is_straight();
    let flush = hand.is_flush();

    if straight && flush {
        return if hand.max_card().rank == Rank::Ace {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
    }
    if flush {
        return Category::Flush;
    }
    if straight {
        return Category::Straight;
    }

    let counts = hand.rank_counts();
    let mut pairs = 0;
    let mut trips = 0;
    for &n in counts.iter() {
        match n {
            4 => return Category::FourOfAKind,
            3 => trips += 1,
            2 => pairs += 1,
            _ => {}
        }
    }
    match (trips, pairs) {
        (1, 1) => Category::FullHouse,
        (1, _) => Category::ThreeOfAKind,
        (_, 2) => Category::TwoPair,
        (_, 1) => Category::Pair,
        _ => Category::HighCard,
    }
}
