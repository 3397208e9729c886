use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::Card;
use crate::combinations::combinations;
use crate::compare::compare_hands;
use crate::errors::HandError;
use crate::hand::{check_distinct, Category, Hand, HAND_SIZE};

/// Hole cards per player.
pub const POCKET_SIZE: usize = 2;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Cards a player's best hand is chosen from.
pub const SEVEN: usize = POCKET_SIZE + BOARD_SIZE;

/// Picks the strongest five-card hand out of seven distinct cards.
///
/// All 21 five-card subsets are ranked with [`compare_hands`]; among equal
/// maxima the first one in enumeration order is returned.
pub fn best_hand(cards: &[Card]) -> Result<Hand, HandError> {
    if cards.len() != SEVEN {
        return Err(HandError::InvalidHandSize {
            expected: SEVEN,
            actual: cards.len(),
        });
    }
    check_distinct(cards)?;

    let mut best: Option<Hand> = None;
    for subset in combinations(cards, HAND_SIZE)? {
        let hand = Hand::new(&subset)?;
        trace!(hand = %hand, category = %hand.category(), "candidate");
        best = match best {
            Some(current) if compare_hands(&hand, &current) != Ordering::Greater => Some(current),
            _ => Some(hand),
        };
    }
    // seven cards always produce at least one subset
    let best = best.ok_or(HandError::InvalidCombination {
        n: cards.len(),
        k: HAND_SIZE,
    })?;
    debug!(hand = %best, category = %best.category(), "best hand selected");
    Ok(best)
}

/// Best hand for a player given the community cards and their pocket.
pub fn best_hand_with_board(board: &[Card], pocket: &[Card]) -> Result<Hand, HandError> {
    if pocket.len() != POCKET_SIZE {
        return Err(HandError::InvalidHandSize {
            expected: POCKET_SIZE,
            actual: pocket.len(),
        });
    }
    let cards: Vec<Card> = board.iter().chain(pocket).copied().collect();
    best_hand(&cards)
}

/// Returns every id whose hand ties the strongest hand, in input order.
///
/// More than one id means a split pot. Ids must be unique.
pub fn resolve_winners<'a, K, I>(entries: I) -> Result<Vec<K>, HandError>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, &'a Hand)>,
{
    let entries: Vec<(K, &Hand)> = entries.into_iter().collect();
    check_unique_ids(entries.iter().map(|(id, _)| id))?;
    let max = entries
        .iter()
        .map(|(_, h)| *h)
        .reduce(|best, h| {
            if compare_hands(h, best) == Ordering::Greater {
                h
            } else {
                best
            }
        })
        .ok_or(HandError::EmptyInput)?;
    let max = *max;

    let winners: Vec<K> = entries
        .into_iter()
        .filter(|(_, h)| compare_hands(h, &max) == Ordering::Equal)
        .map(|(id, _)| id)
        .collect();
    debug!(
        winners = winners.len(),
        category = %max.category(),
        split = winners.len() > 1,
        "showdown resolved"
    );
    Ok(winners)
}

fn check_unique_ids<'a, K: PartialEq + 'a>(
    ids: impl Iterator<Item = &'a K>,
) -> Result<(), HandError> {
    let ids: Vec<&K> = ids.collect();
    for (index, id) in ids.iter().enumerate() {
        if ids[..index].contains(id) {
            return Err(HandError::DuplicatePlayer { index });
        }
    }
    Ok(())
}

/// A player taking part in a showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat<K> {
    pub id: K,
    pub pocket: [Card; POCKET_SIZE],
}

/// A player's evaluated best hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatHand<K> {
    pub id: K,
    pub pocket: [Card; POCKET_SIZE],
    pub hand: Hand,
}

impl<K> SeatHand<K> {
    pub fn category(&self) -> Category {
        self.hand.category()
    }
}

/// Outcome of a showdown: every player's best hand and the winning ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown<K> {
    pub board: Vec<Card>,
    pub hands: Vec<SeatHand<K>>,
    pub winners: Vec<K>,
}

impl<K> Showdown<K> {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Evaluates each seat against a complete board and resolves the winners.
///
/// Cards must be distinct across the board and every pocket, and seat ids
/// must be unique.
pub fn showdown<K: Clone + PartialEq>(board: &[Card], seats: &[Seat<K>]) -> Result<Showdown<K>, HandError> {
    if board.len() != BOARD_SIZE {
        return Err(HandError::InvalidHandSize {
            expected: BOARD_SIZE,
            actual: board.len(),
        });
    }
    if seats.is_empty() {
        return Err(HandError::EmptyInput);
    }
    check_unique_ids(seats.iter().map(|s| &s.id))?;
    let all: Vec<Card> = board
        .iter()
        .copied()
        .chain(seats.iter().flat_map(|s| s.pocket))
        .collect();
    check_distinct(&all)?;

    let hands = seats
        .iter()
        .map(|seat| {
            let hand = best_hand_with_board(board, &seat.pocket)?;
            Ok(SeatHand {
                id: seat.id.clone(),
                pocket: seat.pocket,
                hand,
            })
        })
        .collect::<Result<Vec<_>, HandError>>()?;
    let winners = resolve_winners(hands.iter().map(|s| (s.id.clone(), &s.hand)))?;

    Ok(Showdown {
        board: board.to_vec(),
        hands,
        winners,
    })
}
