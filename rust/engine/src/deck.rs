use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::HandError;
use crate::showdown::{BOARD_SIZE, POCKET_SIZE};

/// Most players a single 52-card deal can seat (burns included).
pub const MAX_PLAYERS: usize = 21;

/// Cards dealt for one hold'em hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub pockets: Vec<[Card; POCKET_SIZE]>,
    pub board: [Card; BOARD_SIZE],
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: ChaCha20Rng) -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Shuffles and deals a full hand: burn, two pocket cards per player dealt
    /// round by round, then burn + flop, burn + turn, burn + river.
    pub fn deal_holdem(&mut self, players: usize) -> Result<Deal, HandError> {
        if players == 0 {
            return Err(HandError::EmptyInput);
        }
        if players > MAX_PLAYERS {
            return Err(HandError::TooManyPlayers {
                max: MAX_PLAYERS,
                actual: players,
            });
        }
        self.shuffle();

        self.burn_card();
        let mut dealt = vec![Vec::with_capacity(POCKET_SIZE); players];
        for _ in 0..POCKET_SIZE {
            for pocket in dealt.iter_mut() {
                pocket.push(self.next()?);
            }
        }

        let mut board = Vec::with_capacity(BOARD_SIZE);
        self.burn_card();
        for _ in 0..3 {
            board.push(self.next()?);
        }
        for _ in 0..2 {
            self.burn_card();
            board.push(self.next()?);
        }

        let pockets = dealt
            .into_iter()
            .map(|p| [p[0], p[1]])
            .collect();
        let board = [board[0], board[1], board[2], board[3], board[4]];
        Ok(Deal { pockets, board })
    }

    fn next(&mut self) -> Result<Card, HandError> {
        self.deal_card().ok_or(HandError::DeckExhausted)
    }
}
