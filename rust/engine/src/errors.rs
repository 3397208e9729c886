use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("Invalid card token: {token:?}")]
    Parse { token: String },
    #[error("Invalid number of cards: {actual}, expected: {expected}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("No hands to compare")]
    EmptyInput,
    #[error("Cannot choose {k} items out of {n}")]
    InvalidCombination { n: usize, k: usize },
    #[error("Too many players: {actual}, maximum: {max}")]
    TooManyPlayers { max: usize, actual: usize },
    #[error("Player at position {index} repeats an earlier player id")]
    DuplicatePlayer { index: usize },
    #[error("No cards left in the deck")]
    DeckExhausted,
}

impl HandError {
    pub(crate) fn parse(token: &str) -> Self {
        HandError::Parse {
            token: token.to_string(),
        }
    }
}
