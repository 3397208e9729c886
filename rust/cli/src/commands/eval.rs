//! Eval command handler.
//!
//! Five cards are classified as they are; seven cards are reduced to the
//! strongest five-card hand first.

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use crate::validation::parse_card_args;
use pokerhand_engine::hand::{Hand, HAND_SIZE};
use pokerhand_engine::showdown::{best_hand, SEVEN};
use std::io::Write;

/// Handle the eval command.
///
/// # Arguments
///
/// * `cards` - Card tokens as given on the command line
/// * `out` - Output stream for the evaluation
///
/// # Returns
///
/// `Err(CliError::InvalidInput)` unless exactly five or seven distinct cards
/// are given.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_card_args(cards)?;
    let hand = match cards.len() {
        HAND_SIZE => Hand::new(&cards)?,
        SEVEN => {
            writeln!(out, "Cards: {}", format_board(&cards))?;
            best_hand(&cards)?
        }
        n => {
            return Err(CliError::InvalidInput(format!(
                "expected {} or {} cards, got {}",
                HAND_SIZE, SEVEN, n
            )));
        }
    };
    writeln!(out, "Hand: {}", format_hand(&hand))?;
    writeln!(out, "Category: {}", hand.category())?;
    Ok(())
}
