//! Bench command handler for best-hand selection performance.
//!
//! Deals seven-card sets from a deck shuffled with seed 1, so every run
//! evaluates the same cards, and reports elapsed time plus how often each
//! category came up.

use crate::error::CliError;
use pokerhand_engine::cards::Card;
use pokerhand_engine::deck::Deck;
use pokerhand_engine::errors::HandError;
use pokerhand_engine::hand::Category;
use pokerhand_engine::showdown::{best_hand, SEVEN};
use std::collections::BTreeMap;
use std::io::Write;

/// Handle the bench command.
///
/// # Arguments
///
/// * `iters` - Number of seven-card sets to evaluate
/// * `out` - Output stream for benchmark results
pub fn handle_bench_command(iters: u32, out: &mut dyn Write) -> Result<(), CliError> {
    if iters == 0 {
        return Err(CliError::InvalidInput("iters must be at least 1".into()));
    }
    let start = std::time::Instant::now();
    let mut tally: BTreeMap<Category, u32> = BTreeMap::new();
    let mut deck = Deck::new_with_seed(1);
    deck.shuffle();
    for _ in 0..iters {
        if deck.remaining() < SEVEN {
            deck.shuffle();
        }
        let cards = (0..SEVEN)
            .map(|_| deck.deal_card().ok_or(HandError::DeckExhausted))
            .collect::<Result<Vec<Card>, HandError>>()?;
        let best = best_hand(&cards)?;
        *tally.entry(best.category()).or_default() += 1;
    }
    let dur = start.elapsed();
    writeln!(out, "Benchmark: {} iters in {:?}", iters, dur)?;
    for (category, count) in tally.iter().rev() {
        writeln!(out, "  {:<16} {}", category.label(), count)?;
    }
    Ok(())
}
