//! Deal command handler.
//!
//! Shuffles a fresh deck, deals pockets and a full board, and shows the hand
//! down. The seed is always printed so a deal can be replayed with `--seed`.

use crate::commands::showdown::write_showdown;
use crate::config;
use crate::error::CliError;
use pokerhand_engine::deck::Deck;
use pokerhand_engine::showdown::{showdown, Seat};
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - RNG seed; falls back to the configured seed, then to a random one
/// * `players` - Number of seats; falls back to the configured count
/// * `out` - Output stream for the dealt hand and its showdown
pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<u8>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let players = players.unwrap_or(cfg.players);

    let mut deck = Deck::new_with_seed(seed);
    let deal = deck.deal_holdem(players as usize)?;
    let seats: Vec<Seat<String>> = deal
        .pockets
        .iter()
        .enumerate()
        .map(|(i, pocket)| Seat {
            id: format!("P{}", i + 1),
            pocket: *pocket,
        })
        .collect();
    let result = showdown(&deal.board, &seats)?;

    writeln!(out, "Seed: {}", seed)?;
    write_showdown(out, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_deal_same_seed_same_output() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(42), Some(3), &mut out1).unwrap();
        handle_deal_command(Some(42), Some(3), &mut out2).unwrap();
        assert_eq!(out1, out2);

        let output = String::from_utf8(out1).unwrap();
        assert!(output.starts_with("Seed: 42\n"));
        assert!(output.contains("P3: ["));
        assert!(!output.contains("P4:"));
        assert!(output.contains("Winners: "));
    }

    #[test]
    #[serial]
    fn test_deal_prints_generated_seed() {
        let mut out = Vec::new();
        handle_deal_command(None, Some(2), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let seed_line = output.lines().next().unwrap();
        let seed = seed_line.strip_prefix("Seed: ").unwrap();
        assert!(seed.parse::<u64>().is_ok());
    }
}
