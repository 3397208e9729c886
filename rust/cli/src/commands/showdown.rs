//! Showdown command handler.
//!
//! Players are given as repeated `--player ID=C1,C2` flags; ids are printed
//! back in the order they were given.

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use crate::validation::{parse_card_args, parse_player_spec};
use pokerhand_engine::showdown::{showdown, Seat, Showdown};
use std::io::Write;

/// Handle the showdown command.
///
/// # Arguments
///
/// * `board` - The five community cards
/// * `players` - One `ID=C1,C2` spec per player
/// * `out` - Output stream for the per-player report and winners
pub fn handle_showdown_command(
    board: &str,
    players: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let board = parse_card_args(&[board.to_string()])?;
    let seats = players
        .iter()
        .map(|p| parse_player_spec(p))
        .collect::<Result<Vec<Seat<String>>, CliError>>()?;
    if let Some(dup) = seats
        .iter()
        .enumerate()
        .find(|(i, s)| seats[..*i].iter().any(|prev| prev.id == s.id))
    {
        return Err(CliError::InvalidInput(format!(
            "player id {} given twice",
            dup.1.id
        )));
    }

    let result = showdown(&board, &seats)?;
    write_showdown(out, &result)
}

/// Writes the board, each player's best hand and the winners line.
pub(crate) fn write_showdown(out: &mut dyn Write, result: &Showdown<String>) -> Result<(), CliError> {
    writeln!(out, "Board: {}", format_board(&result.board))?;
    for seat in &result.hands {
        writeln!(
            out,
            "{}: {} -> {}",
            seat.id,
            format_board(&seat.pocket),
            format_hand(&seat.hand)
        )?;
    }
    let winners = result.winners.join(", ");
    if result.is_split() {
        writeln!(out, "Winners: {} (split pot)", winners)?;
    } else {
        writeln!(out, "Winners: {}", winners)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(specs: &[&str]) -> Vec<String> {
        specs.iter().map(|s| s.to_string()).collect()
    }

    fn winners_line(output: &str) -> &str {
        output.lines().find(|l| l.starts_with("Winners:")).unwrap()
    }

    #[test]
    fn test_showdown_single_winner() {
        let mut out = Vec::new();
        handle_showdown_command(
            "10H JD 2S 7C 4H",
            &players(&["A=QH,KH", "B=3D,3S"]),
            &mut out,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(winners_line(&output), "Winners: B");
        assert!(output.contains("(High Card)"));
        assert!(output.contains("(Pair)"));
    }

    #[test]
    fn test_showdown_split_pot() {
        let mut out = Vec::new();
        handle_showdown_command(
            "KH KD 9S 9C AH",
            &players(&["p7=2C,3D", "p9=4S,5H"]),
            &mut out,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(winners_line(&output), "Winners: p7, p9 (split pot)");
    }

    #[test]
    fn test_showdown_rejects_repeated_id() {
        let mut out = Vec::new();
        let result = handle_showdown_command(
            "10H JD 2S 7C 4H",
            &players(&["A=QH,KH", "A=3D,3S"]),
            &mut out,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_showdown_rejects_shared_card() {
        let mut out = Vec::new();
        let result = handle_showdown_command(
            "10H JD 2S 7C 4H",
            &players(&["A=10H,KH", "B=3D,3S"]),
            &mut out,
        );
        assert!(matches!(result, Err(CliError::Engine(_))));
    }
}
