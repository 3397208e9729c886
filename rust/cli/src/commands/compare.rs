//! Compare command handler.

use crate::error::CliError;
use crate::formatters::format_hand;
use pokerhand_engine::compare::compare_hands;
use pokerhand_engine::hand::Hand;
use std::cmp::Ordering;
use std::io::Write;

/// Handle the compare command.
///
/// Prints both hands with their categories followed by a `Result:` line of
/// `A wins`, `B wins` or `Tie`.
pub fn handle_compare_command(a: &str, b: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hand_a: Hand = a.parse()?;
    let hand_b: Hand = b.parse()?;

    writeln!(out, "A: {}", format_hand(&hand_a))?;
    writeln!(out, "B: {}", format_hand(&hand_b))?;
    let verdict = match compare_hands(&hand_a, &hand_b) {
        Ordering::Greater => "A wins",
        Ordering::Less => "B wins",
        Ordering::Equal => "Tie",
    };
    writeln!(out, "Result: {}", verdict)?;
    Ok(())
}
