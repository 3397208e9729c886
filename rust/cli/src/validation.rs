//! Parsing of card arguments given on the command line.
//!
//! Card lists accept whitespace and/or commas between tokens, so
//! `"AH KH"`, `"AH,KH"` and separate shell arguments all work.

use pokerhand_engine::cards::{parse_cards, Card};
use pokerhand_engine::showdown::{Seat, POCKET_SIZE};

use crate::error::CliError;

/// Joins separate arguments and parses them as one card list.
pub fn parse_card_args(args: &[String]) -> Result<Vec<Card>, CliError> {
    let cards = parse_cards(&args.join(" "))?;
    if cards.is_empty() {
        return Err(CliError::InvalidInput("no cards given".into()));
    }
    Ok(cards)
}

/// Parses a `--player` value of the form `ID=C1,C2`.
///
/// # Example
///
/// ```rust
/// # use pokerhand_cli::validation::parse_player_spec;
/// let seat = parse_player_spec("alice=QH,KH").unwrap();
/// assert_eq!(seat.id, "alice");
/// assert_eq!(seat.pocket[1].to_string(), "KH");
/// ```
pub fn parse_player_spec(spec: &str) -> Result<Seat<String>, CliError> {
    let Some((id, cards)) = spec.split_once('=') else {
        return Err(CliError::InvalidInput(format!(
            "player {:?} must look like ID=C1,C2",
            spec
        )));
    };
    let id = id.trim();
    if id.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "player {:?} has an empty id",
            spec
        )));
    }
    let cards = parse_cards(cards)?;
    let pocket: [Card; POCKET_SIZE] = cards.as_slice().try_into().map_err(|_| {
        CliError::InvalidInput(format!(
            "player {} needs {} cards, got {}",
            id,
            POCKET_SIZE,
            cards.len()
        ))
    })?;
    Ok(Seat {
        id: id.to_string(),
        pocket,
    })
}
