//! Card, hand, and board formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal supports Unicode and fall back
//! to the canonical `H D C S` letters otherwise, so ASCII output can be pasted
//! straight back into another command.
//!
//! ## Example
//!
//! ```rust
//! use pokerhand_engine::cards::{Card, Rank, Suit};
//! use pokerhand_cli::formatters::{format_card, format_board};
//!
//! let ten_spades = Card::new(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten_spades) == "10♠" || format_card(&ten_spades) == "10S");
//!
//! let board = vec![ten_spades];
//! assert!(format_board(&board).starts_with("[10"));
//! ```

use pokerhand_engine::cards::{Card, Suit};
use pokerhand_engine::hand::Hand;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using Unicode symbols with a letter fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Format a Card as rank token plus suit, e.g. "10♥" or "10H".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.token(), format_suit(&card.suit))
}

/// Format a list of cards in bracket notation.
///
/// # Returns
///
/// Formatted board string like "[A♠ K♥ Q♦]" or "[]" if empty
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

/// Format a five-card hand, highest card first, followed by its category.
///
/// ```rust
/// # use pokerhand_cli::formatters::format_hand;
/// let hand = "10H JH QH KH AH".parse().unwrap();
/// assert!(format_hand(&hand).ends_with("(Royal Flush)"));
/// ```
pub fn format_hand(hand: &Hand) -> String {
    format!("{} ({})", format_board(hand.cards()), hand.category())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhand_engine::cards::Rank;

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "H");

        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "S");
    }

    #[test]
    fn test_format_card_uses_ten_token() {
        let ten = Card::new(Rank::Ten, Suit::Clubs);
        let formatted = format_card(&ten);
        assert!(formatted == "10♣" || formatted == "10C");
    }

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_hand_sorted_with_category() {
        let hand: Hand = "2C 9D 2H 5S KD".parse().unwrap();
        let formatted = format_hand(&hand);
        assert!(formatted.starts_with("[K"));
        assert!(formatted.ends_with("(Pair)"));
    }
}
