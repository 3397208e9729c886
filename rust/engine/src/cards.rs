use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::HandError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (H)
    Hearts,
    /// Diamonds suit (D)
    Diamonds,
    /// Spades suit (S)
    Spades,
    /// Clubs suit (C)
    Clubs,
}

/// Display color of a suit. Never used for ranking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Single-letter token used in the card text format.
    pub fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_letter(c: char) -> Option<Suit> {
        match c {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'S' => Some(Suit::Spades),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and straight detection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        let rank = match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Rank token used in the card text format (`2`..`10`, `J`, `Q`, `K`, `A`).
    pub fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_token(s: &str) -> Option<Rank> {
        match s {
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            // numeric ranks stop at 10, face cards only go by letter
            _ if (1..=2).contains(&s.len())
                && s.bytes().all(|b| b.is_ascii_digit())
                && !s.starts_with('0') =>
            {
                s.parse::<u8>()
                    .ok()
                    .filter(|v| *v <= 10)
                    .and_then(Rank::from_u8)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Represents a single playing card with a rank and suit.
///
/// Equality and hashing use the full identity (rank and suit) so that
/// duplicates can be detected; gameplay comparisons go through
/// [`Card::compare_rank`]. The derived ordering is by rank first, then suit.
///
/// Cards serialize as their text token (`"AH"`, `"10C"`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Compares two cards by rank only, ignoring suit.
    pub fn compare_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Draws a uniformly random card from the given generator.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Card {
        let ranks = all_ranks();
        let suits = all_suits();
        Card {
            rank: ranks[rng.random_range(0..ranks.len())],
            suit: suits[rng.random_range(0..suits.len())],
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = HandError;

    /// Parses an exact token: uppercase letters, no surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_letter)
            .ok_or_else(|| HandError::parse(s))?;
        let rank = Rank::from_token(chars.as_str()).ok_or_else(|| HandError::parse(s))?;
        Ok(Card { rank, suit })
    }
}

impl TryFrom<String> for Card {
    type Error = HandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parses a list of card tokens separated by whitespace and/or commas.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, HandError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn parses_single_and_double_digit_ranks() {
        assert_eq!("2H".parse::<Card>().unwrap(), Card::new(Rank::Two, Suit::Hearts));
        assert_eq!("10C".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Clubs));
        assert_eq!("AS".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "H", "1H", "11H", "01H", "TH", "AX", "A", "10", "+5H", "AHH", "2 H"] {
            assert!(
                matches!(bad.parse::<Card>(), Err(HandError::Parse { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn rejects_lowercase_and_padded_tokens() {
        for bad in ["ah", "10s", "Qh", "kD", " QH ", "\tjc\n", "AH\n"] {
            assert!(
                matches!(bad.parse::<Card>(), Err(HandError::Parse { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn every_card_round_trips() {
        for card in full_deck() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn compare_rank_ignores_suit() {
        let a = Card::new(Rank::Queen, Suit::Hearts);
        let b = Card::new(Rank::Queen, Suit::Clubs);
        let c = Card::new(Rank::King, Suit::Clubs);
        assert_eq!(a.compare_rank(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(a.compare_rank(&c), Ordering::Less);
        assert_eq!(c.compare_rank(&a), Ordering::Greater);
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
    }

    #[test]
    fn random_card_is_deterministic_for_a_seed() {
        let mut r1 = ChaCha20Rng::seed_from_u64(9);
        let mut r2 = ChaCha20Rng::seed_from_u64(9);
        let a: Vec<Card> = (0..20).map(|_| Card::random(&mut r1)).collect();
        let b: Vec<Card> = (0..20).map(|_| Card::random(&mut r2)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_cards_accepts_commas_and_spaces() {
        let cards = parse_cards("AH, 10D  KS,2C").unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Diamonds));
        assert!(parse_cards("AH ZZ").is_err());
        assert!(parse_cards("AH kd").is_err());
    }
}
