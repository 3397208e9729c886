//! # pokerhand-engine: Poker Hand Evaluation Core
//!
//! Classifies and compares five-card poker hands, picks the best five-card
//! hand out of seven cards (two pocket cards plus a five-card board), and
//! resolves showdown winners including split pots. Everything here is pure:
//! values in, values out, safe to call from any thread.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and the `AH` / `10C` text codec
//! - [`combinations`] - Lazy k-subset enumeration
//! - [`hand`] - Five-card hands, categories and group/kicker extraction
//! - [`compare`] - Category-aware ordering of hands
//! - [`showdown`] - Best-of-seven selection and winner resolution
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`errors`] - Error types for validation failures
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerhand_engine::cards::parse_cards;
//! use pokerhand_engine::hand::Category;
//! use pokerhand_engine::showdown::best_hand;
//!
//! let cards = parse_cards("2C AH 3D KH QH JH 10H").unwrap();
//! let best = best_hand(&cards).unwrap();
//! assert_eq!(best.category(), Category::RoyalFlush);
//! ```
//!
//! ## Split Pots
//!
//! ```rust
//! use pokerhand_engine::hand::Hand;
//! use pokerhand_engine::showdown::resolve_winners;
//!
//! let a: Hand = "AH AD 5S 5C 3D".parse().unwrap();
//! let b: Hand = "AS AC 5H 5D 3C".parse().unwrap();
//! let winners = resolve_winners([("alice", &a), ("bob", &b)]).unwrap();
//! assert_eq!(winners, vec!["alice", "bob"]);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use pokerhand_engine::deck::Deck;
//!
//! // Same seed produces same deal
//! let d1 = Deck::new_with_seed(42).deal_holdem(2).unwrap();
//! let d2 = Deck::new_with_seed(42).deal_holdem(2).unwrap();
//! assert_eq!(d1, d2);
//! ```

pub mod cards;
pub mod combinations;
pub mod compare;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod showdown;
