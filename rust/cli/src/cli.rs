//! Command-line definitions for the `pokerhand` binary.

use clap::{Parser, Subcommand};

use crate::config::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Parser, Debug)]
#[command(
    name = "pokerhand",
    version,
    about = "Evaluate, compare and resolve Texas Hold'em poker hands"
)]
pub struct PokerhandCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify five cards, or pick the best five out of seven
    Eval {
        /// Card tokens such as AH 10D 2C (commas also separate)
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Compare two five-card hands
    Compare {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Resolve the winners of a showdown on a complete board
    Showdown {
        /// Five community cards
        #[arg(long)]
        board: String,
        /// A player as ID=C1,C2; repeat for each player
        #[arg(long = "player", required = true)]
        players: Vec<String>,
    },
    /// Deal a random hand from a shuffled deck and show it down
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(MIN_PLAYERS as i64..=MAX_PLAYERS as i64))]
        players: Option<u8>,
    },
    /// Time best-hand selection over random seven-card sets
    Bench {
        #[arg(long, default_value_t = 200)]
        iters: u32,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
