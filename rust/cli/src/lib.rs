//! # Pokerhand CLI Library
//!
//! Command-line front end for the `pokerhand-engine` crate: classify hands,
//! compare them, resolve showdowns, and deal random hands.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let args = ["pokerhand", "compare", "--a", "AH AD 2S 2C 3D", "--b", "KH KD QS QC JD"];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = pokerhand_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Result: A wins"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Classify five cards or pick the best hand out of seven
//! - `compare`: Compare two five-card hands
//! - `showdown`: Resolve winners and split pots on a complete board
//! - `deal`: Deal and show down a random hand
//! - `bench`: Benchmark best-hand selection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, PokerhandCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_compare_command, handle_deal_command,
    handle_eval_command, handle_showdown_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "compare", "showdown", "deal", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let args = vec!["pokerhand", "deal", "--seed", "42"];
/// let mut out = Vec::new();
/// let code = pokerhand_cli::run(args, &mut out, &mut std::io::sink());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerhandCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Compare { a, b } => handle_compare_command(&a, &b, out),
        Commands::Showdown { board, players } => handle_showdown_command(&board, &players, out),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Bench { iters } => handle_bench_command(iters, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(&e, err);
    exit_code::ERROR
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Pokerhand CLI")?;
    writeln!(err, "Usage: pokerhand <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: pokerhand --help")
}
