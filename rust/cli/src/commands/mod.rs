//! Subcommand handlers.
//!
//! Every handler writes its report to `out` and returns a [`CliError`] on
//! failure; [`crate::run`] turns that into the exit code.
//!
//! [`CliError`]: crate::error::CliError

pub mod bench;
pub mod cfg;
pub mod compare;
pub mod deal;
pub mod eval;
pub mod showdown;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use showdown::handle_showdown_command;
