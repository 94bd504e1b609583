//! Command-line interface for ranking Surfside spots.
//!
//! The `rank` subcommand loads a spot catalogue (built-in or JSON), pulls
//! simulated and calibrated observations for one date, ranks every spot by
//! overall score and prints the top recommendations together with the full
//! analyses as JSON on stdout. Options merge from CLI flags, configuration
//! files and `SURFSIDE_CMDS_RANK_*` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_rank};

pub(crate) const ARG_RANK_DATE: &str = "date";
pub(crate) const ARG_RANK_TOP: &str = "top";
pub(crate) const ARG_RANK_REGION: &str = "region";
pub(crate) const ARG_RANK_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_RANK_WEIGHTS: &str = "weights";
pub(crate) const ARG_RANK_SEED: &str = "seed";
pub(crate) const ARG_RANK_NO_CALIBRATION: &str = "no-calibration";
pub(crate) const ARG_RANK_TIMEOUT_SECS: &str = "timeout-secs";

/// Default log directives when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the Surfside CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading or writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

/// Install a `tracing` subscriber writing to stderr.
///
/// Library crates log through the `log` facade, which the subscriber
/// captures. Directives come from `RUST_LOG` and default to warnings only.
///
/// # Errors
///
/// Returns [`CliError::Logging`] if a global subscriber is already set.
pub fn init_logging() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

#[derive(Debug, Parser)]
#[command(
    name = "surfside",
    about = "Rank surf spots by forecast conditions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank spots for one date and print recommendations as JSON.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
