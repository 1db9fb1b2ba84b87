//! Command-line interface for the weekend getaway ranker.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod logging;
mod output;
mod rank;

pub use error::CliError;
pub use logging::init_logging;
pub use output::OutputFormat;

use rank::{RankArgs, run_rank};

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_LIMIT: &str = "limit";

/// Run the getaway CLI with the current process arguments and environment.
///
/// Recommendations are written to standard output.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when
/// the dataset cannot be loaded, or when output cannot be written. Source
/// cities missing from the dataset are reported in the output instead.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => {
            let config = args.into_config()?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_rank(&config, &mut out)?;
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "getaway",
    about = "Rank weekend getaway destinations near a source city",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank destinations for one or more source cities.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
