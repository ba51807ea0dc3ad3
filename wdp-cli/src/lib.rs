//! Command-line driver for the winner-determination solvers.
//!
//! `wdp generate` writes a random auction as JSON and `wdp solve` runs the
//! brute-force and whale solvers over a stored or freshly generated auction.
//! Options are layered with `ortho_config`: defaults, then configuration
//! files, then `WDP_*` environment variables, then command-line flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod generate;
mod report;
mod solve;

pub use error::CliError;

use generate::GenerateArgs;
use solve::SolveArgs;

const ARG_AUCTION: &str = "auction";
const ARG_ITEMS: &str = "items";
const ARG_BIDDERS: &str = "bidders";
const ARG_SEED: &str = "seed";
const ARG_OUTPUT: &str = "output";
const ARG_SOLVER: &str = "solver";
const ARG_ITERATIONS: &str = "iterations";
const ARG_POPULATION: &str = "population";
const ARG_PARALLEL: &str = "parallel";
const ARG_FORMAT: &str = "format";
const ENV_GENERATE_ITEMS: &str = "WDP_CMDS_GENERATE_ITEMS";
const ENV_GENERATE_BIDDERS: &str = "WDP_CMDS_GENERATE_BIDDERS";

/// Run the `wdp` CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// auction cannot be loaded or generated, a solver rejects its input, or
/// output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Generate(args) => generate::run_generate(args),
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wdp",
    about = "Winner determination for combinatorial auctions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a random auction instance as JSON.
    Generate(GenerateArgs),
    /// Select the revenue-maximising set of winning bids.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
