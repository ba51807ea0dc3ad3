//! Solve command implementation for the `wdp` CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wdp_core::{Auction, Solver};
use wdp_solver_brute::BruteForceSolver;
use wdp_solver_whale::{WhaleConfig, WhaleSolver};

use crate::fs::open_utf8_file;
use crate::generate::{GenerateConfig, generate_auction};
use crate::report::{OutputFormat, SolverReport, write_reports};
use crate::{
    ARG_AUCTION, ARG_BIDDERS, ARG_FORMAT, ARG_ITEMS, ARG_ITERATIONS, ARG_PARALLEL,
    ARG_POPULATION, ARG_SEED, ARG_SOLVER, CliError,
};

/// Items in a generated auction when none are requested.
pub(crate) const DEFAULT_ITEMS: usize = 20;
/// Bidders in a generated auction when none are requested.
pub(crate) const DEFAULT_BIDDERS: usize = 15;
/// Whale iteration budget when none is configured.
pub(crate) const DEFAULT_ITERATIONS: u64 = 300_000;

/// Which solvers `wdp solve` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SolverChoice {
    /// Exhaustive enumeration only.
    Brute,
    /// Whale optimization only.
    Whale,
    /// Brute force followed by whale optimization.
    #[default]
    Both,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve the winner determination problem for an auction \
                 loaded from a JSON file, or for a random auction generated \
                 from --items, --bidders and --seed. Each selected solver \
                 prints its winning allocation, revenue and run time.",
    about = "Select the revenue-maximising set of winning bids"
)]
#[ortho_config(prefix = "WDP")]
pub(crate) struct SolveArgs {
    /// Auction JSON written by `wdp generate`; overrides --items/--bidders.
    #[arg(long = ARG_AUCTION, value_name = "path")]
    #[serde(default)]
    pub(crate) auction: Option<Utf8PathBuf>,
    /// Items in the generated auction (default 20).
    #[arg(long = ARG_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) items: Option<usize>,
    /// Bidders in the generated auction (default 15).
    #[arg(long = ARG_BIDDERS, value_name = "count")]
    #[serde(default)]
    pub(crate) bidders: Option<usize>,
    /// Seed for auction generation and the whale solver (default 0).
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Solvers to run (default both).
    #[arg(long = ARG_SOLVER, value_enum)]
    #[serde(default)]
    pub(crate) solver: Option<SolverChoice>,
    /// Whale iteration budget (default 300000).
    #[arg(long = ARG_ITERATIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) iterations: Option<u64>,
    /// Whale population size (default 10).
    #[arg(long = ARG_POPULATION, value_name = "count")]
    #[serde(default)]
    pub(crate) population: Option<usize>,
    /// Evaluate whales on the rayon thread pool.
    #[arg(
        long = ARG_PARALLEL,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) parallel: Option<bool>,
    /// Output format (default text).
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Where the auction under study comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AuctionSource {
    /// A JSON document on disk.
    File(Utf8PathBuf),
    /// A random auction drawn from a seed.
    Random(GenerateConfig),
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolveConfig {
    pub(crate) source: AuctionSource,
    pub(crate) solver: SolverChoice,
    pub(crate) whale: WhaleConfig,
    pub(crate) format: OutputFormat,
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let seed = args.seed.unwrap_or_default();
        let source = match args.auction {
            Some(path) => AuctionSource::File(path),
            None => AuctionSource::Random(GenerateConfig {
                items: args.items.unwrap_or(DEFAULT_ITEMS),
                bidders: args.bidders.unwrap_or(DEFAULT_BIDDERS),
                seed,
                output: None,
            }),
        };
        let whale = WhaleConfig {
            population: args.population.unwrap_or(WhaleConfig::DEFAULT_POPULATION),
            seed,
            parallel: args.parallel.unwrap_or(false),
            ..WhaleConfig::new(args.iterations.unwrap_or(DEFAULT_ITERATIONS))
        };
        let solver = args.solver.unwrap_or_default();
        // Reject bad whale settings before any solver starts work.
        if matches!(solver, SolverChoice::Whale | SolverChoice::Both) {
            whale.validate().map_err(|source| CliError::Solve {
                solver: "whale",
                source,
            })?;
        }
        Ok(Self {
            source,
            solver,
            whale,
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Builds the solvers for the current solve invocation.
pub(super) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Vec<Box<dyn Solver>>;
}

pub(super) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Vec<Box<dyn Solver>> {
        let brute = || -> Box<dyn Solver> { Box::new(BruteForceSolver) };
        let whale = || -> Box<dyn Solver> { Box::new(WhaleSolver::with_config(config.whale)) };
        match config.solver {
            SolverChoice::Brute => vec![brute()],
            SolverChoice::Whale => vec![whale()],
            SolverChoice::Both => vec![brute(), whale()],
        }
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let reports = execute_solve(&config, builder)?;
    write_reports(writer, config.format, &reports)
}

fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolveSolverBuilder,
) -> Result<Vec<SolverReport>, CliError> {
    let auction = match &config.source {
        AuctionSource::File(path) => load_auction(path)?,
        AuctionSource::Random(generate) => generate_auction(generate)?,
    };
    log::info!(
        "solving {} bids over {} items",
        auction.bid_count(),
        auction.item_count()
    );
    builder
        .build(config)
        .iter()
        .map(|solver| {
            solver
                .solve(auction.bids())
                .map(|result| SolverReport::new(solver.name(), &result))
                .map_err(|source| CliError::Solve {
                    solver: solver.name(),
                    source,
                })
        })
        .collect()
}

/// Loads a JSON-encoded [`Auction`] from disk.
pub(super) fn load_auction(path: &Utf8Path) -> Result<Auction, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenAuction {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseAuction {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
