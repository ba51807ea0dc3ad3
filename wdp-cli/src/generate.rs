//! Generate command implementation for the `wdp` CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use wdp_core::Auction;
use wdp_data::{GeneratorConfig, random_auction};

use crate::report::write_json;
use crate::{
    ARG_BIDDERS, ARG_ITEMS, ARG_OUTPUT, ARG_SEED, CliError, ENV_GENERATE_BIDDERS,
    ENV_GENERATE_ITEMS,
};

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Draw item prices uniformly from 10..=1000 and give every \
                 bidder one bundle, picking each item with probability 0.25. \
                 Each bid offers the sum of its items' prices.",
    about = "Write a random auction instance as JSON"
)]
#[ortho_config(prefix = "WDP")]
pub(crate) struct GenerateArgs {
    /// Number of items on offer.
    #[arg(long = ARG_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) items: Option<usize>,
    /// Number of bidders, one bid each.
    #[arg(long = ARG_BIDDERS, value_name = "count")]
    #[serde(default)]
    pub(crate) bidders: Option<usize>,
    /// Seed for the random generator.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Destination file; stdout when omitted.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GenerateConfig::try_from(merged)
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateConfig {
    pub(crate) items: usize,
    pub(crate) bidders: usize,
    pub(crate) seed: u64,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let items = args.items.ok_or(CliError::MissingArgument {
            field: ARG_ITEMS,
            env: ENV_GENERATE_ITEMS,
        })?;
        let bidders = args.bidders.ok_or(CliError::MissingArgument {
            field: ARG_BIDDERS,
            env: ENV_GENERATE_BIDDERS,
        })?;
        Ok(Self {
            items,
            bidders,
            seed: args.seed.unwrap_or_default(),
            output: args.output,
        })
    }
}

pub(super) fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_generate_with(args, &mut stdout)
}

pub(super) fn run_generate_with(
    args: GenerateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let auction = generate_auction(&config)?;
    match &config.output {
        Some(path) => {
            let mut payload = Vec::new();
            write_json(&mut payload, &auction)?;
            crate::fs::write_utf8_file(path, &payload).map_err(|source| CliError::WriteFile {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote auction with {} bids to {path}", auction.bid_count());
            Ok(())
        }
        None => write_json(writer, &auction),
    }
}

/// Draw the auction described by `config`.
pub(crate) fn generate_auction(config: &GenerateConfig) -> Result<Auction, CliError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let auction = random_auction(
        config.bidders,
        config.items,
        &GeneratorConfig::default(),
        &mut rng,
    )?;
    Ok(auction)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<GenerateConfig, CliError> {
    let merged = GenerateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    GenerateConfig::try_from(merged)
}
