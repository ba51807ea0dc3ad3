//! Random auction instances for experiments, benchmarks and the CLI.
//!
//! Items receive uniform integer prices, and every bidder independently
//! picks each item with a fixed probability and bids exactly the sum of the
//! picked items' prices. All functions draw from a caller-owned random
//! source, so a seeded generator reproduces the same auction.

#![forbid(unsafe_code)]

mod error;
mod generator;

pub use error::GenerateError;
pub use generator::{GeneratorConfig, generate_items, random_auction, random_bid};
