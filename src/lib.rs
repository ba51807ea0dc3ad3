//! Facade crate for the combinatorial auction winner-determination engine.
//!
//! This crate re-exports the core allocation model and exposes the solvers
//! and the random auction generator behind feature flags.

#![forbid(unsafe_code)]

pub use wdp_core::{
    Allocation, Auction, AuctionError, Bid, Diagnostics, Item, MAX_BIDS, SearchResult,
    SearchSpace, SolveError, Solver, fitness, is_feasible, price_of,
};

#[cfg(feature = "test-support")]
pub use wdp_core::test_support;

#[cfg(feature = "solver-brute")]
pub use wdp_solver_brute::{BruteForceSolver, brute_force};

#[cfg(feature = "solver-whale")]
pub use wdp_solver_whale::{WhaleConfig, WhaleSolver, whale_optimization, whale_optimization_with};

#[cfg(feature = "generate")]
pub use wdp_data::{GenerateError, GeneratorConfig, generate_items, random_auction, random_bid};
