//! Whale Optimization Algorithm for winner determination.
//!
//! [`WhaleSolver`] treats every allocation as a point on the integer line
//! `0..2^m` and moves a small population of whales around it with the
//! encircling, exploration and spiral moves of the Whale Optimization
//! Algorithm. Fitness is the allocation's price when feasible and zero
//! otherwise, so the search can only ever report feasible allocations.
//!
//! The heuristic never beats the exhaustive optimum and may return the empty
//! allocation. Runs are reproducible: [`WhaleSolver`] seeds a
//! [`rand_chacha::ChaCha8Rng`] from [`WhaleConfig::seed`] for every solve,
//! and [`whale_optimization`] draws from a caller-owned generator.

#![forbid(unsafe_code)]

mod config;
mod population;
mod solver;

pub use config::WhaleConfig;
pub use solver::{WhaleSolver, whale_optimization, whale_optimization_with};
