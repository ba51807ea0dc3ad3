//! Exhaustive winner determination.
//!
//! This crate provides [`BruteForceSolver`], an implementation of the
//! [`Solver`](wdp_core::Solver) trait that walks every position of the
//! [`SearchSpace`](wdp_core::SearchSpace) and keeps the highest-priced
//! feasible allocation. The result is optimal, at `O(2^m · m)` cost, so it is
//! meant for tens of bids at most and as the yardstick for heuristic solvers.

#![forbid(unsafe_code)]

mod solver;

pub use solver::{BruteForceSolver, brute_force};
