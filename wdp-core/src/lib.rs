//! Core domain types for the winner-determination engine.
//!
//! A combinatorial auction is a fixed list of [`Bid`]s, each asking for an
//! exclusive bundle of [`Item`]s at a price. An [`Allocation`] marks a subset
//! of those bids as winners; it is feasible when no item is awarded twice.
//! Solvers search the `2^m` allocations of `m` bids for the feasible one with
//! the highest price and report it as a [`SearchResult`].
//!
//! The crate provides the shared pieces every solver relies on:
//!
//! - the allocation model ([`Allocation`], [`price_of`] and the integer
//!   encoding used to walk a [`SearchSpace`]);
//! - the feasibility oracle ([`is_feasible`] and [`fitness`]);
//! - the [`Solver`] trait and its [`SolveError`] configuration errors.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocation;
mod auction;
mod bid;
mod item;
mod oracle;
mod search_space;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use allocation::{Allocation, price_of};
pub use auction::{Auction, AuctionError};
pub use bid::Bid;
pub use item::Item;
pub use oracle::{fitness, is_feasible};
pub use search_space::{MAX_BIDS, SearchSpace};
pub use solver::{Diagnostics, SearchResult, SolveError, Solver};
