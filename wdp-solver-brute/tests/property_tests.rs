//! Property-based tests for the brute-force solver.
//!
//! # Invariants tested
//!
//! - **Feasibility:** the returned allocation never double-awards an item.
//! - **Consistency:** the reported price is the allocation's price.
//! - **Dominance:** no feasible allocation is priced above the result.

use proptest::prelude::*;
use wdp_core::{Allocation, Bid, fitness, is_feasible, price_of};
use wdp_solver_brute::brute_force;

const ITEMS: usize = 6;

fn bids_strategy() -> impl Strategy<Value = Vec<Bid>> {
    let bid = (proptest::collection::vec(any::<bool>(), ITEMS), 0_u64..500).prop_map(
        |(wanted, price)| {
            let items = wanted
                .iter()
                .enumerate()
                .filter(|(_, picked)| **picked)
                .map(|(index, _)| index);
            Bid::from_items(ITEMS, items, price)
        },
    );
    proptest::collection::vec(bid, 0..=10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the result is feasible and priced consistently.
    #[test]
    fn result_is_feasible_and_consistent(bids in bids_strategy()) {
        let result = brute_force(&bids).expect("ten bids at most");
        prop_assert!(is_feasible(&result.allocation, &bids));
        prop_assert_eq!(result.price, price_of(&result.allocation, &bids));
        prop_assert_eq!(result.allocation.bid_count(), bids.len());
    }

    /// Property: any allocation's fitness is bounded by the optimum.
    #[test]
    fn no_allocation_beats_the_optimum(
        (bids, mask) in bids_strategy().prop_flat_map(|bids| {
            let size = 1_u64 << bids.len();
            (Just(bids), 0..size)
        }),
    ) {
        let result = brute_force(&bids).expect("ten bids at most");
        let candidate = Allocation::decode(mask, bids.len());
        prop_assert!(fitness(&candidate, &bids) <= result.price);
    }
}
