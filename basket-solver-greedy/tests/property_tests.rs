//! Property-based tests for the greedy solver.
//!
//! # Invariants tested
//!
//! - **Partition:** the groups hold exactly the basket's occurrences.
//! - **No empty groups:** every method in the cover carries something.
//! - **Eligibility:** every item sits with a method allowed to carry it.
//! - **Determinism:** repeated splits serialise to identical JSON.
//! - **Greedy choice:** each round picks a maximal group, first-seen on ties.
//! - **Failure:** an unknown item yields `CoverageError` and no cover.

mod proptest_support;

use basket_core::test_support::sorted_occurrences;
use basket_core::{Basket, CoverSolver, CoverageError, Item, build_index};
use basket_solver_greedy::GreedySolver;
use proptest::prelude::*;

use proptest_support::{Instance, brute_force_tally, instance_strategy, sorted_items};

fn solver_for(instance: &Instance) -> GreedySolver {
    GreedySolver::new(build_index(&instance.configuration).expect("generated config is valid"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the multiset union of all groups equals the basket.
    #[test]
    fn groups_partition_the_basket(instance in instance_strategy(5, 8)) {
        let cover = solver_for(&instance).split(&instance.basket).expect("coverable");
        prop_assert_eq!(sorted_occurrences(&cover), sorted_items(&instance.basket));
        prop_assert_eq!(cover.item_count(), instance.basket.len());
    }

    /// Property: no method appears with an empty group, and each group only
    /// holds items its method may carry.
    #[test]
    fn groups_are_non_empty_and_eligible(instance in instance_strategy(5, 8)) {
        let solver = solver_for(&instance);
        let cover = solver.split(&instance.basket).expect("coverable");
        for (method, items) in cover.iter() {
            prop_assert!(!items.is_empty(), "{} has an empty group", method);
            for item in items {
                prop_assert!(
                    solver.index().can_carry(method.as_str(), item.as_str()),
                    "{} cannot carry {}",
                    method,
                    item
                );
            }
        }
    }

    /// Property: identical inputs give byte-identical serialised output.
    #[test]
    fn splitting_is_deterministic(instance in instance_strategy(5, 8)) {
        let first = solver_for(&instance).split(&instance.basket).expect("coverable");
        let second = solver_for(&instance).split(&instance.basket).expect("coverable");
        let first_json = serde_json::to_string(&first).expect("serialise cover");
        let second_json = serde_json::to_string(&second).expect("serialise cover");
        prop_assert_eq!(first_json, second_json);
    }

    /// Property: every round assigns a largest possible group, preferring the
    /// earliest method on ties, and keeps basket order within the group.
    #[test]
    fn each_round_makes_the_greedy_choice(instance in instance_strategy(5, 8)) {
        let solver = solver_for(&instance);
        let index = solver.index();
        let traced = solver.split_traced(&instance.basket).expect("coverable");
        prop_assert!(traced.rounds.len() <= index.method_count());

        let mut uncovered: Vec<Item> = instance.basket.items().to_vec();
        for round in &traced.rounds {
            let expected_tally = brute_force_tally(index, &uncovered);
            prop_assert_eq!(&round.tally, &expected_tally);

            let best = expected_tally.iter().copied().max().unwrap_or(0);
            let first_best = expected_tally.iter().position(|&count| count == best);
            let chosen = index.method_id(round.method.as_str()).map(|id| id.get());
            prop_assert_eq!(chosen, first_best);
            prop_assert_eq!(round.assigned.len(), best);

            let (assigned, rest): (Vec<Item>, Vec<Item>) = uncovered
                .into_iter()
                .partition(|item| index.can_carry(round.method.as_str(), item.as_str()));
            prop_assert_eq!(&round.assigned, &assigned);
            uncovered = rest;
        }
        prop_assert!(uncovered.is_empty());
    }

    /// Property: an item nobody can carry fails the whole split.
    #[test]
    fn unknown_items_fail_the_split(
        instance in instance_strategy(4, 6),
        position in any::<prop::sample::Index>(),
    ) {
        let mut occurrences = instance.basket.items().to_vec();
        let at = position.index(occurrences.len() + 1);
        occurrences.insert(at, Item::from("Unlisted Item"));
        let basket = Basket::new(occurrences);

        let err = solver_for(&instance).split(&basket).expect_err("unknown item");
        match err {
            CoverageError::Uncoverable { uncovered } => {
                prop_assert_eq!(uncovered, vec![Item::from("Unlisted Item")]);
            }
            other @ CoverageError::RoundLimitExceeded { .. } => {
                prop_assert!(false, "unexpected error {:?}", other);
            }
        }
    }
}
