//! Proptest strategies for greedy solver property-based tests.
//!
//! Instances are built from small pools of method and item names so that
//! ties, shared items and repeated basket occurrences show up often.

use basket_core::{Basket, Configuration, EligibilityIndex, Item};
use proptest::prelude::*;

/// A generated configuration together with a basket drawn from its items.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Every item lists at least one method.
    pub configuration: Configuration,
    /// Occurrences of configured items, possibly repeated.
    pub basket: Basket,
}

/// Name of the `position`-th generated delivery method.
#[must_use]
pub fn method_name(position: usize) -> String {
    format!("Method {position}")
}

/// Name of the `position`-th generated item.
#[must_use]
pub fn item_name(position: usize) -> String {
    format!("Item {position}")
}

/// Strategy for a coverable instance with up to `max_methods` methods and
/// `max_items` distinct items.
pub fn instance_strategy(max_methods: usize, max_items: usize) -> impl Strategy<Value = Instance> {
    (1..=max_methods, 1..=max_items).prop_flat_map(|(method_count, item_count)| {
        let methods: Vec<usize> = (0..method_count).collect();
        let eligibility = proptest::collection::vec(
            proptest::sample::subsequence(methods, 1..=method_count).prop_shuffle(),
            item_count,
        );
        let basket = proptest::collection::vec(0..item_count, 0..24);
        (eligibility, basket).prop_map(|(eligibility, picks)| {
            let configuration = eligibility
                .into_iter()
                .enumerate()
                .map(|(item, methods)| {
                    (
                        item_name(item),
                        methods.into_iter().map(method_name).collect::<Vec<_>>(),
                    )
                })
                .collect();
            let basket = picks.into_iter().map(item_name).collect();
            Instance {
                configuration,
                basket,
            }
        })
    })
}

/// Basket occurrences sorted by name, for multiset comparisons.
#[must_use]
pub fn sorted_items(basket: &Basket) -> Vec<Item> {
    let mut occurrences = basket.items().to_vec();
    occurrences.sort();
    occurrences
}

/// How many of `uncovered` each method may carry, in first-seen order.
#[must_use]
pub fn brute_force_tally(index: &EligibilityIndex, uncovered: &[Item]) -> Vec<usize> {
    index
        .methods()
        .map(|method| {
            uncovered
                .iter()
                .filter(|item| index.can_carry(method.as_str(), item.as_str()))
                .count()
        })
        .collect()
}
