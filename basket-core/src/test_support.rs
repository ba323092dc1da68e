//! Shared fixtures for unit and behaviour tests.
//!
//! The reference data mirrors the sample configuration and basket shipped with
//! the splitter: six grocery and household items across two delivery methods.

use crate::{Basket, Configuration, Cover, DeliveryMethod, Item};

/// Sample configuration with two methods, "Express Delivery" and "Courier".
#[must_use]
pub fn sample_configuration() -> Configuration {
    Configuration::new()
        .with_item("Steak (300g)", ["Express Delivery", "Courier"])
        .with_item("Carrots (1kg)", ["Express Delivery"])
        .with_item("AA Battery (4 Pcs.)", ["Express Delivery"])
        .with_item("Cold Beer (330ml)", ["Express Delivery"])
        .with_item("Garden Chair", ["Courier"])
        .with_item("Espresso Machine", ["Courier"])
}

/// Sample basket using every item from [`sample_configuration`].
#[must_use]
pub fn sample_basket() -> Basket {
    [
        "Steak (300g)",
        "Carrots (1kg)",
        "AA Battery (4 Pcs.)",
        "Espresso Machine",
        "Garden Chair",
        "Cold Beer (330ml)",
    ]
    .into_iter()
    .collect()
}

/// Cover expected from splitting [`sample_basket`] with [`sample_configuration`].
#[must_use]
pub fn sample_cover() -> Cover {
    let mut cover = Cover::new();
    cover.assign(
        DeliveryMethod::from("Express Delivery"),
        items(&[
            "Steak (300g)",
            "Carrots (1kg)",
            "AA Battery (4 Pcs.)",
            "Cold Beer (330ml)",
        ]),
    );
    cover.assign(
        DeliveryMethod::from("Courier"),
        items(&["Espresso Machine", "Garden Chair"]),
    );
    cover
}

/// Convert names into items.
#[must_use]
pub fn items(names: &[&str]) -> Vec<Item> {
    names.iter().copied().map(Item::from).collect()
}

/// Collect every occurrence in `cover` sorted by name, for multiset comparisons.
#[must_use]
pub fn sorted_occurrences(cover: &Cover) -> Vec<Item> {
    let mut occurrences: Vec<Item> = cover
        .iter()
        .flat_map(|(_, group)| group.iter().cloned())
        .collect();
    occurrences.sort();
    occurrences
}
