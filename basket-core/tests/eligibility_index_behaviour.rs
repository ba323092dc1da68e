//! Behaviour tests for building the eligibility index from configuration.

use basket_core::test_support::sample_configuration;
use basket_core::{Configuration, EligibilityIndex, InvalidConfigurationError, build_index};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct IndexWorld {
    configuration: RefCell<Configuration>,
    result: RefCell<Option<Result<EligibilityIndex, InvalidConfigurationError>>>,
}

impl IndexWorld {
    fn carried_count(&self, method: &str) -> usize {
        let borrowed = self.result.borrow();
        let index = borrowed
            .as_ref()
            .expect("index built")
            .as_ref()
            .expect("index should be valid");
        index.items_for(method).map_or(0, <[_]>::len)
    }

    fn error(&self) -> InvalidConfigurationError {
        self.result
            .borrow()
            .as_ref()
            .expect("index built")
            .clone()
            .expect_err("index should be rejected")
    }
}

#[fixture]
fn world() -> IndexWorld {
    IndexWorld::default()
}

#[given("the sample delivery configuration")]
fn sample(#[from(world)] world: &IndexWorld) {
    world.configuration.replace(sample_configuration());
}

#[given("a configuration where an item lists no delivery methods")]
fn item_without_methods(#[from(world)] world: &IndexWorld) {
    world.configuration.replace(
        Configuration::new()
            .with_item("Garden Chair", ["Courier"])
            .with_item("Gift Card", Vec::<&str>::new()),
    );
}

#[given("a configuration that lists the same item twice")]
fn repeated_item(#[from(world)] world: &IndexWorld) {
    world.configuration.replace(
        Configuration::new()
            .with_item("Garden Chair", ["Courier"])
            .with_item("Garden Chair", ["Express Delivery"]),
    );
}

#[when("I build the eligibility index")]
fn build(#[from(world)] world: &IndexWorld) {
    let outcome = build_index(&world.configuration.borrow());
    world.result.replace(Some(outcome));
}

#[then("Express Delivery carries four items")]
fn express_carries_four(#[from(world)] world: &IndexWorld) {
    assert_eq!(world.carried_count("Express Delivery"), 4);
}

#[then("Courier carries three items")]
fn courier_carries_three(#[from(world)] world: &IndexWorld) {
    assert_eq!(world.carried_count("Courier"), 3);
}

#[then("the index is rejected because the item has no eligible methods")]
fn rejected_no_methods(#[from(world)] world: &IndexWorld) {
    match world.error() {
        InvalidConfigurationError::NoEligibleMethods { item } => assert_eq!(item, "Gift Card"),
        other => panic!("expected NoEligibleMethods, found {other:?}"),
    }
}

#[then("the index is rejected because the item is repeated")]
fn rejected_repeated(#[from(world)] world: &IndexWorld) {
    match world.error() {
        InvalidConfigurationError::DuplicateItem { item } => assert_eq!(item, "Garden Chair"),
        other => panic!("expected DuplicateItem, found {other:?}"),
    }
}

macro_rules! register_index_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/eligibility_index.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: IndexWorld) {
            let _ = world;
        }
    };
}

register_index_scenario!(inverts_sample, "inverting the sample configuration");
register_index_scenario!(rejects_empty_methods, "rejecting an item without delivery methods");
register_index_scenario!(rejects_repeated_item, "rejecting a repeated item");
