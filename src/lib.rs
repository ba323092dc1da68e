//! Facade crate for the basket splitter.
//!
//! This crate re-exports the core domain types together with the greedy
//! solver, so callers can split a basket with a single dependency:
//!
//! ```
//! use basket_splitter::{Basket, Configuration, CoverSolver, GreedySolver, build_index};
//!
//! let configuration = Configuration::new()
//!     .with_item("Cold Beer (330ml)", ["Express Delivery"])
//!     .with_item("Garden Chair", ["Courier", "Express Delivery"]);
//! let basket: Basket = ["Garden Chair", "Cold Beer (330ml)"].into_iter().collect();
//!
//! let solver = GreedySolver::new(build_index(&configuration)?);
//! let cover = solver.split(&basket)?;
//! assert_eq!(cover.len(), 1);
//! assert_eq!(cover.item_count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use basket_core::{
    Basket, BasketError, Configuration, Cover, CoverSolver, CoverageError, DeliveryMethod,
    EligibilityIndex, InvalidConfigurationError, Item, MethodId, build_index,
};

pub use basket_solver_greedy::{GreedyConfig, GreedySolver, Round, TracedCover, split};
