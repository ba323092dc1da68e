//! Core domain types for the basket splitter.
//!
//! A [`Configuration`] lists which delivery methods may carry each item. It is
//! inverted into an [`EligibilityIndex`] once, validated on the way in, and
//! then shared read-only by [`CoverSolver`] implementations that split a
//! [`Basket`] into a [`Cover`] of delivery groups.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod basket;
mod configuration;
mod cover;
mod index;
mod item;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use basket::{Basket, BasketError};
pub use configuration::Configuration;
pub use cover::Cover;
pub use index::{EligibilityIndex, InvalidConfigurationError, MethodId, build_index};
pub use item::{DeliveryMethod, Item};
pub use solver::{CoverSolver, CoverageError};
