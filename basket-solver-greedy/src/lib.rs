//! Greedy set-cover solver for the basket splitter.
//!
//! This crate provides [`GreedySolver`], the default implementation of the
//! [`CoverSolver`](basket_core::CoverSolver) trait, and the [`split`] function
//! for one-off use against a borrowed index. Every round assigns the delivery
//! method that can carry the most still-uncovered basket occurrences, so the
//! number of groups is within a logarithmic factor of the optimum. Exact
//! minimality is not attempted.
//!
//! Selection is deterministic: ties go to the method seen first in the
//! configuration, and each group lists its items in basket order.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod solver;

pub use solver::{GreedyConfig, GreedySolver, Round, TracedCover, split};
