//! Solver boundary for splitting baskets into delivery groups.

use thiserror::Error;

use crate::{Basket, Cover, Item};

/// Errors returned by [`CoverSolver::split`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// No delivery method can carry any of the remaining items.
    #[error("no delivery method can carry {}", describe(.uncovered))]
    Uncoverable {
        /// Remaining occurrences in basket order.
        uncovered: Vec<Item>,
    },
    /// The solver ran out of selection rounds before covering the basket.
    #[error("gave up after {limit} rounds with {} left uncovered", describe(.uncovered))]
    RoundLimitExceeded {
        /// Configured round limit.
        limit: usize,
        /// Remaining occurrences in basket order.
        uncovered: Vec<Item>,
    },
}

impl CoverageError {
    /// Occurrences that were left without a delivery method.
    #[must_use]
    pub fn uncovered(&self) -> &[Item] {
        match self {
            Self::Uncoverable { uncovered } | Self::RoundLimitExceeded { uncovered, .. } => {
                uncovered
            }
        }
    }
}

fn describe(items: &[Item]) -> String {
    let names: Vec<String> = items.iter().map(|item| format!("{:?}", item.as_str())).collect();
    names.join(", ")
}

/// Partition a basket into delivery groups.
///
/// Implementations return a [`Cover`] whose groups together hold every basket
/// occurrence exactly once, or a [`CoverageError`]; a partial cover is never
/// returned. Solvers must be `Send + Sync` to operate safely across threads.
///
/// # Examples
/// ```
/// use basket_core::{Basket, Cover, CoverSolver, CoverageError};
///
/// struct SingleVan;
///
/// impl CoverSolver for SingleVan {
///     fn split(&self, basket: &Basket) -> Result<Cover, CoverageError> {
///         let mut cover = Cover::new();
///         cover.assign("Van".into(), basket.items().to_vec());
///         Ok(cover)
///     }
/// }
///
/// let basket: Basket = ["Garden Chair"].into_iter().collect();
/// let cover = SingleVan.split(&basket)?;
/// assert_eq!(cover.item_count(), 1);
/// # Ok::<(), CoverageError>(())
/// ```
pub trait CoverSolver: Send + Sync {
    /// Split `basket` into delivery groups.
    ///
    /// # Errors
    /// Returns [`CoverageError`] when some occurrence cannot be assigned.
    fn split(&self, basket: &Basket) -> Result<Cover, CoverageError>;
}
