//! Shopping baskets.
//!
//! A basket is an ordered list of item occurrences. The same item may appear
//! more than once; every occurrence is delivered on its own.

use thiserror::Error;

use crate::Item;

/// An ordered sequence of items awaiting delivery.
///
/// # Examples
/// ```
/// use basket_core::Basket;
///
/// let basket: Basket = ["Steak (300g)", "Carrots (1kg)", "Steak (300g)"]
///     .into_iter()
///     .collect();
/// assert_eq!(basket.len(), 3);
/// assert!(basket.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Basket {
    items: Vec<Item>,
}

/// Errors returned by [`Basket::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasketError {
    /// An item had an empty name.
    #[error("basket item at position {position} has an empty name")]
    EmptyItemName {
        /// Zero-based position of the offending occurrence.
        position: usize,
    },
}

impl Basket {
    /// Construct a basket from item occurrences in order.
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Number of item occurrences.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the basket holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over item occurrences in basket order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Borrow the occurrences as a slice.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Check that every occurrence names an item.
    ///
    /// # Errors
    /// Returns [`BasketError::EmptyItemName`] for the first blank entry.
    pub fn validate(&self) -> Result<(), BasketError> {
        match self.items.iter().position(|item| item.as_str().is_empty()) {
            Some(position) => Err(BasketError::EmptyItemName { position }),
            None => Ok(()),
        }
    }
}

impl<T: Into<Item>> FromIterator<T> for Basket {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Basket {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
