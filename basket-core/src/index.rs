//! Inverse view of a [`Configuration`]: delivery method → carried items.
//!
//! The index is built once, validated on the way in, and never mutated
//! afterwards, so it can be shared freely between solvers and threads.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{Configuration, DeliveryMethod, Item};

/// Position of a delivery method within an [`EligibilityIndex`].
///
/// Identifiers follow first-seen order: the first method mentioned by the
/// configuration is `MethodId(0)`. Solvers use this order to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(usize);

impl MethodId {
    /// Zero-based position in first-seen order.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Errors returned by [`EligibilityIndex::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfigurationError {
    /// An item lists no delivery methods and could never be delivered.
    #[error("item {item:?} has no eligible delivery methods")]
    NoEligibleMethods {
        /// Offending item.
        item: Item,
    },
    /// The same item was configured more than once.
    #[error("item {item:?} is configured more than once")]
    DuplicateItem {
        /// Offending item.
        item: Item,
    },
    /// A delivery method was listed twice for one item.
    #[error("delivery method {method:?} is listed more than once for item {item:?}")]
    DuplicateMethod {
        /// Item whose list contains the repeat.
        item: Item,
        /// Repeated method.
        method: DeliveryMethod,
    },
}

/// Delivery method → set of items it may carry.
///
/// # Examples
/// ```
/// use basket_core::{Configuration, EligibilityIndex};
///
/// let configuration = Configuration::new()
///     .with_item("Steak (300g)", ["Express Delivery", "Courier"])
///     .with_item("Garden Chair", ["Courier"]);
/// let index = EligibilityIndex::build(&configuration)?;
///
/// let methods: Vec<&str> = index.methods().map(|method| method.as_str()).collect();
/// assert_eq!(methods, ["Express Delivery", "Courier"]);
/// assert!(index.can_carry("Courier", "Garden Chair"));
/// assert!(!index.can_carry("Express Delivery", "Garden Chair"));
/// # Ok::<(), basket_core::InvalidConfigurationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityIndex {
    methods: Vec<DeliveryMethod>,
    carried: Vec<Vec<Item>>,
    eligible: HashMap<Item, Vec<MethodId>>,
}

impl EligibilityIndex {
    /// Invert `configuration` into a method → items index.
    ///
    /// Methods are numbered in first-seen order while walking items in
    /// configuration order and each item's methods in listed order. Items
    /// within a method's group follow configuration order.
    ///
    /// # Errors
    /// Returns [`InvalidConfigurationError`] when an item has no methods, an
    /// item is repeated, or an item repeats a method.
    pub fn build(configuration: &Configuration) -> Result<Self, InvalidConfigurationError> {
        let mut index = Self::default();
        let mut ids: HashMap<&DeliveryMethod, MethodId> = HashMap::new();

        for (item, methods) in configuration.iter() {
            if methods.is_empty() {
                return Err(InvalidConfigurationError::NoEligibleMethods { item: item.clone() });
            }
            if index.eligible.contains_key(item) {
                return Err(InvalidConfigurationError::DuplicateItem { item: item.clone() });
            }

            let mut seen = HashSet::with_capacity(methods.len());
            let mut item_methods = Vec::with_capacity(methods.len());
            for method in methods {
                if !seen.insert(method) {
                    return Err(InvalidConfigurationError::DuplicateMethod {
                        item: item.clone(),
                        method: method.clone(),
                    });
                }
                let id = *ids
                    .entry(method)
                    .or_insert_with(|| index.register_method(method.clone()));
                if let Some(group) = index.carried.get_mut(id.get()) {
                    group.push(item.clone());
                }
                item_methods.push(id);
            }
            index.eligible.insert(item.clone(), item_methods);
        }

        Ok(index)
    }

    fn register_method(&mut self, method: DeliveryMethod) -> MethodId {
        let id = MethodId(self.methods.len());
        self.methods.push(method);
        self.carried.push(Vec::new());
        id
    }

    /// Number of distinct delivery methods.
    #[must_use]
    pub const fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Whether the index knows no delivery methods.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Delivery methods in first-seen order.
    pub fn methods(&self) -> impl ExactSizeIterator<Item = &DeliveryMethod> {
        self.methods.iter()
    }

    /// Method identifiers in first-seen order.
    pub fn method_ids(&self) -> impl ExactSizeIterator<Item = MethodId> + use<> {
        (0..self.methods.len()).map(MethodId)
    }

    /// Look up a method by identifier.
    #[must_use]
    pub fn method(&self, id: MethodId) -> Option<&DeliveryMethod> {
        self.methods.get(id.get())
    }

    /// Identifier of a method by name.
    #[must_use]
    pub fn method_id(&self, method: &str) -> Option<MethodId> {
        self.methods
            .iter()
            .position(|candidate| candidate.as_str() == method)
            .map(MethodId)
    }

    /// Items `method` may carry, in configuration order.
    #[must_use]
    pub fn items_for(&self, method: &str) -> Option<&[Item]> {
        self.method_id(method)
            .and_then(|id| self.carried.get(id.get()))
            .map(Vec::as_slice)
    }

    /// Methods eligible to carry `item`, in the order they were configured.
    ///
    /// Unknown items have no eligible methods.
    #[must_use]
    pub fn eligible_methods(&self, item: &str) -> &[MethodId] {
        match self.eligible.get(item) {
            Some(ids) => ids,
            None => &[],
        }
    }

    /// Whether `method` may carry `item`.
    #[must_use]
    pub fn can_carry(&self, method: &str, item: &str) -> bool {
        self.method_id(method)
            .is_some_and(|id| self.eligible_methods(item).contains(&id))
    }

    /// Iterate over `(method, items)` groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&DeliveryMethod, &[Item])> {
        self.methods
            .iter()
            .zip(self.carried.iter().map(Vec::as_slice))
    }
}

/// Build an [`EligibilityIndex`] from `configuration`.
///
/// # Errors
/// See [`EligibilityIndex::build`].
pub fn build_index(
    configuration: &Configuration,
) -> Result<EligibilityIndex, InvalidConfigurationError> {
    EligibilityIndex::build(configuration)
}
