//! The result of splitting a basket: delivery groups.
//!
//! A [`Cover`] keeps groups in the order they were assigned and items within a
//! group in basket order. Serialised as JSON it becomes an object whose keys
//! appear in that same order.

use crate::{DeliveryMethod, Item};

/// Delivery method → ordered items assigned to it.
///
/// Groups are never empty: assigning no items to a method leaves the cover
/// unchanged.
///
/// # Examples
/// ```
/// use basket_core::{Cover, DeliveryMethod, Item};
///
/// let mut cover = Cover::new();
/// cover.assign(DeliveryMethod::from("Courier"), vec![Item::from("Garden Chair")]);
/// cover.assign(DeliveryMethod::from("Express Delivery"), Vec::new());
///
/// assert_eq!(cover.len(), 1);
/// assert_eq!(cover.get("Courier").map(<[Item]>::len), Some(1));
/// assert!(cover.get("Express Delivery").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    groups: Vec<(DeliveryMethod, Vec<Item>)>,
}

impl Cover {
    /// Create an empty cover.
    #[must_use]
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Add `items` to the group for `method`.
    ///
    /// A new group is appended after existing ones; an existing group is
    /// extended in place. Empty `items` are ignored.
    pub fn assign(&mut self, method: DeliveryMethod, items: Vec<Item>) {
        if items.is_empty() {
            return;
        }
        if let Some((_, group)) = self
            .groups
            .iter_mut()
            .find(|(existing, _)| *existing == method)
        {
            group.extend(items);
        } else {
            self.groups.push((method, items));
        }
    }

    /// Items assigned to `method`.
    #[must_use]
    pub fn get(&self, method: &str) -> Option<&[Item]> {
        self.groups
            .iter()
            .find(|(candidate, _)| candidate.as_str() == method)
            .map(|(_, items)| items.as_slice())
    }

    /// Number of delivery groups.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no groups were assigned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Methods in assignment order.
    pub fn methods(&self) -> impl Iterator<Item = &DeliveryMethod> {
        self.groups.iter().map(|(method, _)| method)
    }

    /// Iterate over `(method, items)` groups in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&DeliveryMethod, &[Item])> {
        self.groups
            .iter()
            .map(|(method, items)| (method, items.as_slice()))
    }

    /// Total number of item occurrences across all groups.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }
}

impl IntoIterator for Cover {
    type Item = (DeliveryMethod, Vec<Item>);
    type IntoIter = std::vec::IntoIter<(DeliveryMethod, Vec<Item>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Cover;
    use crate::{DeliveryMethod, Item};

    impl Serialize for Cover {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.groups.len()))?;
            for (method, items) in &self.groups {
                map.serialize_entry(method, items)?;
            }
            map.end()
        }
    }

    struct CoverVisitor;

    impl<'de> Visitor<'de> for CoverVisitor {
        type Value = Cover;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map from delivery methods to non-empty lists of items")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut cover = Cover::new();
            while let Some((method, items)) = access.next_entry::<DeliveryMethod, Vec<Item>>()? {
                if items.is_empty() {
                    return Err(de::Error::custom(format_args!(
                        "delivery method {method:?} has an empty group"
                    )));
                }
                if cover.get(method.as_str()).is_some() {
                    return Err(de::Error::custom(format_args!(
                        "delivery method {method:?} appears more than once"
                    )));
                }
                cover.assign(method, items);
            }
            Ok(cover)
        }
    }

    impl<'de> Deserialize<'de> for Cover {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(CoverVisitor)
        }
    }
}
