//! Delivery configuration: which methods may carry each item.
//!
//! Entries keep the order in which they were supplied. For JSON input this is
//! document order, which in turn fixes the order of methods in the
//! [`EligibilityIndex`](crate::EligibilityIndex) and therefore how ties are
//! broken when splitting a basket.

use crate::{DeliveryMethod, Item};

/// Mapping from each item to the delivery methods allowed to carry it.
///
/// The configuration is a raw, ordered record of what was supplied; it is
/// validated when an [`EligibilityIndex`](crate::EligibilityIndex) is built
/// from it.
///
/// # Examples
/// ```
/// use basket_core::Configuration;
///
/// let configuration = Configuration::from_iter([
///     ("Steak (300g)", vec!["Express Delivery", "Courier"]),
///     ("Garden Chair", vec!["Courier"]),
/// ]);
/// assert_eq!(configuration.len(), 2);
/// let methods: Vec<&str> = configuration
///     .methods_for("Steak (300g)")
///     .unwrap_or_default()
///     .iter()
///     .map(|method| method.as_str())
///     .collect();
/// assert_eq!(methods, ["Express Delivery", "Courier"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    entries: Vec<(Item, Vec<DeliveryMethod>)>,
}

impl Configuration {
    /// Create an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an item and its eligible methods.
    ///
    /// Repeated items are recorded as given and rejected later by
    /// [`EligibilityIndex::build`](crate::EligibilityIndex::build).
    pub fn push(&mut self, item: Item, methods: Vec<DeliveryMethod>) {
        self.entries.push((item, methods));
    }

    /// Builder-style variant of [`Configuration::push`].
    #[must_use]
    pub fn with_item<I, M>(mut self, item: impl Into<Item>, methods: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<DeliveryMethod>,
    {
        self.push(item.into(), methods.into_iter().map(Into::into).collect());
        self
    }

    /// Methods listed for `item`, if the item is configured.
    #[must_use]
    pub fn methods_for(&self, item: &str) -> Option<&[DeliveryMethod]> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.as_str() == item)
            .map(|(_, methods)| methods.as_slice())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Item, &[DeliveryMethod])> {
        self.entries
            .iter()
            .map(|(item, methods)| (item, methods.as_slice()))
    }

    /// Number of configured items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no items are configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I, M, S> FromIterator<(I, M)> for Configuration
where
    I: Into<Item>,
    M: IntoIterator<Item = S>,
    S: Into<DeliveryMethod>,
{
    fn from_iter<T: IntoIterator<Item = (I, M)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |configuration, (item, methods)| {
                configuration.with_item(item, methods)
            })
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Configuration;
    use crate::{DeliveryMethod, Item};

    impl Serialize for Configuration {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (item, methods) in &self.entries {
                map.serialize_entry(item, methods)?;
            }
            map.end()
        }
    }

    struct ConfigurationVisitor;

    impl<'de> Visitor<'de> for ConfigurationVisitor {
        type Value = Configuration;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map from item names to lists of delivery methods")
        }

        // Entries are read in document order; repeated keys are kept so the
        // index builder can report them.
        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut configuration = Configuration::new();
            while let Some((item, methods)) = access.next_entry::<Item, Vec<DeliveryMethod>>()? {
                configuration.push(item, methods);
            }
            Ok(configuration)
        }
    }

    impl<'de> Deserialize<'de> for Configuration {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(ConfigurationVisitor)
        }
    }
}
