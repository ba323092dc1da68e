//! Opaque identifiers for basket items and delivery methods.
//!
//! Both identifiers wrap a `String` and compare, hash and borrow as `str`, so
//! maps keyed by them can be queried with plain string slices.

use std::borrow::Borrow;
use std::fmt;

macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(String);

        impl $name {
            /// Wrap a name.
            #[must_use]
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the underlying name.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier, returning the underlying name.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_identifier!(
    /// A product that may be placed in a basket.
    ///
    /// # Examples
    /// ```
    /// use basket_core::Item;
    ///
    /// let item = Item::from("Steak (300g)");
    /// assert_eq!(item.as_str(), "Steak (300g)");
    /// assert_eq!(item.to_string(), "Steak (300g)");
    /// ```
    Item
);

string_identifier!(
    /// A way of delivering items, such as "Express Delivery" or "Courier".
    ///
    /// # Examples
    /// ```
    /// use basket_core::DeliveryMethod;
    ///
    /// let method = DeliveryMethod::new("Courier");
    /// assert_eq!(method, "Courier");
    /// ```
    DeliveryMethod
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    fn identifiers_borrow_as_str_for_lookups() {
        let mut lookup = HashMap::new();
        lookup.insert(Item::from("Garden Chair"), 1_u8);
        assert_eq!(lookup.get("Garden Chair"), Some(&1));
        assert_eq!(lookup.get("Espresso Machine"), None);
    }

    #[rstest]
    #[case("Courier")]
    #[case("")]
    #[case("Pick-up point – Kraków")]
    fn into_inner_returns_wrapped_name(#[case] name: &str) {
        let method = DeliveryMethod::new(name);
        assert_eq!(method.into_inner(), name);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_plain_string() {
        let item = Item::from("Cold Beer (330ml)");
        let json = serde_json::to_string(&item).expect("serialise item");
        assert_eq!(json, r#""Cold Beer (330ml)""#);
        let decoded: Item = serde_json::from_str(&json).expect("decode item");
        assert_eq!(decoded, item);
    }
}
