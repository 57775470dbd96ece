//! Serde support for refined types (feature-gated)
//!
//! Serialization is transparent. Deserialization runs the predicate again,
//! so data from outside the program gets the same guarantee a checked
//! literal does.
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use safe_literals::refined::{NonEmptyString, ZeroToOneF64};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Layer {
//!     name: NonEmptyString,
//!     opacity: ZeroToOneF64,
//! }
//!
//! let bad: Result<Layer, _> = serde_json::from_str(r#"{"name": "bg", "opacity": 1.5}"#);
//! assert!(bad.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{Predicate, Refined};

impl<T, P> Serialize for Refined<T, P>
where
    T: Serialize,
    P: Predicate<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de>,
    P: Predicate<T>,
    P::Error: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Refined::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refined::{MinusOneToOneF64, NonEmptyString, ZeroToOneF64};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Layer {
        name: NonEmptyString,
        opacity: ZeroToOneF64,
    }

    #[test]
    fn test_serialize_literals() {
        let layer = Layer {
            name: crate::non_empty_string!("background"),
            opacity: crate::zero_to_one!(0.5),
        };

        let json = serde_json::to_string(&layer).unwrap();
        assert_eq!(json, r#"{"name":"background","opacity":0.5}"#);
    }

    #[test]
    fn test_deserialize_success() {
        let layer: Layer = serde_json::from_str(r#"{"name":"fg","opacity":1.0}"#).unwrap();
        assert_eq!(layer.name.get(), "fg");
        assert_eq!(*layer.opacity, 1.0);
    }

    #[test]
    fn test_deserialize_out_of_range_fails() {
        let result: Result<Layer, _> = serde_json::from_str(r#"{"name":"fg","opacity":1.5}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("less than or equal to one"));
    }

    #[test]
    fn test_deserialize_empty_name_fails() {
        let result: Result<Layer, _> = serde_json::from_str(r#"{"name":"","opacity":0.1}"#);
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_roundtrip() {
        let original: MinusOneToOneF64 = crate::minus_one_to_one!(-0.25);
        let json = serde_json::to_string(&original).unwrap();
        let restored: MinusOneToOneF64 = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
