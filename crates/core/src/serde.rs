//! Serde helper functions for JSON payload deserialization.
//!
//! Serde treats a missing `Option<T>` field as `None`. The payloads in this
//! crate need to tell "key absent" apart from "key present with `null`", so
//! these helpers are used through `deserialize_with`.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that must be present but may be `null`.
///
/// Using `deserialize_with` without `default` makes serde reject a payload
/// that omits the key, while `null` still decodes to `None`.
pub fn deserialize_required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}

/// Deserialize a field whose presence matters, even when its value is `null`.
///
/// Pair with `#[serde(default)]`: an absent key stays `None`, a present key
/// becomes `Some(value)` where `value` itself may be `None`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Required {
        #[serde(deserialize_with = "deserialize_required_nullable")]
        field: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Presence {
        #[serde(default, deserialize_with = "deserialize_present")]
        field: Option<Option<i64>>,
    }

    #[test]
    fn test_required_nullable_accepts_null() {
        let result: Required = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(result.field, None);
    }

    #[test]
    fn test_required_nullable_accepts_value() {
        let result: Required = serde_json::from_str(r#"{"field": "Yoda"}"#).unwrap();
        assert_eq!(result.field.as_deref(), Some("Yoda"));
    }

    #[test]
    fn test_required_nullable_rejects_missing_key() {
        let result: Result<Required, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_present_missing_key() {
        let result: Presence = serde_json::from_str("{}").unwrap();
        assert_eq!(result.field, None);
    }

    #[test]
    fn test_present_explicit_null() {
        let result: Presence = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(result.field, Some(None));
    }

    #[test]
    fn test_present_value() {
        let result: Presence = serde_json::from_str(r#"{"field": 2}"#).unwrap();
        assert_eq!(result.field, Some(Some(2)));
    }
}
