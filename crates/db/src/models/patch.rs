//! Tri-state deserialization for nullable columns in update DTOs.
//!
//! A PATCH body distinguishes three states per nullable column: the key is
//! absent (keep the stored value), the key is JSON `null` (clear the column
//! to NULL), or the key carries a value (overwrite). Plain `Option<T>`
//! collapses the first two, so nullable columns use `Option<Option<T>>`:
//! outer `None` means absent, `Some(None)` means clear, `Some(Some(v))`
//! means set.

use serde::{Deserialize, Deserializer};

/// Deserialize one tri-state field. Use together with `#[serde(default)]`
/// so an absent key stays `None`:
///
/// ```ignore
/// #[serde(default, deserialize_with = "patch_field")]
/// pub notes: Option<Option<String>>,
/// ```
pub fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "patch_field")]
        notes: Option<Option<String>>,
    }

    #[test]
    fn test_absent_key_is_outer_none() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn test_null_means_clear() {
        let payload: Payload = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        assert_eq!(payload.notes, Some(None));
    }

    #[test]
    fn test_value_means_set() {
        let payload: Payload = serde_json::from_str(r#"{"notes": "tank raised"}"#).unwrap();
        assert_eq!(payload.notes, Some(Some("tank raised".to_string())));
    }
}
