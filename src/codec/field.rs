//! Field presence helpers
//!
//! serde treats a missing `Option<T>` field as `None`. These helpers cover the
//! cases where the LSP schema distinguishes "absent" from "present but null":
//!
//! - [`required_nullable`]: `field: X | null`, the key must be present
//! - [`optional_nullable`]: `field?: X | null`, absent and null stay apart
//! - [`present`]: `field?: LSPAny`, a JSON `null` is a present value

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Use with `#[serde(with = "...")]` on an `Option<T>` field
///
/// A `deserialize_with` field is not defaulted by serde, so a missing key is a
/// decode error while `null` decodes to `None`. `None` encodes as `null`.
pub mod required_nullable {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer)
    }
}

/// Use with `#[serde(default, skip_serializing_if = "Option::is_none", with = "...")]`
/// on an `Option<Option<T>>` field
///
/// Absent is `None`, `null` is `Some(None)`, a value is `Some(Some(v))`.
pub mod optional_nullable {
    use super::*;

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(Some(inner)) => inner.serialize(serializer),
            Some(None) | None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// Use with `#[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "...")]`
///
/// Any present value, including `null`, decodes to `Some`.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        #[serde(with = "required_nullable")]
        version: Option<i32>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "optional_nullable"
        )]
        root_path: Option<Option<String>>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "present"
        )]
        data: Option<Value>,
    }

    #[test]
    fn required_nullable_rejects_missing_key() {
        let err = serde_json::from_value::<Sample>(json!({})).unwrap_err();
        assert_eq!(err.to_string(), "missing field `version`");
    }

    #[test]
    fn required_nullable_accepts_null() {
        let sample: Sample = serde_json::from_value(json!({ "version": null })).unwrap();
        assert_eq!(sample.version, None);
        assert_eq!(serde_json::to_value(&sample).unwrap(), json!({ "version": null }));
    }

    #[test]
    fn optional_nullable_keeps_absent_and_null_apart() {
        let absent: Sample = serde_json::from_value(json!({ "version": 1 })).unwrap();
        assert_eq!(absent.root_path, None);

        let null: Sample =
            serde_json::from_value(json!({ "version": 1, "rootPath": null })).unwrap();
        assert_eq!(null.root_path, Some(None));
        assert_eq!(
            serde_json::to_value(&null).unwrap(),
            json!({ "version": 1, "rootPath": null })
        );
    }

    #[test]
    fn present_keeps_null_data() {
        let sample: Sample = serde_json::from_value(json!({ "version": 0, "data": null })).unwrap();
        assert_eq!(sample.data, Some(Value::Null));
        assert_eq!(
            serde_json::to_value(&sample).unwrap(),
            json!({ "version": 0, "data": null })
        );
    }

    #[test]
    fn falsy_values_are_present() {
        let sample: Sample =
            serde_json::from_value(json!({ "version": 0, "rootPath": "", "data": false })).unwrap();
        assert_eq!(sample.version, Some(0));
        assert_eq!(sample.root_path, Some(Some(String::new())));
        assert_eq!(sample.data, Some(json!(false)));
    }
}
