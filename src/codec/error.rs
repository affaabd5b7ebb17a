use std::cell::Cell;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The JSON type of a value, as reported in decode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(n) if n.is_f64() => JsonKind::Number,
            Value::Number(_) => JsonKind::Integer,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Integer => "number (int)",
            JsonKind::Number => "number (real)",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected alternative of a union decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMismatch {
    pub variant: &'static str,
    pub reason: String,
}

impl fmt::Display for VariantMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.variant, self.reason)
    }
}

struct Attempts<'a>(&'a [VariantMismatch]);

impl fmt::Display for Attempts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attempt) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{attempt}")?;
        }
        Ok(())
    }
}

/// Error type for decoding LSP values from JSON
///
/// Any variant aborts the decode of the enclosing value: there is no partial
/// result and no default substitution for required fields.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A required field is missing or a field has the wrong JSON type
    #[error("Invalid {type_name}: {source}")]
    Shape {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// None of the alternatives of an OR type accepted the value
    #[error("No variant of {type_name} matched {found}: {}", Attempts(.attempts))]
    NoMatchingVariant {
        type_name: &'static str,
        found: JsonKind,
        attempts: Vec<VariantMismatch>,
    },

    /// A value outside a closed enumeration
    #[error("{value} is not a value of {type_name}")]
    UnknownEnumValue { type_name: &'static str, value: String },

    /// A literal-typed field carried another value
    #[error("Expected {expected}, found {found}")]
    LiteralMismatch { expected: String, found: String },

    /// The payload text is not JSON at all
    #[error("Malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),
}

/// Error type for encoding LSP values to JSON
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to encode {type_name}: {source}")]
    Serialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

thread_local! {
    static RAISED: Cell<Option<DecodeError>> = const { Cell::new(None) };
}

/// Reports `error` through serde and keeps it for [`take_raised`]
///
/// serde only carries a message across `Deserialize` impls. The decode entry
/// points pick the structured error back up when the message that reached
/// them is the one raised here.
pub(crate) fn raise<E>(error: DecodeError) -> E
where
    E: serde::de::Error,
{
    let reported = E::custom(&error);
    RAISED.with(|slot| slot.set(Some(error)));
    reported
}

/// Takes the last error passed to [`raise`] on this thread
pub(crate) fn take_raised() -> Option<DecodeError> {
    RAISED.with(Cell::take)
}

/// Short name of a Rust type for error messages (`lsp_model::types::Range` -> `Range`)
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rsplit_once("::") {
        Some((_, name)) => name,
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), JsonKind::Null)]
    #[case(json!(false), JsonKind::Bool)]
    #[case(json!(3), JsonKind::Integer)]
    #[case(json!(-3), JsonKind::Integer)]
    #[case(json!(0.5), JsonKind::Number)]
    #[case(json!("x"), JsonKind::String)]
    #[case(json!([1]), JsonKind::Array)]
    #[case(json!({}), JsonKind::Object)]
    fn json_kind_of_classifies_values(#[case] value: Value, #[case] expected: JsonKind) {
        assert_eq!(JsonKind::of(&value), expected);
    }

    #[test]
    fn no_matching_variant_lists_attempts_in_order() {
        let err = DecodeError::NoMatchingVariant {
            type_name: "Definition",
            found: JsonKind::String,
            attempts: vec![
                VariantMismatch {
                    variant: "Location",
                    reason: "expected object".to_string(),
                },
                VariantMismatch {
                    variant: "Locations",
                    reason: "expected array".to_string(),
                },
            ],
        };

        assert_eq!(
            err.to_string(),
            "No variant of Definition matched string: Location (expected object); Locations (expected array)"
        );
    }

    #[test]
    fn raise_keeps_the_structured_error() {
        let _ = take_raised();
        let err: serde_json::Error = raise(DecodeError::UnknownEnumValue {
            type_name: "SymbolKind",
            value: "99".to_string(),
        });

        assert_eq!(err.to_string(), "99 is not a value of SymbolKind");
        assert!(matches!(
            take_raised(),
            Some(DecodeError::UnknownEnumValue { type_name: "SymbolKind", .. })
        ));
        assert!(take_raised().is_none());
    }

    #[test]
    fn short_type_name_strips_module_path() {
        assert_eq!(short_type_name::<JsonKind>(), "JsonKind");
        assert_eq!(short_type_name::<Vec<JsonKind>>(), "Vec");
    }
}
