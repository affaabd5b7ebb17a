//! Ordered decoding of LSP "OR types"
//!
//! An OR type is a value whose JSON shape is one of several alternatives.
//! [`UnionDecoder`] tries the alternatives strictly in declaration order and
//! keeps the first one that decodes; later alternatives are never consulted
//! once one has matched, even if they would describe the value more fully.
//!
//! Each alternative sees the value through [`StrictValue`], which only lets a
//! struct decode from a JSON object. serde would otherwise also accept a JSON
//! array for a struct, so `["rust", "code"]` could pass for
//! `{ "language": "rust", "value": "code" }`.
//!
//! [`StrictValue`]: crate::codec::StrictValue

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::error::{DecodeError, JsonKind, VariantMismatch};
use crate::codec::strict;

/// Tries the alternatives of a union against one JSON value, in order
pub struct UnionDecoder<'a, T> {
    type_name: &'static str,
    value: &'a Value,
    decoded: Option<T>,
    attempts: Vec<VariantMismatch>,
}

impl<'a, T> UnionDecoder<'a, T> {
    pub fn new(type_name: &'static str, value: &'a Value) -> Self {
        Self {
            type_name,
            value,
            decoded: None,
            attempts: Vec::new(),
        }
    }

    /// Tries the next alternative unless an earlier one already matched
    pub fn variant<V, F>(mut self, name: &'static str, wrap: F) -> Self
    where
        V: DeserializeOwned + Serialize,
        F: FnOnce(V) -> T,
    {
        if self.decoded.is_some() {
            return self;
        }

        match strict::from_value::<V>(self.value) {
            Ok(inner) => self.decoded = Some(wrap(inner)),
            Err(e) => self.attempts.push(VariantMismatch {
                variant: name,
                reason: e.to_string(),
            }),
        }
        self
    }

    /// Returns the first matching alternative, or every rejection reason
    pub fn finish(self) -> Result<T, DecodeError> {
        self.decoded.ok_or_else(|| DecodeError::NoMatchingVariant {
            type_name: self.type_name,
            found: JsonKind::of(self.value),
            attempts: self.attempts,
        })
    }
}

/// Declares an OR type as a closed enum with one tuple variant per alternative
///
/// Encoding matches exhaustively on the variant, so every constructed value
/// has an encoder. Decoding tries the variants in the order they are written.
macro_rules! lsp_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $( $name::$variant(inner) => ::serde::Serialize::serialize(inner, serializer), )+
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::codec::union::UnionDecoder::new(stringify!($name), &value)
                    $( .variant(stringify!($variant), $name::$variant) )+
                    .finish()
                    .map_err($crate::codec::error::raise::<D::Error>)
            }
        }

        $(
            impl ::std::convert::From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::$variant(value)
                }
            }
        )+
    };
}

pub(crate) use lsp_union;
