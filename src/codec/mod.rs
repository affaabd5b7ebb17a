//! JSON codecs for the LSP data model
//!
//! Every model type implements serde's `Serialize`/`Deserialize` with the
//! exact LSP wire shape. The functions here are the entry points used by the
//! rest of the crate; they attach the decoded type's name to failures.
//!
//! # Modules
//!
//! - `error`: Decode and encode error types
//! - `strict`: Shape-strict decoding, structs only from JSON objects
//! - `union`: Ordered decoding of OR types (`lsp_union!`)
//! - `enumeration`: Integer and string enumerations (`lsp_enum!`)
//! - `literal`: String literal marker types (`lsp_literal!`)
//! - `field`: Field presence helpers for nullable and `LSPAny` fields

pub mod enumeration;
pub mod error;
pub mod field;
pub mod literal;
pub mod strict;
pub mod union;

pub(crate) use enumeration::lsp_enum;
pub use error::{DecodeError, EncodeError, JsonKind, VariantMismatch};
pub(crate) use literal::lsp_literal;
pub use strict::StrictValue;
pub use union::UnionDecoder;
pub(crate) use union::lsp_union;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use error::{short_type_name, take_raised};

/// Either side of a decode/encode round trip
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Decodes a model value from JSON
///
/// A value outside a closed enumeration, an exhausted union or a wrong
/// literal is returned as its own [`DecodeError`] variant, wherever it sits
/// inside the value. Every other failure is a [`DecodeError::Shape`].
pub fn decode<T>(value: &Value) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Serialize,
{
    let _ = take_raised();
    let decoded = strict::from_value(value);
    let raised = take_raised();
    decoded.map_err(|source| match raised {
        Some(raised) if raised.to_string() == source.to_string() => raised,
        _ => DecodeError::Shape {
            type_name: short_type_name::<T>(),
            source,
        },
    })
}

/// Parses JSON text and decodes a model value from it
pub fn decode_str<T>(text: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Serialize,
{
    let value: Value = serde_json::from_str(text).map_err(DecodeError::Syntax)?;
    decode(&value)
}

/// Encodes a model value to JSON
pub fn encode<T>(value: &T) -> Result<Value, EncodeError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).map_err(|source| EncodeError::Serialize {
        type_name: short_type_name::<T>(),
        source,
    })
}

/// Decodes `value` as `T` and encodes the result again
pub fn round_trip<T>(value: &Value) -> Result<Value, CodecError>
where
    T: DeserializeOwned + Serialize,
{
    let decoded: T = decode(value)?;
    Ok(encode(&decoded)?)
}
