//! Shared fixtures and assertions for integration tests
#![allow(dead_code)]

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use lsp_model::codec::{self, DecodeError};

/// JSON of a range on a single line
pub fn range_json(line: u32, start: u32, end: u32) -> Value {
    json!({
        "start": { "line": line, "character": start },
        "end": { "line": line, "character": end }
    })
}

pub fn location_json(uri: &str, line: u32) -> Value {
    json!({ "uri": uri, "range": range_json(line, 0, 1) })
}

/// Decodes `value` as `T` and asserts the encoding is `value` again
pub fn assert_round_trip<T>(value: Value) -> T
where
    T: DeserializeOwned + Serialize,
{
    let decoded: T = codec::decode(&value)
        .unwrap_or_else(|e| panic!("failed to decode {value}: {e}"));
    let encoded = codec::encode(&decoded).unwrap();
    assert_eq!(encoded, value);
    decoded
}

/// Asserts that `value` does not decode as `T`
pub fn assert_rejected<T>(value: Value) -> DecodeError
where
    T: DeserializeOwned + Serialize + std::fmt::Debug,
{
    match codec::decode::<T>(&value) {
        Ok(decoded) => panic!("{value} decoded unexpectedly as {decoded:?}"),
        Err(err) => err,
    }
}
