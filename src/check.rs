//! Checks a JSON payload against the types of an LSP message
//!
//! The payload is decoded as the message's params, result or registration
//! options and encoded again. Keys of the input that do not survive the
//! round trip are unknown to the model and reported as JSON pointers.
//! A `null` for an optional field decodes as absent, so a key whose input
//! value is `null` is never reported.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::codec::strict::escape_token;
use crate::codec::{CodecError, lsp_enum};
use crate::protocol::{self, MessageInfo, Normalizer};

lsp_enum! {
    /// Which part of a message a payload is
    pub enum MessagePart: string {
        Params = "params",
        Result = "result",
        RegistrationOptions = "registrationOptions",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Reject payloads with keys the model does not know
    pub strict: bool,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("{0} is a notification and has no result")]
    NoResult(String),

    #[error("{0} has no registration options")]
    NoRegistrationOptions(String),

    #[error("Invalid {part} for {method}: {source}")]
    Codec {
        method: String,
        part: MessagePart,
        #[source]
        source: CodecError,
    },

    #[error("Unknown properties in {method} {part}: {}", pointers.join(", "))]
    UnknownProperties {
        method: String,
        part: MessagePart,
        pointers: Vec<String>,
    },
}

/// Outcome of a successful check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub method: String,
    pub part: MessagePart,
    pub normalized: Value,
    /// JSON pointers of input keys missing from `normalized`
    pub dropped: Vec<String>,
}

fn normalizer(info: &MessageInfo, part: MessagePart) -> Result<Normalizer, CheckError> {
    match part {
        MessagePart::Params => Ok(info.params),
        MessagePart::Result => info
            .result
            .ok_or_else(|| CheckError::NoResult(info.method.to_string())),
        MessagePart::RegistrationOptions => info
            .registration_options
            .ok_or_else(|| CheckError::NoRegistrationOptions(info.method.to_string())),
    }
}

pub fn check(
    method: &str,
    part: MessagePart,
    payload: &Value,
    config: &CheckConfig,
) -> Result<CheckReport, CheckError> {
    let info =
        protocol::lookup(method).ok_or_else(|| CheckError::UnknownMethod(method.to_string()))?;
    let normalize = normalizer(info, part)?;

    let normalized = normalize(payload).map_err(|source| CheckError::Codec {
        method: method.to_string(),
        part,
        source,
    })?;

    let mut dropped = Vec::new();
    collect_dropped(payload, &normalized, "", &mut dropped);
    debug!("Checked {} {}: {} dropped keys", method, part, dropped.len());

    if config.strict && !dropped.is_empty() {
        return Err(CheckError::UnknownProperties {
            method: method.to_string(),
            part,
            pointers: dropped,
        });
    }
    if !dropped.is_empty() {
        info!("Dropped unknown properties from {}: {:?}", method, dropped);
    }

    Ok(CheckReport {
        method: method.to_string(),
        part,
        normalized,
        dropped,
    })
}

fn collect_dropped(input: &Value, output: &Value, pointer: &str, dropped: &mut Vec<String>) {
    match (input, output) {
        (Value::Object(input), Value::Object(output)) => {
            for (key, value) in input {
                let child = format!("{pointer}/{}", escape_token(key));
                match output.get(key) {
                    Some(kept) => collect_dropped(value, kept, &child, dropped),
                    None if value.is_null() => {}
                    None => dropped.push(child),
                }
            }
        }
        (Value::Array(input), Value::Array(output)) => {
            for (index, (value, kept)) in input.iter().zip(output).enumerate() {
                collect_dropped(value, kept, &format!("{pointer}/{index}"), dropped);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hover_params() -> Value {
        json!({
            "textDocument": { "uri": "file:///a.rs", "version": 3 },
            "position": { "line": 0, "character": 1 },
            "x/y": true
        })
    }

    #[test]
    fn check_reports_dropped_pointers() {
        let report = check(
            "textDocument/hover",
            MessagePart::Params,
            &hover_params(),
            &CheckConfig::default(),
        )
        .unwrap();

        assert_eq!(report.dropped, vec!["/textDocument/version", "/x~1y"]);
        assert_eq!(
            report.normalized,
            json!({
                "textDocument": { "uri": "file:///a.rs" },
                "position": { "line": 0, "character": 1 }
            })
        );
    }

    #[test]
    fn strict_check_rejects_unknown_properties() {
        let err = check(
            "textDocument/hover",
            MessagePart::Params,
            &hover_params(),
            &CheckConfig { strict: true },
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unknown properties in textDocument/hover params: /textDocument/version, /x~1y"
        );
    }

    #[test]
    fn strict_check_reads_null_optional_as_absent() {
        let report = check(
            "textDocument/hover",
            MessagePart::Params,
            &json!({
                "textDocument": { "uri": "file:///a.rs" },
                "position": { "line": 0, "character": 1 },
                "workDoneToken": null
            }),
            &CheckConfig { strict: true },
        )
        .unwrap();

        assert!(report.dropped.is_empty());
        assert_eq!(report.normalized.get("workDoneToken"), None);
    }

    #[test]
    fn strict_check_still_rejects_unknown_keys_next_to_nulls() {
        let err = check(
            "textDocument/hover",
            MessagePart::Params,
            &json!({
                "textDocument": { "uri": "file:///a.rs" },
                "position": { "line": 0, "character": 1 },
                "workDoneToken": null,
                "extra": 0
            }),
            &CheckConfig { strict: true },
        )
        .unwrap_err();

        let CheckError::UnknownProperties { pointers, .. } = err else {
            panic!("expected unknown properties, got {err}");
        };
        assert_eq!(pointers, vec!["/extra"]);
    }

    #[test]
    fn check_walks_arrays() {
        let report = check(
            "textDocument/references",
            MessagePart::Result,
            &json!([
                { "uri": "file:///a.rs", "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } } },
                { "uri": "file:///b.rs", "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } }, "score": 1 }
            ]),
            &CheckConfig::default(),
        )
        .unwrap();

        assert_eq!(report.dropped, vec!["/1/score"]);
    }

    #[test]
    fn check_rejects_result_of_notification() {
        let err = check(
            "textDocument/didOpen",
            MessagePart::Result,
            &Value::Null,
            &CheckConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, CheckError::NoResult(_)));
    }

    #[test]
    fn check_reports_decode_failures() {
        let err = check(
            "textDocument/hover",
            MessagePart::Params,
            &json!({ "position": { "line": 0, "character": 1 } }),
            &CheckConfig::default(),
        )
        .unwrap_err();

        assert!(
            err.to_string()
                .starts_with("Invalid params for textDocument/hover: Invalid ")
        );
    }

    #[test]
    fn check_registration_options() {
        let report = check(
            "textDocument/didChange",
            MessagePart::RegistrationOptions,
            &json!({ "documentSelector": null, "syncKind": 1 }),
            &CheckConfig::default(),
        )
        .unwrap();

        assert!(report.dropped.is_empty());
        assert_eq!(report.part, MessagePart::RegistrationOptions);
    }

    #[test]
    fn check_unknown_method() {
        let err = check("foo/bar", MessagePart::Params, &Value::Null, &CheckConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown method: foo/bar");
    }
}
