//! Runtime lookup of messages by method name

use serde_json::Value;

use crate::codec::CodecError;
use crate::protocol::messages::{NOTIFICATIONS, REGISTRATION_ONLY, REQUESTS};
use crate::protocol::{MessageDirection, MessageKind};

/// Decodes a payload as one fixed type and encodes it again
pub type Normalizer = fn(&Value) -> Result<Value, CodecError>;

/// A request or notification known only by its method name
#[derive(Debug, Clone, Copy)]
pub struct MessageInfo {
    pub method: &'static str,
    pub kind: MessageKind,
    pub direction: MessageDirection,
    pub params: Normalizer,
    /// `None` for notifications
    pub result: Option<Normalizer>,
    /// `None` when the message cannot be registered dynamically
    pub registration_options: Option<Normalizer>,
}

impl MessageInfo {
    /// Normalizes the `params` of a message; an absent value is read as `null`
    pub fn normalize_params(&self, params: Option<&Value>) -> Result<Value, CodecError> {
        (self.params)(params.unwrap_or(&Value::Null))
    }

    /// Normalizes the result of a request, `None` for notifications
    pub fn normalize_result(&self, result: &Value) -> Option<Result<Value, CodecError>> {
        self.result.map(|normalize| normalize(result))
    }
}

/// Every known message, requests first
pub fn messages() -> impl Iterator<Item = &'static MessageInfo> {
    REQUESTS.iter().chain(NOTIFICATIONS.iter())
}

pub fn lookup(method: &str) -> Option<&'static MessageInfo> {
    messages().find(|info| info.method == method)
}

/// Registration options normalizer for a `client/registerCapability` method
///
/// Covers the registration-only methods (`textDocument/semanticTokens`,
/// `notebookDocument/sync`) besides the message methods.
pub fn registration_options(method: &str) -> Option<Normalizer> {
    lookup(method)
        .and_then(|info| info.registration_options)
        .or_else(|| {
            REGISTRATION_ONLY
                .iter()
                .find(|(name, _)| *name == method)
                .map(|(_, normalize)| *normalize)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn methods_are_unique() {
        let mut seen = HashSet::new();
        for info in messages() {
            assert!(seen.insert(info.method), "duplicate method {}", info.method);
        }
    }

    #[rstest]
    #[case("textDocument/hover", MessageKind::Request, MessageDirection::ClientToServer)]
    #[case("workspace/applyEdit", MessageKind::Request, MessageDirection::ServerToClient)]
    #[case("textDocument/didOpen", MessageKind::Notification, MessageDirection::ClientToServer)]
    #[case("$/progress", MessageKind::Notification, MessageDirection::Both)]
    fn lookup_known_methods(
        #[case] method: &str,
        #[case] kind: MessageKind,
        #[case] direction: MessageDirection,
    ) {
        let info = lookup(method).unwrap();
        assert_eq!(info.kind, kind);
        assert_eq!(info.direction, direction);
        assert_eq!(info.result.is_some(), kind == MessageKind::Request);
    }

    #[test]
    fn lookup_unknown_method() {
        assert!(lookup("textDocument/teleport").is_none());
    }

    #[test]
    fn params_less_messages_accept_only_null() {
        let shutdown = lookup("shutdown").unwrap();
        assert_eq!(shutdown.normalize_params(None).unwrap(), Value::Null);
        assert!(shutdown.normalize_params(Some(&json!({}))).is_err());
    }

    #[test]
    fn normalize_params_drops_unknown_keys() {
        let hover = lookup("textDocument/hover").unwrap();
        let normalized = hover
            .normalize_params(Some(&json!({
                "textDocument": { "uri": "file:///a.rs" },
                "position": { "line": 1, "character": 2 },
                "extra": 1
            })))
            .unwrap();

        assert_eq!(
            normalized,
            json!({
                "textDocument": { "uri": "file:///a.rs" },
                "position": { "line": 1, "character": 2 }
            })
        );
    }

    #[test]
    fn nullable_result_accepts_null() {
        let hover = lookup("textDocument/hover").unwrap();
        let normalized = hover.normalize_result(&Value::Null).unwrap().unwrap();
        assert_eq!(normalized, Value::Null);
    }

    #[test]
    fn notification_has_no_result() {
        let exit = lookup("exit").unwrap();
        assert!(exit.normalize_result(&Value::Null).is_none());
    }

    #[rstest]
    #[case("textDocument/completion", true)]
    #[case("textDocument/semanticTokens", true)]
    #[case("notebookDocument/sync", true)]
    #[case("textDocument/prepareRename", false)]
    #[case("initialize", false)]
    fn registration_options_by_method(#[case] method: &str, #[case] expected: bool) {
        assert_eq!(registration_options(method).is_some(), expected);
    }
}
