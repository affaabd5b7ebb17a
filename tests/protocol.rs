mod helper;

use rstest::rstest;
use serde_json::{Value, json};

use helper::range_json;
use lsp_model::capability::{CapabilityError, FeatureRegistration, feature_registrations};
use lsp_model::check::{CheckConfig, CheckError, MessagePart, check};
use lsp_model::codec;
use lsp_model::protocol::{self, *};
use lsp_model::types::*;

fn result_of<R: Request>(value: Value) -> R::Result {
    codec::decode::<R::Result>(&value).unwrap()
}

#[test]
fn request_markers_bind_wire_names() {
    assert_eq!(HoverRequest::METHOD, "textDocument/hover");
    assert_eq!(ApplyWorkspaceEdit::DIRECTION, MessageDirection::ServerToClient);
    assert_eq!(PublishDiagnostics::METHOD, "textDocument/publishDiagnostics");
    assert_eq!(Cancel::DIRECTION, MessageDirection::Both);
}

#[test]
fn request_result_types_decode_null() {
    let hover = result_of::<HoverRequest>(Value::Null);
    assert_eq!(hover, None);

    let definition = result_of::<GotoDefinition>(json!({
        "uri": "file:///a.rs",
        "range": range_json(0, 0, 1)
    }));
    assert!(definition.is_some());
}

#[test]
fn every_request_has_a_result_and_no_notification_has_one() {
    for info in protocol::messages() {
        match info.kind {
            MessageKind::Request => assert!(info.result.is_some(), "{}", info.method),
            MessageKind::Notification => assert!(info.result.is_none(), "{}", info.method),
        }
    }
}

#[test]
fn registry_agrees_with_markers() {
    let info = protocol::lookup(CompletionRequest::METHOD).unwrap();
    assert_eq!(info.kind, MessageKind::Request);
    assert_eq!(info.direction, CompletionRequest::DIRECTION);

    let info = protocol::lookup(DidChangeNotebookDocument::METHOD).unwrap();
    assert_eq!(info.kind, MessageKind::Notification);
    assert_eq!(info.direction, MessageDirection::ClientToServer);
}

#[rstest]
#[case("shutdown")]
#[case("exit")]
#[case("workspace/diagnostic/refresh")]
fn params_less_messages_reject_params(#[case] method: &str) {
    let info = protocol::lookup(method).unwrap();
    assert_eq!(info.normalize_params(None).unwrap(), Value::Null);
    assert!(info.normalize_params(Some(&json!({ "unexpected": true }))).is_err());
}

#[test]
fn telemetry_accepts_any_params() {
    let info = protocol::lookup("telemetry/event").unwrap();
    let params = json!({ "event": "startup", "ms": 120 });
    assert_eq!(info.normalize_params(Some(&params)).unwrap(), params);
}

#[test]
fn check_normalizes_did_change() {
    let report = check(
        "textDocument/didChange",
        MessagePart::Params,
        &json!({
            "textDocument": { "uri": "file:///a.rs", "version": 2 },
            "contentChanges": [
                { "range": range_json(0, 0, 2), "rangeLength": 2, "text": "fn" },
                { "text": "fn main() {}" }
            ]
        }),
        &CheckConfig { strict: true },
    )
    .unwrap();

    assert!(report.dropped.is_empty());
    assert_eq!(report.method, "textDocument/didChange");
}

#[test]
fn check_in_strict_mode_lists_every_unknown_key() {
    let err = check(
        "textDocument/publishDiagnostics",
        MessagePart::Params,
        &json!({
            "uri": "file:///a.rs",
            "diagnostics": [
                { "range": range_json(0, 0, 1), "message": "a", "severity": 1, "fixable": true }
            ],
            "~meta": 1
        }),
        &CheckConfig { strict: true },
    )
    .unwrap_err();

    let CheckError::UnknownProperties { pointers, .. } = err else {
        panic!("expected unknown properties, got {err}");
    };
    assert_eq!(pointers, vec!["/diagnostics/0/fixable", "/~0meta"]);
}

#[test]
fn check_rejects_missing_registration_options() {
    let err = check(
        "textDocument/prepareRename",
        MessagePart::RegistrationOptions,
        &json!({}),
        &CheckConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, CheckError::NoRegistrationOptions(_)));
}

#[test]
fn initialize_result_lists_static_features() {
    let result = result_of::<Initialize>(json!({
        "capabilities": {
            "textDocumentSync": 2,
            "hoverProvider": true,
            "semanticTokensProvider": {
                "legend": { "tokenTypes": ["function"], "tokenModifiers": [] },
                "full": true,
                "documentSelector": [{ "language": "rust" }],
                "id": "tokens"
            },
            "diagnosticProvider": { "interFileDependencies": false, "workspaceDiagnostics": false }
        },
        "serverInfo": { "name": "rust-analyzer" }
    }));

    let features = feature_registrations(&result.capabilities).unwrap();
    let methods: Vec<_> = features.iter().map(|f| f.method.as_str()).collect();

    assert_eq!(
        methods,
        vec![
            "textDocument/semanticTokens",
            "textDocument/diagnostic",
            "textDocument/hover"
        ]
    );
    assert_eq!(features[0].id.as_deref(), Some("tokens"));
    assert!(features[0].document_selector.is_some());
    assert_eq!(features[1].id, None);
}

#[test]
fn registration_without_options_keeps_its_id() {
    let params: RegistrationParams = codec::decode(&json!({
        "registrations": [
            { "id": "watch", "method": "workspace/didChangeWatchedFiles", "registerOptions": {
                "watchers": [{ "globPattern": "**/*.rs", "kind": 7 }]
            } },
            { "id": "cfg", "method": "workspace/didChangeConfiguration" }
        ]
    }))
    .unwrap();

    let features: Vec<_> = params
        .registrations
        .iter()
        .map(FeatureRegistration::from_registration)
        .collect::<Result<_, CapabilityError>>()
        .unwrap();

    assert_eq!(features[0].id.as_deref(), Some("watch"));
    assert_eq!(
        features[0].options,
        json!({ "watchers": [{ "globPattern": "**/*.rs", "kind": 7 }] })
    );
    assert_eq!(features[1].id.as_deref(), Some("cfg"));
    assert_eq!(features[1].options, Value::Null);
}
