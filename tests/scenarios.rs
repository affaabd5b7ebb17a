mod helper;

use serde_json::json;

use helper::{assert_rejected, assert_round_trip, location_json, range_json};
use lsp_model::codec;
use lsp_model::types::*;

#[test]
fn position_decodes_and_encodes() {
    let position: Position = assert_round_trip(json!({ "line": 5, "character": 23 }));
    assert_eq!(position, Position::new(5, 23));
}

#[test]
fn location_without_range_is_rejected() {
    let err = assert_rejected::<Location>(json!({ "uri": "file:///a.rs" }));
    assert_eq!(err.to_string(), "Invalid Location: missing field `range`");
}

#[test]
fn document_selector_null_is_kept() {
    let options: TextDocumentRegistrationOptions =
        assert_round_trip(json!({ "documentSelector": null }));
    assert_eq!(options.document_selector, None);

    assert_rejected::<TextDocumentRegistrationOptions>(json!({}));
}

#[test]
fn document_selector_filters_decode_in_order() {
    let options: TextDocumentRegistrationOptions = assert_round_trip(json!({
        "documentSelector": [
            { "language": "rust" },
            { "scheme": "untitled" },
            { "pattern": "**/Cargo.toml" },
            { "notebook": "jupyter-notebook" }
        ]
    }));

    let selector = options.document_selector.unwrap();
    assert!(matches!(
        selector[0],
        DocumentFilter::TextDocument(TextDocumentFilter::Language(_))
    ));
    assert!(matches!(
        selector[1],
        DocumentFilter::TextDocument(TextDocumentFilter::Scheme(_))
    ));
    assert!(matches!(
        selector[2],
        DocumentFilter::TextDocument(TextDocumentFilter::Pattern(_))
    ));
    assert!(matches!(selector[3], DocumentFilter::NotebookCell(_)));
}

#[test]
fn mixed_document_changes_become_operations() {
    let edit: WorkspaceEdit = assert_round_trip(json!({
        "documentChanges": [
            {
                "textDocument": { "uri": "file:///a.rs", "version": 1 },
                "edits": [{ "range": range_json(0, 0, 0), "newText": "use std::fmt;\n" }]
            },
            { "kind": "create", "uri": "file:///b.rs", "options": { "ignoreIfExists": true } },
            { "kind": "rename", "oldUri": "file:///c.rs", "newUri": "file:///d.rs" },
            { "kind": "delete", "uri": "file:///e.rs" }
        ]
    }));

    let Some(DocumentChanges::Operations(operations)) = edit.document_changes else {
        panic!("expected operations");
    };
    assert!(matches!(operations[0], DocumentChange::Edit(_)));
    assert!(matches!(operations[1], DocumentChange::Create(_)));
    assert!(matches!(operations[2], DocumentChange::Rename(_)));
    assert_eq!(operations[3], DocumentChange::Delete(DeleteFile::new("file:///e.rs")));
}

#[test]
fn edit_only_document_changes_stay_edits() {
    let edit: WorkspaceEdit = assert_round_trip(json!({
        "documentChanges": [{
            "textDocument": { "uri": "file:///a.rs", "version": null },
            "edits": []
        }]
    }));

    assert!(matches!(edit.document_changes, Some(DocumentChanges::Edits(_))));
}

#[test]
fn completion_response_accepts_array_and_list() {
    let items = json!([{ "label": "println!", "kind": 3 }]);
    let response: CompletionResponse = assert_round_trip(items.clone());
    assert!(matches!(response, CompletionResponse::Array(_)));

    let response: CompletionResponse =
        assert_round_trip(json!({ "isIncomplete": false, "items": items }));
    let CompletionResponse::List(list) = response else {
        panic!("expected list");
    };
    assert!(!list.is_incomplete);
    assert_eq!(list.items[0].kind, Some(CompletionItemKind::Function));
}

#[test]
fn publish_diagnostics_round_trips() {
    let params: PublishDiagnosticsParams = assert_round_trip(json!({
        "uri": "file:///a.rs",
        "version": 0,
        "diagnostics": [{
            "range": range_json(2, 4, 8),
            "severity": 1,
            "code": 308,
            "message": "mismatched types",
            "relatedInformation": [{ "location": location_json("file:///b.rs", 3), "message": "here" }]
        }]
    }));

    assert_eq!(params.version, Some(0));
    assert_eq!(params.diagnostics[0].code, Some(IntegerOrString::Integer(308)));
}

#[test]
fn semantic_tokens_provider_prefers_registration_options() {
    let provider: SemanticTokensProvider = assert_round_trip(json!({
        "legend": { "tokenTypes": ["keyword", "macro"], "tokenModifiers": [] },
        "full": { "delta": true },
        "documentSelector": null
    }));
    assert!(matches!(provider, SemanticTokensProvider::Registration(_)));

    let provider: SemanticTokensProvider = assert_round_trip(json!({
        "legend": { "tokenTypes": ["keyword"], "tokenModifiers": ["static"] },
        "range": true
    }));
    assert!(matches!(provider, SemanticTokensProvider::Options(_)));
}

#[test]
fn server_capabilities_keep_disabled_providers() {
    let caps: ServerCapabilities = assert_round_trip(json!({
        "positionEncoding": "utf-8",
        "textDocumentSync": { "openClose": true, "change": 2, "save": { "includeText": false } },
        "hoverProvider": false,
        "completionProvider": { "triggerCharacters": [".", ":"], "resolveProvider": true },
        "renameProvider": { "prepareProvider": true },
        "workspace": { "workspaceFolders": { "supported": true, "changeNotifications": "folders" } }
    }));

    assert!(!caps.hover_provider.as_ref().unwrap().is_enabled());
    assert!(caps.rename_provider.as_ref().unwrap().is_enabled());
    assert_eq!(caps.definition_provider, None);
}

#[test]
fn hover_round_trips_through_text() {
    let text = r#"{"contents":{"kind":"markdown","value":"```rust\nfn main()\n```"},"range":{"start":{"line":0,"character":3},"end":{"line":0,"character":7}}}"#;

    let hover: Hover = codec::decode_str(text).unwrap();
    assert_eq!(hover.range, Some(Range::new(Position::new(0, 3), Position::new(0, 7))));
    assert_eq!(serde_json::to_string(&hover).unwrap(), text);
}
