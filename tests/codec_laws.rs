mod helper;

use rstest::rstest;
use serde_json::{Value, json};

use helper::{assert_rejected, assert_round_trip, location_json, range_json};
use lsp_model::codec::{self, DecodeError, JsonKind};
use lsp_model::types::*;

#[test]
fn diagnostic_with_every_field_round_trips() {
    let diagnostic: Diagnostic = assert_round_trip(json!({
        "range": range_json(4, 2, 9),
        "severity": 2,
        "code": "E0308",
        "codeDescription": { "href": "https://doc.rust-lang.org/error_codes/E0308.html" },
        "source": "rustc",
        "message": "mismatched types",
        "tags": [1, 2],
        "relatedInformation": [
            { "location": location_json("file:///src/lib.rs", 1), "message": "expected due to this" }
        ],
        "data": { "fix": 0 }
    }));

    assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::Warning));
    assert_eq!(diagnostic.code, Some(IntegerOrString::String("E0308".to_string())));
    assert_eq!(
        diagnostic.tags,
        Some(vec![DiagnosticTag::Unnecessary, DiagnosticTag::Deprecated])
    );
}

#[test]
fn initialize_params_round_trip() {
    assert_round_trip::<InitializeParams>(json!({
        "processId": 4242,
        "clientInfo": { "name": "editor", "version": "1.0" },
        "rootPath": null,
        "rootUri": "file:///work",
        "capabilities": {
            "textDocument": { "hover": { "contentFormat": ["markdown", "plaintext"] } },
            "general": { "positionEncodings": ["utf-16"] }
        },
        "initializationOptions": [1, "two"],
        "trace": "verbose",
        "workspaceFolders": [{ "uri": "file:///work", "name": "work" }]
    }));
}

#[rstest]
#[case::location_range_as_array(json!({ "uri": "file:///a.rs", "range": [[0, 0], [0, 5]] }))]
#[case::location_position_as_array(json!({
    "uri": "file:///a.rs",
    "range": { "start": [0, 0], "end": { "line": 0, "character": 5 } }
}))]
fn location_rejects_arrays_for_nested_structs(#[case] value: Value) {
    assert_rejected::<Location>(value);
}

#[rstest]
#[case::text_edit_range_as_array(json!({ "range": [[0, 0], [0, 1]], "newText": "" }))]
#[case::text_edit_end_as_array(json!({
    "range": { "start": { "line": 0, "character": 0 }, "end": [0, 1] },
    "newText": ""
}))]
fn text_edit_rejects_arrays_for_nested_structs(#[case] value: Value) {
    assert_rejected::<TextEdit>(value);
}

#[test]
fn flattened_position_rejects_arrays() {
    let err = assert_rejected::<HoverParams>(json!({
        "textDocument": { "uri": "file:///a.rs" },
        "position": [0, 5]
    }));
    assert_eq!(
        err.to_string(),
        "Invalid HoverParams: invalid type: sequence at `/position`, expected an object"
    );
}

#[rstest]
#[case::position_without_character(json!({ "line": 1 }))]
#[case::position_with_string_line(json!({ "line": "1", "character": 0 }))]
#[case::position_as_array(json!([1, 0]))]
fn position_rejects_malformed_json(#[case] value: Value) {
    assert_rejected::<Position>(value);
}

#[rstest]
#[case::text_edit_without_new_text(json!({ "range": range_json(0, 0, 1) }))]
#[case::text_edit_with_null_range(json!({ "range": null, "newText": "" }))]
fn text_edit_requires_its_fields(#[case] value: Value) {
    assert_rejected::<TextEdit>(value);
}

#[test]
fn missing_required_field_is_named() {
    let err = assert_rejected::<MarkupContent>(json!({ "kind": "markdown" }));
    assert_eq!(err.to_string(), "Invalid MarkupContent: missing field `value`");
}

#[test]
fn absent_optionals_are_omitted() {
    let diagnostic = Diagnostic::new_simple(
        Range::new(Position::new(0, 0), Position::new(0, 3)),
        "unused",
    );

    assert_eq!(
        codec::encode(&diagnostic).unwrap(),
        json!({ "range": range_json(0, 0, 3), "message": "unused" })
    );
}

#[test]
fn falsy_values_are_kept() {
    let result: ApplyWorkspaceEditResult = assert_round_trip(json!({
        "applied": false,
        "failureReason": "",
        "failedChange": 0
    }));

    assert!(!result.applied);
    assert_eq!(result.failure_reason.as_deref(), Some(""));
    assert_eq!(result.failed_change, Some(0));
}

#[test]
fn required_nullable_field_must_be_present() {
    assert_rejected::<InitializeParams>(json!({ "rootUri": null, "capabilities": {} }));

    let params: InitializeParams =
        assert_round_trip(json!({ "processId": null, "rootUri": null, "capabilities": {} }));
    assert_eq!(params.process_id, None);
    assert_eq!(params, InitializeParams::new(ClientCapabilities::default()));
}

#[test]
fn optional_nullable_field_keeps_null_apart_from_absent() {
    let absent: InitializeParams =
        codec::decode(&json!({ "processId": 1, "rootUri": null, "capabilities": {} })).unwrap();
    let null: InitializeParams = codec::decode(&json!({
        "processId": 1,
        "rootUri": null,
        "capabilities": {},
        "workspaceFolders": null
    }))
    .unwrap();

    assert_eq!(absent.workspace_folders, None);
    assert_eq!(null.workspace_folders, Some(None));
    assert!(codec::encode(&null).unwrap().get("workspaceFolders").is_some());
    assert!(codec::encode(&absent).unwrap().get("workspaceFolders").is_none());
}

#[test]
fn any_typed_field_keeps_null() {
    let diagnostic: Diagnostic = assert_round_trip(json!({
        "range": range_json(0, 0, 1),
        "message": "m",
        "data": null
    }));
    assert_eq!(diagnostic.data, Some(Value::Null));
}

#[rstest]
#[case(json!(7), IntegerOrString::Integer(7))]
#[case(json!("7"), IntegerOrString::String("7".to_string()))]
fn union_picks_variant_by_shape(#[case] value: Value, #[case] expected: IntegerOrString) {
    assert_eq!(codec::decode::<IntegerOrString>(&value).unwrap(), expected);
}

#[test]
fn union_tries_variants_in_order() {
    // A ranged change also satisfies the whole document shape
    let change: TextDocumentContentChangeEvent = assert_round_trip(json!({
        "range": range_json(0, 0, 4),
        "text": "fn"
    }));
    assert!(matches!(change, TextDocumentContentChangeEvent::Partial(_)));

    let change: TextDocumentContentChangeEvent = assert_round_trip(json!({ "text": "fn main() {}" }));
    assert!(matches!(change, TextDocumentContentChangeEvent::WholeDocument(_)));
}

#[test]
fn union_reports_exhaustion() {
    let err = assert_rejected::<Documentation>(json!(3));
    assert!(
        err.to_string().contains("No variant of Documentation matched"),
        "unexpected message: {err}"
    );
    let DecodeError::NoMatchingVariant { type_name, found, attempts } = err else {
        panic!("expected no matching variant");
    };
    assert_eq!(type_name, "Documentation");
    assert_eq!(found, JsonKind::Integer);
    assert_eq!(attempts.len(), 2);
}

#[rstest]
#[case(json!("plain"), "Scalar")]
#[case(json!({ "language": "rust", "value": "fn f()" }), "Scalar")]
#[case(json!({ "kind": "markdown", "value": "**f**" }), "Markup")]
#[case(json!(["a", { "language": "rust", "value": "b" }]), "Array")]
fn hover_contents_variants(#[case] value: Value, #[case] expected: &str) {
    let contents: HoverContents = assert_round_trip(value);
    let variant = match contents {
        HoverContents::Markup(_) => "Markup",
        HoverContents::Scalar(_) => "Scalar",
        HoverContents::Array(_) => "Array",
    };
    assert_eq!(variant, expected);
}

#[rstest]
#[case(DiagnosticSeverity::Error, 1)]
#[case(DiagnosticSeverity::Hint, 4)]
fn integer_enum_uses_wire_value(#[case] severity: DiagnosticSeverity, #[case] value: i32) {
    assert_eq!(codec::encode(&severity).unwrap(), json!(value));
    assert_eq!(codec::decode::<DiagnosticSeverity>(&json!(value)).unwrap(), severity);
}

#[rstest]
#[case(json!(0))]
#[case(json!(5))]
#[case(json!("1"))]
fn closed_integer_enum_rejects_other_values(#[case] value: Value) {
    assert_rejected::<DiagnosticSeverity>(value);
}

#[test]
fn closed_string_enum_rejects_other_values() {
    let err = assert_rejected::<MarkupKind>(json!("html"));
    assert!(matches!(
        err,
        DecodeError::UnknownEnumValue { type_name: "MarkupKind", .. }
    ));
    assert_eq!(err.to_string(), "\"html\" is not a value of MarkupKind");
}

#[test]
fn enum_failure_inside_a_struct_keeps_its_variant() {
    let err = assert_rejected::<Diagnostic>(json!({
        "range": range_json(0, 0, 1),
        "message": "m",
        "severity": 7
    }));
    let DecodeError::UnknownEnumValue { type_name, value } = err else {
        panic!("expected unknown enum value, got {err}");
    };
    assert_eq!(type_name, "DiagnosticSeverity");
    assert_eq!(value, "7");
}

#[test]
fn open_string_enum_keeps_custom_values() {
    let kind: CodeActionKind = assert_round_trip(json!("refactor.extract.function"));
    assert_eq!(kind, CodeActionKind::Custom("refactor.extract.function".to_string()));

    let kind: CodeActionKind = assert_round_trip(json!("quickfix"));
    assert_eq!(kind, CodeActionKind::QuickFix);
}
