//! Diagnostics, both pushed (`textDocument/publishDiagnostics`) and pulled
//! (`textDocument/diagnostic`, `workspace/diagnostic`)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::field::{present, required_nullable};
use crate::codec::{lsp_literal, lsp_union};
use crate::types::{
    DiagnosticSeverity, DiagnosticTag, DocumentUri, IntegerOrString, Location,
    PartialResultParams, Range, StaticRegistrationOptions, TextDocumentIdentifier,
    TextDocumentRegistrationOptions, Uri, WorkDoneProgressOptions, WorkDoneProgressParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDescription {
    pub href: Uri,
}

/// A location and message related to a diagnostic, e.g. a duplicate symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRelatedInformation {
    pub location: Location,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosticSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<IntegerOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_description: Option<CodeDescription>,
    /// Human readable producer of the diagnostic, e.g. `typescript`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<DiagnosticTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_information: Option<Vec<DiagnosticRelatedInformation>>,
    /// Preserved between `textDocument/publishDiagnostics` and `textDocument/codeAction`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub data: Option<Value>,
}

impl Diagnostic {
    pub fn new_simple(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: None,
            code: None,
            code_description: None,
            source: None,
            message: message.into(),
            tags: None,
            related_information: None,
            data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishDiagnosticsParams {
    pub uri: DocumentUri,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDiagnosticsTagOptions {
    pub value_set: Vec<DiagnosticTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishDiagnosticsClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_information: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<ClientDiagnosticsTagOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_description_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_support: Option<bool>,
}

lsp_literal! {
    pub struct FullKind = "full";
}

lsp_literal! {
    pub struct UnchangedKind = "unchanged";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDiagnosticParams {
    pub text_document: TextDocumentIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_result_id: Option<String>,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullDocumentDiagnosticReport {
    pub kind: FullKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    pub items: Vec<Diagnostic>,
}

/// The diagnostics of the previous report with `result_id` are still valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnchangedDocumentDiagnosticReport {
    pub kind: UnchangedKind,
    pub result_id: String,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DocumentDiagnosticReportEntry {
        Full(FullDocumentDiagnosticReport),
        Unchanged(UnchangedDocumentDiagnosticReport),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedFullDocumentDiagnosticReport {
    #[serde(flatten)]
    pub report: FullDocumentDiagnosticReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_documents: Option<IndexMap<DocumentUri, DocumentDiagnosticReportEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedUnchangedDocumentDiagnosticReport {
    #[serde(flatten)]
    pub report: UnchangedDocumentDiagnosticReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_documents: Option<IndexMap<DocumentUri, DocumentDiagnosticReportEntry>>,
}

lsp_union! {
    /// Result of `textDocument/diagnostic`, told apart by `kind`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DocumentDiagnosticReport {
        Full(RelatedFullDocumentDiagnosticReport),
        Unchanged(RelatedUnchangedDocumentDiagnosticReport),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDiagnosticReportPartialResult {
    pub related_documents: IndexMap<DocumentUri, DocumentDiagnosticReportEntry>,
}

/// Error data of a cancelled diagnostic request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticServerCancellationData {
    pub retrigger_request: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousResultId {
    pub uri: DocumentUri,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDiagnosticParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub previous_result_ids: Vec<PreviousResultId>,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFullDocumentDiagnosticReport {
    #[serde(flatten)]
    pub report: FullDocumentDiagnosticReport,
    pub uri: DocumentUri,
    /// `null` when the document is not open in the client
    #[serde(with = "required_nullable")]
    pub version: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceUnchangedDocumentDiagnosticReport {
    #[serde(flatten)]
    pub report: UnchangedDocumentDiagnosticReport,
    pub uri: DocumentUri,
    #[serde(with = "required_nullable")]
    pub version: Option<i32>,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum WorkspaceDocumentDiagnosticReport {
        Full(WorkspaceFullDocumentDiagnosticReport),
        Unchanged(WorkspaceUnchangedDocumentDiagnosticReport),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDiagnosticReport {
    pub items: Vec<WorkspaceDocumentDiagnosticReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDiagnosticReportPartialResult {
    pub items: Vec<WorkspaceDocumentDiagnosticReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// A change in one document can produce diagnostics in another
    pub inter_file_dependencies: bool,
    pub workspace_diagnostics: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub diagnostic_options: DiagnosticOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

lsp_union! {
    /// Registration options come first so a `documentSelector` is not dropped
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DiagnosticProvider {
        Registration(DiagnosticRegistrationOptions),
        Options(DiagnosticOptions),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_document_support: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticWorkspaceClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_support: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use serde_json::json;

    fn range_json() -> Value {
        json!({ "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 3 } })
    }

    #[test]
    fn diagnostic_code_can_be_number_or_string() {
        let numeric: Diagnostic = serde_json::from_value(json!({
            "range": range_json(), "message": "unused", "code": 6133
        }))
        .unwrap();
        assert_eq!(numeric.code, Some(IntegerOrString::Integer(6133)));

        let textual: Diagnostic = serde_json::from_value(json!({
            "range": range_json(), "message": "unused", "code": "E0425"
        }))
        .unwrap();
        assert_eq!(textual.code, Some(IntegerOrString::String("E0425".to_string())));
    }

    #[test]
    fn new_simple_encodes_only_required_fields() {
        let diagnostic = Diagnostic::new_simple(
            Range::new(Position::new(0, 0), Position::new(0, 3)),
            "unused",
        );

        assert_eq!(
            serde_json::to_value(&diagnostic).unwrap(),
            json!({ "range": range_json(), "message": "unused" })
        );
    }

    #[test]
    fn document_report_tells_full_from_unchanged() {
        let full: DocumentDiagnosticReport =
            serde_json::from_value(json!({ "kind": "full", "items": [] })).unwrap();
        assert!(matches!(full, DocumentDiagnosticReport::Full(_)));

        let unchanged: DocumentDiagnosticReport =
            serde_json::from_value(json!({ "kind": "unchanged", "resultId": "7" })).unwrap();
        assert!(matches!(unchanged, DocumentDiagnosticReport::Unchanged(_)));
    }

    #[test]
    fn document_report_with_wrong_kind_fails() {
        let err = serde_json::from_value::<DocumentDiagnosticReport>(json!({
            "kind": "partial",
            "items": []
        }))
        .unwrap_err();

        assert!(err.to_string().starts_with("No variant of DocumentDiagnosticReport matched"));
    }

    #[test]
    fn workspace_report_requires_version_key() {
        let report: WorkspaceDocumentDiagnosticReport = serde_json::from_value(json!({
            "kind": "full",
            "items": [],
            "uri": "file:///a.py",
            "version": null
        }))
        .unwrap();

        let WorkspaceDocumentDiagnosticReport::Full(full) = &report else {
            panic!("expected a full report");
        };
        assert_eq!(full.version, None);
        assert_eq!(serde_json::to_value(&report).unwrap()["version"], Value::Null);

        assert!(
            serde_json::from_value::<WorkspaceDocumentDiagnosticReport>(json!({
                "kind": "full",
                "items": [],
                "uri": "file:///a.py"
            }))
            .is_err()
        );
    }

    #[test]
    fn diagnostic_provider_prefers_registration() {
        let provider: DiagnosticProvider = serde_json::from_value(json!({
            "documentSelector": null,
            "interFileDependencies": false,
            "workspaceDiagnostics": true,
            "id": "diag"
        }))
        .unwrap();

        let DiagnosticProvider::Registration(options) = provider else {
            panic!("expected registration options");
        };
        assert_eq!(options.static_registration_options.id.as_deref(), Some("diag"));
        assert!(options.diagnostic_options.workspace_diagnostics);
    }
}
