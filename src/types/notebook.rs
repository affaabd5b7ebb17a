//! Notebook document synchronization

use serde::{Deserialize, Serialize};

use crate::codec::lsp_union;
use crate::types::{
    DocumentUri, LSPObject, NotebookCellKind, NotebookFilter, StaticRegistrationOptions,
    TextDocumentContentChangeEvent, TextDocumentIdentifier, TextDocumentItem, Uri,
    VersionedTextDocumentIdentifier,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocument {
    pub uri: Uri,
    pub notebook_type: String,
    /// Incremented after each change, including undo/redo
    pub version: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LSPObject>,
    pub cells: Vec<NotebookCell>,
}

/// A notebook cell; its content is a separate text document referenced by `document`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookCell {
    pub kind: NotebookCellKind,
    pub document: DocumentUri,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LSPObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_summary: Option<ExecutionSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    pub execution_order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// A change to the cell array of a notebook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookCellArrayChange {
    pub start: u32,
    pub delete_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<NotebookCell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentIdentifier {
    pub uri: Uri,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedNotebookDocumentIdentifier {
    pub version: i32,
    pub uri: Uri,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenNotebookDocumentParams {
    pub notebook_document: NotebookDocument,
    pub cell_text_documents: Vec<TextDocumentItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeNotebookDocumentParams {
    pub notebook_document: VersionedNotebookDocumentIdentifier,
    pub change: NotebookDocumentChangeEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotebookDocumentChangeEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LSPObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<NotebookDocumentCellChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentCellChanges {
    /// Changes to the cell structure, i.e. added or removed cells
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<NotebookDocumentCellChangeStructure>,
    /// Cells whose properties changed, without their text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<NotebookCell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<Vec<NotebookDocumentCellContentChanges>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentCellChangeStructure {
    pub array: NotebookCellArrayChange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_open: Option<Vec<TextDocumentItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_close: Option<Vec<TextDocumentIdentifier>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentCellContentChanges {
    pub document: VersionedTextDocumentIdentifier,
    pub changes: Vec<TextDocumentContentChangeEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidSaveNotebookDocumentParams {
    pub notebook_document: NotebookDocumentIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCloseNotebookDocumentParams {
    pub notebook_document: NotebookDocumentIdentifier,
    pub cell_text_documents: Vec<TextDocumentIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookCellLanguage {
    pub language: String,
}

lsp_union! {
    /// Selects notebooks by notebook filter, by cell languages, or both
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotebookDocumentSyncSelector {
        WithNotebook(NotebookDocumentFilterWithNotebook),
        WithCells(NotebookDocumentFilterWithCells),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentFilterWithNotebook {
    pub notebook: NotebookFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<NotebookCellLanguage>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentFilterWithCells {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook: Option<NotebookFilter>,
    pub cells: Vec<NotebookCellLanguage>,
}

/// Which notebooks the server synchronizes; cell documents are not sent separately
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentSyncOptions {
    pub notebook_selector: Vec<NotebookDocumentSyncSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentSyncRegistrationOptions {
    #[serde(flatten)]
    pub notebook_document_sync_options: NotebookDocumentSyncOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

lsp_union! {
    /// The registration form decodes every valid options object, keeping `id`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotebookDocumentSync {
        Registration(NotebookDocumentSyncRegistrationOptions),
        Options(NotebookDocumentSyncOptions),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentSyncClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_summary_support: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentClientCapabilities {
    pub synchronization: NotebookDocumentSyncClientCapabilities,
}
