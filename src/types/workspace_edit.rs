//! Workspace edits and resource operations

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::codec::{lsp_literal, lsp_union};
use crate::types::{
    AnnotatedTextEdit, ChangeAnnotationIdentifier, DocumentUri, FailureHandlingKind,
    OptionalVersionedTextDocumentIdentifier, ResourceOperationKind, TextEdit,
};

lsp_literal! {
    pub struct CreateKind = "create";
}

lsp_literal! {
    pub struct RenameKind = "rename";
}

lsp_literal! {
    pub struct DeleteKind = "delete";
}

/// Changes to many resources managed in the workspace
///
/// Clients that support `documentChanges` prefer it over `changes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<IndexMap<DocumentUri, Vec<TextEdit>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_changes: Option<DocumentChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_annotations: Option<IndexMap<ChangeAnnotationIdentifier, ChangeAnnotation>>,
}

lsp_union! {
    /// Either plain text document edits or a mix of edits and file operations
    #[derive(Debug, Clone, PartialEq)]
    pub enum DocumentChanges {
        Edits(Vec<TextDocumentEdit>),
        Operations(Vec<DocumentChange>),
    }
}

lsp_union! {
    /// One entry of a mixed `documentChanges` array, told apart by `kind`
    #[derive(Debug, Clone, PartialEq)]
    pub enum DocumentChange {
        Edit(TextDocumentEdit),
        Create(CreateFile),
        Rename(RenameFile),
        Delete(DeleteFile),
    }
}

/// Textual changes on a single, optionally versioned, text document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentEdit {
    pub text_document: OptionalVersionedTextDocumentIdentifier,
    pub edits: Vec<TextDocumentEditEntry>,
}

lsp_union! {
    /// Annotated edits are listed first so their `annotationId` is kept
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TextDocumentEditEntry {
        Annotated(AnnotatedTextEdit),
        Plain(TextEdit),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_if_exists: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    pub kind: CreateKind,
    pub uri: DocumentUri,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<CreateFileOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

impl CreateFile {
    pub fn new(uri: impl Into<DocumentUri>) -> Self {
        Self {
            kind: CreateKind,
            uri: uri.into(),
            options: None,
            annotation_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_if_exists: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFile {
    pub kind: RenameKind,
    pub old_uri: DocumentUri,
    pub new_uri: DocumentUri,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RenameFileOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

impl RenameFile {
    pub fn new(old_uri: impl Into<DocumentUri>, new_uri: impl Into<DocumentUri>) -> Self {
        Self {
            kind: RenameKind,
            old_uri: old_uri.into(),
            new_uri: new_uri.into(),
            options: None,
            annotation_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_if_not_exists: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFile {
    pub kind: DeleteKind,
    pub uri: DocumentUri,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<DeleteFileOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

impl DeleteFile {
    pub fn new(uri: impl Into<DocumentUri>) -> Self {
        Self {
            kind: DeleteKind,
            uri: uri.into(),
            options: None,
            annotation_id: None,
        }
    }
}

/// Additional information describing a group of edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAnnotation {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_confirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyWorkspaceEditParams {
    /// Label presented in the user interface, e.g. on an undo stack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub edit: WorkspaceEdit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyWorkspaceEditResult {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Index of the failed change when `documentChanges` was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_change: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAnnotationsSupportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_on_label: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEditClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_changes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_operations: Option<Vec<ResourceOperationKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_handling: Option<FailureHandlingKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizes_line_endings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_annotation_support: Option<ChangeAnnotationsSupportOptions>,
}
