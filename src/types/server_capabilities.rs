//! Capabilities announced by the server in the `initialize` result

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::field::present;
use crate::types::{
    BooleanOr, CallHierarchyProvider, CodeActionOptions, CodeLensOptions, ColorProvider,
    CompletionOptions, DefinitionProvider, DiagnosticProvider, DocumentFormattingOptions,
    DocumentHighlightOptions, DocumentLinkOptions, DocumentOnTypeFormattingOptions,
    DocumentRangeFormattingOptions, DocumentSymbolOptions, ExecuteCommandOptions,
    FoldingRangeProvider, GotoProvider, HoverOptions, InlayHintProvider, InlineValueProvider,
    LinkedEditingRangeProvider, MonikerProvider, NotebookDocumentSync, PositionEncodingKind,
    ReferencesProvider, RenameProvider, SelectionRangeProvider, SemanticTokensProvider,
    SignatureHelpOptions, TextDocumentSync, TypeHierarchyProvider, WorkspaceOptions,
    WorkspaceSymbolOptions,
};

/// Every provider is optional; an absent provider means the feature is not supported
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    /// Defaults to `utf-16` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_encoding: Option<PositionEncodingKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document_sync: Option<TextDocumentSync>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_document_sync: Option<NotebookDocumentSync>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_provider: Option<CompletionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_provider: Option<BooleanOr<HoverOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_help_provider: Option<SignatureHelpOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_provider: Option<GotoProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_provider: Option<DefinitionProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_definition_provider: Option<GotoProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_provider: Option<GotoProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references_provider: Option<ReferencesProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_highlight_provider: Option<BooleanOr<DocumentHighlightOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_symbol_provider: Option<BooleanOr<DocumentSymbolOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action_provider: Option<BooleanOr<CodeActionOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_lens_provider: Option<CodeLensOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_link_provider: Option<DocumentLinkOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_provider: Option<ColorProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_symbol_provider: Option<BooleanOr<WorkspaceSymbolOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_formatting_provider: Option<BooleanOr<DocumentFormattingOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_range_formatting_provider: Option<BooleanOr<DocumentRangeFormattingOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_on_type_formatting_provider: Option<DocumentOnTypeFormattingOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_provider: Option<RenameProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding_range_provider: Option<FoldingRangeProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_range_provider: Option<SelectionRangeProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_command_provider: Option<ExecuteCommandOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_hierarchy_provider: Option<CallHierarchyProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_editing_range_provider: Option<LinkedEditingRangeProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_tokens_provider: Option<SemanticTokensProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moniker_provider: Option<MonikerProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hierarchy_provider: Option<TypeHierarchyProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_value_provider: Option<InlineValueProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlay_hint_provider: Option<InlayHintProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_provider: Option<DiagnosticProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceOptions>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub experimental: Option<Value>,
}
