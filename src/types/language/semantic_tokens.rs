//! Semantic tokens: legends, full/range/delta requests and their options

use serde::{Deserialize, Serialize};

use crate::codec::lsp_union;
use crate::types::{
    EmptyObject, PartialResultParams, Range, SemanticTokenModifiers, SemanticTokenTypes,
    StaticRegistrationOptions, TextDocumentIdentifier, TextDocumentRegistrationOptions,
    TokenFormat, WorkDoneProgressOptions, WorkDoneProgressParams,
};

/// Indices into these lists are what the encoded token data refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensLegend {
    pub token_types: Vec<SemanticTokenTypes>,
    pub token_modifiers: Vec<SemanticTokenModifiers>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensParams {
    pub text_document: TextDocumentIdentifier,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensDeltaParams {
    pub text_document: TextDocumentIdentifier,
    pub previous_result_id: String,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensRangeParams {
    pub text_document: TextDocumentIdentifier,
    pub range: Range,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

/// Tokens encoded as groups of five integers relative to the previous token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensPartialResult {
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensEdit {
    pub start: u32,
    pub delete_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    pub edits: Vec<SemanticTokensEdit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensDeltaPartialResult {
    pub edits: Vec<SemanticTokensEdit>,
}

lsp_union! {
    /// Full tokens carry `data`, a delta carries `edits`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SemanticTokensDeltaResult {
        Tokens(SemanticTokens),
        Delta(SemanticTokensDelta),
    }
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SemanticTokensRangeOption {
        Bool(bool),
        Options(EmptyObject),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensFullDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<bool>,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SemanticTokensFullOption {
        Bool(bool),
        Options(SemanticTokensFullDelta),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    pub legend: SemanticTokensLegend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SemanticTokensRangeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<SemanticTokensFullOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub semantic_tokens_options: SemanticTokensOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

lsp_union! {
    /// Registration options come first so a `documentSelector` is not dropped
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SemanticTokensProvider {
        Registration(SemanticTokensRegistrationOptions),
        Options(SemanticTokensOptions),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSemanticTokensRequestFullDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<bool>,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ClientSemanticTokensRequestFull {
        Bool(bool),
        Options(ClientSemanticTokensRequestFullDelta),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSemanticTokensRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SemanticTokensRangeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<ClientSemanticTokensRequestFull>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    pub requests: ClientSemanticTokensRequestOptions,
    pub token_types: Vec<String>,
    pub token_modifiers: Vec<String>,
    pub formats: Vec<TokenFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlapping_token_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline_token_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_cancel_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub augments_syntax_tokens: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensWorkspaceClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_support: Option<bool>,
}
