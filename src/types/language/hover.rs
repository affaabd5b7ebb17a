use serde::{Deserialize, Serialize};

use crate::codec::lsp_union;
use crate::types::{
    MarkupContent, MarkupKind, Range, TextDocumentPositionParams, TextDocumentRegistrationOptions,
    WorkDoneProgressOptions, WorkDoneProgressParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverParams {
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    pub contents: HoverContents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HoverContents {
        Markup(MarkupContent),
        Scalar(MarkedString),
        Array(Vec<MarkedString>),
    }
}

lsp_union! {
    /// Deprecated markdown or code block; use `MarkupContent` instead
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MarkedString {
        String(String),
        LanguageString(MarkedStringWithLanguage),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedStringWithLanguage {
    pub language: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub hover_options: HoverOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Preferred content formats, most preferred first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<Vec<MarkupKind>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hover_contents_resolve_each_shape() {
        let markup: HoverContents =
            serde_json::from_value(json!({ "kind": "markdown", "value": "# x" })).unwrap();
        assert!(matches!(markup, HoverContents::Markup(_)));

        let code: HoverContents =
            serde_json::from_value(json!({ "language": "rust", "value": "fn x()" })).unwrap();
        assert_eq!(
            code,
            HoverContents::Scalar(MarkedString::LanguageString(MarkedStringWithLanguage {
                language: "rust".to_string(),
                value: "fn x()".to_string(),
            }))
        );

        let list: HoverContents = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert!(matches!(list, HoverContents::Array(ref items) if items.len() == 2));
    }

    #[test]
    fn hover_requires_contents() {
        assert!(serde_json::from_value::<Hover>(json!({})).is_err());
    }
}
