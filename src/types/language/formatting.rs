//! Whole document, range, and on-type formatting

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::codec::lsp_union;
use crate::types::{
    Position, Range, TextDocumentIdentifier, TextDocumentRegistrationOptions,
    WorkDoneProgressOptions, WorkDoneProgressParams,
};

lsp_union! {
    /// Value of an editor specific formatting property
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum FormattingProperty {
        Bool(bool),
        Integer(i32),
        String(String),
    }
}

/// Formatting preferences; unknown keys are kept as extra properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingOptions {
    pub tab_size: u32,
    pub insert_spaces: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_trailing_whitespace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_final_newline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_final_newlines: Option<bool>,
    #[serde(flatten)]
    pub properties: IndexMap<String, FormattingProperty>,
}

impl FormattingOptions {
    pub fn new(tab_size: u32, insert_spaces: bool) -> Self {
        Self {
            tab_size,
            insert_spaces,
            trim_trailing_whitespace: None,
            insert_final_newline: None,
            trim_final_newlines: None,
            properties: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFormattingParams {
    pub text_document: TextDocumentIdentifier,
    pub options: FormattingOptions,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRangeFormattingParams {
    pub text_document: TextDocumentIdentifier,
    pub range: Range,
    pub options: FormattingOptions,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOnTypeFormattingParams {
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
    /// The character that triggered formatting
    pub ch: String,
    pub options: FormattingOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFormattingOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFormattingRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub document_formatting_options: DocumentFormattingOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRangeFormattingOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRangeFormattingRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub document_range_formatting_options: DocumentRangeFormattingOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOnTypeFormattingOptions {
    pub first_trigger_character: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_trigger_character: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOnTypeFormattingRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub document_on_type_formatting_options: DocumentOnTypeFormattingOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFormattingClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRangeFormattingClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOnTypeFormattingClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formatting_options_collect_extra_properties() {
        let options: FormattingOptions = serde_json::from_value(json!({
            "tabSize": 4,
            "insertSpaces": true,
            "trimTrailingWhitespace": true,
            "editor.wrap": "off",
            "editor.rulers": 80
        }))
        .unwrap();

        assert_eq!(options.tab_size, 4);
        assert_eq!(options.trim_trailing_whitespace, Some(true));
        assert_eq!(
            options.properties.get("editor.wrap"),
            Some(&FormattingProperty::String("off".to_string()))
        );
        assert_eq!(
            options.properties.get("editor.rulers"),
            Some(&FormattingProperty::Integer(80))
        );
        assert!(!options.properties.contains_key("tabSize"));
    }

    #[test]
    fn formatting_options_encode_properties_inline() {
        let mut options = FormattingOptions::new(2, false);
        options
            .properties
            .insert("custom".to_string(), FormattingProperty::Bool(true));

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "tabSize": 2, "insertSpaces": false, "custom": true })
        );
    }
}
