use serde::{Deserialize, Serialize};

use crate::codec::lsp_union;
use crate::types::{
    Range, StaticRegistrationOptions, TextDocumentIdentifier, TextDocumentRegistrationOptions,
    WorkDoneProgressOptions, WorkDoneProgressParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueContext {
    /// The stack frame where execution has stopped
    pub frame_id: i32,
    pub stopped_location: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueParams {
    pub text_document: TextDocumentIdentifier,
    pub range: Range,
    pub context: InlineValueContext,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineValueText {
    pub range: Range,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueVariableLookup {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    pub case_sensitive_lookup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineValueEvaluatableExpression {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

lsp_union! {
    /// `Text` and `VariableLookup` need fields `EvaluatableExpression` lacks, so they are tried first
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InlineValue {
        Text(InlineValueText),
        VariableLookup(InlineValueVariableLookup),
        EvaluatableExpression(InlineValueEvaluatableExpression),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineValueOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineValueRegistrationOptions {
    #[serde(flatten)]
    pub inline_value_options: InlineValueOptions,
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InlineValueProvider {
        Bool(bool),
        Registration(InlineValueRegistrationOptions),
        Options(InlineValueOptions),
    }
}

impl InlineValueProvider {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, InlineValueProvider::Bool(false))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueWorkspaceClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_support: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn range_json() -> Value {
        json!({ "start": { "line": 7, "character": 2 }, "end": { "line": 7, "character": 9 } })
    }

    #[rstest]
    #[case(json!({ "range": range_json(), "text": "x = 3" }), "Text")]
    #[case(json!({ "range": range_json(), "variableName": "x", "caseSensitiveLookup": true }), "VariableLookup")]
    #[case(json!({ "range": range_json(), "expression": "a + b" }), "EvaluatableExpression")]
    #[case(json!({ "range": range_json() }), "EvaluatableExpression")]
    fn inline_value_variants(#[case] input: Value, #[case] expected: &str) {
        let value: InlineValue = serde_json::from_value(input).unwrap();
        let actual = match value {
            InlineValue::Text(_) => "Text",
            InlineValue::VariableLookup(_) => "VariableLookup",
            InlineValue::EvaluatableExpression(_) => "EvaluatableExpression",
        };
        assert_eq!(actual, expected);
    }
}
