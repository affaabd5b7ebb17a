use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::field::present;
use crate::types::{
    Command, PartialResultParams, Range, TextDocumentIdentifier, TextDocumentRegistrationOptions,
    WorkDoneProgressOptions, WorkDoneProgressParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensParams {
    pub text_document: TextDocumentIdentifier,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

/// A command shown inline with source text; unresolved lenses have no command yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeLens {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLensRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub code_lens_options: CodeLensOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensWorkspaceClientCapabilities {
    /// The client supports `workspace/codeLens/refresh`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_support: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use serde_json::json;

    #[test]
    fn code_lens_keeps_null_data() {
        let lens: CodeLens = serde_json::from_value(json!({
            "range": { "start": { "line": 1, "character": 0 }, "end": { "line": 1, "character": 4 } },
            "data": null
        }))
        .unwrap();

        assert_eq!(lens.data, Some(Value::Null));
        assert_eq!(serde_json::to_value(&lens).unwrap()["data"], Value::Null);
    }

    #[test]
    fn resolved_code_lens_compares_whole() {
        let lens: CodeLens = serde_json::from_value(json!({
            "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 2 } },
            "command": { "title": "Run test", "command": "test.run" }
        }))
        .unwrap();

        assert_eq!(
            lens,
            CodeLens {
                range: Range::new(Position::new(0, 0), Position::new(0, 2)),
                command: Some(Command::new("Run test", "test.run")),
                data: None,
            }
        );
    }
}
