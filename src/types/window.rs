//! Window features: messages, documents shown by the client and progress

use serde::{Deserialize, Serialize};

use crate::codec::{lsp_literal, lsp_union};
use crate::types::{MessageType, ProgressToken, Range, Uri};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageParams {
    #[serde(rename = "type")]
    pub typ: MessageType,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageRequestParams {
    #[serde(rename = "type")]
    pub typ: MessageType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<MessageActionItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageActionItem {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessageParams {
    #[serde(rename = "type")]
    pub typ: MessageType,
    pub message: String,
}

/// Asks the client to display a resource, in the editor or externally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDocumentParams {
    pub uri: Uri,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_focus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDocumentResult {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressCreateParams {
    pub token: ProgressToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressCancelParams {
    pub token: ProgressToken,
}

lsp_literal! {
    pub struct BeginKind = "begin";
}

lsp_literal! {
    pub struct ReportKind = "report";
}

lsp_literal! {
    pub struct EndKind = "end";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressBegin {
    pub kind: BeginKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 0 to 100; absent for infinite progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressReport {
    pub kind: ReportKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressEnd {
    pub kind: EndKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

lsp_union! {
    /// The `value` of a `$/progress` notification for work done progress
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum WorkDoneProgress {
        Begin(WorkDoneProgressBegin),
        Report(WorkDoneProgressReport),
        End(WorkDoneProgressEnd),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientShowMessageActionItemOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties_support: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowMessageRequestClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_action_item: Option<ClientShowMessageActionItemOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDocumentClientCapabilities {
    pub support: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_message: Option<ShowMessageRequestClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_document: Option<ShowDocumentClientCapabilities>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn show_message_params_use_type_key() {
        let params = ShowMessageParams {
            typ: MessageType::Warning,
            message: "careful".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "type": 2, "message": "careful" })
        );
    }

    #[test]
    fn work_done_progress_resolves_by_kind() {
        let report: WorkDoneProgress =
            serde_json::from_value(json!({ "kind": "report", "percentage": 50 })).unwrap();
        assert!(matches!(report, WorkDoneProgress::Report(_)));

        let end: WorkDoneProgress = serde_json::from_value(json!({ "kind": "end" })).unwrap();
        assert!(matches!(end, WorkDoneProgress::End(_)));
    }

    #[test]
    fn work_done_progress_rejects_unknown_kind() {
        let err =
            serde_json::from_value::<WorkDoneProgress>(json!({ "kind": "pause" })).unwrap_err();
        assert!(err.to_string().starts_with("No variant of WorkDoneProgress matched object"));
    }
}
