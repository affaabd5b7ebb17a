//! Inlay hints and their label parts

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::field::present;
use crate::codec::lsp_union;
use crate::types::{
    Command, InlayHintKind, Location, MarkupContent, Position, Range, StaticRegistrationOptions,
    TextDocumentIdentifier, TextDocumentRegistrationOptions, TextEdit, WorkDoneProgressOptions,
    WorkDoneProgressParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintParams {
    pub text_document: TextDocumentIdentifier,
    /// The visible document range for which hints are computed
    pub range: Range,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InlayHintTooltip {
        String(String),
        Markup(MarkupContent),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlayHintLabelPart {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<InlayHintTooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum InlayHintLabel {
        String(String),
        Parts(Vec<InlayHintLabelPart>),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHint {
    pub position: Position,
    pub label: InlayHintLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<InlayHintKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_edits: Option<Vec<TextEdit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<InlayHintTooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlayHintRegistrationOptions {
    #[serde(flatten)]
    pub inlay_hint_options: InlayHintOptions,
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InlayHintProvider {
        Bool(bool),
        Registration(InlayHintRegistrationOptions),
        Options(InlayHintOptions),
    }
}

impl InlayHintProvider {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, InlayHintProvider::Bool(false))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInlayHintResolveOptions {
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_support: Option<ClientInlayHintResolveOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintWorkspaceClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_support: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inlay_hint_label_parts() {
        let hint: InlayHint = serde_json::from_value(json!({
            "position": { "line": 4, "character": 12 },
            "label": [
                { "value": ": " },
                { "value": "Vec<u8>", "tooltip": { "kind": "markdown", "value": "`Vec<u8>`" } }
            ],
            "kind": 1,
            "paddingLeft": true
        }))
        .unwrap();

        assert_eq!(hint.kind, Some(InlayHintKind::Type));
        let InlayHintLabel::Parts(parts) = &hint.label else {
            panic!("expected label parts");
        };
        assert_eq!(parts.len(), 2);
        assert!(matches!(parts[1].tooltip, Some(InlayHintTooltip::Markup(_))));
    }

    #[test]
    fn inlay_hint_plain_label() {
        let hint: InlayHint = serde_json::from_value(json!({
            "position": { "line": 0, "character": 3 },
            "label": "count:"
        }))
        .unwrap();

        assert_eq!(hint.label, InlayHintLabel::String("count:".to_string()));
    }

    #[test]
    fn inlay_hint_with_command_part_compares_whole() {
        let value = json!({
            "position": { "line": 2, "character": 9 },
            "label": [{
                "value": "impl Display",
                "command": { "title": "Go to impl", "command": "editor.goto", "arguments": [1] }
            }]
        });
        let hint: InlayHint = serde_json::from_value(value.clone()).unwrap();

        let expected = InlayHint {
            position: Position::new(2, 9),
            label: InlayHintLabel::Parts(vec![InlayHintLabelPart {
                value: "impl Display".to_string(),
                tooltip: None,
                location: None,
                command: Some(Command {
                    title: "Go to impl".to_string(),
                    command: "editor.goto".to_string(),
                    arguments: Some(vec![json!(1)]),
                }),
            }]),
            kind: None,
            text_edits: None,
            tooltip: None,
            padding_left: None,
            padding_right: None,
            data: None,
        };
        assert_eq!(hint, expected);
        assert_eq!(serde_json::to_value(&hint).unwrap(), value);
    }
}
