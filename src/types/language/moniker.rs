use serde::{Deserialize, Serialize};

use crate::codec::lsp_union;
use crate::types::{
    MonikerKind, PartialResultParams, TextDocumentPositionParams, TextDocumentRegistrationOptions,
    UniquenessLevel, WorkDoneProgressOptions, WorkDoneProgressParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonikerParams {
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

/// Moniker definition matching LSIF 0.5
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moniker {
    /// The scheme of the moniker, e.g. `tsc` or `.Net`
    pub scheme: String,
    pub identifier: String,
    pub unique: UniquenessLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MonikerKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonikerOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonikerRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub moniker_options: MonikerOptions,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MonikerProvider {
        Bool(bool),
        Registration(MonikerRegistrationOptions),
        Options(MonikerOptions),
    }
}

impl MonikerProvider {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, MonikerProvider::Bool(false))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonikerClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn moniker_rejects_unknown_uniqueness() {
        let err = serde_json::from_value::<Moniker>(json!({
            "scheme": "tsc",
            "identifier": "lib:foo",
            "unique": "galaxy"
        }))
        .unwrap_err();

        assert!(err.to_string().contains("\"galaxy\" is not a value of UniquenessLevel"));
    }
}
