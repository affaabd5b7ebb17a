//! Initialization, shutdown, registration and other base protocol messages

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::field::{optional_nullable, present, required_nullable};
use crate::types::{
    ClientCapabilities, DocumentUri, IntegerOrString, ProgressToken, ServerCapabilities,
    TraceValues, WorkDoneProgressParams, WorkspaceFolder,
};

/// Information about the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Information about the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Parameters of the `initialize` request
///
/// `processId` and `rootUri` must always be sent, possibly as `null`.
/// `rootPath` and `workspaceFolders` may additionally be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    #[serde(with = "required_nullable")]
    pub process_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_info: Option<ClientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_nullable"
    )]
    pub root_path: Option<Option<String>>,
    #[serde(with = "required_nullable")]
    pub root_uri: Option<DocumentUri>,
    pub capabilities: ClientCapabilities,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub initialization_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceValues>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_nullable"
    )]
    pub workspace_folders: Option<Option<Vec<WorkspaceFolder>>>,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

impl InitializeParams {
    /// Parameters with no process, no root and the given capabilities
    pub fn new(capabilities: ClientCapabilities) -> Self {
        Self {
            process_id: None,
            client_info: None,
            locale: None,
            root_path: None,
            root_uri: None,
            capabilities,
            initialization_options: None,
            trace: None,
            workspace_folders: None,
            work_done_progress_params: WorkDoneProgressParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub capabilities: ServerCapabilities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,
}

/// Error data returned with a failed `initialize` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeError {
    /// Whether the client retries after showing the error message
    pub retry: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializedParams {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTraceParams {
    pub value: TraceValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogTraceParams {
    pub message: String,
    /// Only sent when trace is `verbose`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<String>,
}

/// General parameters to register for a capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Id used to unregister the request again
    pub id: String,
    pub method: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub register_options: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationParams {
    pub registrations: Vec<Registration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unregistration {
    pub id: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregistrationParams {
    /// Misspelled on the wire; kept for compatibility
    pub unregisterations: Vec<Unregistration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelParams {
    pub id: IntegerOrString,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressParams {
    pub token: ProgressToken,
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn initialize_params_requires_process_id_key() {
        let err = serde_json::from_value::<InitializeParams>(json!({
            "rootUri": null,
            "capabilities": {}
        }))
        .unwrap_err();

        assert_eq!(err.to_string(), "missing field `processId`");
    }

    #[test]
    fn initialize_params_accepts_null_process_id_and_root_uri() {
        let value = json!({
            "processId": null,
            "rootUri": null,
            "capabilities": {}
        });

        let params: InitializeParams = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(params, InitializeParams::new(ClientCapabilities::default()));
        assert_eq!(serde_json::to_value(&params).unwrap(), value);
    }

    #[test]
    fn initialize_params_keeps_null_workspace_folders_apart_from_absent() {
        let params: InitializeParams = serde_json::from_value(json!({
            "processId": 42,
            "rootUri": "file:///project",
            "rootPath": null,
            "capabilities": {},
            "workspaceFolders": null,
            "initializationOptions": null
        }))
        .unwrap();

        assert_eq!(params.process_id, Some(42));
        assert_eq!(params.root_path, Some(None));
        assert_eq!(params.workspace_folders, Some(None));
        assert_eq!(params.initialization_options, Some(Value::Null));
    }

    #[test]
    fn unregistration_params_use_wire_spelling() {
        let params: UnregistrationParams = serde_json::from_value(json!({
            "unregisterations": [{ "id": "1", "method": "textDocument/hover" }]
        }))
        .unwrap();

        assert_eq!(params.unregisterations.len(), 1);
    }
}
