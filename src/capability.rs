//! Features a server supports, from its static capabilities or from dynamic
//! `client/registerCapability` registrations

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::codec::{self, CodecError, EncodeError};
use crate::protocol::registration_options;
use crate::types::{DocumentSelector, Registration, ServerCapabilities};

#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("Unknown registration method: {0}")]
    UnknownMethod(String),

    #[error("Invalid registration options for {method}: {source}")]
    InvalidOptions {
        method: String,
        #[source]
        source: CodecError,
    },

    #[error("Failed to encode capabilities: {0}")]
    Encode(#[from] EncodeError),
}

/// One feature of the server, scoped to `document_selector` when present
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRegistration {
    pub id: Option<String>,
    pub method: String,
    pub document_selector: Option<DocumentSelector>,
    /// The normalized provider value or registration options
    pub options: Value,
}

impl FeatureRegistration {
    fn from_options(method: &str, options: Value) -> Self {
        let document_selector = options
            .get("documentSelector")
            .and_then(|selector| codec::decode::<Option<DocumentSelector>>(selector).ok())
            .flatten();
        let id = options.get("id").and_then(Value::as_str).map(str::to_string);

        Self {
            id,
            method: method.to_string(),
            document_selector,
            options,
        }
    }

    /// Decodes the options of a dynamic registration by its method
    ///
    /// An `id` inside the options wins over the registration's own id.
    pub fn from_registration(registration: &Registration) -> Result<Self, CapabilityError> {
        let method = registration.method.as_str();
        let normalize = registration_options(method)
            .ok_or_else(|| CapabilityError::UnknownMethod(method.to_string()))?;

        let Some(options) = &registration.register_options else {
            return Ok(Self {
                id: Some(registration.id.clone()),
                method: method.to_string(),
                document_selector: None,
                options: Value::Null,
            });
        };

        let normalized = normalize(options).map_err(|source| CapabilityError::InvalidOptions {
            method: method.to_string(),
            source,
        })?;

        let mut feature = Self::from_options(method, normalized);
        if feature.id.is_none() {
            feature.id = Some(registration.id.clone());
        }
        Ok(feature)
    }
}

fn push<T: Serialize>(
    features: &mut Vec<FeatureRegistration>,
    method: &str,
    provider: &Option<T>,
) -> Result<(), EncodeError> {
    let Some(provider) = provider else {
        return Ok(());
    };

    let options = codec::encode(provider)?;
    if options == Value::Bool(false) {
        debug!("Skipping disabled provider for {}", method);
        return Ok(());
    }

    features.push(FeatureRegistration::from_options(method, options));
    Ok(())
}

/// Lists the features enabled by static server capabilities
///
/// Providers that are absent or `false` are skipped.
pub fn feature_registrations(
    capabilities: &ServerCapabilities,
) -> Result<Vec<FeatureRegistration>, CapabilityError> {
    let caps = capabilities;
    let mut features = Vec::new();
    let out = &mut features;

    push(out, "textDocument/implementation", &caps.implementation_provider)?;
    push(out, "textDocument/typeDefinition", &caps.type_definition_provider)?;
    push(out, "textDocument/documentColor", &caps.color_provider)?;
    push(out, "textDocument/foldingRange", &caps.folding_range_provider)?;
    push(out, "textDocument/declaration", &caps.declaration_provider)?;
    push(out, "textDocument/selectionRange", &caps.selection_range_provider)?;
    push(out, "textDocument/prepareCallHierarchy", &caps.call_hierarchy_provider)?;
    push(out, "textDocument/semanticTokens", &caps.semantic_tokens_provider)?;
    push(out, "textDocument/linkedEditingRange", &caps.linked_editing_range_provider)?;

    let file_operations = caps
        .workspace
        .as_ref()
        .and_then(|workspace| workspace.file_operations.as_ref());
    if let Some(file_operations) = file_operations {
        push(out, "workspace/willCreateFiles", &file_operations.will_create)?;
        push(out, "workspace/willRenameFiles", &file_operations.will_rename)?;
        push(out, "workspace/willDeleteFiles", &file_operations.will_delete)?;
    }

    push(out, "textDocument/moniker", &caps.moniker_provider)?;
    push(out, "textDocument/prepareTypeHierarchy", &caps.type_hierarchy_provider)?;
    push(out, "textDocument/inlineValue", &caps.inline_value_provider)?;
    push(out, "textDocument/inlayHint", &caps.inlay_hint_provider)?;
    push(out, "textDocument/diagnostic", &caps.diagnostic_provider)?;
    push(out, "textDocument/completion", &caps.completion_provider)?;
    push(out, "textDocument/hover", &caps.hover_provider)?;
    push(out, "textDocument/signatureHelp", &caps.signature_help_provider)?;
    push(out, "textDocument/definition", &caps.definition_provider)?;
    push(out, "textDocument/references", &caps.references_provider)?;
    push(out, "textDocument/documentHighlight", &caps.document_highlight_provider)?;
    push(out, "textDocument/documentSymbol", &caps.document_symbol_provider)?;
    push(out, "textDocument/codeAction", &caps.code_action_provider)?;
    push(out, "workspace/symbol", &caps.workspace_symbol_provider)?;
    push(out, "textDocument/codeLens", &caps.code_lens_provider)?;
    push(out, "textDocument/documentLink", &caps.document_link_provider)?;
    push(out, "textDocument/formatting", &caps.document_formatting_provider)?;
    push(out, "textDocument/rangeFormatting", &caps.document_range_formatting_provider)?;
    push(out, "textDocument/onTypeFormatting", &caps.document_on_type_formatting_provider)?;
    push(out, "textDocument/rename", &caps.rename_provider)?;
    push(out, "workspace/executeCommand", &caps.execute_command_provider)?;

    if let Some(file_operations) = file_operations {
        push(out, "workspace/didCreateFiles", &file_operations.did_create)?;
        push(out, "workspace/didRenameFiles", &file_operations.did_rename)?;
        push(out, "workspace/didDeleteFiles", &file_operations.did_delete)?;
    }

    push(out, "notebookDocument/sync", &caps.notebook_document_sync)?;

    Ok(features)
}
