//! Goto declaration, definition, type definition, implementation and references

use serde::{Deserialize, Serialize};

use crate::codec::lsp_union;
use crate::types::{
    BooleanOr, Location, LocationLink, PartialResultParams, StaticRegistrationOptions,
    TextDocumentPositionParams, TextDocumentRegistrationOptions, WorkDoneProgressOptions,
    WorkDoneProgressParams,
};

lsp_union! {
    /// One or many locations of a symbol's definition
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Definition {
        Location(Location),
        Locations(Vec<Location>),
    }
}

/// Declaration locations share the shape of definitions
pub type Declaration = Definition;

pub type DefinitionLink = LocationLink;

pub type DeclarationLink = LocationLink;

lsp_union! {
    /// Result of the goto requests: plain locations or location links
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DefinitionResponse {
        Definition(Definition),
        Links(Vec<DefinitionLink>),
    }
}

pub type DeclarationResponse = DefinitionResponse;

/// Parameters shared by every goto request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoParams {
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

pub type DeclarationParams = GotoParams;
pub type DefinitionParams = GotoParams;
pub type TypeDefinitionParams = GotoParams;
pub type ImplementationParams = GotoParams;

/// Options shared by every goto provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

pub type DeclarationOptions = GotoOptions;
pub type DefinitionOptions = GotoOptions;
pub type TypeDefinitionOptions = GotoOptions;
pub type ImplementationOptions = GotoOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub definition_options: DefinitionOptions,
}

/// Registration options of the goto providers that accept a static registration id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoRegistrationOptions {
    #[serde(flatten)]
    pub options: GotoOptions,
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

pub type DeclarationRegistrationOptions = GotoRegistrationOptions;
pub type TypeDefinitionRegistrationOptions = GotoRegistrationOptions;
pub type ImplementationRegistrationOptions = GotoRegistrationOptions;

lsp_union! {
    /// `boolean | Options | RegistrationOptions` for declaration, type definition and implementation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum GotoProvider {
        Bool(bool),
        Registration(GotoRegistrationOptions),
        Options(GotoOptions),
    }
}

impl GotoProvider {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, GotoProvider::Bool(false))
    }
}

/// Client capabilities shared by every goto request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotoClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client supports `LocationLink` results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_support: Option<bool>,
}

pub type DeclarationClientCapabilities = GotoClientCapabilities;
pub type DefinitionClientCapabilities = GotoClientCapabilities;
pub type TypeDefinitionClientCapabilities = GotoClientCapabilities;
pub type ImplementationClientCapabilities = GotoClientCapabilities;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceParams {
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    pub context: ReferenceContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceContext {
    pub include_declaration: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub reference_options: ReferenceOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

pub type DefinitionProvider = BooleanOr<DefinitionOptions>;
pub type ReferencesProvider = BooleanOr<ReferenceOptions>;
