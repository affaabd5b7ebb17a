//! Basic structures shared by most messages

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::error::raise;
use crate::codec::{UnionDecoder, lsp_union};
use crate::codec::field::required_nullable;
use crate::types::{DocumentUri, MarkupKind, Uri};

/// Position in a text document expressed as zero-based line and character offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    /// Character offset on the line, in units of the negotiated position encoding
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A range in a text document; `end` is exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A location inside a resource, such as a line inside a text file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub uri: DocumentUri,
    pub range: Range,
}

impl Location {
    pub fn new(uri: impl Into<DocumentUri>, range: Range) -> Self {
        Self {
            uri: uri.into(),
            range,
        }
    }
}

/// A link between a source and a target location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_selection_range: Option<Range>,
    pub target_uri: DocumentUri,
    /// Full target range, e.g. the whole body of a function
    pub target_range: Range,
    /// The part of the target that should be revealed, e.g. the function name
    pub target_selection_range: Range,
}

/// Location inside a resource that is only known by its URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationUriOnly {
    pub uri: DocumentUri,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextDocumentIdentifier {
    pub uri: DocumentUri,
}

impl TextDocumentIdentifier {
    pub fn new(uri: impl Into<DocumentUri>) -> Self {
        Self { uri: uri.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedTextDocumentIdentifier {
    pub uri: DocumentUri,
    pub version: i32,
}

/// Text document identifier whose version may be unknown
///
/// `version` must be present on the wire; `null` means the version is
/// unknown (the file on disk was edited, not an open document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalVersionedTextDocumentIdentifier {
    pub uri: DocumentUri,
    #[serde(with = "required_nullable")]
    pub version: Option<i32>,
}

/// An item to transfer a text document from the client to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    pub uri: DocumentUri,
    pub language_id: String,
    pub version: i32,
    pub text: String,
}

/// Parameters of requests that address a position inside a text document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentPositionParams {
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
}

impl TextDocumentPositionParams {
    pub fn new(text_document: TextDocumentIdentifier, position: Position) -> Self {
        Self {
            text_document,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub range: Range,
    /// The string to insert; empty to delete the range
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

pub type ChangeAnnotationIdentifier = String;

/// A text edit with an additional change annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedTextEdit {
    pub range: Range,
    pub new_text: String,
    pub annotation_id: ChangeAnnotationIdentifier,
}

/// Reference to a command the client can execute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub title: String,
    /// Identifier of the actual command handler
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Value>>,
}

impl Command {
    pub fn new(title: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            command: command.into(),
            arguments: None,
        }
    }
}

/// Human readable content rendered by the client according to `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupContent {
    pub kind: MarkupKind,
    pub value: String,
}

lsp_union! {
    /// Documentation given either as plain text or as markup
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Documentation {
        String(String),
        MarkupContent(MarkupContent),
    }
}

lsp_union! {
    /// `integer | string`, used by progress tokens, request ids and diagnostic codes
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum IntegerOrString {
        Integer(i32),
        String(String),
    }
}

pub type ProgressToken = IntegerOrString;

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StringOrStrings {
        String(String),
        Strings(Vec<String>),
    }
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StringOrBool {
        String(String),
        Bool(bool),
    }
}

/// `boolean | T`, the shape of most simple server capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooleanOr<T> {
    Bool(bool),
    Options(T),
}

impl<T> BooleanOr<T> {
    /// Whether the capability is enabled at all
    pub fn is_enabled(&self) -> bool {
        !matches!(self, BooleanOr::Bool(false))
    }
}

impl<T> From<bool> for BooleanOr<T> {
    fn from(value: bool) -> Self {
        BooleanOr::Bool(value)
    }
}

impl<T: Serialize> Serialize for BooleanOr<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BooleanOr::Bool(value) => value.serialize(serializer),
            BooleanOr::Options(options) => options.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned + Serialize> Deserialize<'de> for BooleanOr<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        UnionDecoder::new("BooleanOr", &value)
            .variant("Bool", BooleanOr::Bool)
            .variant("Options", BooleanOr::Options)
            .finish()
            .map_err(raise)
    }
}

/// An options object without properties, encoded as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyObject {}

/// Parameter mixin for reporting work done progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

/// Parameter mixin for streaming partial results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialResultParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
}

/// Options mixin announcing work done progress support
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

/// Registration mixin carrying an id usable to unregister a static registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRegistrationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Registration mixin scoping a feature to a set of documents
///
/// `document_selector` must be present on the wire. `None` (JSON `null`)
/// means the selector provided on the client side is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentRegistrationOptions {
    #[serde(with = "required_nullable")]
    pub document_selector: Option<DocumentSelector>,
}

/// A filter matching text documents by language, scheme and glob pattern
pub type DocumentSelector = Vec<DocumentFilter>;

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DocumentFilter {
        TextDocument(TextDocumentFilter),
        NotebookCell(NotebookCellTextDocumentFilter),
    }
}

lsp_union! {
    /// A text document filter; at least one of its properties is set
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TextDocumentFilter {
        Language(TextDocumentFilterLanguage),
        Scheme(TextDocumentFilterScheme),
        Pattern(TextDocumentFilterPattern),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentFilterLanguage {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentFilterScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentFilterPattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    pub pattern: String,
}

lsp_union! {
    /// A notebook document filter; at least one of its properties is set
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotebookDocumentFilter {
        NotebookType(NotebookDocumentFilterNotebookType),
        Scheme(NotebookDocumentFilterScheme),
        Pattern(NotebookDocumentFilterPattern),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentFilterNotebookType {
    pub notebook_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentFilterScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_type: Option<String>,
    pub scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentFilterPattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    pub pattern: String,
}

lsp_union! {
    /// A notebook given by its type string or by a full filter
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotebookFilter {
        NotebookType(String),
        Filter(NotebookDocumentFilter),
    }
}

/// Matches the cells of a notebook document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookCellTextDocumentFilter {
    pub notebook: NotebookFilter,
    /// Language id of the cells; `*` matches every language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A glob pattern such as `**/*.{ts,js}`
pub type Pattern = String;

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum GlobPattern {
        Pattern(Pattern),
        Relative(RelativePattern),
    }
}

/// A glob pattern relative to a base URI or workspace folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativePattern {
    pub base_uri: WorkspaceFolderOrUri,
    pub pattern: Pattern,
}

lsp_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum WorkspaceFolderOrUri {
        WorkspaceFolder(WorkspaceFolder),
        Uri(Uri),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    pub uri: Uri,
    /// Name used to refer to the folder in the user interface
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn position_decodes_and_encodes_same_object() {
        let value = json!({ "line": 5, "character": 23 });

        let position: Position = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(position, Position::new(5, 23));
        assert_eq!(serde_json::to_value(position).unwrap(), value);
    }

    #[test]
    fn location_requires_range() {
        let value = json!({ "uri": "file:///a.ts" });

        let err = serde_json::from_value::<Location>(value).unwrap_err();

        assert_eq!(err.to_string(), "missing field `range`");
    }

    #[test]
    fn optional_versioned_identifier_requires_version_key() {
        assert!(
            serde_json::from_value::<OptionalVersionedTextDocumentIdentifier>(
                json!({ "uri": "file:///a" })
            )
            .is_err()
        );

        let identifier: OptionalVersionedTextDocumentIdentifier =
            serde_json::from_value(json!({ "uri": "file:///a", "version": null })).unwrap();
        assert_eq!(identifier.version, None);
    }

    #[test]
    fn boolean_or_prefers_bool() {
        let enabled: BooleanOr<WorkDoneProgressOptions> =
            serde_json::from_value(json!(false)).unwrap();
        assert!(!enabled.is_enabled());

        let options: BooleanOr<WorkDoneProgressOptions> =
            serde_json::from_value(json!({ "workDoneProgress": true })).unwrap();
        assert_eq!(
            options,
            BooleanOr::Options(WorkDoneProgressOptions {
                work_done_progress: Some(true)
            })
        );
    }

    #[test]
    fn text_document_filter_resolves_by_required_key() {
        let filter: TextDocumentFilter =
            serde_json::from_value(json!({ "scheme": "file", "pattern": "**/*.rs" })).unwrap();

        assert_eq!(
            filter,
            TextDocumentFilter::Scheme(TextDocumentFilterScheme {
                language: None,
                scheme: "file".to_string(),
                pattern: Some("**/*.rs".to_string()),
            })
        );
    }

    #[test]
    fn glob_pattern_accepts_relative_pattern() {
        let pattern: GlobPattern = serde_json::from_value(json!({
            "baseUri": "file:///project",
            "pattern": "*.toml"
        }))
        .unwrap();

        assert_eq!(
            pattern,
            GlobPattern::Relative(RelativePattern {
                base_uri: WorkspaceFolderOrUri::Uri("file:///project".to_string()),
                pattern: "*.toml".to_string(),
            })
        );
    }
}
