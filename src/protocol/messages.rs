//! Marker types for every LSP 3.17 request and notification

use serde_json::Value;

use crate::codec::round_trip;
use crate::protocol::registry::{MessageInfo, Normalizer};
use crate::protocol::{MessageDirection, MessageKind, Notification, Request};
use crate::types::*;

macro_rules! registration_type {
    () => { () };
    ($options:ty) => { $options };
}

macro_rules! registration_normalizer {
    () => { None };
    ($options:ty) => { Some(round_trip::<$options> as Normalizer) };
}

macro_rules! requests {
    ($(
        $(#[$meta:meta])*
        $name:ident = $method:literal, $direction:ident, $params:ty => $result:ty $(, $options:ty)?;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $name {}

            impl Request for $name {
                const METHOD: &'static str = $method;
                const DIRECTION: MessageDirection = MessageDirection::$direction;

                type Params = $params;
                type Result = $result;
                type RegistrationOptions = registration_type!($($options)?);
            }
        )*

        pub(crate) const REQUESTS: &[MessageInfo] = &[
            $(
                MessageInfo {
                    method: $method,
                    kind: MessageKind::Request,
                    direction: MessageDirection::$direction,
                    params: round_trip::<$params>,
                    result: Some(round_trip::<$result>),
                    registration_options: registration_normalizer!($($options)?),
                },
            )*
        ];
    };
}

macro_rules! notifications {
    ($(
        $(#[$meta:meta])*
        $name:ident = $method:literal, $direction:ident, $params:ty $(, $options:ty)?;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $name {}

            impl Notification for $name {
                const METHOD: &'static str = $method;
                const DIRECTION: MessageDirection = MessageDirection::$direction;

                type Params = $params;
                type RegistrationOptions = registration_type!($($options)?);
            }
        )*

        pub(crate) const NOTIFICATIONS: &[MessageInfo] = &[
            $(
                MessageInfo {
                    method: $method,
                    kind: MessageKind::Notification,
                    direction: MessageDirection::$direction,
                    params: round_trip::<$params>,
                    result: None,
                    registration_options: registration_normalizer!($($options)?),
                },
            )*
        ];
    };
}

requests! {
    Initialize = "initialize", ClientToServer, InitializeParams => InitializeResult;
    Shutdown = "shutdown", ClientToServer, () => ();
    RegisterCapability = "client/registerCapability", ServerToClient, RegistrationParams => ();
    UnregisterCapability = "client/unregisterCapability", ServerToClient, UnregistrationParams => ();

    ShowMessageRequest = "window/showMessageRequest", ServerToClient,
        ShowMessageRequestParams => Option<MessageActionItem>;
    ShowDocument = "window/showDocument", ServerToClient, ShowDocumentParams => ShowDocumentResult;
    WorkDoneProgressCreate = "window/workDoneProgress/create", ServerToClient,
        WorkDoneProgressCreateParams => ();

    WorkspaceFoldersRequest = "workspace/workspaceFolders", ServerToClient,
        () => Option<Vec<WorkspaceFolder>>;
    WorkspaceConfiguration = "workspace/configuration", ServerToClient, ConfigurationParams => Vec<Value>;
    ApplyWorkspaceEdit = "workspace/applyEdit", ServerToClient,
        ApplyWorkspaceEditParams => ApplyWorkspaceEditResult;
    WorkspaceSymbolRequest = "workspace/symbol", ClientToServer,
        WorkspaceSymbolParams => Option<WorkspaceSymbolResponse>, WorkspaceSymbolRegistrationOptions;
    WorkspaceSymbolResolve = "workspaceSymbol/resolve", ClientToServer, WorkspaceSymbol => WorkspaceSymbol;
    ExecuteCommand = "workspace/executeCommand", ClientToServer,
        ExecuteCommandParams => Option<Value>, ExecuteCommandRegistrationOptions;
    WillCreateFiles = "workspace/willCreateFiles", ClientToServer,
        CreateFilesParams => Option<WorkspaceEdit>, FileOperationRegistrationOptions;
    WillRenameFiles = "workspace/willRenameFiles", ClientToServer,
        RenameFilesParams => Option<WorkspaceEdit>, FileOperationRegistrationOptions;
    WillDeleteFiles = "workspace/willDeleteFiles", ClientToServer,
        DeleteFilesParams => Option<WorkspaceEdit>, FileOperationRegistrationOptions;
    CodeLensRefresh = "workspace/codeLens/refresh", ServerToClient, () => ();
    SemanticTokensRefresh = "workspace/semanticTokens/refresh", ServerToClient, () => ();
    InlineValueRefresh = "workspace/inlineValue/refresh", ServerToClient, () => ();
    InlayHintRefresh = "workspace/inlayHint/refresh", ServerToClient, () => ();
    WorkspaceDiagnosticRefresh = "workspace/diagnostic/refresh", ServerToClient, () => ();
    WorkspaceDiagnosticRequest = "workspace/diagnostic", ClientToServer,
        WorkspaceDiagnosticParams => WorkspaceDiagnosticReport;

    WillSaveWaitUntil = "textDocument/willSaveWaitUntil", ClientToServer,
        WillSaveTextDocumentParams => Option<Vec<TextEdit>>, TextDocumentRegistrationOptions;
    CompletionRequest = "textDocument/completion", ClientToServer,
        CompletionParams => Option<CompletionResponse>, CompletionRegistrationOptions;
    ResolveCompletionItem = "completionItem/resolve", ClientToServer, CompletionItem => CompletionItem;
    HoverRequest = "textDocument/hover", ClientToServer,
        HoverParams => Option<Hover>, HoverRegistrationOptions;
    SignatureHelpRequest = "textDocument/signatureHelp", ClientToServer,
        SignatureHelpParams => Option<SignatureHelp>, SignatureHelpRegistrationOptions;
    GotoDeclaration = "textDocument/declaration", ClientToServer,
        DeclarationParams => Option<DeclarationResponse>, DeclarationRegistrationOptions;
    GotoDefinition = "textDocument/definition", ClientToServer,
        DefinitionParams => Option<DefinitionResponse>, DefinitionRegistrationOptions;
    GotoTypeDefinition = "textDocument/typeDefinition", ClientToServer,
        TypeDefinitionParams => Option<DefinitionResponse>, TypeDefinitionRegistrationOptions;
    GotoImplementation = "textDocument/implementation", ClientToServer,
        ImplementationParams => Option<DefinitionResponse>, ImplementationRegistrationOptions;
    References = "textDocument/references", ClientToServer,
        ReferenceParams => Option<Vec<Location>>, ReferenceRegistrationOptions;
    DocumentHighlightRequest = "textDocument/documentHighlight", ClientToServer,
        DocumentHighlightParams => Option<Vec<DocumentHighlight>>, DocumentHighlightRegistrationOptions;
    DocumentSymbolRequest = "textDocument/documentSymbol", ClientToServer,
        DocumentSymbolParams => Option<DocumentSymbolResponse>, DocumentSymbolRegistrationOptions;
    CodeActionRequest = "textDocument/codeAction", ClientToServer,
        CodeActionParams => Option<Vec<CodeActionOrCommand>>, CodeActionRegistrationOptions;
    CodeActionResolve = "codeAction/resolve", ClientToServer, CodeAction => CodeAction;
    CodeLensRequest = "textDocument/codeLens", ClientToServer,
        CodeLensParams => Option<Vec<CodeLens>>, CodeLensRegistrationOptions;
    CodeLensResolve = "codeLens/resolve", ClientToServer, CodeLens => CodeLens;
    DocumentLinkRequest = "textDocument/documentLink", ClientToServer,
        DocumentLinkParams => Option<Vec<DocumentLink>>, DocumentLinkRegistrationOptions;
    DocumentLinkResolve = "documentLink/resolve", ClientToServer, DocumentLink => DocumentLink;
    DocumentColorRequest = "textDocument/documentColor", ClientToServer,
        DocumentColorParams => Vec<ColorInformation>, DocumentColorRegistrationOptions;
    ColorPresentationRequest = "textDocument/colorPresentation", ClientToServer,
        ColorPresentationParams => Vec<ColorPresentation>, ColorPresentationRegistrationOptions;
    Formatting = "textDocument/formatting", ClientToServer,
        DocumentFormattingParams => Option<Vec<TextEdit>>, DocumentFormattingRegistrationOptions;
    RangeFormatting = "textDocument/rangeFormatting", ClientToServer,
        DocumentRangeFormattingParams => Option<Vec<TextEdit>>, DocumentRangeFormattingRegistrationOptions;
    OnTypeFormatting = "textDocument/onTypeFormatting", ClientToServer,
        DocumentOnTypeFormattingParams => Option<Vec<TextEdit>>, DocumentOnTypeFormattingRegistrationOptions;
    Rename = "textDocument/rename", ClientToServer,
        RenameParams => Option<WorkspaceEdit>, RenameRegistrationOptions;
    PrepareRename = "textDocument/prepareRename", ClientToServer,
        PrepareRenameParams => Option<PrepareRenameResult>;
    FoldingRangeRequest = "textDocument/foldingRange", ClientToServer,
        FoldingRangeParams => Option<Vec<FoldingRange>>, FoldingRangeRegistrationOptions;
    SelectionRangeRequest = "textDocument/selectionRange", ClientToServer,
        SelectionRangeParams => Option<Vec<SelectionRange>>, SelectionRangeRegistrationOptions;
    CallHierarchyPrepare = "textDocument/prepareCallHierarchy", ClientToServer,
        CallHierarchyPrepareParams => Option<Vec<CallHierarchyItem>>, CallHierarchyRegistrationOptions;
    CallHierarchyIncomingCalls = "callHierarchy/incomingCalls", ClientToServer,
        CallHierarchyIncomingCallsParams => Option<Vec<CallHierarchyIncomingCall>>;
    CallHierarchyOutgoingCalls = "callHierarchy/outgoingCalls", ClientToServer,
        CallHierarchyOutgoingCallsParams => Option<Vec<CallHierarchyOutgoingCall>>;
    SemanticTokensFullRequest = "textDocument/semanticTokens/full", ClientToServer,
        SemanticTokensParams => Option<SemanticTokens>, SemanticTokensRegistrationOptions;
    SemanticTokensFullDeltaRequest = "textDocument/semanticTokens/full/delta", ClientToServer,
        SemanticTokensDeltaParams => Option<SemanticTokensDeltaResult>, SemanticTokensRegistrationOptions;
    SemanticTokensRangeRequest = "textDocument/semanticTokens/range", ClientToServer,
        SemanticTokensRangeParams => Option<SemanticTokens>, SemanticTokensRegistrationOptions;
    LinkedEditingRange = "textDocument/linkedEditingRange", ClientToServer,
        LinkedEditingRangeParams => Option<LinkedEditingRanges>, LinkedEditingRangeRegistrationOptions;
    MonikerRequest = "textDocument/moniker", ClientToServer,
        MonikerParams => Option<Vec<Moniker>>, MonikerRegistrationOptions;
    TypeHierarchyPrepare = "textDocument/prepareTypeHierarchy", ClientToServer,
        TypeHierarchyPrepareParams => Option<Vec<TypeHierarchyItem>>, TypeHierarchyRegistrationOptions;
    TypeHierarchySupertypes = "typeHierarchy/supertypes", ClientToServer,
        TypeHierarchySupertypesParams => Option<Vec<TypeHierarchyItem>>;
    TypeHierarchySubtypes = "typeHierarchy/subtypes", ClientToServer,
        TypeHierarchySubtypesParams => Option<Vec<TypeHierarchyItem>>;
    InlineValueRequest = "textDocument/inlineValue", ClientToServer,
        InlineValueParams => Option<Vec<InlineValue>>, InlineValueRegistrationOptions;
    InlayHintRequest = "textDocument/inlayHint", ClientToServer,
        InlayHintParams => Option<Vec<InlayHint>>, InlayHintRegistrationOptions;
    InlayHintResolve = "inlayHint/resolve", ClientToServer, InlayHint => InlayHint;
    DocumentDiagnosticRequest = "textDocument/diagnostic", ClientToServer,
        DocumentDiagnosticParams => DocumentDiagnosticReport, DiagnosticRegistrationOptions;
}

notifications! {
    Initialized = "initialized", ClientToServer, InitializedParams;
    Exit = "exit", ClientToServer, ();
    SetTrace = "$/setTrace", ClientToServer, SetTraceParams;
    LogTrace = "$/logTrace", ServerToClient, LogTraceParams;
    Cancel = "$/cancelRequest", Both, CancelParams;
    Progress = "$/progress", Both, ProgressParams;

    ShowMessage = "window/showMessage", ServerToClient, ShowMessageParams;
    LogMessage = "window/logMessage", ServerToClient, LogMessageParams;
    WorkDoneProgressCancel = "window/workDoneProgress/cancel", ClientToServer,
        WorkDoneProgressCancelParams;
    TelemetryEvent = "telemetry/event", ServerToClient, Value;

    DidChangeWorkspaceFolders = "workspace/didChangeWorkspaceFolders", ClientToServer,
        DidChangeWorkspaceFoldersParams;
    DidChangeConfiguration = "workspace/didChangeConfiguration", ClientToServer,
        DidChangeConfigurationParams, DidChangeConfigurationRegistrationOptions;
    DidChangeWatchedFiles = "workspace/didChangeWatchedFiles", ClientToServer,
        DidChangeWatchedFilesParams, DidChangeWatchedFilesRegistrationOptions;
    DidCreateFiles = "workspace/didCreateFiles", ClientToServer,
        CreateFilesParams, FileOperationRegistrationOptions;
    DidRenameFiles = "workspace/didRenameFiles", ClientToServer,
        RenameFilesParams, FileOperationRegistrationOptions;
    DidDeleteFiles = "workspace/didDeleteFiles", ClientToServer,
        DeleteFilesParams, FileOperationRegistrationOptions;

    DidOpenTextDocument = "textDocument/didOpen", ClientToServer,
        DidOpenTextDocumentParams, TextDocumentRegistrationOptions;
    DidChangeTextDocument = "textDocument/didChange", ClientToServer,
        DidChangeTextDocumentParams, TextDocumentChangeRegistrationOptions;
    WillSaveTextDocument = "textDocument/willSave", ClientToServer,
        WillSaveTextDocumentParams, TextDocumentRegistrationOptions;
    DidSaveTextDocument = "textDocument/didSave", ClientToServer,
        DidSaveTextDocumentParams, TextDocumentSaveRegistrationOptions;
    DidCloseTextDocument = "textDocument/didClose", ClientToServer,
        DidCloseTextDocumentParams, TextDocumentRegistrationOptions;
    PublishDiagnostics = "textDocument/publishDiagnostics", ServerToClient, PublishDiagnosticsParams;

    DidOpenNotebookDocument = "notebookDocument/didOpen", ClientToServer,
        DidOpenNotebookDocumentParams, NotebookDocumentSyncRegistrationOptions;
    DidChangeNotebookDocument = "notebookDocument/didChange", ClientToServer,
        DidChangeNotebookDocumentParams, NotebookDocumentSyncRegistrationOptions;
    DidSaveNotebookDocument = "notebookDocument/didSave", ClientToServer,
        DidSaveNotebookDocumentParams, NotebookDocumentSyncRegistrationOptions;
    DidCloseNotebookDocument = "notebookDocument/didClose", ClientToServer,
        DidCloseNotebookDocumentParams, NotebookDocumentSyncRegistrationOptions;
}

/// Registration methods that differ from every message method
pub(crate) const REGISTRATION_ONLY: &[(&str, Normalizer)] = &[
    (
        "textDocument/semanticTokens",
        round_trip::<SemanticTokensRegistrationOptions> as Normalizer,
    ),
    (
        "notebookDocument/sync",
        round_trip::<NotebookDocumentSyncRegistrationOptions> as Normalizer,
    ),
];
