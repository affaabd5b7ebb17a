//! LSP enumerations with their exact wire values

use crate::codec::lsp_enum;

lsp_enum! {
    /// Predefined semantic token types; servers may announce others
    pub enum SemanticTokenTypes: string, custom {
        Namespace = "namespace",
        /// Generic type, used when no more specific type applies
        Type = "type",
        Class = "class",
        Enum = "enum",
        Interface = "interface",
        Struct = "struct",
        TypeParameter = "typeParameter",
        Parameter = "parameter",
        Variable = "variable",
        Property = "property",
        EnumMember = "enumMember",
        Event = "event",
        Function = "function",
        Method = "method",
        Macro = "macro",
        Keyword = "keyword",
        Modifier = "modifier",
        Comment = "comment",
        String = "string",
        Number = "number",
        Regexp = "regexp",
        Operator = "operator",
        Decorator = "decorator",
    }
}

lsp_enum! {
    /// Predefined semantic token modifiers; servers may announce others
    pub enum SemanticTokenModifiers: string, custom {
        Declaration = "declaration",
        Definition = "definition",
        Readonly = "readonly",
        Static = "static",
        Deprecated = "deprecated",
        Abstract = "abstract",
        Async = "async",
        Modification = "modification",
        Documentation = "documentation",
        DefaultLibrary = "defaultLibrary",
    }
}

lsp_enum! {
    pub enum DocumentDiagnosticReportKind: string {
        /// A report with a full set of problems
        Full = "full",
        /// The previous report is still accurate
        Unchanged = "unchanged",
    }
}

lsp_enum! {
    /// JSON-RPC error codes
    pub enum ErrorCodes: integer, custom {
        ParseError = -32700,
        InvalidRequest = -32600,
        MethodNotFound = -32601,
        InvalidParams = -32602,
        InternalError = -32603,
        /// A request arrived before the `initialize` request
        ServerNotInitialized = -32002,
        UnknownErrorCode = -32001,
    }
}

lsp_enum! {
    /// Error codes reserved by the LSP itself
    pub enum LspErrorCodes: integer, custom {
        RequestFailed = -32803,
        ServerCancelled = -32802,
        ContentModified = -32801,
        RequestCancelled = -32800,
    }
}

lsp_enum! {
    pub enum FoldingRangeKind: string, custom {
        Comment = "comment",
        Imports = "imports",
        /// A region defined by folding markers such as `#region`
        Region = "region",
    }
}

lsp_enum! {
    pub enum SymbolKind: integer {
        File = 1,
        Module = 2,
        Namespace = 3,
        Package = 4,
        Class = 5,
        Method = 6,
        Property = 7,
        Field = 8,
        Constructor = 9,
        Enum = 10,
        Interface = 11,
        Function = 12,
        Variable = 13,
        Constant = 14,
        String = 15,
        Number = 16,
        Boolean = 17,
        Array = 18,
        Object = 19,
        Key = 20,
        Null = 21,
        EnumMember = 22,
        Struct = 23,
        Event = 24,
        Operator = 25,
        TypeParameter = 26,
    }
}

lsp_enum! {
    /// Extra annotations that tweak the rendering of a symbol
    pub enum SymbolTag: integer {
        Deprecated = 1,
    }
}

lsp_enum! {
    /// How unique a moniker is
    pub enum UniquenessLevel: string {
        Document = "document",
        Project = "project",
        Group = "group",
        Scheme = "scheme",
        Global = "global",
    }
}

lsp_enum! {
    pub enum MonikerKind: string {
        Import = "import",
        Export = "export",
        Local = "local",
    }
}

lsp_enum! {
    pub enum InlayHintKind: integer {
        Type = 1,
        Parameter = 2,
    }
}

lsp_enum! {
    pub enum MessageType: integer {
        Error = 1,
        Warning = 2,
        Info = 3,
        Log = 4,
    }
}

lsp_enum! {
    /// How the client sends document changes to the server
    pub enum TextDocumentSyncKind: integer {
        None = 0,
        Full = 1,
        Incremental = 2,
    }
}

lsp_enum! {
    pub enum TextDocumentSaveReason: integer {
        Manual = 1,
        AfterDelay = 2,
        FocusOut = 3,
    }
}

lsp_enum! {
    pub enum CompletionItemKind: integer {
        Text = 1,
        Method = 2,
        Function = 3,
        Constructor = 4,
        Field = 5,
        Variable = 6,
        Class = 7,
        Interface = 8,
        Module = 9,
        Property = 10,
        Unit = 11,
        Value = 12,
        Enum = 13,
        Keyword = 14,
        Snippet = 15,
        Color = 16,
        File = 17,
        Reference = 18,
        Folder = 19,
        EnumMember = 20,
        Constant = 21,
        Struct = 22,
        Event = 23,
        Operator = 24,
        TypeParameter = 25,
    }
}

lsp_enum! {
    pub enum CompletionItemTag: integer {
        Deprecated = 1,
    }
}

lsp_enum! {
    /// Whether `insertText` is plain text or a snippet
    pub enum InsertTextFormat: integer {
        PlainText = 1,
        Snippet = 2,
    }
}

lsp_enum! {
    /// How whitespace and indentation is handled during completion insertion
    pub enum InsertTextMode: integer {
        AsIs = 1,
        AdjustIndentation = 2,
    }
}

lsp_enum! {
    pub enum DocumentHighlightKind: integer {
        Text = 1,
        Read = 2,
        Write = 3,
    }
}

lsp_enum! {
    /// Hierarchical code action kinds such as `refactor.extract`
    pub enum CodeActionKind: string, custom {
        Empty = "",
        QuickFix = "quickfix",
        Refactor = "refactor",
        RefactorExtract = "refactor.extract",
        RefactorInline = "refactor.inline",
        RefactorRewrite = "refactor.rewrite",
        Source = "source",
        SourceOrganizeImports = "source.organizeImports",
        SourceFixAll = "source.fixAll",
    }
}

lsp_enum! {
    pub enum TraceValues: string {
        Off = "off",
        Messages = "messages",
        Verbose = "verbose",
    }
}

lsp_enum! {
    pub enum MarkupKind: string {
        PlainText = "plaintext",
        Markdown = "markdown",
    }
}

lsp_enum! {
    /// Encoding used to count characters in a `Position`
    pub enum PositionEncodingKind: string, custom {
        Utf8 = "utf-8",
        /// Mandatory for every client and server
        Utf16 = "utf-16",
        Utf32 = "utf-32",
    }
}

lsp_enum! {
    pub enum FileChangeType: integer {
        Created = 1,
        Changed = 2,
        Deleted = 3,
    }
}

lsp_enum! {
    /// Bit flags of the events a file system watcher reports
    pub enum WatchKind: integer, custom {
        Create = 1,
        Change = 2,
        Delete = 4,
    }
}

lsp_enum! {
    pub enum DiagnosticSeverity: integer {
        Error = 1,
        Warning = 2,
        Information = 3,
        Hint = 4,
    }
}

lsp_enum! {
    pub enum DiagnosticTag: integer {
        /// Unused or unnecessary code, rendered faded out
        Unnecessary = 1,
        Deprecated = 2,
    }
}

lsp_enum! {
    pub enum CompletionTriggerKind: integer {
        Invoked = 1,
        TriggerCharacter = 2,
        TriggerForIncompleteCompletions = 3,
    }
}

lsp_enum! {
    pub enum SignatureHelpTriggerKind: integer {
        Invoked = 1,
        TriggerCharacter = 2,
        ContentChange = 3,
    }
}

lsp_enum! {
    pub enum CodeActionTriggerKind: integer {
        Invoked = 1,
        Automatic = 2,
    }
}

lsp_enum! {
    pub enum FileOperationPatternKind: string {
        File = "file",
        Folder = "folder",
    }
}

lsp_enum! {
    pub enum NotebookCellKind: integer {
        Markup = 1,
        Code = 2,
    }
}

lsp_enum! {
    pub enum ResourceOperationKind: string {
        Create = "create",
        Rename = "rename",
        Delete = "delete",
    }
}

lsp_enum! {
    pub enum FailureHandlingKind: string {
        Abort = "abort",
        Transactional = "transactional",
        TextOnlyTransactional = "textOnlyTransactional",
        Undo = "undo",
    }
}

lsp_enum! {
    pub enum PrepareSupportDefaultBehavior: integer {
        /// The client's default behavior is to select the identifier
        Identifier = 1,
    }
}

lsp_enum! {
    pub enum TokenFormat: string {
        Relative = "relative",
    }
}
