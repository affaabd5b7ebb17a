//! The LSP 3.17 data model
//!
//! Structures use the wire names of the protocol (camelCase keys, `type` as
//! `typ`). OR types are closed Rust enums decoded in declaration order, see
//! [`crate::codec::union`].
//!
//! # Modules
//!
//! - `basic`: Positions, ranges, locations, edits, filters and shared mixins
//! - `enumerations`: Every protocol enumeration
//! - `workspace_edit`: Workspace edits and resource operations
//! - `lifecycle`: Initialization, registration, tracing and progress
//! - `document_sync` / `notebook`: Text and notebook document synchronization
//! - `window` / `workspace`: Window and workspace features
//! - `language`: Language features
//! - `client_capabilities` / `server_capabilities`: Capability aggregates

pub mod basic;
pub mod client_capabilities;
pub mod document_sync;
pub mod enumerations;
pub mod language;
pub mod lifecycle;
pub mod notebook;
pub mod server_capabilities;
pub mod window;
pub mod workspace;
pub mod workspace_edit;

pub use basic::*;
pub use client_capabilities::*;
pub use document_sync::*;
pub use enumerations::*;
pub use language::*;
pub use lifecycle::*;
pub use notebook::*;
pub use server_capabilities::*;
pub use window::*;
pub use workspace::*;
pub use workspace_edit::*;

/// A URI of a text document, e.g. `file:///home/user/main.rs`
pub type DocumentUri = String;

/// Any other URI
pub type Uri = String;

/// Any JSON value
pub type LSPAny = serde_json::Value;

pub type LSPObject = serde_json::Map<String, serde_json::Value>;

pub type LSPArray = Vec<serde_json::Value>;
