//! Language features: one module per `textDocument/*` feature family

pub mod call_hierarchy;
pub mod code_action;
pub mod code_lens;
pub mod color;
pub mod completion;
pub mod diagnostic;
pub mod document_link;
pub mod folding_range;
pub mod formatting;
pub mod highlight;
pub mod hover;
pub mod inlay_hint;
pub mod inline_value;
pub mod linked_editing;
pub mod moniker;
pub mod navigation;
pub mod rename;
pub mod selection_range;
pub mod semantic_tokens;
pub mod signature_help;
pub mod symbols;
pub mod type_hierarchy;

pub use call_hierarchy::*;
pub use code_action::*;
pub use code_lens::*;
pub use color::*;
pub use completion::*;
pub use diagnostic::*;
pub use document_link::*;
pub use folding_range::*;
pub use formatting::*;
pub use highlight::*;
pub use hover::*;
pub use inlay_hint::*;
pub use inline_value::*;
pub use linked_editing::*;
pub use moniker::*;
pub use navigation::*;
pub use rename::*;
pub use selection_range::*;
pub use semantic_tokens::*;
pub use signature_help::*;
pub use symbols::*;
pub use type_hierarchy::*;
