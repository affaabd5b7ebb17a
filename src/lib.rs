//! Typed data model of the Language Server Protocol 3.17
//!
//! [`types`] holds the structures, enumerations and OR types of the protocol,
//! each with a serde implementation producing the exact wire shape.
//! [`protocol`] binds method names to their parameter, result and registration
//! option types. [`check`] and [`capability`] build on both to validate
//! payloads and to list the features a server announces.

pub mod capability;
pub mod check;
pub mod codec;
pub mod config;
pub mod log;
pub mod protocol;
pub mod types;
