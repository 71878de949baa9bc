//! Refscope Core - reference resolution for OpenAPI and JSON Schema documents
//!
//! This crate provides the engine behind every refscope view:
//! - Local JSON pointer lookup (`#/a/b/c`)
//! - Deep resolution with path-local cycle detection and in-band markers
//! - One-hop type labels for list and table views
//! - A depth-limited presentation tree with variant and raw JSON state
//! - Schema and operation catalogs built from type labels
//!
//! Documents are plain `serde_json::Value` trees. Nothing here mutates the
//! document; resolution always produces new values.

pub mod catalog;
pub mod config;
pub mod document;
pub mod errors;
pub mod label;
pub mod logging_facility;
pub mod pointer;
pub mod resolve;
pub mod view;

// Re-export commonly used types
pub use catalog::{list_operations, operation_summary, schema_catalog, OperationSummary, SchemaRow};
pub use config::ViewConfig;
pub use document::{load_document, node_at, parse_document, DocumentFormat};
pub use errors::{ExError, ExErrorKind, RefscopeError, Result};
pub use label::type_label;
pub use pointer::resolve_pointer;
pub use resolve::{resolve_deep, resolve_reference, Marker, Resolution, ResolutionPath, ResolveStats};
pub use view::{NodePath, SchemaView, TreeNode, ViewState};
