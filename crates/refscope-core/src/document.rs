//! Document loading and node lookup
//!
//! Documents arrive as JSON or YAML text and are held as `serde_json::Value`
//! regardless of source format, with object keys kept in document order.

use std::path::Path;

use serde_json::Value;

use crate::errors::{RefscopeError, Result};
use crate::pointer::{resolve_pointer, POINTER_PREFIX};
use crate::{log_op_end, log_op_error, log_op_start};

/// Pointer that addresses the whole document
pub const ROOT_POINTER: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }

    /// Pick the format from a file extension
    ///
    /// Paths without an extension yield `None` so the caller can fall back
    /// to [`DocumentFormat::detect`].
    ///
    /// # Errors
    /// * `UnsupportedFormat` - If the extension is not json, yaml or yml
    pub fn from_path(path: &Path) -> Result<Option<Self>> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(None);
        };
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(Some(DocumentFormat::Json)),
            "yaml" | "yml" => Ok(Some(DocumentFormat::Yaml)),
            other => Err(RefscopeError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Guess the format from content: JSON documents open with `{` or `[`
    pub fn detect(text: &str) -> Self {
        match text.trim_start().chars().next() {
            Some('{') | Some('[') => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parse document text in the given format
///
/// # Errors
/// * `DocumentParse` - If the text is not valid in that format
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value> {
    let parsed = match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| RefscopeError::DocumentParse {
        format: format.as_str().to_string(),
        reason,
    })
}

/// Read and parse a document file
///
/// # Errors
/// * `Io` - If the file cannot be read
/// * `UnsupportedFormat` - If the extension names an unknown format
/// * `DocumentParse` - If the content does not parse
pub fn load_document(path: &Path) -> Result<Value> {
    log_op_start!("load_document", path = %path.display());
    let start = std::time::Instant::now();

    let result = (|| -> Result<Value> {
        let text = std::fs::read_to_string(path)?;
        let format = match DocumentFormat::from_path(path)? {
            Some(format) => format,
            None => DocumentFormat::detect(&text),
        };
        parse_document(&text, format)
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!("load_document", duration_ms = elapsed);
        }
        Err(e) => {
            log_op_error!("load_document", e.clone(), duration_ms = elapsed);
        }
    }
    result
}

/// Look up the node a pointer addresses
///
/// Unlike [`resolve_pointer`], this distinguishes malformed pointers from
/// missing nodes, and accepts `#` for the document root.
///
/// # Errors
/// * `InvalidPointer` - If the pointer is neither `#` nor `#/`-prefixed
/// * `NodeNotFound` - If nothing exists at the pointer
pub fn node_at<'a>(root: &'a Value, pointer: &str) -> Result<&'a Value> {
    if pointer == ROOT_POINTER {
        return Ok(root);
    }
    if !pointer.starts_with(POINTER_PREFIX) {
        return Err(RefscopeError::InvalidPointer {
            pointer: pointer.to_string(),
        });
    }
    resolve_pointer(pointer, root).ok_or_else(|| RefscopeError::NodeNotFound {
        pointer: pointer.to_string(),
    })
}
