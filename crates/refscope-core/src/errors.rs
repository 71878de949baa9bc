use thiserror::Error;

/// Result type alias using RefscopeError
pub type Result<T> = std::result::Result<T, RefscopeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting. The resolution engine
/// itself never produces these: dangling and circular references are carried
/// in-band as marker values. Only the surfaces around it (document loading,
/// node lookup, view state, configuration) are fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Document
    InvalidDocument,
    UnsupportedFormat,

    // Lookup
    InvalidPointer,
    NotFound,

    // View state
    InvalidSelection,
    UnknownNodePath,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::UnsupportedFormat => "ERR_UNSUPPORTED_FORMAT",
            ExErrorKind::InvalidPointer => "ERR_INVALID_POINTER",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidSelection => "ERR_INVALID_SELECTION",
            ExErrorKind::UnknownNodePath => "ERR_UNKNOWN_NODE_PATH",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// document location (pointer or view path) the failure relates to.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    pointer: Option<String>,
    node_path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            pointer: None,
            node_path: None,
            message: String::new(),
        }
    }

    /// Set the operation name
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Set the document pointer the error relates to
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = Some(pointer.into());
        self
    }

    /// Set the view node path the error relates to
    pub fn with_node_path(mut self, path: impl Into<String>) -> Self {
        self.node_path = Some(path.into());
        self
    }

    /// Set the error message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }

    pub fn node_path(&self) -> Option<&str> {
        self.node_path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(pointer) = &self.pointer {
            write!(f, " (pointer: {})", pointer)?;
        }
        if let Some(path) = &self.node_path {
            write!(f, " (node_path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for the fallible surfaces around the resolution engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RefscopeError {
    // ===== Document Errors =====
    /// Document text could not be parsed in the requested format
    #[error("Failed to parse {format} document: {reason}")]
    DocumentParse { format: String, reason: String },

    /// File extension does not name a supported document format
    #[error("Unsupported document format: {extension}")]
    UnsupportedFormat { extension: String },

    // ===== Lookup Errors =====
    /// Pointer is not of the form `#/a/b/c`
    #[error("Invalid pointer '{pointer}': must start with '#/'")]
    InvalidPointer { pointer: String },

    /// Pointer is well formed but names nothing in the document
    #[error("No node at pointer: {pointer}")]
    NodeNotFound { pointer: String },

    /// Operation lookup in `paths` failed
    #[error("Operation not found: {method} {path}")]
    OperationNotFound { path: String, method: String },

    // ===== View Errors =====
    /// Node path does not address anything in the resolved view
    #[error("Unknown view path: {path}")]
    UnknownNodePath { path: String },

    /// Node path addresses something that has no variants
    #[error("Node at {path} has no oneOf/anyOf variants")]
    NotAVariantNode { path: String },

    /// Requested variant index is out of range
    #[error("Variant index {index} out of range for {path} ({count} variants)")]
    VariantOutOfRange {
        path: String,
        index: usize,
        count: usize,
    },

    // ===== Configuration Errors =====
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    // ===== Integration Errors =====
    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<RefscopeError> for ExError {
    fn from(err: RefscopeError) -> Self {
        match err {
            RefscopeError::DocumentParse { format, reason } => {
                ExError::new(ExErrorKind::InvalidDocument)
                    .with_message(format!("Failed to parse {} document: {}", format, reason))
            }

            RefscopeError::UnsupportedFormat { extension } => {
                ExError::new(ExErrorKind::UnsupportedFormat)
                    .with_message(format!("Unsupported document format: {}", extension))
            }

            RefscopeError::InvalidPointer { pointer } => ExError::new(ExErrorKind::InvalidPointer)
                .with_pointer(pointer)
                .with_message("Pointer must start with '#/'"),

            RefscopeError::NodeNotFound { pointer } => ExError::new(ExErrorKind::NotFound)
                .with_pointer(pointer)
                .with_message("No node at pointer"),

            RefscopeError::OperationNotFound { path, method } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_pointer(format!("#/paths/{}/{}", path, method))
                    .with_message(format!("Operation not found: {} {}", method, path))
            }

            RefscopeError::UnknownNodePath { path } => ExError::new(ExErrorKind::UnknownNodePath)
                .with_node_path(path)
                .with_message("Path does not address a node in the view"),

            RefscopeError::NotAVariantNode { path } => ExError::new(ExErrorKind::InvalidSelection)
                .with_node_path(path)
                .with_message("Node has no oneOf/anyOf variants"),

            RefscopeError::VariantOutOfRange { path, index, count } => {
                ExError::new(ExErrorKind::InvalidSelection)
                    .with_node_path(path)
                    .with_message(format!(
                        "Variant index {} out of range ({} variants)",
                        index, count
                    ))
            }

            RefscopeError::InvalidConfig { key, reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_message(format!("Invalid value for {}: {}", key, reason)),

            RefscopeError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),

            RefscopeError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for RefscopeError {
    fn from(err: serde_json::Error) -> Self {
        RefscopeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RefscopeError {
    fn from(err: std::io::Error) -> Self {
        RefscopeError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidDocument,
            ExErrorKind::UnsupportedFormat,
            ExErrorKind::InvalidPointer,
            ExErrorKind::NotFound,
            ExErrorKind::InvalidSelection,
            ExErrorKind::UnknownNodePath,
            ExErrorKind::InvalidConfig,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.code(), b.code(), "{:?} and {:?} share a code", a, b);
            }
        }
    }

    #[test]
    fn test_ex_error_display_includes_location() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("node_at")
            .with_pointer("#/components/schemas/Missing")
            .with_message("No node at pointer");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
        assert!(rendered.contains("in operation 'node_at'"));
        assert!(rendered.contains("(pointer: #/components/schemas/Missing)"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RefscopeError = io.into();
        assert!(matches!(err, RefscopeError::Io { .. }));
    }
}
