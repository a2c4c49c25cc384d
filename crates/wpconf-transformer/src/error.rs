//! Error types for the transformer
//!
//! Provides error handling for:
//! - Construction (path checks)
//! - Inspection (reading and scanning storage)
//! - Mutation (anchor lookup)
//! - Persistence (locked write-back)

use std::path::PathBuf;
use wpconf_dialect::DialectError;

/// Errors raised by [`crate::ConfigTransformer`] operations
#[derive(Debug, thiserror::Error)]
pub enum TransformerError {
    /// Target path does not exist
    #[error("config file does not exist: {}", .path.display())]
    PathMissing { path: PathBuf },

    /// Target path cannot be opened for reading
    #[error("config file is not readable: {}: {source}", .path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target path cannot be opened for writing
    #[error("config file is not writable: {}: {source}", .path.display())]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage was read as empty or absent
    #[error("config file is empty: {}", .path.display())]
    EmptyFile { path: PathBuf },

    /// Scan found neither constants nor variables
    #[error("no constants or variables found in {}", .path.display())]
    NoDeclarations { path: PathBuf },

    /// Requested kind has no declarations in the file, or is not a kind at all
    #[error("unknown declaration kind: '{0}'")]
    UnknownKind(String),

    /// Insertion anchor text is not in the file
    #[error("anchor not found: '{anchor}'")]
    AnchorNotFound { anchor: String },

    /// IO error while re-reading storage
    #[error("io error reading {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while writing storage
    #[error("io error writing {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transformer configuration could not be parsed
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

impl TransformerError {
    /// Create read failure for path
    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            source,
        }
    }

    /// Create write failure for path
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was raised before storage was touched
    #[inline]
    #[must_use]
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::PathMissing { .. } | Self::NotReadable { .. } | Self::NotWritable { .. }
        )
    }
}

impl From<DialectError> for TransformerError {
    fn from(err: DialectError) -> Self {
        match err {
            DialectError::UnknownKind(kind) => Self::UnknownKind(kind),
        }
    }
}

/// Result type alias for transformer operations
pub type TransformerResult<T> = Result<T, TransformerError>;
