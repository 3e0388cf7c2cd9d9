//! Error types for resource access.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No embedded directory or filesystem root holds the resource.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Reading a filesystem-backed resource failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The filesystem path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ResourceError {
    /// Wraps an I/O error with the path that produced it.
    pub fn from_io(source: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            return Self::NotFound(path.display().to_string());
        }
        Self::Io { path, source }
    }

    /// Returns true if the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A specialized Result type for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;
