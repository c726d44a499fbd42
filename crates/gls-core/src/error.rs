//! Error types for directory listing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while listing or changing into a directory.
#[derive(Debug, Error)]
pub enum ListError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_error_io() {
        let err = ListError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ListError::PermissionDenied { .. }));
        assert_eq!(err.path(), std::path::Path::new("/test/path"));
    }

    #[test]
    fn test_list_error_other_kind_keeps_source() {
        let err = ListError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted"),
        );
        assert!(matches!(err, ListError::Io { .. }));
        assert!(err.to_string().contains("interrupted"));
    }
}
