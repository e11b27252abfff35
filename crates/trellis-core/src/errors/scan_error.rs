//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that abort a scan. A scan either completes or fails with one of
/// these; there is no partial fact model.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Scan timed out after {elapsed_ms}ms (limit: {limit_ms}ms)")]
    Timeout { elapsed_ms: u64, limit_ms: u64 },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Coarse classification of a [`ScanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorReason {
    NotFound,
    PermissionDenied,
    Timeout,
    NotADirectory,
    Io,
}

impl ScanError {
    pub fn reason(&self) -> ScanErrorReason {
        match self {
            Self::NotFound { .. } => ScanErrorReason::NotFound,
            Self::PermissionDenied { .. } => ScanErrorReason::PermissionDenied,
            Self::Timeout { .. } => ScanErrorReason::Timeout,
            Self::NotADirectory { .. } => ScanErrorReason::NotADirectory,
            Self::Io { .. } => ScanErrorReason::Io,
        }
    }

    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::PermissionDenied { .. } => error_code::PERMISSION_DENIED,
            Self::Timeout { .. } => error_code::TIMEOUT,
            _ => error_code::SCAN_ERROR,
        }
    }
}
