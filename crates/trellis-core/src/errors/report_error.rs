//! Reporter errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
