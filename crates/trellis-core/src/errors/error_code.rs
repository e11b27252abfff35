//! Stable error codes printed by the CLI.

/// Every error enum implements this to expose a machine-readable code.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const TIMEOUT: &str = "TIMEOUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
