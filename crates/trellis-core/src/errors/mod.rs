//! Error handling for Trellis.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod report_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
pub use scan_error::{ScanError, ScanErrorReason};
