//! Reporters: output formats for reports and the rule catalog.

pub mod json;
pub mod tsv;

use trellis_core::errors::ReportError;

use crate::checker::Report;
use crate::rules::RuleCatalog;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &Report) -> Result<String, ReportError>;
    fn generate_catalog(&self, catalog: &RuleCatalog) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Result<Box<dyn Reporter>, ReportError> {
    match format {
        "tsv" => Ok(Box::new(tsv::TsvReporter)),
        "json" => Ok(Box::new(json::JsonReporter)),
        other => Err(ReportError::UnknownFormat(other.to_string())),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["tsv", "json"]
}
