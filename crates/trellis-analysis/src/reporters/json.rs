//! JSON reporter: machine-readable report and catalog.

use serde_json::{json, Value};
use trellis_core::errors::ReportError;

use super::Reporter;
use crate::checker::Report;
use crate::rules::RuleCatalog;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let output = json!({
            "passed": report.passed(),
            "rules_evaluated": report.rules_evaluated(),
            "error_count": report.error_count(),
            "warning_count": report.warning_count(),
            "violations": serde_json::to_value(report.violations())?,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn generate_catalog(&self, catalog: &RuleCatalog) -> Result<String, ReportError> {
        let rules: Vec<Value> = catalog
            .list_rules()
            .iter()
            .map(|rule| {
                json!({
                    "id": rule.id,
                    "category": rule.category,
                    "severity": rule.severity,
                    "description": rule.description,
                })
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rules)?)
    }
}
