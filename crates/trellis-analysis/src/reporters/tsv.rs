//! Tab-separated reporter, one line per violation.

use trellis_core::errors::ReportError;

use super::Reporter;
use crate::checker::Report;
use crate::rules::RuleCatalog;

/// `<severity>\t<rule-id>\t<subject>\t<description>` per violation.
pub struct TsvReporter;

impl Reporter for TsvReporter {
    fn name(&self) -> &'static str {
        "tsv"
    }

    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let mut output = String::new();
        for v in report.violations() {
            push_line(
                &mut output,
                &[v.severity.as_str(), &v.rule_id, &v.subject, &v.description],
            );
        }
        Ok(output)
    }

    fn generate_catalog(&self, catalog: &RuleCatalog) -> Result<String, ReportError> {
        let mut output = String::new();
        for rule in catalog.list_rules() {
            push_line(
                &mut output,
                &[
                    rule.id,
                    rule.category.as_str(),
                    rule.severity.as_str(),
                    &rule.description,
                ],
            );
        }
        Ok(output)
    }
}

fn push_line(output: &mut String, fields: &[&str]) {
    let line = fields
        .iter()
        .map(|f| sanitize(f))
        .collect::<Vec<_>>()
        .join("\t");
    output.push_str(&line);
    output.push('\n');
}

/// Tabs and line breaks would split fields or records.
fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}
