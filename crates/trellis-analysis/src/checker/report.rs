//! Violation and Report types.

use serde::Serialize;
use trellis_core::types::Severity;

use crate::rules::{Rule, RuleCategory};

/// A mismatch between one rule and the fact model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule_id: String,
    pub category: RuleCategory,
    pub severity: Severity,
    /// The path or fact that failed.
    pub subject: String,
    pub description: String,
}

impl Violation {
    pub(crate) fn new(rule: &Rule, subject: String) -> Self {
        Self {
            rule_id: rule.id.to_string(),
            category: rule.category,
            severity: rule.severity,
            subject,
            description: rule.description.clone(),
        }
    }
}

/// Result of checking one fact model. `passed` is derived from the
/// violations at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    violations: Vec<Violation>,
    passed: bool,
    rules_evaluated: usize,
}

impl Report {
    pub(crate) fn new(violations: Vec<Violation>, rules_evaluated: usize) -> Self {
        let passed = !violations.iter().any(|v| v.severity.is_blocking());
        Self {
            violations,
            passed,
            rules_evaluated,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// False iff any violation has error severity.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn rules_evaluated(&self) -> usize {
        self.rules_evaluated
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleCatalog;

    #[test]
    fn warnings_alone_pass() {
        let catalog = RuleCatalog::builtin();
        let warning = catalog.get("documentation/api-contract").unwrap();
        let report = Report::new(vec![Violation::new(warning, "openapi.yaml".into())], 1);
        assert!(report.passed());
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn any_error_fails() {
        let catalog = RuleCatalog::builtin();
        let warning = catalog.get("documentation/api-contract").unwrap();
        let error = catalog.get("layout/domain-port").unwrap();
        let report = Report::new(
            vec![
                Violation::new(error, "domain/port".into()),
                Violation::new(warning, "openapi.yaml".into()),
            ],
            2,
        );
        assert!(!report.passed());
        assert_eq!(report.error_count(), 1);
    }
}
