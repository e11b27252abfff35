//! Conformance checker: evaluates a [`FactModel`] against a [`RuleCatalog`].

pub mod report;

pub use report::{Report, Violation};

use crate::rules::RuleCatalog;
use crate::scanner::FactModel;

/// Evaluate every rule in `catalog` against `facts`.
///
/// Pure and deterministic. All rules run; violations are ordered by
/// category, rule id, then subject.
pub fn check(catalog: &RuleCatalog, facts: &FactModel) -> Report {
    let _span = tracing::info_span!("check", rules = catalog.len()).entered();

    let mut violations: Vec<Violation> = catalog
        .list_rules()
        .iter()
        .flat_map(|rule| {
            rule.check
                .failing_subjects(facts)
                .into_iter()
                .map(move |subject| Violation::new(rule, subject))
        })
        .collect();

    violations.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.rule_id.cmp(&b.rule_id))
            .then_with(|| a.subject.cmp(&b.subject))
    });

    let report = Report::new(violations, catalog.len());
    tracing::info!(
        rules_evaluated = report.rules_evaluated(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        passed = report.passed(),
        "check complete"
    );
    report
}
