//! Rule catalog configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COVERAGE_THRESHOLD;
use crate::types::Severity;

/// Adjustments applied to the built-in rule catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum coverage percentage (0-100). Default: 95.
    pub coverage_threshold: Option<f64>,
    /// Rule ids removed from the catalog.
    pub disabled: Vec<String>,
    /// Per-rule severity overrides, keyed by rule id.
    pub severity: BTreeMap<String, Severity>,
}

impl RulesConfig {
    pub fn effective_coverage_threshold(&self) -> f64 {
        self.coverage_threshold
            .unwrap_or(DEFAULT_COVERAGE_THRESHOLD)
    }
}
