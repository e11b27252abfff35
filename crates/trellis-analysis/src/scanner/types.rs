//! Scanner data types: FactModel, ReadmeFacts, ScanStats.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::readme;

/// Observed structural state of a scanned project.
///
/// Paths are relative to the scan root and `/`-separated. Ordered sets keep
/// equality and iteration independent of traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactModel {
    pub files: BTreeSet<String>,
    pub directories: BTreeSet<String>,
    /// Coverage percentage (0-100) from the first readable coverage report.
    pub coverage_percent: Option<f64>,
    pub readme: Option<ReadmeFacts>,
    /// Imported qualified names per Kotlin/Java source file.
    pub imports: BTreeMap<String, BTreeSet<String>>,
}

impl FactModel {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

/// Headings found in the project README.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeFacts {
    /// README path relative to the root.
    pub path: String,
    /// Normalized (lower-cased, whitespace-collapsed) heading texts.
    pub headings: BTreeSet<String>,
}

impl ReadmeFacts {
    /// True when some heading contains the words of `section` contiguously.
    pub fn has_section(&self, section: &str) -> bool {
        self.headings
            .iter()
            .any(|heading| readme::heading_matches(heading, section))
    }
}

/// Aggregate statistics for a scan. Logged, never part of the fact model.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files: usize,
    pub directories: usize,
    pub symlinks_skipped: usize,
    pub sources_parsed: usize,
    pub sources_skipped_large: usize,
    pub coverage_report: Option<String>,
    pub duration_ms: u64,
}
