//! Scanner configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COVERAGE_COUNTER, DEFAULT_MAX_FILE_SIZE};

/// Configuration for the project scanner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns (gitignore syntax) excluded from the fact model.
    pub extra_ignore: Vec<String>,
    /// Maximum source file size read for import extraction. Default: 1MB.
    pub max_file_size: Option<u64>,
    /// Scan deadline in milliseconds. Default: none.
    pub timeout_ms: Option<u64>,
    /// Coverage report paths probed before the built-in locations.
    pub coverage_reports: Vec<String>,
    /// JaCoCo counter type used for the coverage percentage. Default: "LINE".
    pub coverage_counter: Option<String>,
}

impl ScanConfig {
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn effective_timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn effective_coverage_counter(&self) -> &str {
        self.coverage_counter
            .as_deref()
            .unwrap_or(DEFAULT_COVERAGE_COUNTER)
    }
}
