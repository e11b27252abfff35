//! Shared constants for Trellis.

/// Trellis version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum test coverage percentage required by the guideline document.
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 95.0;

/// Maximum size in bytes of a source file read for import extraction (1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// JaCoCo counter used to compute the coverage percentage.
pub const DEFAULT_COVERAGE_COUNTER: &str = "LINE";

/// Counter types a JaCoCo/Kover XML report may contain.
pub const COVERAGE_COUNTERS: &[&str] = &[
    "INSTRUCTION",
    "BRANCH",
    "LINE",
    "COMPLEXITY",
    "METHOD",
    "CLASS",
];

/// Coverage report locations probed when no explicit path is configured.
pub const DEFAULT_COVERAGE_REPORTS: &[&str] = &[
    "build/reports/kover/report.xml",
    "build/reports/jacoco/test/jacocoTestReport.xml",
    "target/site/jacoco/jacoco.xml",
];

/// Project-level config file, looked up in the scanned root.
pub const PROJECT_CONFIG_FILE: &str = "trellis.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".trellis";

/// Environment variable overriding the coverage threshold.
pub const ENV_COVERAGE_THRESHOLD: &str = "TRELLIS_COVERAGE_THRESHOLD";

/// Environment variable setting the scan deadline in milliseconds.
pub const ENV_SCAN_TIMEOUT_MS: &str = "TRELLIS_SCAN_TIMEOUT_MS";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "TRELLIS_LOG";
