//! Top-level Trellis configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{RulesConfig, ScanConfig};
use crate::constants::{
    COVERAGE_COUNTERS, ENV_COVERAGE_THRESHOLD, ENV_SCAN_TIMEOUT_MS, PROJECT_CONFIG_FILE,
    USER_CONFIG_DIR,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TRELLIS_*`)
/// 3. Project config (`trellis.toml` in the scanned root)
/// 4. User config (`~/.trellis/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrellisConfig {
    pub scan: ScanConfig,
    pub rules: RulesConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub coverage_threshold: Option<f64>,
    pub scan_timeout_ms: Option<u64>,
}

impl TrellisConfig {
    /// Load configuration for the project at `root`.
    ///
    /// A missing project or user config file is not an error; an unparsable
    /// one is.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.is_file() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.is_file() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TrellisConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.rules.coverage_threshold {
            if !(0.0..=100.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "rules.coverage_threshold".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scan.timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref counter) = config.scan.coverage_counter {
            if !COVERAGE_COUNTERS.contains(&counter.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "scan.coverage_counter".to_string(),
                    message: format!(
                        "'{counter}' is not one of {}",
                        COVERAGE_COUNTERS.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.trellis/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut TrellisConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TrellisConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "merged config file");
        Self::merge(config, file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut TrellisConfig, other: TrellisConfig) {
        // Scan
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore;
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.timeout_ms.is_some() {
            base.scan.timeout_ms = other.scan.timeout_ms;
        }
        if !other.scan.coverage_reports.is_empty() {
            base.scan.coverage_reports = other.scan.coverage_reports;
        }
        if other.scan.coverage_counter.is_some() {
            base.scan.coverage_counter = other.scan.coverage_counter;
        }

        // Rules
        if other.rules.coverage_threshold.is_some() {
            base.rules.coverage_threshold = other.rules.coverage_threshold;
        }
        if !other.rules.disabled.is_empty() {
            base.rules.disabled = other.rules.disabled;
        }
        // Severity overrides accumulate; the later layer wins per rule.
        base.rules.severity.extend(other.rules.severity);
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut TrellisConfig) {
        if let Ok(val) = std::env::var(ENV_COVERAGE_THRESHOLD) {
            match val.trim().parse::<f64>() {
                Ok(v) => config.rules.coverage_threshold = Some(v),
                Err(_) => {
                    tracing::warn!(value = %val, "ignoring unparsable {ENV_COVERAGE_THRESHOLD}")
                }
            }
        }
        if let Ok(val) = std::env::var(ENV_SCAN_TIMEOUT_MS) {
            match val.trim().parse::<u64>() {
                Ok(v) => config.scan.timeout_ms = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring unparsable {ENV_SCAN_TIMEOUT_MS}"),
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TrellisConfig, cli: &CliOverrides) {
        if let Some(v) = cli.coverage_threshold {
            config.rules.coverage_threshold = Some(v);
        }
        if let Some(v) = cli.scan_timeout_ms {
            config.scan.timeout_ms = Some(v);
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
