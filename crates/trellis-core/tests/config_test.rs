//! Tests for the Trellis configuration system.

use std::sync::Mutex;

use trellis_core::config::{CliOverrides, TrellisConfig};
use trellis_core::errors::ConfigError;
use trellis_core::types::Severity;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear TRELLIS_ env vars and point HOME at an empty directory so the
/// developer's own user config never leaks into a test.
fn isolate_env(home: &std::path::Path) {
    for key in ["TRELLIS_COVERAGE_THRESHOLD", "TRELLIS_SCAN_TIMEOUT_MS"] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn test_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("trellis.toml"),
        r#"
[scan]
timeout_ms = 1000

[rules]
coverage_threshold = 80.0
"#,
    )
    .unwrap();

    std::env::set_var("TRELLIS_SCAN_TIMEOUT_MS", "2500");

    let cli = CliOverrides {
        coverage_threshold: Some(90.0),
        ..Default::default()
    };
    let config = TrellisConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats project for the threshold, env beats project for the timeout.
    assert_eq!(config.rules.coverage_threshold, Some(90.0));
    assert_eq!(config.scan.timeout_ms, Some(2500));

    std::env::remove_var("TRELLIS_SCAN_TIMEOUT_MS");
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = TrellisConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.rules.effective_coverage_threshold(), 95.0);
    assert_eq!(config.scan.effective_max_file_size(), 1_048_576);
    assert_eq!(config.scan.effective_coverage_counter(), "LINE");
    assert!(config.scan.effective_timeout().is_none());
}

#[test]
fn test_env_threshold_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("TRELLIS_COVERAGE_THRESHOLD", "87.5");
    let config = TrellisConfig::load(tempdir().path(), None).unwrap();
    assert_eq!(config.rules.effective_coverage_threshold(), 87.5);

    std::env::remove_var("TRELLIS_COVERAGE_THRESHOLD");
}

#[test]
fn test_unparsable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("TRELLIS_COVERAGE_THRESHOLD", "ninety");
    let config = TrellisConfig::load(tempdir().path(), None).unwrap();
    assert_eq!(config.rules.coverage_threshold, None);

    std::env::remove_var("TRELLIS_COVERAGE_THRESHOLD");
}

#[test]
fn test_env_threshold_out_of_range_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("TRELLIS_COVERAGE_THRESHOLD", "120");
    let result = TrellisConfig::load(tempdir().path(), None);
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));

    std::env::remove_var("TRELLIS_COVERAGE_THRESHOLD");
}

#[test]
fn test_user_config_is_lowest_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".trellis");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[rules]
coverage_threshold = 70.0
disabled = ["documentation/api-contract"]
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("trellis.toml"),
        "[rules]\ncoverage_threshold = 85.0\n",
    )
    .unwrap();

    let config = TrellisConfig::load(project.path(), None).unwrap();
    assert_eq!(config.rules.coverage_threshold, Some(85.0));
    assert_eq!(config.rules.disabled, vec!["documentation/api-contract"]);
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("trellis.toml"), "[rules\ncoverage = ").unwrap();

    let result = TrellisConfig::load(dir.path(), None);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_from_toml_severity_overrides() {
    let config = TrellisConfig::from_toml(
        r#"
[rules.severity]
"naming/package-lowercase" = "error"
"layout/config" = "warning"
"#,
    )
    .unwrap();

    assert_eq!(
        config.rules.severity.get("naming/package-lowercase"),
        Some(&Severity::Error)
    );
    assert_eq!(config.rules.severity.get("layout/config"), Some(&Severity::Warning));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = TrellisConfig::from_toml(
        r#"
[scan]
future_option = true

[telemetry]
enabled = false
"#,
    )
    .unwrap();
    assert!(config.scan.extra_ignore.is_empty());
}

#[test]
fn test_validation_rejects_bad_values() {
    assert!(matches!(
        TrellisConfig::from_toml("[scan]\nmax_file_size = 0\n"),
        Err(ConfigError::ValidationFailed { .. })
    ));
    assert!(matches!(
        TrellisConfig::from_toml("[scan]\ntimeout_ms = 0\n"),
        Err(ConfigError::ValidationFailed { .. })
    ));
    assert!(matches!(
        TrellisConfig::from_toml("[scan]\ncoverage_counter = \"LINES\"\n"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        TrellisConfig::from_toml("[rules]\ncoverage_threshold = -1.0\n"),
        Err(ConfigError::ValidationFailed { .. })
    ));
}
