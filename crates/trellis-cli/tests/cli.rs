use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const PACKAGE: &str = "src/main/kotlin/com/acme/orders";

fn cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.env("HOME", home)
        .env_remove("TRELLIS_COVERAGE_THRESHOLD")
        .env_remove("TRELLIS_SCAN_TIMEOUT_MS")
        .env_remove("TRELLIS_LOG");
    cmd
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A project satisfying every built-in rule, with `line_coverage` percent
/// line coverage.
fn project(line_coverage: u32) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "build.gradle.kts", "");
    write(root, "openapi.yaml", "openapi: 3.0.3\n");
    write(
        root,
        "README.md",
        "# Orders\n## Overview\n## Stack\n## Architecture\n## Setup\n## API\n## Testing\n## Deployment\n",
    );
    write(
        root,
        "build/reports/kover/report.xml",
        &format!(
            r#"<report name="orders"><counter type="LINE" missed="{}" covered="{line_coverage}"/></report>"#,
            100 - line_coverage
        ),
    );
    for package in [
        "domain/model",
        "domain/port",
        "domain/service",
        "application",
        "adapter/inbound",
        "adapter/outbound",
        "config",
    ] {
        fs::create_dir_all(root.join(PACKAGE).join(package)).unwrap();
    }
    write(root, &format!("{PACKAGE}/domain/model/Order.kt"), "class Order\n");
    write(
        root,
        "src/test/kotlin/com/acme/orders/OrderTest.kt",
        "class OrderTest\n",
    );
    dir
}

#[test]
fn compliant_project_exits_zero_with_empty_output() {
    let home = TempDir::new().unwrap();
    let dir = project(97);
    cmd(home.path())
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_package_exits_one_with_tsv_line() {
    let home = TempDir::new().unwrap();
    let dir = project(97);
    fs::remove_dir(dir.path().join(PACKAGE).join("domain/port")).unwrap();

    cmd(home.path())
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(contains("error\tlayout/domain-port\tdomain/port\t"));
}

#[test]
fn missing_root_exits_two() {
    let home = TempDir::new().unwrap();
    cmd(home.path())
        .arg(home.path().join("nope"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(contains("[NOT_FOUND]"));
}

#[test]
fn low_coverage_fails_unless_threshold_lowered() {
    let home = TempDir::new().unwrap();
    let dir = project(90);

    cmd(home.path())
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(contains("testing/coverage-threshold"));

    cmd(home.path())
        .arg(dir.path())
        .env("TRELLIS_COVERAGE_THRESHOLD", "85")
        .assert()
        .code(0);

    cmd(home.path())
        .arg(dir.path())
        .args(["--coverage-threshold", "80"])
        .env("TRELLIS_COVERAGE_THRESHOLD", "99")
        .assert()
        .code(0);
}

#[test]
fn project_config_sets_threshold() {
    let home = TempDir::new().unwrap();
    let dir = project(90);
    write(dir.path(), "trellis.toml", "[rules]\ncoverage_threshold = 90\n");

    cmd(home.path()).arg(dir.path()).assert().code(0);
}

#[test]
fn invalid_config_exits_two() {
    let home = TempDir::new().unwrap();
    let dir = project(97);
    write(dir.path(), "trellis.toml", "[rules]\ncoverage_threshold = 150\n");

    cmd(home.path())
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(contains("[CONFIG_ERROR]"));
}

#[test]
fn json_output_is_parseable() {
    let home = TempDir::new().unwrap();
    let dir = project(97);
    fs::remove_file(dir.path().join("openapi.yaml")).unwrap();

    let output = cmd(home.path())
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["passed"], true);
    assert_eq!(value["warning_count"], 1);
    assert_eq!(value["violations"][0]["rule_id"], "documentation/api-contract");
}

#[test]
fn list_rules_needs_no_path() {
    let home = TempDir::new().unwrap();
    cmd(home.path())
        .arg("--list-rules")
        .assert()
        .success()
        .stdout(contains("layout/domain-port\tlayout\terror\t"))
        .stdout(contains("testing/coverage-threshold\ttesting\terror\tTest coverage must be at least 95%"));
}

#[test]
fn list_rules_reflects_threshold_override() {
    let home = TempDir::new().unwrap();
    cmd(home.path())
        .args(["--list-rules", "--coverage-threshold", "70"])
        .assert()
        .success()
        .stdout(contains("at least 70%"));
}

#[test]
fn path_is_required_without_list_rules() {
    let home = TempDir::new().unwrap();
    cmd(home.path()).assert().failure().code(2);
}
