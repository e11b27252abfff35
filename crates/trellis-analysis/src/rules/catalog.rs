//! The built-in rule table and its configuration.

use trellis_core::config::RulesConfig;
use trellis_core::constants::DEFAULT_COVERAGE_THRESHOLD;
use trellis_core::errors::ConfigError;
use trellis_core::types::Severity;

use super::types::{Check, NamingConvention, Rule, RuleCategory};

pub const COVERAGE_RULE_ID: &str = "testing/coverage-threshold";

/// Scope of the hexagonal package rules; keeps build output from matching.
const MAIN_SOURCES: &str = "src/main/kotlin";

const TEST_SUFFIXES: &[&str] = &["Test", "Tests", "IT", "Spec"];

const README_SECTIONS: &[&str] = &[
    "Overview",
    "Stack",
    "Architecture",
    "Setup",
    "API",
    "Testing",
    "Deployment",
];

/// Immutable, ordered registry of rules.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleCatalog {
    /// The built-in catalog with the default coverage threshold.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(DEFAULT_COVERAGE_THRESHOLD),
        }
    }

    /// Replace the coverage threshold of `testing/coverage-threshold`.
    pub fn with_coverage_threshold(mut self, percent: f64) -> Self {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == COVERAGE_RULE_ID) {
            rule.check = Check::MinCoverage { percent };
            rule.description = coverage_description(percent);
        }
        self
    }

    /// Built-in catalog adjusted by `[rules]`: threshold, disabled rules and
    /// severity overrides. Unknown rule ids are rejected.
    pub fn from_config(config: &RulesConfig) -> Result<Self, ConfigError> {
        let builtin = Self::builtin();

        for id in &config.disabled {
            builtin.require_known("rules.disabled", id)?;
        }
        for id in config.severity.keys() {
            builtin.require_known("rules.severity", id)?;
        }

        let mut catalog = builtin.with_coverage_threshold(config.effective_coverage_threshold());
        catalog
            .rules
            .retain(|rule| !config.disabled.iter().any(|id| id == rule.id));
        for rule in &mut catalog.rules {
            if let Some(severity) = config.severity.get(rule.id) {
                rule.severity = *severity;
            }
        }

        tracing::debug!(
            rules = catalog.len(),
            disabled = config.disabled.len(),
            severity_overrides = config.severity.len(),
            "rule catalog built"
        );
        Ok(catalog)
    }

    /// All rules in definition order.
    pub fn list_rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn require_known(&self, field: &str, id: &str) -> Result<(), ConfigError> {
        if self.get(id).is_some() {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("unknown rule id '{id}'"),
        })
    }
}

fn coverage_description(percent: f64) -> String {
    format!("Test coverage must be at least {percent}%")
}

fn rule(
    id: &'static str,
    category: RuleCategory,
    severity: Severity,
    description: &str,
    check: Check,
) -> Rule {
    Rule {
        id,
        category,
        severity,
        description: description.to_string(),
        check,
    }
}

fn builtin_rules(coverage_threshold: f64) -> Vec<Rule> {
    use RuleCategory::*;
    use Severity::{Error, Warning};

    vec![
        // Layout
        rule(
            "layout/build-descriptor",
            Layout,
            Error,
            "Project root must contain a Gradle or Maven build descriptor",
            Check::RequireFile {
                any_of: &["build.gradle.kts", "build.gradle", "pom.xml"],
            },
        ),
        rule(
            "layout/main-sources",
            Layout,
            Error,
            "Production Kotlin sources live under src/main/kotlin",
            Check::RequireDirectory {
                any_of: &["src/main/kotlin"],
                within: None,
            },
        ),
        rule(
            "layout/test-sources",
            Layout,
            Error,
            "Test Kotlin sources live under src/test/kotlin",
            Check::RequireDirectory {
                any_of: &["src/test/kotlin"],
                within: None,
            },
        ),
        rule(
            "layout/domain-model",
            Layout,
            Error,
            "Hexagonal layout requires a domain/model package",
            Check::RequireDirectory {
                any_of: &["domain/model"],
                within: Some(MAIN_SOURCES),
            },
        ),
        rule(
            "layout/domain-port",
            Layout,
            Error,
            "Hexagonal layout requires a domain/port package",
            Check::RequireDirectory {
                any_of: &["domain/port"],
                within: Some(MAIN_SOURCES),
            },
        ),
        rule(
            "layout/domain-service",
            Layout,
            Error,
            "Hexagonal layout requires a domain/service package",
            Check::RequireDirectory {
                any_of: &["domain/service"],
                within: Some(MAIN_SOURCES),
            },
        ),
        rule(
            "layout/application",
            Layout,
            Error,
            "Use cases live in an application package",
            Check::RequireDirectory {
                any_of: &["application"],
                within: Some(MAIN_SOURCES),
            },
        ),
        rule(
            "layout/adapter-inbound",
            Layout,
            Error,
            "Driving adapters (REST, messaging) live in adapter/inbound",
            Check::RequireDirectory {
                any_of: &["adapter/inbound", "adapter/in"],
                within: Some(MAIN_SOURCES),
            },
        ),
        rule(
            "layout/adapter-outbound",
            Layout,
            Error,
            "Driven adapters (persistence, AWS clients) live in adapter/outbound",
            Check::RequireDirectory {
                any_of: &["adapter/outbound", "adapter/out"],
                within: Some(MAIN_SOURCES),
            },
        ),
        rule(
            "layout/config",
            Layout,
            Error,
            "Spring configuration lives in a config package",
            Check::RequireDirectory {
                any_of: &["config"],
                within: Some(MAIN_SOURCES),
            },
        ),
        rule(
            "layout/domain-isolation",
            Layout,
            Error,
            "Domain code must not depend on adapter or infrastructure packages",
            Check::ForbidImports {
                scope: "domain",
                segments: &["adapter", "adapters", "infrastructure"],
            },
        ),
        rule(
            "layout/domain-framework-free",
            Layout,
            Warning,
            "Domain code should not depend on Spring, AWS SDK or JPA",
            Check::ForbidImportPrefixes {
                scope: "domain",
                prefixes: &[
                    "org.springframework",
                    "software.amazon",
                    "jakarta.persistence",
                ],
            },
        ),
        // Naming
        rule(
            "naming/source-file-pascal-case",
            Naming,
            Warning,
            "Kotlin source files are named in PascalCase",
            Check::FileNaming {
                scopes: &["src/main/kotlin"],
                extension: "kt",
                convention: NamingConvention::PascalCase,
            },
        ),
        rule(
            "naming/test-class-suffix",
            Naming,
            Warning,
            "Test files end in Test, Tests, IT or Spec",
            Check::FileNaming {
                scopes: &["src/test/kotlin"],
                extension: "kt",
                convention: NamingConvention::Suffixed(TEST_SUFFIXES),
            },
        ),
        rule(
            "naming/package-lowercase",
            Naming,
            Warning,
            "Package directories are lowercase",
            Check::DirectoryNaming {
                scopes: &["src/main/kotlin", "src/test/kotlin"],
                convention: NamingConvention::LowerPackage,
            },
        ),
        // Testing
        rule(
            "testing/test-sources-present",
            Testing,
            Error,
            "At least one test class exists under src/test/kotlin",
            Check::RequireTestFiles {
                scope: "src/test/kotlin",
                extension: "kt",
                suffixes: TEST_SUFFIXES,
            },
        ),
        Rule {
            id: COVERAGE_RULE_ID,
            category: Testing,
            severity: Error,
            description: coverage_description(coverage_threshold),
            check: Check::MinCoverage {
                percent: coverage_threshold,
            },
        },
        // Documentation
        rule(
            "documentation/readme-present",
            Documentation,
            Error,
            "Project root must contain a README",
            Check::RequireReadme,
        ),
        rule(
            "documentation/readme-sections",
            Documentation,
            Error,
            "README must document overview, stack, architecture, setup, API, testing and deployment",
            Check::ReadmeSections {
                sections: README_SECTIONS,
            },
        ),
        rule(
            "documentation/api-contract",
            Documentation,
            Warning,
            "An OpenAPI contract should be checked in",
            Check::RequireFileNamed {
                names: &["openapi.yaml", "openapi.yml", "openapi.json"],
            },
        ),
    ]
}
