//! Core types for the rule catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use trellis_core::types::Severity;

/// Rule categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Layout,
    Naming,
    Testing,
    Documentation,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Naming => "naming",
            Self::Testing => "testing",
            Self::Documentation => "documentation",
        }
    }

    pub fn all() -> &'static [RuleCategory] {
        &[Self::Layout, Self::Naming, Self::Testing, Self::Documentation]
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Naming conventions checked on file stems or directory names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NamingConvention {
    /// `OrderService`: ASCII uppercase start, alphanumeric only.
    PascalCase,
    /// `order_service`: lowercase start, then lowercase, digits or `_`.
    LowerPackage,
    /// Name ends with one of the suffixes (`OrderServiceTest`).
    Suffixed(&'static [&'static str]),
}

impl NamingConvention {
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            Self::PascalCase => {
                let mut chars = name.chars();
                chars.next().is_some_and(|c| c.is_ascii_uppercase())
                    && chars.all(|c| c.is_ascii_alphanumeric())
            }
            Self::LowerPackage => {
                let mut chars = name.chars();
                chars.next().is_some_and(|c| c.is_ascii_lowercase())
                    && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            }
            Self::Suffixed(suffixes) => suffixes
                .iter()
                .any(|s| name.len() > s.len() && name.ends_with(s)),
        }
    }
}

/// What a rule checks. Scopes and directory patterns are `/`-separated
/// component sequences (see `paths`).
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Some directory ends with one of the component sequences and, when
    /// `within` is set, lies inside that scope.
    RequireDirectory {
        any_of: &'static [&'static str],
        within: Option<&'static str>,
    },
    /// One of the root-relative files exists.
    RequireFile { any_of: &'static [&'static str] },
    /// A file with one of these names exists anywhere.
    RequireFileNamed { names: &'static [&'static str] },
    /// Sources inside `scope` must not import names containing a forbidden
    /// package segment.
    ForbidImports {
        scope: &'static str,
        segments: &'static [&'static str],
    },
    /// Sources inside `scope` must not import names with a forbidden prefix.
    ForbidImportPrefixes {
        scope: &'static str,
        prefixes: &'static [&'static str],
    },
    /// Files with `extension` inside any scope follow `convention`.
    FileNaming {
        scopes: &'static [&'static str],
        extension: &'static str,
        convention: NamingConvention,
    },
    /// Directories inside any scope follow `convention`.
    DirectoryNaming {
        scopes: &'static [&'static str],
        convention: NamingConvention,
    },
    /// At least one file with `extension` and a test suffix inside `scope`.
    RequireTestFiles {
        scope: &'static str,
        extension: &'static str,
        suffixes: &'static [&'static str],
    },
    /// Reported coverage is at least `percent`.
    MinCoverage { percent: f64 },
    /// A README exists at the root.
    RequireReadme,
    /// The README has each section.
    ReadmeSections { sections: &'static [&'static str] },
}

/// A single checkable structural expectation.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// `category/name`, unique within a catalog.
    pub id: &'static str,
    pub category: RuleCategory,
    pub severity: Severity,
    pub description: String,
    pub check: Check,
}

impl Rule {
    /// The rule's predicate: true when the fact model satisfies it.
    pub fn is_satisfied(&self, facts: &crate::scanner::FactModel) -> bool {
        self.check.failing_subjects(facts).is_empty()
    }
}
