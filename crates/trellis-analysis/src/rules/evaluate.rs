//! Check evaluation against a [`FactModel`].

use crate::scanner::FactModel;

use super::paths;
use super::types::Check;

/// Subject reported when no README exists for the sections rule.
pub const MISSING_README_SUBJECT: &str = "README.md (missing)";
/// Subject reported when the README rule fails.
pub const README_SUBJECT: &str = "README.md";
/// Subject reported when no coverage figure was found.
pub const MISSING_COVERAGE_SUBJECT: &str = "coverage report not found";

impl Check {
    /// Paths or facts that fail this check, in deterministic order. Empty when
    /// the check is satisfied.
    ///
    /// Existence checks yield at most one subject naming the expected
    /// alternatives; per-item checks yield one subject per offending item.
    pub fn failing_subjects(&self, facts: &FactModel) -> Vec<String> {
        match self {
            Check::RequireDirectory { any_of, within } => {
                let present = facts.directories.iter().any(|dir| {
                    within.map_or(true, |scope| paths::within(dir, scope))
                        && any_of.iter().any(|want| paths::ends_with(dir, want))
                });
                missing_unless(present, any_of)
            }
            Check::RequireFile { any_of } => {
                let present = any_of.iter().any(|want| facts.files.contains(*want));
                missing_unless(present, any_of)
            }
            Check::RequireFileNamed { names } => {
                let present = facts
                    .files
                    .iter()
                    .any(|file| names.contains(&paths::file_name(file)));
                missing_unless(present, names)
            }
            Check::ForbidImports { scope, segments } => {
                forbidden_imports(facts, scope, |import| {
                    import.split('.').any(|segment| segments.contains(&segment))
                })
            }
            Check::ForbidImportPrefixes { scope, prefixes } => {
                forbidden_imports(facts, scope, |import| {
                    prefixes.iter().any(|prefix| {
                        import == *prefix
                            || import
                                .strip_prefix(prefix)
                                .is_some_and(|rest| rest.starts_with('.'))
                    })
                })
            }
            Check::FileNaming {
                scopes,
                extension,
                convention,
            } => facts
                .files
                .iter()
                .filter(|file| scopes.iter().any(|scope| paths::within(file, scope)))
                .filter(|file| match stem(file, extension) {
                    Some(stem) => !convention.accepts(stem),
                    None => false,
                })
                .cloned()
                .collect(),
            Check::DirectoryNaming { scopes, convention } => facts
                .directories
                .iter()
                .filter(|dir| scopes.iter().any(|scope| paths::within(dir, scope)))
                .filter(|dir| !convention.accepts(paths::file_name(dir)))
                .cloned()
                .collect(),
            Check::RequireTestFiles {
                scope,
                extension,
                suffixes,
            } => {
                let present = facts.files.iter().any(|file| {
                    paths::within(file, scope)
                        && stem(file, extension).is_some_and(|stem| {
                            suffixes
                                .iter()
                                .any(|s| stem.len() > s.len() && stem.ends_with(s))
                        })
                });
                if present {
                    Vec::new()
                } else {
                    vec![format!("{scope}/**/*{{{}}}.{extension}", suffixes.join(","))]
                }
            }
            Check::MinCoverage { percent } => match facts.coverage_percent {
                None => vec![MISSING_COVERAGE_SUBJECT.to_string()],
                Some(actual) if !(0.0..=100.0).contains(&actual) => {
                    vec![format!("invalid coverage value {actual}")]
                }
                Some(actual) if actual < *percent => {
                    vec![format!("coverage {actual:.1}% below {percent:.1}%")]
                }
                Some(_) => Vec::new(),
            },
            Check::RequireReadme => {
                if facts.readme.is_some() {
                    Vec::new()
                } else {
                    vec![README_SUBJECT.to_string()]
                }
            }
            Check::ReadmeSections { sections } => match &facts.readme {
                None => vec![MISSING_README_SUBJECT.to_string()],
                Some(readme) => sections
                    .iter()
                    .filter(|section| !readme.has_section(section))
                    .map(|section| format!("{}#{}", readme.path, section))
                    .collect(),
            },
        }
    }
}

fn missing_unless(present: bool, alternatives: &[&str]) -> Vec<String> {
    if present {
        Vec::new()
    } else {
        vec![alternatives.join(" or ")]
    }
}

/// `file -> import` for each import in `scope` matching `forbidden`.
fn forbidden_imports(
    facts: &FactModel,
    scope: &str,
    forbidden: impl Fn(&str) -> bool,
) -> Vec<String> {
    let forbidden = &forbidden;
    facts
        .imports
        .iter()
        .filter(|(file, _)| paths::within(file, scope))
        .flat_map(move |(file, imports)| {
            imports
                .iter()
                .filter(move |import| forbidden(import))
                .map(move |import| format!("{file} -> {import}"))
        })
        .collect()
}

/// File stem when `path` has the given extension.
fn stem<'a>(path: &'a str, extension: &str) -> Option<&'a str> {
    paths::file_name(path)
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
}
