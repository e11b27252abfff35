//! Import extraction for Kotlin and Java sources.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// File extensions whose imports are extracted.
pub const SOURCE_EXTENSIONS: &[&str] = &["kt", "kts", "java"];

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*import[ \t]+(?:static[ \t]+)?([A-Za-z_][A-Za-z0-9_]*(?:\.(?:[A-Za-z_][A-Za-z0-9_]*|\*))*)",
    )
    .expect("import pattern is a valid regex")
});

/// Qualified names imported by `source`. Kotlin aliases (`as X`) and Java
/// `static` imports are reduced to the imported name.
pub fn extract_imports(source: &str) -> BTreeSet<String> {
    IMPORT_RE
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether `path` has one of the [`SOURCE_EXTENSIONS`].
pub fn is_source_file(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| SOURCE_EXTENSIONS.contains(&ext))
}
