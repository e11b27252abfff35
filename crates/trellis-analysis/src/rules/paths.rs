//! Component-wise path matching on `/`-separated relative paths.

/// Components of a relative path or pattern.
pub fn components(path: &str) -> Vec<&str> {
    path.split('/').filter(|c| !c.is_empty()).collect()
}

/// Whether `dir` ends with the components of `suffix`
/// (`app/src/main/kotlin/com/acme/domain/port` ends with `domain/port`).
pub fn ends_with(dir: &str, suffix: &str) -> bool {
    let dir = components(dir);
    let suffix = components(suffix);
    !suffix.is_empty() && dir.ends_with(&suffix)
}

/// Whether `path` lies beneath a directory matching `scope`, i.e. the scope's
/// components appear contiguously among `path`'s parent components.
pub fn within(path: &str, scope: &str) -> bool {
    let parts = components(path);
    let scope = components(scope);
    let Some((_, parents)) = parts.split_last() else {
        return false;
    };
    !scope.is_empty() && parents.windows(scope.len()).any(|w| w == scope.as_slice())
}

/// Last component of a path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
