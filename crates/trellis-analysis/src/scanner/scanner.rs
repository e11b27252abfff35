//! Project scanner: single-threaded walk of a project root.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;
use trellis_core::config::ScanConfig;
use trellis_core::constants::DEFAULT_COVERAGE_REPORTS;
use trellis_core::errors::{ConfigError, ScanError};

use super::coverage;
use super::imports;
use super::readme::{self, README_NAMES};
use super::types::{FactModel, ReadmeFacts, ScanStats};

/// Read-only project scanner.
///
/// Symbolic links are neither followed nor recorded. Hidden entries are
/// included and no `.gitignore` filtering applies; only the configured
/// `extra_ignore` patterns exclude paths.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScanConfig,
    ignores: Gitignore,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            config: ScanConfig::default(),
            ignores: Gitignore::empty(),
        }
    }
}

impl Scanner {
    /// Create a scanner, compiling the `extra_ignore` patterns.
    pub fn new(config: ScanConfig) -> Result<Self, ConfigError> {
        let invalid = |e: ignore::Error| ConfigError::InvalidValue {
            field: "scan.extra_ignore".to_string(),
            message: e.to_string(),
        };

        let mut builder = GitignoreBuilder::new(".");
        for pattern in &config.extra_ignore {
            builder.add_line(None, pattern).map_err(invalid)?;
        }
        let ignores = builder.build().map_err(invalid)?;

        Ok(Self { config, ignores })
    }

    /// Scan `root` into a [`FactModel`].
    ///
    /// Fails without a partial result if the root is missing, unreadable, not
    /// a directory, if any entry below it cannot be read, or if the deadline
    /// passes.
    pub fn scan(&self, root: &Path) -> Result<FactModel, ScanError> {
        let started = Instant::now();
        let _span = tracing::info_span!("scan", root = %root.display()).entered();

        let metadata = fs::metadata(root).map_err(|e| ScanError::from_io(root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        fs::read_dir(root).map_err(|e| ScanError::from_io(root, e))?;

        let mut stats = ScanStats::default();
        let (files, directories) = self.walk(root, started, &mut stats)?;
        let coverage_percent = self.read_coverage(root, &mut stats)?;
        let readme = self.read_readme(root, &files)?;
        let imports = self.read_imports(root, &files, started, &mut stats)?;

        stats.files = files.len();
        stats.directories = directories.len();
        stats.duration_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            files = stats.files,
            directories = stats.directories,
            symlinks_skipped = stats.symlinks_skipped,
            sources_parsed = stats.sources_parsed,
            sources_skipped_large = stats.sources_skipped_large,
            coverage_report = ?stats.coverage_report,
            duration_ms = stats.duration_ms,
            "scan complete"
        );

        Ok(FactModel {
            files,
            directories,
            coverage_percent,
            readme,
            imports,
        })
    }

    /// Collect relative file and directory paths.
    fn walk(
        &self,
        root: &Path,
        started: Instant,
        stats: &mut ScanStats,
    ) -> Result<(BTreeSet<String>, BTreeSet<String>), ScanError> {
        let mut files = BTreeSet::new();
        let mut directories = BTreeSet::new();

        let ignores = self.ignores.clone();
        let filter_root = root.to_path_buf();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                if entry.depth() == 0 || ignores.is_empty() {
                    return true;
                }
                let relative = relative_path(&filter_root, entry.path());
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !ignores.matched(&relative, is_dir).is_ignore()
            })
            .build();

        for result in walker {
            self.check_deadline(started)?;
            let entry = result.map_err(|e| walk_error(root, e))?;
            if entry.depth() == 0 {
                continue;
            }
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            let relative = relative_path(root, entry.path());
            if file_type.is_symlink() {
                tracing::debug!(path = %relative, "symlink not followed");
                stats.symlinks_skipped += 1;
            } else if file_type.is_dir() {
                directories.insert(relative);
            } else if file_type.is_file() {
                files.insert(relative);
            }
        }

        Ok((files, directories))
    }

    /// First coverage report among the configured and default paths.
    ///
    /// Candidates are probed on disk, so `extra_ignore` (typically `build/`)
    /// does not hide them. Symlinked reports are skipped like any symlink.
    fn read_coverage(
        &self,
        root: &Path,
        stats: &mut ScanStats,
    ) -> Result<Option<f64>, ScanError> {
        let counter = self.config.effective_coverage_counter();
        let candidates = self
            .config
            .coverage_reports
            .iter()
            .map(String::as_str)
            .chain(DEFAULT_COVERAGE_REPORTS.iter().copied());

        for candidate in candidates {
            let candidate = candidate.trim_start_matches("./");
            let path = root.join(candidate);
            match fs::symlink_metadata(&path) {
                Ok(metadata) if metadata.file_type().is_file() => {}
                Ok(_) => continue,
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    return Err(ScanError::from_io(&path, e));
                }
                Err(_) => continue,
            }
            let bytes = fs::read(&path).map_err(|e| ScanError::from_io(&path, e))?;
            stats.coverage_report = Some(candidate.to_string());

            return Ok(
                match coverage::parse_jacoco(&String::from_utf8_lossy(&bytes), counter) {
                    Ok(percent) => Some(percent),
                    Err(e) => {
                        tracing::warn!(report = candidate, error = %e, "coverage report unusable");
                        None
                    }
                },
            );
        }

        tracing::debug!("no coverage report found");
        Ok(None)
    }

    fn read_readme(
        &self,
        root: &Path,
        files: &BTreeSet<String>,
    ) -> Result<Option<ReadmeFacts>, ScanError> {
        let found = README_NAMES.iter().find_map(|name| {
            files
                .iter()
                .find(|f| !f.contains('/') && f.to_lowercase() == *name)
        });
        let Some(readme_path) = found else {
            return Ok(None);
        };

        let path = root.join(readme_path);
        let bytes = fs::read(&path).map_err(|e| ScanError::from_io(&path, e))?;
        Ok(Some(ReadmeFacts {
            path: readme_path.clone(),
            headings: readme::extract_headings(&String::from_utf8_lossy(&bytes)),
        }))
    }

    fn read_imports(
        &self,
        root: &Path,
        files: &BTreeSet<String>,
        started: Instant,
        stats: &mut ScanStats,
    ) -> Result<BTreeMap<String, BTreeSet<String>>, ScanError> {
        let max_size = self.config.effective_max_file_size();
        let mut by_file = BTreeMap::new();

        for relative in files.iter().filter(|f| imports::is_source_file(f)) {
            self.check_deadline(started)?;
            let path = root.join(relative);
            let metadata = fs::metadata(&path).map_err(|e| ScanError::from_io(&path, e))?;
            if metadata.len() > max_size {
                tracing::debug!(path = %relative, size = metadata.len(), "source too large, imports skipped");
                stats.sources_skipped_large += 1;
                continue;
            }

            let bytes = fs::read(&path).map_err(|e| ScanError::from_io(&path, e))?;
            stats.sources_parsed += 1;
            let found = imports::extract_imports(&String::from_utf8_lossy(&bytes));
            if !found.is_empty() {
                by_file.insert(relative.clone(), found);
            }
        }

        Ok(by_file)
    }

    fn check_deadline(&self, started: Instant) -> Result<(), ScanError> {
        if let Some(limit) = self.config.effective_timeout() {
            let elapsed = started.elapsed();
            if elapsed > limit {
                return Err(ScanError::Timeout {
                    elapsed_ms: elapsed.as_millis() as u64,
                    limit_ms: limit.as_millis() as u64,
                });
            }
        }
        Ok(())
    }
}

/// `/`-separated path of `path` relative to `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Map a walk error to a [`ScanError`], keeping the offending path.
fn walk_error(root: &Path, err: ignore::Error) -> ScanError {
    let path = error_path(&err).unwrap_or(root).to_path_buf();
    match err.io_error() {
        Some(source) => ScanError::from_io(path, io::Error::new(source.kind(), err.to_string())),
        None => ScanError::Io {
            path,
            source: io::Error::other(err.to_string()),
        },
    }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
