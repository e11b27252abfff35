//! Scanner subsystem: read-only traversal of a project root into a
//! [`FactModel`].
//!
//! Besides the file and directory sets, the scanner extracts three derived
//! facts: the coverage percentage from a JaCoCo/Kover XML report, the README
//! headings, and the import declarations of Kotlin/Java sources.

pub mod coverage;
pub mod imports;
pub mod readme;
pub mod scanner;
pub mod types;

use std::path::Path;

use trellis_core::errors::ScanError;

pub use scanner::Scanner;
pub use types::{FactModel, ReadmeFacts, ScanStats};

/// Scan `root` with default options.
pub fn scan(root: &Path) -> Result<FactModel, ScanError> {
    Scanner::default().scan(root)
}
