//! End-to-end validation: config → catalog → scan → check.

use std::path::Path;

use trellis_core::config::TrellisConfig;
use trellis_core::errors::PipelineError;

use crate::checker::{self, Report};
use crate::rules::RuleCatalog;
use crate::scanner::Scanner;

/// Validate the project at `root` under `config`.
pub fn validate(root: &Path, config: &TrellisConfig) -> Result<Report, PipelineError> {
    let _span = tracing::info_span!("validate", root = %root.display()).entered();

    let catalog = RuleCatalog::from_config(&config.rules)?;
    let scanner = Scanner::new(config.scan.clone())?;
    let facts = scanner.scan(root)?;
    Ok(checker::check(&catalog, &facts))
}
