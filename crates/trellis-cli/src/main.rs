use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use trellis_analysis::reporters::create_reporter;
use trellis_analysis::{validate, RuleCatalog};
use trellis_core::config::{CliOverrides, TrellisConfig};
use trellis_core::constants::VERSION;
use trellis_core::errors::{ErrorCode, PipelineError};
use trellis_core::tracing::init_tracing;

mod cli;

use cli::Cli;

/// Exit code when the scan or configuration prevents a report.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(version = VERSION, ?cli, "starting");

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, PipelineError> {
    let overrides = CliOverrides {
        coverage_threshold: cli.coverage_threshold,
        scan_timeout_ms: cli.timeout_ms,
    };
    let root = cli.path.as_deref().unwrap_or(Path::new("."));
    let config = TrellisConfig::load(root, Some(&overrides))?;
    let reporter = create_reporter(cli.format.as_str())?;

    if cli.list_rules {
        let catalog = RuleCatalog::from_config(&config.rules)?;
        emit(reporter.generate_catalog(&catalog)?);
        return Ok(ExitCode::SUCCESS);
    }

    let report = validate(root, &config)?;
    emit(reporter.generate(&report)?);

    tracing::debug!(passed = report.passed(), "done");
    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn emit(mut output: String) {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    print!("{output}");
}
