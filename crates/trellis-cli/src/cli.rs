use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    version,
    about = "Check a Kotlin / Spring Boot service repository against its structural guidelines"
)]
pub struct Cli {
    #[arg(
        required_unless_present = "list_rules",
        help = "Project root to validate"
    )]
    pub path: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv, help = "Output format")]
    pub format: OutputFormat,
    #[arg(
        long,
        value_name = "PCT",
        help = "Minimum coverage percentage (overrides config and TRELLIS_COVERAGE_THRESHOLD)"
    )]
    pub coverage_threshold: Option<f64>,
    #[arg(long, value_name = "MS", help = "Abort the scan after this many milliseconds")]
    pub timeout_ms: Option<u64>,
    #[arg(long, default_value_t = false, help = "Print the effective rule catalog and exit")]
    pub list_rules: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}
