//! Configuration system for Trellis.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod rules_config;
pub mod scan_config;
pub mod trellis_config;

pub use rules_config::RulesConfig;
pub use scan_config::ScanConfig;
pub use trellis_config::{CliOverrides, TrellisConfig};
