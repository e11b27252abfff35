//! Observability for Trellis.
//! `tracing` crate with `EnvFilter`; output goes to stderr so stdout only
//! carries the report.

pub mod setup;

pub use setup::init_tracing;
