//! Core types, errors, configuration and tracing for Trellis.
//!
//! Everything here is shared by the analysis engine and the CLI; nothing in
//! this crate touches the scanned project.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
