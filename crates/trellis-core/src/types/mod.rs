//! Types shared between configuration and the rules engine.

pub mod severity;

pub use severity::Severity;
