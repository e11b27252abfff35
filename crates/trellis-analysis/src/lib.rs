//! Conformance engine for Trellis.
//!
//! Control flow: [`scanner`] walks a project and produces a
//! [`FactModel`](scanner::FactModel); [`checker::check`] evaluates it against a
//! [`RuleCatalog`](rules::RuleCatalog) and produces a
//! [`Report`](checker::Report); a [`reporters::Reporter`] renders it.

pub mod checker;
pub mod pipeline;
pub mod reporters;
pub mod rules;
pub mod scanner;

pub use checker::{check, Report, Violation};
pub use pipeline::validate;
pub use rules::{Rule, RuleCatalog, RuleCategory};
pub use scanner::{scan, FactModel, Scanner};
