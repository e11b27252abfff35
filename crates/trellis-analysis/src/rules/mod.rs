//! Rule catalog: the structural expectations of the project guidelines as a
//! plain data table.
//!
//! Each [`Rule`] carries a tagged [`Check`]; evaluation lives in `evaluate`
//! and path matching helpers in `paths`.

pub mod catalog;
pub mod evaluate;
pub mod paths;
pub mod types;

pub use catalog::RuleCatalog;
pub use types::{Check, NamingConvention, Rule, RuleCategory};
