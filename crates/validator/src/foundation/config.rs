//! The fail-fast channel for programmer misuse.
//!
//! Invalid use of the API itself — an aggregate over zero rules, a casing
//! category name outside the declared five — indicates a bug in the calling
//! code rather than bad input data. These are rejected at construction
//! time through this error type, before any data is evaluated, and never
//! travel through a [`Verdict`](crate::foundation::Verdict).

use thiserror::Error;

/// Rejected rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleConfigError {
    /// An aggregate rule was given no sub-rules to evaluate.
    #[error("invalid aggregate rule: at least one sub-rule is required")]
    InvalidAggregateRule,

    /// A casing category name outside the declared five was supplied.
    #[error("unknown case category `{0}`")]
    UnknownCaseCategory(String),
}
