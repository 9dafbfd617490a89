//! Core validation vocabulary
//!
//! The fundamental building blocks every rule is made of:
//!
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **Outcomes**: [`Verdict`], [`Violations`], [`ValidationError`], [`ErrorCode`]
//! - **Inputs**: [`Value`] for type-sensitive rules, `str` for the rest
//! - **Configuration failures**: [`RuleConfigError`]
//!
//! # Two error channels, never mixed
//!
//! Data that fails a business rule is reported as a [`Verdict::Invalid`]
//! value carrying every violation. Invalid use of the API itself — an
//! empty aggregate, an unknown casing category name — is a bug in the
//! calling code and fails fast at construction with [`RuleConfigError`],
//! before any data is evaluated.

pub mod config;
pub mod error;
pub mod traits;
pub mod value;
pub mod verdict;

pub use config::RuleConfigError;
pub use error::{ErrorCode, ErrorFamily, ValidationError, Violations};
pub use traits::{BoxedRule, Rule, RuleExt};
pub use value::Value;
pub use verdict::Verdict;

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates a value against a rule.
///
/// Convenience for one-off validations.
pub fn validate_value<R>(value: &R::Input, rule: &R) -> Verdict
where
    R: Rule + ?Sized,
{
    rule.validate(value)
}

// ============================================================================
// TESTS
// ============================================================================
