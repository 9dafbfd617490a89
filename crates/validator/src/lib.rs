//! # sieve-validator
//!
//! Composable validation of scalar values with collect-all error
//! reporting.
//!
//! Every rule evaluates one value and reports a
//! [`Verdict`](foundation::Verdict): either `Valid`, or `Invalid`
//! carrying every recorded violation as structured data — validation
//! failures are values, never panics. Misconfigured rules are a different
//! matter entirely and fail fast at construction (see
//! [`RuleConfigError`](foundation::RuleConfigError)).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! let username = ForAll::new(rule_set![
//!     MinimumLength::new(3),
//!     MaximumLength::new(20),
//!     TextCase::new(CaseCategory::AllLower),
//! ])?;
//!
//! let verdict = username.validate("alice");
//! assert!(verdict.is_valid());
//!
//! // Every failure is reported, not just the first.
//! let verdict = username.validate("A");
//! assert_eq!(verdict.errors().count(), 2);
//! ```
//!
//! ## Layout
//!
//! - [`foundation`] — the `Rule` trait, verdicts, errors, scalar values
//! - [`rules`] — built-in leaf rules
//! - [`combinators`] — the `ForAll` aggregate
//! - [`policy`] — higher-level validators (password policy)

pub mod combinators;
pub mod foundation;
mod macros;
pub mod policy;
pub mod prelude;
pub mod rules;
