//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the core vocabulary, every built-in rule, the aggregate combinator,
//! and the policy layer.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! let username = ForAll::new(rule_set![
//!     MinimumLength::new(3),
//!     MaximumLength::new(20),
//! ])?;
//! ```

// ============================================================================
// FOUNDATION: Core traits, outcomes, errors
// ============================================================================

pub use crate::foundation::{
    BoxedRule, ErrorCode, ErrorFamily, Rule, RuleConfigError, RuleExt, ValidationError, Value,
    Verdict, Violations, validate_value,
};

// ============================================================================
// RULES: All built-in leaf rules
// ============================================================================

pub use crate::rules::{
    Alpha, AlphaNumeric, CaseCategory, FloatNumber, MaximumLength, MinimumLength, NumericValue,
    TextCase, TextValue, alpha, alpha_numeric, float_number, maximum_length, minimum_length,
    numeric_value, text_case, text_value,
};

// ============================================================================
// COMBINATORS: Aggregates
// ============================================================================

pub use crate::combinators::{ForAll, for_all};

// ============================================================================
// POLICY: Higher-level validators
// ============================================================================

pub use crate::policy::{PasswordValidator, Validator, ValidatorOptions};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::rule_set;
