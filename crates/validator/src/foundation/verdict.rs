//! The verdict sum type — outcome of every validation call.

use serde::Serialize;

use crate::foundation::error::{ValidationError, Violations};

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of a validation pass.
///
/// A `Verdict` is a plain value: produced per call, never shared or mutated
/// after creation. The failed variant always carries at least one error —
/// an empty failure is unrepresentable (see [`Violations`]).
///
/// # Examples
///
/// ```rust,ignore
/// use sieve_validator::prelude::*;
///
/// let verdict = MaximumLength::new(3).validate("Hello");
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.first_error().unwrap().code(), ErrorCode::LengthError);
/// ```
#[must_use = "a verdict reports validation failures and must be inspected"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The value satisfied the rule.
    Valid,
    /// The value violated the rule; every recorded violation is carried.
    Invalid(Violations),
}

impl Verdict {
    /// Builds a failed verdict from a single error.
    pub fn fail(error: ValidationError) -> Self {
        Self::Invalid(Violations::of(error))
    }

    /// Builds a verdict from collected errors: valid when there are none.
    ///
    /// This is the only route from an error list to a verdict, which keeps
    /// the zero-error failure state impossible to construct.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        match Violations::from_vec(errors) {
            Some(violations) => Self::Invalid(violations),
            None => Self::Valid,
        }
    }

    /// Whether the validation passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The recorded violations, if any.
    #[must_use]
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Valid => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    /// Iterates the recorded errors in order; empty for a valid verdict.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.violations().into_iter().flat_map(Violations::iter)
    }

    /// The first recorded error, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.violations().map(Violations::first)
    }

    /// AND-combines two verdicts, concatenating violations in order.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Valid, verdict) | (verdict, Self::Valid) => verdict,
            (Self::Invalid(mut left), Self::Invalid(right)) => {
                left.extend(right);
                Self::Invalid(left)
            }
        }
    }

    /// Converts into a `Result`, surrendering the violations on failure.
    pub fn into_result(self) -> Result<(), Violations> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violations) => Err(violations),
        }
    }

    /// Converts to a JSON value for machine consumption.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Valid => serde_json::json!({ "valid": true }),
            Self::Invalid(violations) => serde_json::json!({
                "valid": false,
                "errors": violations
                    .iter()
                    .map(ValidationError::to_json_value)
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
