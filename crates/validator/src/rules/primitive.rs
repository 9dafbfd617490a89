//! Primitive type checks
//!
//! The foundation rules the character-class checks delegate to before
//! applying their own predicate.

use crate::foundation::{ErrorCode, Rule, ValidationError, Value, Verdict};

// ============================================================================
// TEXT VALUE
// ============================================================================

/// Accepts only text values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextValue;

impl Rule for TextValue {
    type Input = Value;

    fn validate(&self, input: &Value) -> Verdict {
        if matches!(input, Value::Text(_)) {
            Verdict::Valid
        } else {
            Verdict::fail(ValidationError::new(
                ErrorCode::NotString,
                "The supplied value is not a string",
            ))
        }
    }
}

/// Creates a text type check.
#[must_use]
pub const fn text_value() -> TextValue {
    TextValue
}

// ============================================================================
// NUMERIC VALUE
// ============================================================================

/// Accepts integers, floats, and text with numeric content.
///
/// Text counts as numeric when its trimmed content parses as a finite
/// float; `"inf"` and `"NaN"` do not qualify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NumericValue;

impl NumericValue {
    fn is_numeric(value: &Value) -> bool {
        match value {
            Value::Int(_) | Value::Float(_) => true,
            Value::Text(text) => text.trim().parse::<f64>().is_ok_and(f64::is_finite),
            Value::Bool(_) => false,
        }
    }
}

impl Rule for NumericValue {
    type Input = Value;

    fn validate(&self, input: &Value) -> Verdict {
        if Self::is_numeric(input) {
            Verdict::Valid
        } else {
            Verdict::fail(ValidationError::new(
                ErrorCode::NotNumeric,
                "The supplied value is not numeric",
            ))
        }
    }
}

/// Creates a numeric type check.
#[must_use]
pub const fn numeric_value() -> NumericValue {
    NumericValue
}

// ============================================================================
// TESTS
// ============================================================================
