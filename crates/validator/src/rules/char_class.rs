//! Character-class checks
//!
//! Each rule first delegates to its primitive type check and, on success,
//! strips the configured allowed special characters before testing the
//! residue against the target class. A failed type check is surfaced
//! verbatim: the primitive rule's own diagnostic is the verdict, never a
//! fabricated empty one.

use std::borrow::Cow;

use crate::foundation::{ErrorCode, Rule, ValidationError, Value, Verdict};
use crate::rules::primitive::{NumericValue, TextValue};

/// Removes every allowed special character from `text`.
///
/// Borrows when the allowed set is empty.
fn strip_allowed<'a>(text: &'a str, allowed: &[char]) -> Cow<'a, str> {
    if allowed.is_empty() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|c| !allowed.contains(c)).collect())
    }
}

// ============================================================================
// ALPHA
// ============================================================================

/// Requires purely alphabetic text, ignoring configured special characters.
///
/// # Examples
///
/// ```rust,ignore
/// use sieve_validator::prelude::*;
///
/// let rule = Alpha::new().with_allowed_specials(['-']);
/// assert!(rule.validate(&Value::from("well-known")).is_valid());
/// assert!(!rule.validate(&Value::from("wk 2")).is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alpha {
    allowed_specials: Vec<char>,
    type_check: TextValue,
}

impl Alpha {
    /// Creates the rule with no allowed special characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the characters stripped before the class test.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_allowed_specials(mut self, allowed: impl IntoIterator<Item = char>) -> Self {
        self.allowed_specials = allowed.into_iter().collect();
        self
    }
}

impl Rule for Alpha {
    type Input = Value;

    fn validate(&self, input: &Value) -> Verdict {
        // Non-text input takes the type check's verdict as-is.
        let Some(text) = input.as_text() else {
            return self.type_check.validate(input);
        };

        let residue = strip_allowed(text, &self.allowed_specials);
        if !residue.is_empty() && residue.chars().all(|c| c.is_ascii_alphabetic()) {
            Verdict::Valid
        } else {
            Verdict::fail(ValidationError::new(
                ErrorCode::NotAlpha,
                "String is not alphabetic",
            ))
        }
    }
}

/// Creates an alphabetic rule with no allowed special characters.
#[must_use]
pub fn alpha() -> Alpha {
    Alpha::new()
}

// ============================================================================
// ALPHANUMERIC
// ============================================================================

/// Requires purely alphanumeric text, ignoring configured special characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphaNumeric {
    allowed_specials: Vec<char>,
    type_check: TextValue,
}

impl AlphaNumeric {
    /// Creates the rule with no allowed special characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the characters stripped before the class test.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_allowed_specials(mut self, allowed: impl IntoIterator<Item = char>) -> Self {
        self.allowed_specials = allowed.into_iter().collect();
        self
    }
}

impl Rule for AlphaNumeric {
    type Input = Value;

    fn validate(&self, input: &Value) -> Verdict {
        let Some(text) = input.as_text() else {
            return self.type_check.validate(input);
        };

        let residue = strip_allowed(text, &self.allowed_specials);
        if !residue.is_empty() && residue.chars().all(|c| c.is_ascii_alphanumeric()) {
            Verdict::Valid
        } else {
            Verdict::fail(ValidationError::new(
                ErrorCode::NotAlnum,
                "String is not alphanumeric",
            ))
        }
    }
}

/// Creates an alphanumeric rule with no allowed special characters.
#[must_use]
pub fn alpha_numeric() -> AlphaNumeric {
    AlphaNumeric::new()
}

// ============================================================================
// FLOAT NUMBER
// ============================================================================

/// Requires float-shaped content, ignoring configured special characters.
///
/// Delegates to [`NumericValue`] first; numeric scalars pass outright,
/// text must parse as a finite float after stripping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloatNumber {
    allowed_specials: Vec<char>,
    type_check: NumericValue,
}

impl FloatNumber {
    /// Creates the rule with no allowed special characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the characters stripped before the parse.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_allowed_specials(mut self, allowed: impl IntoIterator<Item = char>) -> Self {
        self.allowed_specials = allowed.into_iter().collect();
        self
    }
}

impl Rule for FloatNumber {
    type Input = Value;

    fn validate(&self, input: &Value) -> Verdict {
        let typed = self.type_check.validate(input);
        if !typed.is_valid() {
            return typed;
        }

        match input.as_text() {
            Some(text) => {
                let residue = strip_allowed(text.trim(), &self.allowed_specials);
                if residue.parse::<f64>().is_ok_and(f64::is_finite) {
                    Verdict::Valid
                } else {
                    Verdict::fail(ValidationError::new(
                        ErrorCode::NotFloat,
                        "Value is not a float",
                    ))
                }
            }
            // Int and Float scalars are float-shaped by construction.
            None => Verdict::Valid,
        }
    }
}

/// Creates a float rule with no allowed special characters.
#[must_use]
pub fn float_number() -> FloatNumber {
    FloatNumber::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_accepts_letters() {
        assert!(Alpha::new().validate(&Value::from("Hello")).is_valid());
        assert!(!Alpha::new().validate(&Value::from("Hello1")).is_valid());
        assert!(!Alpha::new().validate(&Value::from("")).is_valid());
    }

    #[test]
    fn alpha_strips_allowed_specials() {
        let rule = Alpha::new().with_allowed_specials(['-', ' ']);
        assert!(rule.validate(&Value::from("well-known name")).is_valid());
        assert!(!rule.validate(&Value::from("well_known")).is_valid());
    }

    #[test]
    fn alpha_surfaces_the_type_check_failure() {
        let verdict = Alpha::new().validate(&Value::from(12_i64));
        let error = verdict.first_error().unwrap();
        // The primitive rule's diagnostic, not a blank NOT_ALPHA.
        assert_eq!(error.code(), ErrorCode::NotString);
        assert_eq!(error.message(), "The supplied value is not a string");
    }

    #[test]
    fn alpha_failure_code() {
        let verdict = Alpha::new().validate(&Value::from("abc123"));
        assert_eq!(verdict.first_error().unwrap().code(), ErrorCode::NotAlpha);
    }

    #[test]
    fn alpha_numeric_accepts_letters_and_digits() {
        assert!(
            AlphaNumeric::new()
                .validate(&Value::from("abc123"))
                .is_valid()
        );
        assert!(
            !AlphaNumeric::new()
                .validate(&Value::from("abc_123"))
                .is_valid()
        );
    }

    #[test]
    fn alpha_numeric_strips_allowed_specials() {
        let rule = AlphaNumeric::new().with_allowed_specials(['_']);
        assert!(rule.validate(&Value::from("abc_123")).is_valid());
    }

    #[test]
    fn alpha_numeric_surfaces_the_type_check_failure() {
        let verdict = AlphaNumeric::new().validate(&Value::from(false));
        assert_eq!(verdict.first_error().unwrap().code(), ErrorCode::NotString);
    }

    #[test]
    fn float_number_accepts_numeric_scalars() {
        assert!(FloatNumber::new().validate(&Value::from(3_i64)).is_valid());
        assert!(FloatNumber::new().validate(&Value::from(2.5)).is_valid());
        assert!(
            FloatNumber::new()
                .validate(&Value::from("-12.25"))
                .is_valid()
        );
    }

    #[test]
    fn float_number_surfaces_the_numeric_check_failure() {
        let verdict = FloatNumber::new().validate(&Value::from("twelve"));
        let error = verdict.first_error().unwrap();
        // The primitive numeric check rejects the text before any parse.
        assert_eq!(error.code(), ErrorCode::NotNumeric);
    }

    #[test]
    fn float_number_rejects_empty_residue() {
        // Stripping can consume the whole string; the parse then fails.
        let rule = FloatNumber::new().with_allowed_specials(['2']);
        let verdict = rule.validate(&Value::from("2"));
        assert_eq!(verdict.first_error().unwrap().code(), ErrorCode::NotFloat);
    }

    #[test]
    fn factories_build_the_rules() {
        assert!(alpha().validate(&Value::from("abc")).is_valid());
        assert!(alpha_numeric().validate(&Value::from("a1")).is_valid());
        assert!(float_number().validate(&Value::from("1.0")).is_valid());
    }
}
