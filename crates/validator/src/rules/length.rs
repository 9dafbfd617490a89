//! String length rules
//!
//! Bounds are inclusive: a string whose length equals the bound is valid.
//! Length is measured in Unicode scalar values.

use crate::foundation::{ErrorCode, Rule, ValidationError, Verdict};

const TOO_SHORT: &str = "The supplied string is too short";
const TOO_LONG: &str = "The supplied string is too long";

// ============================================================================
// MINIMUM LENGTH
// ============================================================================

/// Inclusive lower bound on string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinimumLength {
    min: usize,
}

impl MinimumLength {
    /// Creates the rule with an inclusive lower bound.
    #[must_use]
    pub const fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Rule for MinimumLength {
    type Input = str;

    fn validate(&self, input: &str) -> Verdict {
        if input.chars().count() >= self.min {
            Verdict::Valid
        } else {
            Verdict::fail(ValidationError::new(ErrorCode::LengthError, TOO_SHORT))
        }
    }
}

/// Creates a minimum length rule.
#[must_use]
pub const fn minimum_length(min: usize) -> MinimumLength {
    MinimumLength::new(min)
}

// ============================================================================
// MAXIMUM LENGTH
// ============================================================================

/// Inclusive upper bound on string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaximumLength {
    max: usize,
}

impl MaximumLength {
    /// Creates the rule with an inclusive upper bound.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Rule for MaximumLength {
    type Input = str;

    fn validate(&self, input: &str) -> Verdict {
        if input.chars().count() <= self.max {
            Verdict::Valid
        } else {
            Verdict::fail(ValidationError::new(ErrorCode::LengthError, TOO_LONG))
        }
    }
}

/// Creates a maximum length rule.
#[must_use]
pub const fn maximum_length(max: usize) -> MaximumLength {
    MaximumLength::new(max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_length_valid() {
        let rule = MinimumLength::new(5);
        assert!(rule.validate("hello").is_valid());
        assert!(rule.validate("hello world").is_valid());
    }

    #[test]
    fn minimum_length_invalid() {
        let rule = MinimumLength::new(5);
        assert!(!rule.validate("hi").is_valid());
        assert!(!rule.validate("").is_valid());

        let verdict = rule.validate("hi");
        let error = verdict.first_error().unwrap();
        assert_eq!(error.code(), ErrorCode::LengthError);
        assert_eq!(error.message(), "The supplied string is too short");
    }

    #[test]
    fn maximum_length_passes_at_exact_bound() {
        assert!(MaximumLength::new(5).validate("Apple").is_valid());
    }

    #[test]
    fn maximum_length_failure_error() {
        let verdict = MaximumLength::new(3).validate("Hello");
        let error = verdict.first_error().unwrap();
        assert_eq!(error.code(), ErrorCode::LengthError);
        assert_eq!(error.message(), "The supplied string is too long");
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // "héllo" is five chars but six bytes.
        assert!(MaximumLength::new(5).validate("h\u{e9}llo").is_valid());
        assert!(MinimumLength::new(5).validate("h\u{e9}llo").is_valid());
    }

    #[test]
    fn factories_build_the_rules() {
        assert!(minimum_length(3).validate("abc").is_valid());
        assert!(maximum_length(3).validate("abc").is_valid());
    }
}
