//! Password strength policy
//!
//! A minimum length gate followed by a character-diversity requirement.
//! This rule set works for a lot of general use cases; implement
//! [`Validator`] yourself for a more custom policy.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorCode, Rule, ValidationError, Verdict};
use crate::policy::{Validator, ValidatorOptions};
use crate::rules::{CaseCategory, MinimumLength, TextCase};

/// Minimum accepted password length, in characters.
const MIN_LENGTH: usize = 8;

/// A password must draw from strictly more than this many character types.
const REQUIRED_SPREAD: usize = 2;

const TOO_SMALL: &str = "The password is not at least 8 characters long";
const NOT_MULTI_CHARACTER: &str = "The password does not contain at least 3 of these \
     character types: lower case, upper case, numeric and special characters";

// ASCII classes: diversity counts characters the user can type on any
// keyboard layout, not Unicode letter categories.
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new("[^0-9A-Za-z_]").unwrap());

/// The stock password policy: at least 8 characters drawing from at least
/// three of the four character types (lowercase, uppercase, digit,
/// special).
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    length: MinimumLength,
    some_lower: TextCase,
    some_upper: TextCase,
}

impl PasswordValidator {
    /// Creates the policy with its stock thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            length: MinimumLength::new(MIN_LENGTH),
            some_lower: TextCase::new(CaseCategory::SomeLower),
            some_upper: TextCase::new(CaseCategory::SomeUpper),
        }
    }

    /// Counts how many of the four character types the password draws from.
    fn char_type_spread(&self, password: &str) -> usize {
        let mut spread = 0;

        if self.some_lower.validate(password).is_valid() {
            spread += 1;
        }
        if self.some_upper.validate(password).is_valid() {
            spread += 1;
        }
        if DIGIT.is_match(password) {
            spread += 1;
        }
        if NON_WORD.is_match(password) {
            spread += 1;
        }

        spread
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PasswordValidator {
    /// The length gate short-circuits: a too-short password is rejected
    /// without the diversity check running. No options are consulted yet.
    fn validate(&self, password: &str, _options: &ValidatorOptions) -> Verdict {
        if !self.length.validate(password).is_valid() {
            return Verdict::fail(ValidationError::new(
                ErrorCode::PasswordTooSmall,
                TOO_SMALL,
            ));
        }

        let spread = self.char_type_spread(password);
        if spread <= REQUIRED_SPREAD {
            tracing::debug!(spread, "password rejected for low character diversity");
            return Verdict::fail(ValidationError::new(
                ErrorCode::PasswordNotMultiCharacter,
                NOT_MULTI_CHARACTER,
            ));
        }

        Verdict::Valid
    }
}

// ============================================================================
// TESTS
// ============================================================================
