//! Casing category rule
//!
//! Tolerant mode runs presence tests over a possibly mixed string; strict
//! mode additionally constrains every other character (see [`TextCase`]).
//! All checks are ASCII-scoped for locale stability.

use std::str::FromStr;

use serde::Serialize;

use crate::foundation::{ErrorCode, Rule, RuleConfigError, ValidationError, Verdict};

const CASE_MISMATCH: &str = "The given string doesn't match the required case";

// ============================================================================
// CASE CATEGORY
// ============================================================================

/// The five supported casing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseCategory {
    /// No uppercase letter present; strict mode requires letters only.
    AllLower,
    /// No lowercase letter present; strict mode requires letters only.
    AllUpper,
    /// Both a lowercase and an uppercase letter present.
    Mixed,
    /// At least one uppercase letter present.
    SomeUpper,
    /// At least one lowercase letter present.
    SomeLower,
}

impl FromStr for CaseCategory {
    type Err = RuleConfigError;

    /// Parses the snake_case category name used in configuration.
    ///
    /// Anything outside the declared five categories is a configuration
    /// error, rejected here rather than at validate time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all_lower" => Ok(Self::AllLower),
            "all_upper" => Ok(Self::AllUpper),
            "mixed" => Ok(Self::Mixed),
            "some_upper" => Ok(Self::SomeUpper),
            "some_lower" => Ok(Self::SomeLower),
            other => Err(RuleConfigError::UnknownCaseCategory(other.to_owned())),
        }
    }
}

// ============================================================================
// TEXT CASE
// ============================================================================

/// Validates the casing category of a string.
///
/// Tolerant mode ([`TextCase::new`]) only tests for the presence or
/// absence of qualifying letters, whatever else the string contains.
/// Strict mode ([`TextCase::strict`]) additionally forbids characters
/// outside the category: `AllUpper`, `AllLower` and `Mixed` require an
/// all-letter string, `SomeUpper` and `SomeLower` reject any non-word
/// character.
///
/// # Examples
///
/// ```rust,ignore
/// use sieve_validator::prelude::*;
///
/// let tolerant = TextCase::new(CaseCategory::SomeUpper);
/// assert!(tolerant.validate("abc!D").is_valid());
///
/// let strict = TextCase::strict(CaseCategory::SomeUpper);
/// assert!(!strict.validate("ABC!").is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextCase {
    category: CaseCategory,
    strict: bool,
}

impl TextCase {
    /// Creates a tolerant casing rule: special characters are allowed.
    #[must_use]
    pub const fn new(category: CaseCategory) -> Self {
        Self {
            category,
            strict: false,
        }
    }

    /// Creates a strict casing rule: special characters are forbidden.
    #[must_use]
    pub const fn strict(category: CaseCategory) -> Self {
        Self {
            category,
            strict: true,
        }
    }

    fn is_mixed(self, text: &str) -> bool {
        if self.strict && !is_all_letters(text) {
            return false;
        }
        contains_lower(text) && contains_upper(text)
    }

    fn is_all_upper(self, text: &str) -> bool {
        if self.strict {
            !text.is_empty() && text.chars().all(|c| c.is_ascii_uppercase())
        } else {
            !contains_lower(text) && contains_upper(text)
        }
    }

    fn is_all_lower(self, text: &str) -> bool {
        if self.strict {
            !text.is_empty() && text.chars().all(|c| c.is_ascii_lowercase())
        } else {
            contains_lower(text) && !contains_upper(text)
        }
    }

    fn is_some_lower(self, text: &str) -> bool {
        contains_lower(text) && (!self.strict || !contains_non_word(text))
    }

    fn is_some_upper(self, text: &str) -> bool {
        contains_upper(text) && (!self.strict || !contains_non_word(text))
    }
}

fn contains_lower(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_lowercase())
}

fn contains_upper(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_uppercase())
}

fn contains_non_word(text: &str) -> bool {
    text.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

fn is_all_letters(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

impl Rule for TextCase {
    type Input = str;

    fn validate(&self, input: &str) -> Verdict {
        let satisfied = match self.category {
            CaseCategory::Mixed => self.is_mixed(input),
            CaseCategory::AllUpper => self.is_all_upper(input),
            CaseCategory::AllLower => self.is_all_lower(input),
            CaseCategory::SomeLower => self.is_some_lower(input),
            CaseCategory::SomeUpper => self.is_some_upper(input),
        };

        if satisfied {
            Verdict::Valid
        } else {
            Verdict::fail(ValidationError::new(
                ErrorCode::CasingMismatch,
                CASE_MISMATCH,
            ))
        }
    }
}

/// Creates a tolerant casing rule.
#[must_use]
pub const fn text_case(category: CaseCategory) -> TextCase {
    TextCase::new(category)
}

// ============================================================================
// TESTS
// ============================================================================
