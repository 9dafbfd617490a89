//! Error types for validation failures
//!
//! A validation failure is described by one or more [`ValidationError`]
//! values: a machine-readable [`ErrorCode`] plus a human-readable message.
//! [`Violations`] is the non-empty, ordered collection a failed verdict
//! carries.
//!
//! Messages use `Cow<'static, str>` for zero-allocation in the common case
//! of static message text.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

// ============================================================================
// ERROR CODE
// ============================================================================

/// Machine-readable identifier for one specific validation violation.
///
/// Codes come in two families that are never mixed: rule-level codes
/// produced by leaf rules, and policy-level codes produced by higher-level
/// validators with their own vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The value is not a string.
    NotString,
    /// The value is not numeric.
    NotNumeric,
    /// The string is not purely alphabetic.
    NotAlpha,
    /// The string is not purely alphanumeric.
    NotAlnum,
    /// The value does not parse as a float.
    NotFloat,
    /// The string does not match the required casing category.
    CasingMismatch,
    /// The string length is outside the configured bound.
    LengthError,
    /// The password is shorter than the required minimum.
    PasswordTooSmall,
    /// The password does not mix enough character types.
    PasswordNotMultiCharacter,
}

/// The taxonomy family a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorFamily {
    /// Produced by a leaf or aggregate rule.
    Rule,
    /// Produced by a higher-level validation policy.
    Policy,
}

impl ErrorCode {
    /// The taxonomy family this code belongs to.
    #[must_use]
    pub const fn family(self) -> ErrorFamily {
        match self {
            Self::PasswordTooSmall | Self::PasswordNotMultiCharacter => ErrorFamily::Policy,
            _ => ErrorFamily::Rule,
        }
    }

    /// The stable wire name of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotString => "NOT_STRING",
            Self::NotNumeric => "NOT_NUMERIC",
            Self::NotAlpha => "NOT_ALPHA",
            Self::NotAlnum => "NOT_ALNUM",
            Self::NotFloat => "NOT_FLOAT",
            Self::CasingMismatch => "CASING_MISMATCH",
            Self::LengthError => "LENGTH_ERROR",
            Self::PasswordTooSmall => "PASSWORD_TOO_SMALL",
            Self::PasswordNotMultiCharacter => "PASSWORD_NOT_MULTI_CHARACTER",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A coded, messaged description of one specific validation violation.
///
/// Created at the point of failure detection, owned by the verdict that
/// carries it, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    code: ErrorCode,
    message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// ```rust,ignore
    /// // Static strings — zero allocation:
    /// let error = ValidationError::new(ErrorCode::LengthError, "The supplied string is too long");
    ///
    /// // Dynamic strings — allocates only when needed:
    /// let error = ValidationError::new(ErrorCode::LengthError, format!("limit is {max}"));
    /// ```
    pub fn new(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The machine-readable code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts the error to a JSON value for machine consumption.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code.as_str(),
            "message": self.message,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// VIOLATIONS
// ============================================================================

/// A non-empty, ordered collection of validation errors.
///
/// Non-emptiness is part of the type: a `Violations` always holds at least
/// one error, so [`Violations::first`] is total and a failed verdict can
/// never be silent. Order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    head: ValidationError,
    tail: SmallVec<[ValidationError; 3]>,
}

impl Violations {
    /// Creates a collection holding a single error.
    #[must_use]
    pub fn of(error: ValidationError) -> Self {
        Self {
            head: error,
            tail: SmallVec::new(),
        }
    }

    /// Builds a collection from a vector, rejecting the empty case.
    #[must_use]
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = errors.next()?;
        Some(Self {
            head,
            tail: errors.collect(),
        })
    }

    /// Appends one error, preserving insertion order.
    pub fn push(&mut self, error: ValidationError) {
        self.tail.push(error);
    }

    /// The first recorded error.
    #[must_use]
    pub fn first(&self) -> &ValidationError {
        &self.head
    }

    /// Number of recorded errors, always at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.tail.len()
    }

    /// Iterates the errors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Flattens back into a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        let mut errors = Vec::with_capacity(1 + self.tail.len());
        errors.push(self.head);
        errors.extend(self.tail);
        errors
    }
}

impl Extend<ValidationError> for Violations {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.tail.extend(iter);
    }
}

impl IntoIterator for Violations {
    type Item = ValidationError;
    type IntoIter = std::iter::Chain<
        std::iter::Once<ValidationError>,
        smallvec::IntoIter<[ValidationError; 3]>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a ValidationError;
    type IntoIter = std::iter::Chain<
        std::iter::Once<&'a ValidationError>,
        std::slice::Iter<'a, ValidationError>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.count())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {error}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

// ============================================================================
// TESTS
// ============================================================================
