//! Core traits for the validation system
//!
//! This module defines the fundamental trait every rule implements.

use crate::foundation::verdict::Verdict;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A single validation capability: evaluate one value, report a verdict.
///
/// Rules are immutable after construction and hold no per-call state, so a
/// rule built once may be reused across calls and shared across threads.
/// `validate` is total over the rule's input domain: data that merely
/// fails validation produces [`Verdict::Invalid`], never a panic. Invalid
/// *configuration* is a programmer error and is rejected at construction
/// instead (see [`RuleConfigError`](crate::foundation::RuleConfigError)).
///
/// # Examples
///
/// ```rust,ignore
/// use sieve_validator::foundation::{ErrorCode, Rule, ValidationError, Verdict};
///
/// struct NotEmpty;
///
/// impl Rule for NotEmpty {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Verdict {
///         if input.is_empty() {
///             Verdict::fail(ValidationError::new(
///                 ErrorCode::LengthError,
///                 "The supplied string is too short",
///             ))
///         } else {
///             Verdict::Valid
///         }
///     }
/// }
/// ```
pub trait Rule {
    /// The type of input being validated.
    ///
    /// `?Sized` so rules can validate `str` directly.
    type Input: ?Sized;

    /// Evaluates the input against this rule.
    fn validate(&self, input: &Self::Input) -> Verdict;

    /// The name of this rule, used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A boxed, thread-safe rule — the form aggregate combinators store.
pub type BoxedRule<I> = Box<dyn Rule<Input = I> + Send + Sync>;

impl<R: Rule + ?Sized> Rule for Box<R> {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Verdict {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<'a, R: Rule + ?Sized> Rule for &'a R {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Verdict {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension methods implemented for every rule.
pub trait RuleExt: Rule + Sized {
    /// Boxes this rule for storage in an aggregate.
    fn boxed(self) -> BoxedRule<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<R: Rule> RuleExt for R {}

// ============================================================================
// TESTS
// ============================================================================
