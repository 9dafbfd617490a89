//! FOR-ALL aggregate — AND over sub-rules with collect-all reporting
//!
//! Unlike a short-circuiting boolean AND, [`ForAll`] evaluates every
//! sub-rule regardless of earlier failures and concatenates all resulting
//! errors in evaluation order, without deduplication.

use std::fmt;

use crate::foundation::{BoxedRule, Rule, RuleConfigError, Verdict};

// ============================================================================
// FOR ALL
// ============================================================================

/// Composes one or more rules with AND logic.
///
/// The sub-rule list is ordered, fixed at construction, and never empty:
/// an aggregate over zero rules is meaningless and is rejected by
/// [`ForAll::new`] before first use, through the configuration-error
/// channel rather than as a validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// use sieve_validator::prelude::*;
///
/// let rule = ForAll::new(rule_set![
///     MinimumLength::new(3),
///     TextCase::new(CaseCategory::SomeLower),
/// ])?;
/// assert!(rule.validate("hello").is_valid());
/// ```
pub struct ForAll<I: ?Sized> {
    rules: Vec<BoxedRule<I>>,
}

impl<I: ?Sized> ForAll<I> {
    /// Creates the aggregate over an ordered, non-empty rule list.
    ///
    /// # Errors
    ///
    /// [`RuleConfigError::InvalidAggregateRule`] when `rules` is empty.
    pub fn new(rules: Vec<BoxedRule<I>>) -> Result<Self, RuleConfigError> {
        if rules.is_empty() {
            return Err(RuleConfigError::InvalidAggregateRule);
        }
        Ok(Self { rules })
    }

    /// Number of composed sub-rules, always at least one.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl<I: ?Sized> fmt::Debug for ForAll<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForAll")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<I: ?Sized> Rule for ForAll<I> {
    type Input = I;

    fn validate(&self, input: &I) -> Verdict {
        let mut errors = Vec::new();

        for rule in &self.rules {
            if let Verdict::Invalid(violations) = rule.validate(input) {
                errors.extend(violations);
            }
        }

        tracing::trace!(
            rules = self.rules.len(),
            errors = errors.len(),
            "aggregate rule evaluated"
        );
        Verdict::from_errors(errors)
    }
}

/// Creates a FOR-ALL aggregate from a rule list.
///
/// # Errors
///
/// [`RuleConfigError::InvalidAggregateRule`] when `rules` is empty.
pub fn for_all<I: ?Sized>(rules: Vec<BoxedRule<I>>) -> Result<ForAll<I>, RuleConfigError> {
    ForAll::new(rules)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorCode, RuleExt, ValidationError};

    struct AlwaysValid;

    impl Rule for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &str) -> Verdict {
            Verdict::Valid
        }
    }

    struct FailsWith(ErrorCode);

    impl Rule for FailsWith {
        type Input = str;

        fn validate(&self, _input: &str) -> Verdict {
            Verdict::fail(ValidationError::new(self.0, "failed"))
        }
    }

    #[test]
    fn empty_aggregate_is_a_configuration_error() {
        let err = ForAll::<str>::new(Vec::new()).unwrap_err();
        assert_eq!(err, RuleConfigError::InvalidAggregateRule);
    }

    #[test]
    fn all_valid_is_valid() {
        let aggregate = ForAll::new(vec![AlwaysValid.boxed(), AlwaysValid.boxed()]).unwrap();
        assert!(aggregate.validate("anything").is_valid());
        assert_eq!(aggregate.rule_count(), 2);
    }

    #[test]
    fn every_failure_is_collected_in_order() {
        let aggregate = ForAll::new(vec![
            FailsWith(ErrorCode::NotAlpha).boxed(),
            AlwaysValid.boxed(),
            FailsWith(ErrorCode::LengthError).boxed(),
        ])
        .unwrap();

        let verdict = aggregate.validate("anything");
        let codes: Vec<_> = verdict.errors().map(ValidationError::code).collect();
        assert_eq!(codes, vec![ErrorCode::NotAlpha, ErrorCode::LengthError]);
    }

    #[test]
    fn duplicate_codes_are_not_deduplicated() {
        let aggregate = ForAll::new(vec![
            FailsWith(ErrorCode::LengthError).boxed(),
            FailsWith(ErrorCode::LengthError).boxed(),
        ])
        .unwrap();

        let verdict = aggregate.validate("anything");
        assert_eq!(verdict.errors().count(), 2);
    }

    #[test]
    fn aggregates_nest() {
        let inner = ForAll::new(vec![FailsWith(ErrorCode::NotAlpha).boxed()]).unwrap();
        let outer = ForAll::new(vec![
            inner.boxed(),
            FailsWith(ErrorCode::LengthError).boxed(),
        ])
        .unwrap();

        let verdict = outer.validate("anything");
        let codes: Vec<_> = verdict.errors().map(ValidationError::code).collect();
        assert_eq!(codes, vec![ErrorCode::NotAlpha, ErrorCode::LengthError]);
    }
}
