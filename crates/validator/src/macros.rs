//! Macros for composing rule lists with minimal boilerplate.

// ============================================================================
// RULE SET MACRO
// ============================================================================

/// Boxes a list of rules into the `Vec<BoxedRule<_>>` aggregates consume.
///
/// All rules must share one input type.
///
/// # Examples
///
/// ```rust,ignore
/// use sieve_validator::prelude::*;
///
/// let rule = ForAll::new(rule_set![
///     MinimumLength::new(3),
///     MaximumLength::new(20),
/// ])?;
/// ```
#[macro_export]
macro_rules! rule_set {
    ($($rule:expr),+ $(,)?) => {
        vec![$($crate::foundation::RuleExt::boxed($rule)),+]
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::combinators::ForAll;
    use crate::foundation::Rule;
    use crate::rules::{MaximumLength, MinimumLength};

    #[test]
    fn rule_set_feeds_an_aggregate() {
        let aggregate =
            ForAll::new(rule_set![MinimumLength::new(3), MaximumLength::new(5)]).unwrap();

        assert_eq!(aggregate.rule_count(), 2);
        assert!(aggregate.validate("four").is_valid());
        assert!(!aggregate.validate("hi").is_valid());
    }

    #[test]
    fn rule_set_accepts_a_trailing_comma() {
        let aggregate = ForAll::new(rule_set![MinimumLength::new(1),]).unwrap();
        assert!(aggregate.validate("x").is_valid());
    }
}
