//! Higher-level validation policies
//!
//! A [`Validator`] combines rule evaluations with ad hoc boolean logic
//! that is not expressible as a plain AND of independent rules, and owns
//! its own error vocabulary. It is not itself a
//! [`Rule`](crate::foundation::Rule): policy-level decisions may
//! short-circuit where aggregates collect.

pub mod password;

pub use password::PasswordValidator;

use crate::foundation::Verdict;

// ============================================================================
// VALIDATOR TRAIT
// ============================================================================

/// A domain-specific pass/fail decision over one scalar value.
pub trait Validator {
    /// Evaluates the value under this policy.
    fn validate(&self, value: &str, options: &ValidatorOptions) -> Verdict;
}

// ============================================================================
// VALIDATOR OPTIONS
// ============================================================================

/// Open bag of policy tunables.
///
/// Policies accept the bag so callers can tune future knobs without an
/// API break; a policy that consults none of them says so.
#[derive(Debug, Clone, Default)]
pub struct ValidatorOptions {
    entries: serde_json::Map<String, serde_json::Value>,
}

impl ValidatorOptions {
    /// Creates an empty options bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one option, replacing any previous value under the key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Looks up an option by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    /// Whether the bag holds no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_bag_starts_empty() {
        let options = ValidatorOptions::new();
        assert!(options.is_empty());
        assert!(options.get("anything").is_none());
    }

    #[test]
    fn options_bag_stores_json_values() {
        let options = ValidatorOptions::new()
            .with("min_length", 12)
            .with("forbid_reuse", true);

        assert!(!options.is_empty());
        assert_eq!(options.get("min_length"), Some(&serde_json::json!(12)));
        assert_eq!(options.get("forbid_reuse"), Some(&serde_json::json!(true)));
    }
}
