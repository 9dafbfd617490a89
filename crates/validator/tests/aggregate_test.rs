//! Aggregate rule behavior through the public API.

use pretty_assertions::assert_eq;
use sieve_validator::prelude::*;

#[test]
fn aggregate_over_string_rules() {
    let username = ForAll::new(rule_set![
        MinimumLength::new(3),
        MaximumLength::new(12),
        TextCase::new(CaseCategory::AllLower),
    ])
    .unwrap();

    assert!(username.validate("alice").is_valid());
    assert!(!username.validate("Alice").is_valid());
}

#[test]
fn failures_concatenate_in_rule_order() {
    let aggregate = ForAll::new(rule_set![
        MinimumLength::new(10),
        TextCase::new(CaseCategory::SomeUpper),
        MaximumLength::new(2),
    ])
    .unwrap();

    // Too short for the first rule, no uppercase for the second, long
    // enough to clear the third.
    let verdict = aggregate.validate("ab");
    let codes: Vec<_> = verdict.errors().map(ValidationError::code).collect();
    assert_eq!(codes, vec![ErrorCode::LengthError, ErrorCode::CasingMismatch]);
    assert_eq!(
        verdict.first_error().map(ValidationError::code),
        Some(ErrorCode::LengthError)
    );
}

#[test]
fn duplicate_codes_survive() {
    let aggregate = ForAll::new(rule_set![MinimumLength::new(5), MinimumLength::new(9)]).unwrap();

    let verdict = aggregate.validate("abc");
    let codes: Vec<_> = verdict.errors().map(ValidationError::code).collect();
    assert_eq!(codes, vec![ErrorCode::LengthError, ErrorCode::LengthError]);
}

#[test]
fn empty_aggregate_never_reaches_validate() {
    let err = for_all::<str>(Vec::new()).unwrap_err();
    assert_eq!(err, RuleConfigError::InvalidAggregateRule);
}

#[test]
fn aggregate_over_value_rules_propagates_type_failures() {
    let aggregate = ForAll::new(rule_set![alpha(), alpha_numeric()]).unwrap();

    // Both delegating rules surface the primitive check's diagnostic.
    let verdict = aggregate.validate(&Value::from(7_i64));
    let codes: Vec<_> = verdict.errors().map(ValidationError::code).collect();
    assert_eq!(codes, vec![ErrorCode::NotString, ErrorCode::NotString]);
}

#[test]
fn aggregate_is_itself_a_rule() {
    let inner = ForAll::new(rule_set![MinimumLength::new(3)]).unwrap();
    let outer = ForAll::new(rule_set![inner]).unwrap();

    assert!(outer.validate("abc").is_valid());
    assert!(!outer.validate("ab").is_valid());
}

#[test]
fn verdict_serializes_for_reporting() {
    let aggregate = ForAll::new(rule_set![MaximumLength::new(3)]).unwrap();

    let json = aggregate.validate("Hello").to_json_value();
    assert_eq!(json["valid"], serde_json::json!(false));
    assert_eq!(
        json["errors"][0]["message"],
        serde_json::json!("The supplied string is too long")
    );
}
