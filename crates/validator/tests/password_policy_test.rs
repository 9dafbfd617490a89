//! Password policy behavior through the public API.

use pretty_assertions::assert_eq;
use sieve_validator::prelude::*;

fn verdict_for(password: &str) -> Verdict {
    PasswordValidator::new().validate(password, &ValidatorOptions::new())
}

#[test]
fn seven_characters_is_too_small() {
    let verdict = verdict_for("short1!");

    assert!(!verdict.is_valid());
    assert_eq!(
        verdict.first_error().map(ValidationError::code),
        Some(ErrorCode::PasswordTooSmall)
    );
}

#[test]
fn the_length_gate_short_circuits() {
    // Short and undiverse: only the length error is reported, the
    // diversity check never runs.
    let verdict = verdict_for("aaaa");

    assert_eq!(verdict.errors().count(), 1);
    assert_eq!(
        verdict.first_error().map(ValidationError::code),
        Some(ErrorCode::PasswordTooSmall)
    );
}

#[test]
fn lowercase_and_digits_alone_are_rejected() {
    let verdict = verdict_for("alllowercase12");

    let error = verdict.first_error().unwrap();
    assert_eq!(error.code(), ErrorCode::PasswordNotMultiCharacter);
    assert_eq!(error.code().family(), ErrorFamily::Policy);
}

#[test]
fn a_diverse_password_passes() {
    assert!(verdict_for("Aa1!aaaa").is_valid());
}

#[test]
fn three_categories_are_enough() {
    // lower + upper + digit.
    assert!(verdict_for("Abcdefg1").is_valid());
    // lower + digit + special.
    assert!(verdict_for("abcdefg1!").is_valid());
    // upper + digit + special.
    assert!(verdict_for("ABCDEFG1!").is_valid());
}

#[test]
fn options_are_accepted_but_not_yet_consulted() {
    let options = ValidatorOptions::new().with("min_length", 20);
    let verdict = PasswordValidator::new().validate("Aa1!aaaa", &options);

    // The stock thresholds still decide.
    assert!(verdict.is_valid());
}

#[test]
fn policy_and_rule_vocabularies_stay_separate() {
    let verdict = verdict_for("short1!");

    for error in verdict.errors() {
        assert_eq!(error.code().family(), ErrorFamily::Policy);
    }
}
