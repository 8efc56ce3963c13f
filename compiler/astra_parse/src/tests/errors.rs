//! Error positions, codes, and the effect of parse options.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use astra_diagnostic::ErrorCode;
use astra_ir::{Condition, ValueRef};
use pretty_assertions::assert_eq;

use crate::{
    parse_condition, parse_condition_with_options, parse_value_ref, ErrorContext, Expected,
    ParseOptions,
};

#[test]
fn bad_affiliation_is_reported_at_the_word() {
    let source = "ownedby affiliation = bogus";
    let error = parse_condition(source).unwrap_err();
    assert_eq!(error.code, ErrorCode::E1001);
    assert_eq!(error.span.start, 22);
    assert_eq!((error.line, error.column), (1, 23));
    assert_eq!(error.context, Some(ErrorContext::Condition("ownedby")));
    assert_eq!(error.expected, vec![Expected::Item("empire affiliation")]);
    assert_eq!(
        error.message,
        "expected empire affiliation, found `bogus`"
    );
    let diagnostic = error.to_diagnostic();
    assert_eq!(diagnostic.notes, vec!["while parsing an `ownedby` condition".to_owned()]);
}

#[test]
fn unknown_leading_keyword() {
    let error = parse_condition("bogus").unwrap_err();
    assert_eq!(error.code, ErrorCode::E1001);
    assert_eq!(error.span.start, 0);
    assert_eq!(error.expected, vec![Expected::Item("condition")]);
    assert_eq!(error.context, None);
}

#[test]
fn failure_inside_nested_list_wins_over_list_start() {
    let source = "and [ capital ownedby empire = ]";
    let error = parse_condition(source).unwrap_err();
    assert_eq!(error.code, ErrorCode::E1001);
    assert_eq!(error.span.start as usize, source.find(']').unwrap());
    assert_eq!(error.context, Some(ErrorContext::Value("int")));
}

#[test]
fn trailing_input_after_a_complete_condition() {
    let error = parse_condition("all capital").unwrap_err();
    assert_eq!(error.code, ErrorCode::E1002);
    assert_eq!(error.span.start, 4);
    assert_eq!(error.expected, vec![Expected::EndOfInput]);
    assert_eq!(
        error.message,
        "unexpected `capital` after a complete condition"
    );
}

#[test]
fn bare_planet_leaves_unknown_parameter_as_trailing_input() {
    let error = parse_condition("planet bogus = 1").unwrap_err();
    assert_eq!(error.code, ErrorCode::E1002);
    assert_eq!(error.span.start, 7);
}

#[test]
fn unterminated_comment() {
    let error = parse_condition("all /* never closed").unwrap_err();
    assert_eq!(error.code, ErrorCode::E0001);
    assert_eq!(error.span.start, 4);
    assert_eq!(error.message, "unterminated block comment");
}

#[test]
fn empty_condition_source() {
    let error = parse_condition("   // only a comment").unwrap_err();
    assert_eq!(error.code, ErrorCode::E1001);
    assert!(error.message.ends_with("found end of input"), "{}", error.message);
}

#[test]
fn missing_value_lists_alternatives() {
    let error = parse_value_ref::<i32>("3 +").unwrap_err();
    assert_eq!(error.code, ErrorCode::E1001);
    assert_eq!(error.span.start, 3);
    assert!(error.message.ends_with("found end of input"), "{}", error.message);

    let error = parse_condition("population low =").unwrap_err();
    assert_eq!(error.code, ErrorCode::E1001);
    assert_eq!(error.span.start, 16);
    assert!(error.expected.contains(&Expected::Punct('(')));
    assert!(error.expected.contains(&Expected::Keyword("value")));
}

#[test]
fn max_expected_caps_the_message() {
    let options = ParseOptions::default().with_max_expected(2);
    let error = parse_condition_with_options("population low =", &options).unwrap_err();
    assert!(error.expected.len() > 2);
    assert!(error.message.contains(" others, found"), "{}", error.message);
}

#[test]
fn exact_keywords_reject_other_cases() {
    let options = ParseOptions::default().exact_keywords();
    assert_eq!(
        parse_condition_with_options("and [ capital ]", &options).unwrap(),
        Condition::And(vec![Condition::Capital])
    );
    let error = parse_condition_with_options("Capital", &options).unwrap_err();
    assert_eq!(error.code, ErrorCode::E1001);
    assert_eq!(error.span.start, 0);
    assert!(parse_condition("Capital").is_ok());
}

#[test]
fn display_shows_the_line_and_caret() {
    let source = "and [\n  capital\n  ownedby empire = x\n]";
    let error = parse_condition(source).unwrap_err();
    assert_eq!((error.line, error.column), (3, 20));
    assert_eq!(error.source_line, "  ownedby empire = x");
    let rendered = error.to_string();
    assert!(rendered.starts_with("line 3, column 20: "), "{rendered}");
    assert!(rendered.ends_with(&format!("{}^", " ".repeat(19))), "{rendered}");
}

#[test]
fn caret_keeps_leading_tabs() {
    let error = parse_condition("\townedby affiliation=bogus").unwrap_err();
    assert_eq!((error.line, error.column), (1, 22));
    assert!(
        error
            .to_string()
            .ends_with(&format!("\n\townedby affiliation=bogus\n\t{}^^^^^", " ".repeat(20))),
        "{error}"
    );
}

#[test]
fn bounds_reject_wrong_value_types() {
    assert!(parse_condition("turn low = 1.5").is_err());
    assert_eq!(
        parse_condition("turn low = 1").unwrap(),
        Condition::Turn {
            low: ValueRef::Constant(1),
            high: ValueRef::unbounded_high(),
        }
    );
}
