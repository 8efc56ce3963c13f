#![allow(clippy::unwrap_used, clippy::expect_used)]

use astra_ir::PlanetType;

use super::*;

fn parser(source: &str) -> Parser<'_> {
    Parser::new(source, ParseOptions::default())
}

// === Keywords and labels ===

#[test]
fn keyword_matches_whole_words_only() {
    let mut p = parser("  ownedbyx");
    assert_eq!(p.keyword("ownedby"), Err(Mismatch));
    assert_eq!(p.position(), 0);

    let mut p = parser("  OwnedBy affiliation");
    assert_eq!(p.keyword("ownedby"), Ok(()));
    assert_eq!(p.position(), 9);
}

#[test]
fn exact_keywords_reject_other_cases() {
    let mut p = Parser::new("OwnedBy", ParseOptions::default().exact_keywords());
    assert_eq!(p.keyword("ownedby"), Err(Mismatch));
    assert_eq!(p.failure.expected(), &[Expected::Keyword("ownedby")]);
}

#[test]
fn label_needs_the_equals_sign() {
    let mut p = parser("low = 3");
    assert_eq!(p.label("low"), Ok(()));
    assert_eq!(p.integer(), Ok(3));

    let mut p = parser("low 3");
    assert_eq!(p.label("low"), Err(Mismatch));
    assert_eq!(p.position(), 0);
    assert_eq!(p.failure.pos(), Some(4));
    assert_eq!(p.failure.expected(), &[Expected::Punct('=')]);
}

#[test]
fn punct_skips_comments_first() {
    let mut p = parser("/* c */ // line\n [");
    assert_eq!(p.punct(b'['), Ok(()));
    assert!(p.cursor.is_eof());
}

#[test]
fn symbol_reports_vocabulary_on_miss() {
    let mut p = parser("bogus");
    assert_eq!(p.symbol::<PlanetType>(), Err(Mismatch));
    assert_eq!(p.failure.expected(), &[Expected::Item("planet type")]);
    assert_eq!(p.position(), 0);
}

// === Backtracking ===

#[test]
fn attempt_restores_on_failure() {
    let mut p = parser("all capital");
    let result = p.attempt(|p| {
        p.keyword("all")?;
        p.keyword("monster")
    });
    assert_eq!(result, Err(Mismatch));
    assert_eq!(p.position(), 0);
    assert_eq!(p.failure.pos(), Some(4));
}

#[test]
fn one_of_takes_first_success() {
    let mut p = parser("beta");
    let result: PResult<u8> = one_of!(p,
        |p: &mut Parser<'_>| p.keyword("alpha").map(|()| 1),
        |p: &mut Parser<'_>| p.keyword("beta").map(|()| 2),
        |p: &mut Parser<'_>| p.keyword("beta").map(|()| 3),
    );
    assert_eq!(result, Ok(2));
}

#[test]
fn one_of_unions_expected_at_same_position() {
    let mut p = parser("gamma");
    let result: PResult<()> = one_of!(p,
        |p: &mut Parser<'_>| p.keyword("alpha"),
        |p: &mut Parser<'_>| p.keyword("beta"),
    );
    assert_eq!(result, Err(Mismatch));
    assert_eq!(
        p.failure.expected(),
        &[Expected::Keyword("alpha"), Expected::Keyword("beta")]
    );
}

#[test]
fn furthest_failure_wins() {
    let mut p = parser("all monster");
    let _ = p.attempt(|p| {
        p.keyword("all")?;
        p.keyword("capital")
    });
    let _ = p.keyword("source");
    assert_eq!(p.failure.pos(), Some(4));
    assert_eq!(p.failure.expected(), &[Expected::Keyword("capital")]);
}

#[test]
fn failure_records_innermost_context() {
    let mut p = parser("x");
    let _ = p.in_context(ErrorContext::Tech, |p| {
        p.in_context(ErrorContext::EffectsGroup, |p| p.keyword("scope"))
    });
    assert_eq!(p.failure.context(), Some(ErrorContext::EffectsGroup));
    assert!(p.contexts.is_empty());
}

// === Lists ===

#[test]
fn list_accepts_single_item_or_brackets() {
    let mut p = parser("7");
    assert_eq!(p.list(Parser::integer), Ok(vec![7]));

    let mut p = parser("[ 1 2 3 ]");
    assert_eq!(p.list(Parser::integer), Ok(vec![1, 2, 3]));
}

#[test]
fn bracketed_list_must_be_non_empty_and_closed() {
    let mut p = parser("[ ]");
    assert_eq!(p.bracketed(Parser::integer), Err(Mismatch));
    assert_eq!(p.position(), 0);

    let mut p = parser("[ 1 2");
    assert_eq!(p.list(Parser::integer), Err(Mismatch));
    assert_eq!(p.position(), 0);
    assert!(p.failure.expected().contains(&Expected::Punct(']')));
}

#[test]
fn many_accepts_zero_items() {
    let mut p = parser("nothing");
    assert!(p.many(Parser::integer).is_empty());
    assert_eq!(p.position(), 0);
}

#[test]
fn boolean_literals() {
    assert_eq!(parser("true").boolean(), Ok(true));
    assert_eq!(parser("False").boolean(), Ok(false));
    assert_eq!(parser("yes").boolean(), Err(Mismatch));
}
