#![allow(clippy::unwrap_used, clippy::float_cmp)]

use astra_ir::Colour;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn scan<'a, T>(source: &'a str, scanner: impl Fn(&mut Cursor<'a>) -> Option<T>) -> (Option<T>, u32) {
    let mut cursor = Cursor::new(source);
    let item = scanner(&mut cursor);
    (item, cursor.pos())
}

// === Words ===

#[test]
fn word_takes_whole_identifier() {
    let mut cursor = Cursor::new("ownedby_x9 = 3");
    assert_eq!(scan_word(&mut cursor), Some("ownedby_x9"));
    assert_eq!(cursor.current(), b' ');
}

#[test]
fn word_rejects_digit_start() {
    assert_eq!(scan("9lives", scan_word), (None, 0));
}

// === Quoted names and paths ===

#[test]
fn quoted_name_yields_inner_text() {
    let mut cursor = Cursor::new("\"GRO_PLANET_ECOL\" rest");
    assert_eq!(scan_quoted_name(&mut cursor), Some("GRO_PLANET_ECOL"));
    assert_eq!(cursor.current(), b' ');
}

#[test]
fn quoted_name_allows_empty() {
    assert_eq!(scan("\"\"", scan_quoted_name), (Some(""), 2));
}

#[test]
fn quoted_name_rejects_path_characters() {
    assert_eq!(scan("\"icons/tech.png\"", scan_quoted_name), (None, 0));
    assert_eq!(scan("\"unterminated", scan_quoted_name), (None, 0));
}

#[test]
fn file_path_accepts_separators() {
    assert_eq!(
        scan("\"icons/tech-01.png\"", scan_file_path),
        (Some("icons/tech-01.png"), 19)
    );
}

// === Numbers ===

#[test]
fn integer_literals() {
    assert_eq!(scan("42", scan_integer), (Some(42), 2));
    assert_eq!(scan("0 ", scan_integer), (Some(0), 1));
    assert_eq!(scan("2147483647", scan_integer), (Some(i32::MAX), 10));
}

#[test]
fn integer_rejects_reals_signs_and_overflow() {
    assert_eq!(scan("3.5", scan_integer), (None, 0));
    assert_eq!(scan("3.", scan_integer), (None, 0));
    assert_eq!(scan("-3", scan_integer), (None, 0));
    assert_eq!(scan("3abc", scan_integer), (None, 0));
    assert_eq!(scan("2147483648", scan_integer), (None, 0));
}

#[test]
fn real_literals() {
    assert_eq!(scan("2.5", scan_real), (Some(2.5), 3));
    assert_eq!(scan("12", scan_real), (Some(12.0), 2));
    assert_eq!(scan("12.", scan_real), (Some(12.0), 3));
    assert_eq!(scan(".25)", scan_real), (Some(0.25), 3));
}

#[test]
fn real_rejects_bare_dot_and_words() {
    assert_eq!(scan(".", scan_real), (None, 0));
    assert_eq!(scan("-1.0", scan_real), (None, 0));
    assert_eq!(scan("1.5x", scan_real), (None, 0));
}

// === Colours ===

#[test]
fn colour_with_and_without_alpha() {
    assert_eq!(
        scan("(255, 128, 0)", scan_colour).0,
        Some(Colour::rgba(255, 128, 0, 255))
    );
    assert_eq!(
        scan("( 10 ,20, 30 , 40 )", scan_colour).0,
        Some(Colour::rgba(10, 20, 30, 40))
    );
}

#[test]
fn colour_rejects_out_of_range_and_short_tuples() {
    assert_eq!(scan("(256, 0, 0)", scan_colour), (None, 0));
    assert_eq!(scan("(1, 2)", scan_colour), (None, 0));
    assert_eq!(scan("(1, 2, 3", scan_colour), (None, 0));
}

// === Property tests ===

proptest! {
    #[test]
    fn integer_display_scans_back(value in 0..=i32::MAX) {
        let text = value.to_string();
        let mut cursor = Cursor::new(&text);
        prop_assert_eq!(scan_integer(&mut cursor), Some(value));
        prop_assert!(cursor.is_eof());
    }

    #[test]
    fn real_display_scans_back(value in 0.0f64..1.0e12) {
        let text = value.to_string();
        let mut cursor = Cursor::new(&text);
        prop_assert_eq!(scan_real(&mut cursor), Some(value));
    }

    #[test]
    fn quoted_name_scans_back(name in "[A-Za-z0-9_]{0,24}") {
        let text = format!("\"{name}\"");
        let mut cursor = Cursor::new(&text);
        prop_assert_eq!(scan_quoted_name(&mut cursor), Some(name.as_str()));
    }

    #[test]
    fn scanners_never_move_on_failure(source in "[ -~]{0,16}") {
        let mut cursor = Cursor::new(&source);
        if scan_integer(&mut cursor).is_none() {
            prop_assert_eq!(cursor.pos(), 0);
        }
        let mut cursor = Cursor::new(&source);
        if scan_colour(&mut cursor).is_none() {
            prop_assert_eq!(cursor.pos(), 0);
        }
    }
}
