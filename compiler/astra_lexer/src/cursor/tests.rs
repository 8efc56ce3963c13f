use pretty_assertions::assert_eq;

use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_and_peek() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.rest(), b"");
}

// === Slicing ===

#[test]
fn slice_from_start() {
    let mut cursor = Cursor::new("ownedby empire");
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(0), "ownedby");
    assert_eq!(cursor.pos(), 7);
}

#[test]
fn copy_restores_position() {
    let mut cursor = Cursor::new("planet type");
    let saved = cursor;
    cursor.advance_n(6);
    assert_eq!(cursor.current(), b' ');
    cursor = saved;
    assert_eq!(cursor.pos(), 0);
}

// === Comments ===

#[test]
fn eat_until_newline_stops_at_newline() {
    let mut cursor = Cursor::new("// note\nall");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_reaches_eof() {
    let mut cursor = Cursor::new("// trailing");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn eat_block_comment_closed() {
    let mut cursor = Cursor::new("/* a * b */all");
    assert!(cursor.eat_block_comment());
    assert_eq!(cursor.rest(), b"all");
}

#[test]
fn eat_block_comment_adjacent_close() {
    let mut cursor = Cursor::new("/**/x");
    assert!(cursor.eat_block_comment());
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_block_comment_unterminated_does_not_move() {
    let mut cursor = Cursor::new("/* never closed");
    assert!(!cursor.eat_block_comment());
    assert_eq!(cursor.pos(), 0);
}
