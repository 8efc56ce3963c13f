use super::*;

#[test]
fn test_line_from_offset_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1); // 'l' of line1
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2); // 'l' of line2
    assert_eq!(table.line_from_offset(12), 3); // 'l' of line3
    assert_eq!(table.line_count(), 3);
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    assert_eq!(offset_to_line_col(source, 0), (1, 1));
    assert_eq!(offset_to_line_col(source, 2), (1, 3));
    assert_eq!(offset_to_line_col(source, 7), (2, 4));
    assert_eq!(offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn test_offset_to_line_col_empty_and_past_end() {
    assert_eq!(offset_to_line_col("", 0), (1, 1));
    assert_eq!(offset_to_line_col("ab", 40), (1, 3));
}

#[test]
fn test_offset_to_line_col_unicode() {
    let source = "αβγ\nδε";
    assert_eq!(offset_to_line_col(source, 2), (1, 2)); // 'β'
    assert_eq!(offset_to_line_col(source, 7), (2, 1)); // 'δ'
}

#[test]
fn test_line_text_strips_terminators() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}

#[test]
fn test_caret_indent_keeps_tabs() {
    assert_eq!(caret_indent("\t\townedby", 4), "\t\t ");
    assert_eq!(caret_indent("a\tb", 3), " \t");
    assert_eq!(caret_indent("ab", 1), "");
    assert_eq!(caret_indent("αβγ", 3), "  ");
}
