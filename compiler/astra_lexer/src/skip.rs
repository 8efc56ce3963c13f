//! Insignificant input between lexical items.

use crate::Cursor;

/// Skip whitespace, `// line` comments, and `/* block */` comments.
///
/// An unterminated `/*` is not a comment: skipping stops in front of it and
/// the grammar fails there.
pub fn skip(cursor: &mut Cursor<'_>) {
    loop {
        match cursor.current() {
            b' ' | b'\t' | b'\r' | b'\n' | b'\x0C' => cursor.advance(),
            b'/' if cursor.peek() == b'/' => cursor.eat_until_newline_or_eof(),
            b'/' if cursor.peek() == b'*' => {
                if !cursor.eat_block_comment() {
                    return;
                }
            }
            _ => return,
        }
    }
}

/// Whether the cursor sits on a `/*` that is never closed.
pub fn at_unterminated_block_comment(cursor: &Cursor<'_>) -> bool {
    let mut probe = *cursor;
    probe.starts_with(b"/*") && !probe.eat_block_comment()
}
