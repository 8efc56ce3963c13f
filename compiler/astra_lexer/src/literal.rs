//! Literal and word scanners.
//!
//! Each scanner either consumes a complete item and returns it, or leaves
//! the cursor untouched and returns `None`. None of them skip leading
//! whitespace; callers run [`skip`](crate::skip) first.

use astra_ir::Colour;

use crate::{skip, Cursor};

#[inline]
pub fn is_word_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
pub fn is_word_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[inline]
fn is_name_byte(byte: u8) -> bool {
    is_word_continue(byte)
}

#[inline]
fn is_path_byte(byte: u8) -> bool {
    is_word_continue(byte) || matches!(byte, b'-' | b'/' | b'.')
}

/// A whole identifier word: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn scan_word<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    if !is_word_start(cursor.current()) {
        return None;
    }
    let start = cursor.pos();
    cursor.eat_while(is_word_continue);
    Some(cursor.slice_from(start))
}

fn scan_delimited<'a>(cursor: &mut Cursor<'a>, body: fn(u8) -> bool) -> Option<&'a str> {
    let mut probe = *cursor;
    if probe.current() != b'"' {
        return None;
    }
    probe.advance();
    let start = probe.pos();
    probe.eat_while(body);
    let text = probe.slice_from(start);
    if probe.current() != b'"' {
        return None;
    }
    probe.advance();
    *cursor = probe;
    Some(text)
}

/// A quoted name: `"` `[A-Za-z0-9_]*` `"`. Yields the text between quotes.
pub fn scan_quoted_name<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    scan_delimited(cursor, is_name_byte)
}

/// A quoted file path: like a quoted name, also allowing `- / .`.
pub fn scan_file_path<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    scan_delimited(cursor, is_path_byte)
}

/// Digits of a numeric literal, rejecting a trailing word character.
fn scan_digits(probe: &mut Cursor<'_>) -> bool {
    if !probe.current().is_ascii_digit() {
        return false;
    }
    probe.eat_while(|b| b.is_ascii_digit());
    true
}

/// An unsigned integer literal fitting `i32`.
///
/// `3.5` and `3abc` are not integers. A leading `-` belongs to the
/// negation production, not to the literal.
pub fn scan_integer(cursor: &mut Cursor<'_>) -> Option<i32> {
    let mut probe = *cursor;
    let start = probe.pos();
    if !scan_digits(&mut probe) {
        return None;
    }
    if probe.current() == b'.' || is_word_continue(probe.current()) {
        return None;
    }
    let value = probe.slice_from(start).parse::<i32>().ok()?;
    *cursor = probe;
    Some(value)
}

/// An unsigned real literal: `12`, `12.`, `12.5`, or `.5`.
pub fn scan_real(cursor: &mut Cursor<'_>) -> Option<f64> {
    let mut probe = *cursor;
    let start = probe.pos();
    let whole = scan_digits(&mut probe);
    if probe.current() == b'.' {
        probe.advance();
        let fraction = scan_digits(&mut probe);
        if !whole && !fraction {
            return None;
        }
    } else if !whole {
        return None;
    }
    if is_word_continue(probe.current()) {
        return None;
    }
    let value = probe.slice_from(start).parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    *cursor = probe;
    Some(value)
}

/// A colour tuple: `(r, g, b)` or `(r, g, b, a)`, components `0..=255`.
///
/// Whitespace and comments may appear between the parts. Alpha defaults to
/// opaque.
pub fn scan_colour(cursor: &mut Cursor<'_>) -> Option<Colour> {
    fn component(probe: &mut Cursor<'_>) -> Option<u8> {
        skip(probe);
        let value = scan_integer(probe)?;
        let value = u8::try_from(value).ok()?;
        skip(probe);
        Some(value)
    }

    fn punct(probe: &mut Cursor<'_>, byte: u8) -> bool {
        if probe.current() == byte {
            probe.advance();
            true
        } else {
            false
        }
    }

    let mut probe = *cursor;
    if !punct(&mut probe, b'(') {
        return None;
    }
    let r = component(&mut probe)?;
    if !punct(&mut probe, b',') {
        return None;
    }
    let g = component(&mut probe)?;
    if !punct(&mut probe, b',') {
        return None;
    }
    let b = component(&mut probe)?;
    let a = if punct(&mut probe, b',') {
        component(&mut probe)?
    } else {
        u8::MAX
    };
    if !punct(&mut probe, b')') {
        return None;
    }
    *cursor = probe;
    Some(Colour::rgba(r, g, b, a))
}

#[cfg(test)]
mod tests;
