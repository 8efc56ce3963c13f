//! Byte cursor over content text.
//!
//! The grammar is scannerless: productions read bytes straight from a
//! [`Cursor`] instead of a token stream. The cursor is [`Copy`], so a
//! backtracking point is just a saved copy.
//!
//! Reads past the end yield `0x00`, which no scanner accepts, so loops
//! terminate at end of input without extra bounds checks.

/// Position in a content source.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    ///
    /// Sources longer than `u32::MAX` bytes must be rejected by the caller;
    /// the cursor cannot address past that.
    pub fn new(source: &'a str) -> Self {
        debug_assert!(
            u32::try_from(source.len()).is_ok(),
            "source exceeds u32::MAX bytes"
        );
        Cursor { source, pos: 0 }
    }

    /// Byte at the current position, `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// The whole source this cursor walks.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Unread bytes from the current position.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        self.source
            .as_bytes()
            .get(self.pos as usize..)
            .unwrap_or_default()
    }

    /// Whether the unread input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Source text between two offsets.
    ///
    /// Offsets come from this cursor's own positions, which only ever stop
    /// on ASCII bytes, so they always fall on character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` or end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets stay below the source length, which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source.len() as u32,
        }
    }

    /// Skip a `/* ... */` comment starting at the current position.
    ///
    /// Returns `false` without moving when the comment is never closed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets stay below the source length, which fits in u32"
    )]
    pub fn eat_block_comment(&mut self) -> bool {
        debug_assert!(self.starts_with(b"/*"));
        let body = self.rest().get(2..).unwrap_or_default();
        match memchr::memmem::find(body, b"*/") {
            Some(offset) => {
                self.pos += 2 + offset as u32 + 2;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests;
