//! Source location spans.
//!
//! Positions are byte offsets into the content text. Sources longer than
//! `u32::MAX` bytes are rejected before parsing starts, so every offset the
//! parser produces fits.

use std::fmt;

/// Half-open byte range `start..end` in a content source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-length span at `offset`, used for failures at end of input.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(4, 9).len(), 5);
        assert!(Span::point(3).is_empty());
        assert!(!Span::new(3, 4).is_empty());
    }

    #[test]
    fn test_span_debug() {
        assert_eq!(format!("{:?}", Span::new(7, 12)), "7..12");
    }
}
