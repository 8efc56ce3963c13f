//! Parser state and lexical primitives.
//!
//! Productions are methods on [`Parser`] returning [`PResult`]. A failed
//! production records what it expected in the furthest-failure tracker and
//! returns [`Mismatch`]; it never leaves the cursor moved. Ordered choice is
//! spelled with [`one_of!`], which restores the cursor between alternatives.

use astra_ir::Colour;
use astra_lexer::{
    scan_colour, scan_file_path, scan_integer, scan_quoted_name, scan_real, scan_word, skip,
    Cursor, KeywordCase, Vocabulary,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::{ErrorContext, Expected, FailureTracker, ParseError};
use crate::snapshot::ParserSnapshot;
use crate::{Grammar, ParseOptions};

/// A production did not match. What it expected is in the failure tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch;

pub type PResult<T> = Result<T, Mismatch>;

/// Try each alternative in order and yield the first success.
///
/// Each alternative is a closure or method taking `&mut Parser`. Failed
/// alternatives are rolled back before the next one runs; when all fail the
/// cursor is where it started and the failure tracker holds the union of
/// what they expected at the furthest position.
///
/// ```ignore
/// one_of!(self,
///     |p| p.keyword("all").map(|()| Condition::All),
///     Self::ownedby,
/// )
/// ```
macro_rules! one_of {
    ($parser:expr, $($alternative:expr),+ $(,)?) => {
        'alternatives: {
            $(
                if let Ok(value) = $parser.attempt($alternative) {
                    break 'alternatives Ok(value);
                }
            )+
            Err($crate::parser::Mismatch)
        }
    };
}

/// Backtracking parser over one source text.
pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    options: ParseOptions,
    failure: FailureTracker,
    contexts: SmallVec<[ErrorContext; 8]>,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `source`.
    ///
    /// `source` must be shorter than `u32::MAX` bytes; [`crate::parse`]
    /// checks this before constructing a parser.
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(source),
            options,
            failure: FailureTracker::default(),
            contexts: SmallVec::new(),
        }
    }

    /// Current byte offset.
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    pub(crate) fn case(&self) -> KeywordCase {
        self.options.keywords
    }

    // === Backtracking ===

    pub(crate) fn snapshot(&self) -> ParserSnapshot<'a> {
        ParserSnapshot {
            cursor: self.cursor,
            context_depth: self.contexts.len(),
        }
    }

    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot<'a>) {
        self.cursor = snapshot.cursor;
        self.contexts.truncate(snapshot.context_depth);
    }

    /// Run `f`, rolling back everything it consumed if it fails.
    pub(crate) fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        let snapshot = self.snapshot();
        let result = f(self);
        if result.is_err() {
            self.restore(snapshot);
        }
        result
    }

    /// Run `f`; on failure consume nothing and yield `None`.
    pub(crate) fn optional<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> Option<T> {
        self.attempt(f).ok()
    }

    /// Apply `item` until it fails; zero matches is fine.
    pub(crate) fn many<T>(&mut self, mut item: impl FnMut(&mut Self) -> PResult<T>) -> Vec<T> {
        let mut items = Vec::new();
        while let Ok(value) = self.attempt(&mut item) {
            items.push(value);
        }
        items
    }

    // === Failure tracking ===

    /// Record that `expected` was wanted here and fail.
    ///
    /// The recorded position is past any whitespace and comments, where the
    /// next item would have started.
    pub(crate) fn fail<T>(&mut self, expected: Expected) -> PResult<T> {
        let mut probe = self.cursor;
        skip(&mut probe);
        let context = self.contexts.last().copied();
        self.failure.record(probe.pos(), expected, context);
        Err(Mismatch)
    }

    /// Run `f` with `context` as the innermost "while parsing" context.
    pub(crate) fn in_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<T> {
        trace!(context = context.label(), pos = self.cursor.pos(), "enter");
        self.contexts.push(context);
        let result = f(self);
        self.contexts.pop();
        result
    }

    // === Lexical primitives ===

    pub(crate) fn skip(&mut self) {
        skip(&mut self.cursor);
    }

    fn matches_keyword(&self, word: &str, keyword: &str) -> bool {
        match self.options.keywords {
            KeywordCase::Exact => word == keyword,
            KeywordCase::Insensitive => word.eq_ignore_ascii_case(keyword),
        }
    }

    /// The next whole word, without consuming it.
    pub(crate) fn peek_word(&self) -> Option<&'a str> {
        let mut probe = self.cursor;
        skip(&mut probe);
        scan_word(&mut probe)
    }

    /// Consume the next whole word, whatever it is.
    pub(crate) fn word(&mut self, expected: Expected) -> PResult<&'a str> {
        let snapshot = self.snapshot();
        self.skip();
        match scan_word(&mut self.cursor) {
            Some(word) => Ok(word),
            None => {
                self.restore(snapshot);
                self.fail(expected)
            }
        }
    }

    /// Consume `keyword` as a whole word.
    pub(crate) fn keyword(&mut self, keyword: &'static str) -> PResult<()> {
        let snapshot = self.snapshot();
        self.skip();
        match scan_word(&mut self.cursor) {
            Some(word) if self.matches_keyword(word, keyword) => Ok(()),
            _ => {
                self.restore(snapshot);
                self.fail(Expected::Keyword(keyword))
            }
        }
    }

    /// Consume a `name =` parameter label.
    pub(crate) fn label(&mut self, name: &'static str) -> PResult<()> {
        let snapshot = self.snapshot();
        self.skip();
        let matched =
            scan_word(&mut self.cursor).is_some_and(|word| self.matches_keyword(word, name));
        if !matched {
            self.restore(snapshot);
            return self.fail(Expected::Label(name));
        }
        if self.punct(b'=').is_err() {
            self.restore(snapshot);
            return Err(Mismatch);
        }
        Ok(())
    }

    /// Consume one ASCII punctuation byte.
    pub(crate) fn punct(&mut self, byte: u8) -> PResult<()> {
        let mut probe = self.cursor;
        skip(&mut probe);
        if probe.current() == byte {
            probe.advance();
            self.cursor = probe;
            Ok(())
        } else {
            self.fail(Expected::Punct(char::from(byte)))
        }
    }

    /// Consume a keyword of vocabulary `E`.
    pub(crate) fn symbol<E: Vocabulary>(&mut self) -> PResult<E> {
        let snapshot = self.snapshot();
        self.skip();
        let found =
            scan_word(&mut self.cursor).and_then(|word| E::table().lookup(word, self.case()));
        match found {
            Some(symbol) => Ok(symbol),
            None => {
                self.restore(snapshot);
                self.fail(Expected::Item(E::DESCRIPTION))
            }
        }
    }

    /// Run a scanner after skipping, failing with `expected` if it misses.
    fn scan<T>(
        &mut self,
        expected: &'static str,
        scanner: impl FnOnce(&mut Cursor<'a>) -> Option<T>,
    ) -> PResult<T> {
        let mut probe = self.cursor;
        skip(&mut probe);
        match scanner(&mut probe) {
            Some(value) => {
                self.cursor = probe;
                Ok(value)
            }
            None => self.fail(Expected::Item(expected)),
        }
    }

    pub(crate) fn integer(&mut self) -> PResult<i32> {
        self.scan("integer", scan_integer)
    }

    pub(crate) fn real(&mut self) -> PResult<f64> {
        self.scan("number", scan_real)
    }

    pub(crate) fn quoted_name(&mut self) -> PResult<&'a str> {
        self.scan("quoted name", scan_quoted_name)
    }

    pub(crate) fn file_path(&mut self) -> PResult<&'a str> {
        self.scan("quoted file path", scan_file_path)
    }

    pub(crate) fn colour(&mut self) -> PResult<Colour> {
        self.scan("colour", scan_colour)
    }

    pub(crate) fn boolean(&mut self) -> PResult<bool> {
        one_of!(self,
            |p: &mut Self| p.keyword("true").map(|()| true),
            |p: &mut Self| p.keyword("false").map(|()| false),
        )
    }

    // === Lists ===

    /// `[ item+ ]`
    pub(crate) fn bracketed<T>(
        &mut self,
        item: impl FnMut(&mut Self) -> PResult<T>,
    ) -> PResult<Vec<T>> {
        self.attempt(|p| {
            p.punct(b'[')?;
            let items = p.many(item);
            if items.is_empty() {
                return Err(Mismatch);
            }
            p.punct(b']')?;
            Ok(items)
        })
    }

    /// `[ item+ ]` or a single bare item.
    pub(crate) fn list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> PResult<T>,
    ) -> PResult<Vec<T>> {
        if let Ok(items) = self.bracketed(&mut item) {
            return Ok(items);
        }
        self.attempt(item).map(|value| vec![value])
    }

    // === Entry ===

    /// Parse a whole `G` and require nothing but whitespace after it.
    pub(crate) fn parse_complete<G: Grammar>(&mut self) -> Result<G, ParseError> {
        let source = self.cursor.source();
        trace!(grammar = G::DESCRIPTION, len = source.len(), "parse");
        let mut probe = self.cursor;
        skip(&mut probe);
        let start = probe.pos();
        let Ok(value) = G::parse_from(self) else {
            let error = ParseError::no_match(source, &self.failure, self.options.max_expected);
            debug!(grammar = G::DESCRIPTION, code = %error.code, pos = error.span.start, "parse failed");
            return Err(error);
        };
        self.skip();
        if self.cursor.is_eof() {
            debug!(grammar = G::DESCRIPTION, "parsed");
            return Ok(value);
        }
        let stop = self.cursor.pos();
        // A sub-production that got further than where parsing stopped, or an
        // empty file whose first entry failed, explains the leftover input
        // better than "unexpected input".
        let error = match self.failure.pos() {
            Some(pos) if pos > stop || stop == start => {
                ParseError::no_match(source, &self.failure, self.options.max_expected)
            }
            _ => ParseError::trailing(source, stop, G::DESCRIPTION),
        };
        debug!(grammar = G::DESCRIPTION, code = %error.code, pos = error.span.start, "trailing input");
        Err(error)
    }
}

#[cfg(test)]
mod tests;
