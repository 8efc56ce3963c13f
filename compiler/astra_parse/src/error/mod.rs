//! Parse errors.
//!
//! The parser backtracks freely, so a failure is only reported once every
//! alternative has been exhausted. What gets reported is the furthest position
//! any alternative reached, the set of things that would have been accepted
//! there, and the innermost [`ErrorContext`] active at that point.

mod context;
mod expected;

use std::fmt;

use astra_diagnostic::span_utils::{caret_indent, LineOffsetTable};
use astra_diagnostic::{Diagnostic, ErrorCode};
use astra_ir::Span;
use astra_lexer::{at_unterminated_block_comment, scan_word, Cursor};

pub use context::ErrorContext;
pub use expected::Expected;
pub(crate) use expected::{join_expected, FailureTracker};

/// A content parse failure, located by byte span and by line and column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// Bytes of the offending input.
    pub span: Span,
    /// Everything that would have been accepted at `span.start`.
    pub expected: Vec<Expected>,
    /// Innermost construct being parsed at the failure.
    pub context: Option<ErrorContext>,
    /// 1-based line of `span.start`.
    pub line: u32,
    /// 1-based character column of `span.start`.
    pub column: u32,
    /// Text of the failing line, without its terminator.
    pub source_line: String,
}

impl ParseError {
    /// No alternative matched; report the furthest failure.
    pub(crate) fn no_match(source: &str, failure: &FailureTracker, max_expected: usize) -> Self {
        let pos = failure.pos().unwrap_or(0);
        let found = Found::at(source, pos);
        let expected = failure.expected().to_vec();
        let message = if found.unterminated_comment {
            "unterminated block comment".to_owned()
        } else if expected.is_empty() {
            format!("unexpected {}", found.text)
        } else {
            format!(
                "expected {}, found {}",
                join_expected(&expected, max_expected),
                found.text
            )
        };
        ParseError::located(
            source,
            found.code(ErrorCode::E1001),
            message,
            found.span,
            expected,
            failure.context(),
        )
    }

    /// A complete definition was parsed but input remains at `pos`.
    pub(crate) fn trailing(source: &str, pos: u32, description: &str) -> Self {
        let found = Found::at(source, pos);
        let message = if found.unterminated_comment {
            "unterminated block comment".to_owned()
        } else {
            format!("unexpected {} after a complete {description}", found.text)
        };
        ParseError::located(
            source,
            found.code(ErrorCode::E1002),
            message,
            found.span,
            vec![Expected::EndOfInput],
            None,
        )
    }

    /// Source text whose offsets do not fit the `u32` span representation.
    pub(crate) fn too_large(len: usize) -> Self {
        ParseError {
            code: ErrorCode::E1003,
            message: format!(
                "source text is {len} bytes; at most {} bytes can be parsed",
                u32::MAX
            ),
            span: Span::point(0),
            expected: Vec::new(),
            context: None,
            line: 1,
            column: 1,
            source_line: String::new(),
        }
    }

    fn located(
        source: &str,
        code: ErrorCode,
        message: String,
        span: Span,
        expected: Vec<Expected>,
        context: Option<ErrorContext>,
    ) -> Self {
        let table = LineOffsetTable::build(source);
        let (line, column) = table.offset_to_line_col(source, span.start);
        let source_line = table.line_text(source, line).unwrap_or("").to_owned();
        ParseError {
            code,
            message,
            span,
            expected,
            context,
            line,
            column,
            source_line,
        }
    }

    /// Convert into a [`Diagnostic`] for an emitter.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::E1002 => "expected end of input here",
            ErrorCode::E0001 => "comment starts here",
            _ => "unexpected input here",
        };
        let mut diagnostic = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label);
        if let Some(context) = self.context {
            diagnostic = diagnostic.with_note(format!("while parsing {}", context.description()));
        }
        diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {}: {}",
            self.line, self.column, self.message
        )?;
        if let Some(context) = self.context {
            write!(f, " (while parsing {})", context.description())?;
        }
        if self.source_line.is_empty() {
            return Ok(());
        }
        let before = (self.column as usize).saturating_sub(1);
        let remaining = self.source_line.chars().count().saturating_sub(before);
        let width = (self.span.len() as usize).clamp(1, remaining.max(1));
        write!(
            f,
            "\n{}\n{}{}",
            self.source_line,
            caret_indent(&self.source_line, self.column),
            "^".repeat(width)
        )
    }
}

impl std::error::Error for ParseError {}

/// The input found at a failure position, described for a message.
struct Found {
    span: Span,
    text: String,
    unterminated_comment: bool,
}

impl Found {
    fn at(source: &str, pos: u32) -> Self {
        let mut cursor = Cursor::new(source);
        cursor.advance_n(pos.min(u32::try_from(source.len()).unwrap_or(u32::MAX)));
        let start = cursor.pos();
        if cursor.is_eof() {
            return Found {
                span: Span::point(start),
                text: "end of input".to_owned(),
                unterminated_comment: false,
            };
        }
        if at_unterminated_block_comment(&cursor) {
            return Found {
                span: Span::new(start, start + 2),
                text: "`/*`".to_owned(),
                unterminated_comment: true,
            };
        }
        if let Some(word) = scan_word(&mut cursor) {
            return Found {
                span: Span::new(start, cursor.pos()),
                text: format!("`{word}`"),
                unterminated_comment: false,
            };
        }
        if cursor.current().is_ascii_digit() {
            cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
            return Found {
                span: Span::new(start, cursor.pos()),
                text: format!("`{}`", cursor.slice_from(start)),
                unterminated_comment: false,
            };
        }
        let c = source
            .get(start as usize..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let width = u32::try_from(c.len_utf8()).unwrap_or(1);
        Found {
            span: Span::new(start, start + width),
            text: format!("`{c}`"),
            unterminated_comment: false,
        }
    }

    fn code(&self, otherwise: ErrorCode) -> ErrorCode {
        if self.unterminated_comment {
            ErrorCode::E0001
        } else {
            otherwise
        }
    }
}
