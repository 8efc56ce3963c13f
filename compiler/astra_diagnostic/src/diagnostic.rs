//! The diagnostic record handed from the parser and driver to an emitter.

use astra_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// The source position a diagnostic points at.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A content error: code, message, the offending span, and notes.
///
/// Content diagnostics are always errors. A source either parses into
/// records or it does not.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub label: Option<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            label: None,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point the diagnostic at `span`. A later call replaces the label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn span(&self) -> Option<Span> {
        self.label.as_ref().map(|label| label.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(label) = &self.label {
            write!(f, "\n  --> {:?}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n   = note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_diagnostic_builder() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("expected one of `empire`, `affiliation`")
            .with_label(Span::new(0, 7), "first")
            .with_label(Span::new(8, 13), "unexpected input here")
            .with_note("while parsing an `ownedby` condition");

        assert_eq!(diag.span(), Some(Span::new(8, 13)));
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(ErrorCode::E1002)
            .with_message("trailing input")
            .with_label(Span::new(4, 9), "here")
            .with_note("after a condition");
        assert_eq!(
            diag.to_string(),
            "error[E1002]: trailing input\n  --> 4..9: here\n   = note: after a condition"
        );
    }

    #[test]
    fn test_diagnostic_without_label() {
        let diag = Diagnostic::error(ErrorCode::E2001).with_message("unknown content kind");
        assert_eq!(diag.span(), None);
        assert_eq!(diag.to_string(), "error[E2001]: unknown content kind");
    }
}
