//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E1001]: expected one of `affiliation`, `empire`
//!  --> buildings.inf:3:24
//!   |
//! 3 |     location = ownedby bogus
//!   |                        ^ unexpected input here
//!    = note: while parsing an `ownedby` condition
//! ```

use std::io::Write;

use crate::span_utils::{caret_indent, LineOffsetTable};
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The source a diagnostic's spans point into.
struct AttachedSource {
    name: String,
    text: String,
    lines: LineOffsetTable,
}

/// One label resolved against the attached source.
struct SnippetLine {
    line: u32,
    col: u32,
    text: String,
    width: usize,
}

impl AttachedSource {
    fn resolve(&self, label: &Label) -> SnippetLine {
        let (line, col) = self.lines.offset_to_line_col(&self.text, label.span.start);
        let text = self.lines.line_text(&self.text, line).unwrap_or("");

        let line_start = self.lines.line_start_offset(line).unwrap_or(0) as usize;
        let line_end = line_start + text.len();
        let start = (label.span.start as usize).clamp(line_start, line_end);
        let end = (label.span.end as usize).clamp(start, line_end);
        let width = self
            .text
            .get(start..end)
            .map_or(0, |covered| covered.chars().count())
            .max(1);

        SnippetLine {
            line,
            col,
            text: text.to_string(),
            width,
        }
    }
}

/// Terminal emitter with optional color support and source snippets.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<AttachedSource>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with an explicit color mode.
    ///
    /// `is_tty` decides `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render spans against `text`, reported as file `name`.
    ///
    /// Without a source, spans print as raw byte ranges.
    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(AttachedSource {
            name: name.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    /// Consume the emitter, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_label(&mut self, label: &Label) {
        let Some(source) = &self.source else {
            let _ = writeln!(self.writer, "  --> {:?}: {}", label.span, label.message);
            return;
        };
        let name = source.name.clone();
        let snippet = source.resolve(label);
        let pad = " ".repeat(snippet.line.to_string().len());

        let _ = writeln!(
            self.writer,
            "{pad}--> {name}:{}:{}",
            snippet.line, snippet.col
        );
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{} |", snippet.line), colors::GUTTER);
        let _ = writeln!(self.writer, " {}", snippet.text);
        self.write_colored(&format!("{pad} |"), colors::GUTTER);

        let indent = caret_indent(&snippet.text, snippet.col);
        let _ = write!(self.writer, " {indent}");
        self.write_colored(&"^".repeat(snippet.width), colors::ERROR);
        let _ = writeln!(self.writer, " {}", label.message);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(label) = &diagnostic.label {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "   = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": aborting due to {error_count} error{}",
            plural_s(error_count)
        );
    }
}
