//! Diagnostic emitters.
//!
//! The terminal emitter renders human-readable output with an optional
//! source snippet and caret. Other sinks implement [`DiagnosticEmitter`].

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// A sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Close a run that reported `error_count` errors. Silent for zero.
    fn emit_summary(&mut self, error_count: usize);
}

#[cfg(test)]
mod tests;
