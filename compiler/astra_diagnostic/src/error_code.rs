//! Error codes for content diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the compiler phase reporting it.

use std::fmt;

/// Error codes for all content diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexical errors
/// - E1xxx: Grammar errors
/// - E2xxx: Driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Block comment opened with `/*` but never closed
    E0001,

    // Grammar Errors (E1xxx)
    /// No grammar alternative matched the input
    E1001,
    /// A complete definition was followed by unconsumed input
    E1002,
    /// Source text longer than the maximum addressable size
    E1003,

    // Driver Errors (E2xxx)
    /// Source file whose content kind cannot be determined
    E2001,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
        }
    }

    /// One-line explanation of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated block comment",
            ErrorCode::E1001 => "no grammar alternative matched the input",
            ErrorCode::E1002 => "unexpected input after a complete definition",
            ErrorCode::E1003 => "source text is too large",
            ErrorCode::E2001 => "unknown content kind",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
