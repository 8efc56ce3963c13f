//! Diagnostic system for content errors.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - A span (where it went wrong)
//! - Notes (what the parser was doing at the time)
//!
//! Emitters in [`emitter`] turn diagnostics into terminal output with a
//! source snippet and caret.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
