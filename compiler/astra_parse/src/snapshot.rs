//! Parser snapshots for speculative parsing.
//!
//! Every grammar alternative is tried speculatively: take a snapshot, run the
//! alternative, and restore the snapshot if it fails. Cursors are `Copy`, so
//! a snapshot is just the cursor plus the error-context depth.
//!
//! Prefer [`Parser::attempt`](crate::Parser) and the `one_of!` macro over
//! manual `snapshot()` / `restore()` pairs. Use the manual pair only when the
//! decision to keep a parse depends on more than its success.

use astra_lexer::Cursor;

/// Saved parser position.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ParserSnapshot<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) context_depth: usize,
}
