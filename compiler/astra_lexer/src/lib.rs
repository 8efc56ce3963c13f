//! Scannerless lexical layer for the Astra content language.
//!
//! There is no token stream. Grammar productions pull lexical items straight
//! from a [`Cursor`]:
//!
//! - [`skip`]: whitespace and comments between items
//! - [`scan_word`], [`scan_quoted_name`], [`scan_file_path`]
//! - [`scan_integer`], [`scan_real`], [`scan_colour`]
//! - [`Vocabulary`] symbol tables mapping keywords to enum constants
//! - [`properties`] tables of readable object properties per value type
//!
//! Scanners never consume input on failure.

mod cursor;
mod literal;
pub mod properties;
mod skip;
mod symbols;

pub use cursor::Cursor;
pub use literal::{
    is_word_continue, is_word_start, scan_colour, scan_file_path, scan_integer,
    scan_quoted_name, scan_real, scan_word,
};
pub use skip::{at_unterminated_block_comment, skip};
pub use symbols::{strip_affixes, KeywordCase, PropertyTable, SymbolTable, Vocabulary};
