//! Backtracking recursive-descent parser for Astra content.
//!
//! Reads condition predicates, typed value expressions, effects groups, and
//! whole content records straight from source text. There is no token stream:
//! productions pull lexical items from an [`astra_lexer::Cursor`] and every
//! alternative is tried speculatively, restoring the cursor when it fails.
//!
//! ```
//! use astra_ir::{Condition, ValueRef};
//!
//! let condition: Condition = astra_parse::parse("and [ capital monster ]").unwrap();
//! assert_eq!(condition, Condition::And(vec![Condition::Capital, Condition::Monster]));
//!
//! let value: ValueRef<i32> = astra_parse::parse("2 + 3").unwrap();
//! assert_eq!(value.to_string(), "(2 + 3)");
//! ```

#[macro_use]
mod parser;
mod error;
mod grammar;
mod options;
mod snapshot;

use astra_ir::{BuildingType, Condition, Effect, EffectsGroup, Special, TechManifest, ValueRef};
use tracing::debug;

pub use error::{ErrorContext, Expected, ParseError};
pub use grammar::ValueType;
pub use options::ParseOptions;
pub use parser::Parser;

use parser::PResult;

/// A construct that can be parsed as a whole source text.
pub trait Grammar: Sized {
    /// Noun phrase for messages ("unexpected input after a complete {}").
    const DESCRIPTION: &'static str;

    #[doc(hidden)]
    fn parse_from(parser: &mut Parser<'_>) -> PResult<Self>;
}

impl Grammar for Condition {
    const DESCRIPTION: &'static str = "condition";

    fn parse_from(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.condition()
    }
}

impl<T: ValueType> Grammar for ValueRef<T> {
    const DESCRIPTION: &'static str = "value expression";

    fn parse_from(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.value_ref::<T>()
    }
}

impl Grammar for Effect {
    const DESCRIPTION: &'static str = "effect";

    fn parse_from(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.effect()
    }
}

impl Grammar for EffectsGroup {
    const DESCRIPTION: &'static str = "effects group";

    fn parse_from(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.effects_group()
    }
}

impl Grammar for TechManifest {
    const DESCRIPTION: &'static str = "tech file";

    fn parse_from(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.tech_file()
    }
}

impl Grammar for Vec<BuildingType> {
    const DESCRIPTION: &'static str = "building file";

    fn parse_from(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.building_file()
    }
}

impl Grammar for Vec<Special> {
    const DESCRIPTION: &'static str = "specials file";

    fn parse_from(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.special_file()
    }
}

/// Parse all of `source` as a `G` with default options.
pub fn parse<G: Grammar>(source: &str) -> Result<G, ParseError> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse all of `source` as a `G`.
///
/// Leading and trailing whitespace and comments are allowed; anything else
/// after a complete `G` is an error.
pub fn parse_with_options<G: Grammar>(
    source: &str,
    options: &ParseOptions,
) -> Result<G, ParseError> {
    if u32::try_from(source.len()).is_err() {
        debug!(len = source.len(), "source too large");
        return Err(ParseError::too_large(source.len()));
    }
    Parser::new(source, options.clone()).parse_complete::<G>()
}

pub fn parse_condition(source: &str) -> Result<Condition, ParseError> {
    parse(source)
}

pub fn parse_condition_with_options(
    source: &str,
    options: &ParseOptions,
) -> Result<Condition, ParseError> {
    parse_with_options(source, options)
}

/// Parse a value expression of type `T`: `parse_value_ref::<f64>("source.industry * 2")`.
pub fn parse_value_ref<T: ValueType>(source: &str) -> Result<ValueRef<T>, ParseError> {
    parse(source)
}

pub fn parse_value_ref_with_options<T: ValueType>(
    source: &str,
    options: &ParseOptions,
) -> Result<ValueRef<T>, ParseError> {
    parse_with_options(source, options)
}

pub fn parse_techs(source: &str) -> Result<TechManifest, ParseError> {
    parse(source)
}

pub fn parse_techs_with_options(
    source: &str,
    options: &ParseOptions,
) -> Result<TechManifest, ParseError> {
    parse_with_options(source, options)
}

pub fn parse_buildings(source: &str) -> Result<Vec<BuildingType>, ParseError> {
    parse(source)
}

pub fn parse_buildings_with_options(
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<BuildingType>, ParseError> {
    parse_with_options(source, options)
}

pub fn parse_specials(source: &str) -> Result<Vec<Special>, ParseError> {
    parse(source)
}

pub fn parse_specials_with_options(
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<Special>, ParseError> {
    parse_with_options(source, options)
}

#[cfg(test)]
mod tests;
