//! Parser configuration.

use astra_lexer::KeywordCase;

/// Knobs that change how content text is read.
///
/// The defaults match how shipped content is written: keywords in any case,
/// and at most eight alternatives listed in an "expected ..." message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whether `OwnedBy` matches the `ownedby` keyword.
    pub keywords: KeywordCase,
    /// Most alternatives named in an error message before the rest are
    /// summarised as "N others".
    pub max_expected: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_EXPECTED: usize = 8;

    /// Only lowercase keywords match.
    #[must_use]
    pub fn exact_keywords(mut self) -> Self {
        self.keywords = KeywordCase::Exact;
        self
    }

    #[must_use]
    pub fn with_max_expected(mut self, max_expected: usize) -> Self {
        self.max_expected = max_expected.max(1);
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            keywords: KeywordCase::Insensitive,
            max_expected: Self::DEFAULT_MAX_EXPECTED,
        }
    }
}
