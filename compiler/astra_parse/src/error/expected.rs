//! What the parser would have accepted, and where it got furthest.

use std::fmt::{self, Write as _};

use smallvec::SmallVec;

use super::ErrorContext;

/// One thing the parser would have accepted at a failure position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A keyword such as `ownedby`.
    Keyword(&'static str),
    /// A parameter label followed by `=`, such as `low =`.
    Label(&'static str),
    /// A punctuation character.
    Punct(char),
    /// A lexical or grammatical item described in words.
    Item(&'static str),
    /// An object property readable as the named value type.
    Property(&'static str),
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Keyword(keyword) => write!(f, "`{keyword}`"),
            Expected::Label(label) => write!(f, "`{label} =`"),
            Expected::Punct(c) => write!(f, "`{c}`"),
            Expected::Item(item) => f.write_str(item),
            Expected::Property(type_name) => write!(f, "{type_name} property"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Furthest failure seen so far.
///
/// Failures further right replace everything recorded; failures at the same
/// position add to the expected set; failures further left are ignored.
#[derive(Clone, Debug, Default)]
pub(crate) struct FailureTracker {
    pos: u32,
    expected: SmallVec<[Expected; 8]>,
    context: Option<ErrorContext>,
    recorded: bool,
}

impl FailureTracker {
    pub(crate) fn record(&mut self, pos: u32, expected: Expected, context: Option<ErrorContext>) {
        if !self.recorded || pos > self.pos {
            self.pos = pos;
            self.expected.clear();
            self.expected.push(expected);
            self.context = context;
            self.recorded = true;
        } else if pos == self.pos && !self.expected.contains(&expected) {
            self.expected.push(expected);
            if self.context.is_none() {
                self.context = context;
            }
        }
    }

    pub(crate) fn pos(&self) -> Option<u32> {
        self.recorded.then_some(self.pos)
    }

    pub(crate) fn expected(&self) -> &[Expected] {
        &self.expected
    }

    pub(crate) fn context(&self) -> Option<ErrorContext> {
        self.context
    }
}

/// "`a`, `b` or 3 others": `items` joined for a message, naming at most
/// `limit` of them.
pub(crate) fn join_expected(items: &[Expected], limit: usize) -> String {
    let limit = limit.max(1);
    let shown = &items[..items.len().min(limit)];
    let hidden = items.len() - shown.len();
    let mut text = String::new();
    for (i, item) in shown.iter().enumerate() {
        if i > 0 {
            let last = i + 1 == shown.len() && hidden == 0;
            text.push_str(if last { " or " } else { ", " });
        }
        let _ = write!(text, "{item}");
    }
    match hidden {
        0 => {}
        1 => text.push_str(" or 1 other"),
        n => {
            let _ = write!(text, " or {n} others");
        }
    }
    text
}
